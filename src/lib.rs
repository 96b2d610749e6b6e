//! A library for deciding entailment between truth-functional formulas, and for generating entailment problems.
//!
//! tfl_entail decides whether some premises entail a conclusion, whether premises are contradictory, and whether each premise is necessary for an entailment.
//! Each question is reduced to the satisfiability of a collection of clauses through a [Tseitin encoding](crate::encode::tseitin), and passed to a [SAT oracle](crate::oracle).
//!
//! On top of these checks, random [problems](crate::structures::problem) may be generated: premises and a conclusion such that the premises entail the conclusion, are jointly satisfiable, and are each necessary for the entailment.
//!
//! # Orientation
//!
//! - [Formulas](crate::structures::formula) are trees of connectives over [atoms](crate::structures::atom), and are read from text by the [parser](crate::parse).
//! - An [encoding context](crate::encode::EncodingContext) maps atoms to variables and holds the clauses of an encoding.
//!   A context is created for each check, and never shared.
//! - The [engine](crate::procedures::entailment::Engine) pairs an oracle with an alphabet, and provides each check.
//! - The [generator](crate::procedures::generate) and [search](crate::procedures::search) procedures build problems, as set by a [configuration](crate::config).
//!
//! # Examples
//!
//! + Check an entailment, and find a countermodel when there is no entailment.
//!
//! ```rust
//! # use tfl_entail::parse::parse_formula;
//! # use tfl_entail::procedures::entailment::{Engine, Verdict};
//! # use tfl_entail::structures::atom::Atom;
//! let engine = Engine::default();
//!
//! let premises = ["(P ∨ Q)", "(P → R)", "(Q → R)"]
//!     .iter()
//!     .map(|text| parse_formula(text).unwrap())
//!     .collect::<Vec<_>>();
//! let conclusion = parse_formula("R").unwrap();
//!
//! assert!(engine.is_entailed(&premises, &conclusion).unwrap());
//! assert!(engine.is_minimal(&premises, &conclusion).unwrap());
//!
//! match engine.entailment(&premises[..2], &conclusion).unwrap() {
//!     Verdict::NotEntailed { countermodel } => {
//!         assert_eq!(countermodel.value_of(&Atom::from("R")), Some(false));
//!         assert_eq!(countermodel.value_of(&Atom::from("Q")), Some(true));
//!     }
//!     Verdict::Entailed => panic!(),
//! }
//! ```
//!
//! + Generate a problem, and write the problem as JSON.
//!
//! ```rust
//! # use tfl_entail::config::{Config, Palette};
//! # use tfl_entail::generic::random::MinimalPCG32;
//! # use tfl_entail::procedures::{entailment::Engine, search::generate_problem};
//! let engine = Engine::default();
//! let mut config = Config::default();
//! config.palette = Palette::basic();
//! config.max_attempts.set(10_000).unwrap();
//!
//! let mut rng = MinimalPCG32::from_u64(3);
//! let problem = generate_problem(&engine, &config, &mut rng, "example").unwrap();
//!
//! let json = serde_json::to_string(&problem.to_record()).unwrap();
//! assert!(json.starts_with(r#"{"id":"example","premises":["#));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made with targets, to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Each clause of an encoding can be seen with `RUST_LOG=encode …`
//! - The progress of a search, without details of each attempt, can be seen with `RUST_LOG=generation=info …`

#![allow(mixed_script_confusables)]
#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod procedures;

pub mod config;
pub mod encode;
pub mod oracle;
pub mod parse;
pub mod structures;
pub mod types;

pub mod generic;

pub mod misc;
