//! Procedures built on top of the encoder and an oracle.
//!
//! - [entailment] decides entailment, contradiction, and the necessity of premises, and validates problems.
//! - [generate] builds random formulas.
//! - [search] composes the two in a bounded generate-and-filter loop.

pub mod entailment;
pub mod generate;
pub mod search;
