/*!
Entailment, contradiction, and the necessity of premises.

# Overview

Each check is a single call to a [SatOracle], on clauses built in a fresh [EncodingContext]:

- Premises Γ entail a conclusion φ when the encoding of Γ (each premise asserted) together with the encoding of φ (denied) is unsatisfiable.
- Premises Γ are contradictory when the encoding of Γ (each premise asserted) is unsatisfiable.

As the context is fresh, no check depends on any earlier check, and repeating a check repeats the result.

A premise of Γ is redundant if the remaining premises (still) entail the conclusion.
The necessity check examines premises in order, and stops at the first redundant premise.
No search is made for a minimal subset of the premises.
A single premise is never redundant.

```rust
# use tfl_entail::procedures::entailment::Engine;
let engine = Engine::default();

let premises = ["(P → Q)", "(Q → R)", "P"];
assert!(engine.is_entailed_text(&premises, "R").unwrap());
assert!(!engine.is_entailed_text(&premises[..2], "R").unwrap());
assert!(engine.is_contradictory_text(&["P", "(¬P)"]).unwrap());
```

# Failures

Every check returns a [Result], and an error (from parsing, encoding, or the oracle) means the check decided *nothing*.
In particular, a formula which fails to parse is never treated as 'not entailed'.

# Validation

[Engine::validate] applies each filter on an accepted problem, in order:

1. No premise is repeated.
2. The conclusion is not one of the premises.
3. The premises entail the conclusion.
4. The premises are not contradictory.
5. Each premise is necessary.

The first filter failed is returned as a [Rejection].
*/

use std::collections::BTreeSet;

use crate::{
    encode::EncodingContext,
    misc::log::targets::{self},
    oracle::{OracleReport, SatOracle, VarisatOracle},
    parse::parse_formula_in,
    structures::{
        atom::{Alphabet, Atom},
        formula::Formula,
        problem::Problem,
        valuation::Valuation,
    },
    types::err::{self, ErrorKind},
};

/// The reason a candidate problem was rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// Some premise occurs more than once.
    DuplicatePremises,

    /// The conclusion is one of the premises.
    TrivialConclusion,

    /// The premises do not entail the conclusion.
    NotEntailed,

    /// The premises are contradictory.
    Contradictory,

    /// The premise at the given (zero-based) index is not needed to entail the conclusion.
    ///
    /// When displayed, premises are counted from one.
    Redundant { premise: usize },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicatePremises => write!(f, "duplicate premises"),
            Self::TrivialConclusion => write!(f, "conclusion is a premise"),
            Self::NotEntailed => write!(f, "not entailed"),
            Self::Contradictory => write!(f, "contradictory premises"),
            Self::Redundant { premise } => write!(f, "premise {} is redundant", premise + 1),
        }
    }
}

/// The outcome of an entailment check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Entailed,

    /// Not entailed, with a valuation of the atoms of the premises and conclusion on which every premise is true and the conclusion is false.
    NotEntailed { countermodel: Valuation },
}

impl Verdict {
    pub fn is_entailed(&self) -> bool {
        matches!(self, Self::Entailed)
    }
}

/// Checks built from an oracle.
///
/// The alphabet of an engine fixes the variables of the listed atoms in every encoding, and restricts the atoms of formulas read from text.
#[derive(Clone, Debug)]
pub struct Engine<O: SatOracle = VarisatOracle> {
    oracle: O,
    alphabet: Alphabet,
}

impl Default for Engine<VarisatOracle> {
    fn default() -> Self {
        Engine::new(VarisatOracle, Alphabet::default())
    }
}

impl<O: SatOracle> Engine<O> {
    pub fn new(oracle: O, alphabet: Alphabet) -> Self {
        Engine { oracle, alphabet }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Asserts each premise and, if given, denies the conclusion, in a fresh context, and passes the clauses to the oracle.
    fn consult(
        &self,
        premises: &[Formula],
        denied: Option<&Formula>,
    ) -> Result<(EncodingContext, OracleReport), ErrorKind> {
        let mut context = EncodingContext::new(&self.alphabet);
        for premise in premises {
            context.assert(premise)?;
        }
        if let Some(conclusion) = denied {
            context.deny(conclusion)?;
        }

        let report = self.oracle.solve(&context.cnf())?;
        Ok((context, report))
    }

    /// Whether the premises entail the conclusion.
    pub fn is_entailed(&self, premises: &[Formula], conclusion: &Formula) -> Result<bool, ErrorKind> {
        let (_, report) = self.consult(premises, Some(conclusion))?;
        let entailed = !report.satisfiable;
        log::trace!(target: targets::ENTAILMENT, "{} premises entail {conclusion}: {entailed}", premises.len());
        Ok(entailed)
    }

    /// Whether the premises entail the conclusion, with a countermodel if not.
    pub fn entailment(&self, premises: &[Formula], conclusion: &Formula) -> Result<Verdict, ErrorKind> {
        let (context, report) = self.consult(premises, Some(conclusion))?;

        match report {
            OracleReport {
                satisfiable: false, ..
            } => Ok(Verdict::Entailed),

            OracleReport {
                model: Some(model), ..
            } => {
                let mut atoms: BTreeSet<&Atom> = conclusion.atoms();
                for premise in premises {
                    atoms.extend(premise.atoms());
                }
                let countermodel = context.valuation_over(&model, atoms);
                log::trace!(target: targets::ENTAILMENT, "Countermodel to {conclusion}: {countermodel}");
                Ok(Verdict::NotEntailed { countermodel })
            }

            OracleReport { model: None, .. } => Err(err::OracleError::Failure(
                "no model for satisfiable clauses".to_string(),
            )
            .into()),
        }
    }

    /// Whether no valuation makes every premise true.
    pub fn is_contradictory(&self, premises: &[Formula]) -> Result<bool, ErrorKind> {
        let (_, report) = self.consult(premises, None)?;
        Ok(!report.satisfiable)
    }

    /// The index of the first premise whose removal preserves entailment of the conclusion, if any.
    ///
    /// The premises are assumed to entail the conclusion.
    /// A single premise is never redundant.
    pub fn redundant_premise(
        &self,
        premises: &[Formula],
        conclusion: &Formula,
    ) -> Result<Option<usize>, ErrorKind> {
        if premises.len() < 2 {
            return Ok(None);
        }

        let mut remaining = Vec::with_capacity(premises.len() - 1);
        for index in 0..premises.len() {
            remaining.clear();
            remaining.extend(
                premises
                    .iter()
                    .enumerate()
                    .filter(|(other, _)| *other != index)
                    .map(|(_, premise)| premise.clone()),
            );

            if self.is_entailed(&remaining, conclusion)? {
                log::trace!(target: targets::ENTAILMENT, "Premise {index} is redundant for {conclusion}");
                return Ok(Some(index));
            }
        }

        Ok(None)
    }

    /// Whether every premise is necessary to entail the conclusion.
    pub fn is_minimal(&self, premises: &[Formula], conclusion: &Formula) -> Result<bool, ErrorKind> {
        Ok(self.redundant_premise(premises, conclusion)?.is_none())
    }

    fn parse_all(&self, texts: &[&str]) -> Result<Vec<Formula>, ErrorKind> {
        let mut formulas = Vec::with_capacity(texts.len());
        for text in texts {
            formulas.push(parse_formula_in(text, &self.alphabet)?);
        }
        Ok(formulas)
    }

    /// As [is_entailed](Engine::is_entailed), with formulas read from text over the alphabet of the engine.
    pub fn is_entailed_text(&self, premises: &[&str], conclusion: &str) -> Result<bool, ErrorKind> {
        let premises = self.parse_all(premises)?;
        let conclusion = parse_formula_in(conclusion, &self.alphabet)?;
        self.is_entailed(&premises, &conclusion)
    }

    /// As [is_contradictory](Engine::is_contradictory), with formulas read from text over the alphabet of the engine.
    pub fn is_contradictory_text(&self, premises: &[&str]) -> Result<bool, ErrorKind> {
        let premises = self.parse_all(premises)?;
        self.is_contradictory(&premises)
    }

    /// As [is_minimal](Engine::is_minimal), with formulas read from text over the alphabet of the engine.
    pub fn is_minimal_text(&self, premises: &[&str], conclusion: &str) -> Result<bool, ErrorKind> {
        let premises = self.parse_all(premises)?;
        let conclusion = parse_formula_in(conclusion, &self.alphabet)?;
        self.is_minimal(&premises, &conclusion)
    }

    /// Applies each filter to a problem, returning the first filter failed, if any.
    ///
    /// An error is returned only if some check could not be decided.
    pub fn validate(&self, problem: &Problem) -> Result<Result<(), Rejection>, ErrorKind> {
        let rejection = 'rejection: {
            if problem.has_duplicate_premises() {
                break 'rejection Rejection::DuplicatePremises;
            }
            if problem.has_trivial_conclusion() {
                break 'rejection Rejection::TrivialConclusion;
            }
            if !self.is_entailed(&problem.premises, &problem.conclusion)? {
                break 'rejection Rejection::NotEntailed;
            }
            if self.is_contradictory(&problem.premises)? {
                break 'rejection Rejection::Contradictory;
            }
            if let Some(premise) = self.redundant_premise(&problem.premises, &problem.conclusion)? {
                break 'rejection Rejection::Redundant { premise };
            }

            log::debug!(target: targets::ENTAILMENT, "Accepted {}", problem.id);
            return Ok(Ok(()));
        };

        log::trace!(target: targets::ENTAILMENT, "Rejected {}: {rejection}", problem.id);
        Ok(Err(rejection))
    }
}
