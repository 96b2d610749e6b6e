//! Generic structures, not specific to formulas or entailment.

pub mod random;
