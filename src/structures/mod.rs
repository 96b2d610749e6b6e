//! Key structures, such as formulas, clauses, and problems.
//!
//! # Formulas and clauses
//!
//! Two kinds of formula are distinguished:
//! - A [formula](formula) is a tree of connectives over [atoms](atom), as written by people and produced by the [generator](crate::procedures::generate).
//! - A [CNF formula](clause::Cnf) is a set of [clauses](clause) over [literals](literal), interpreted as the conjunction of those clauses, as consumed by a [SAT oracle](crate::oracle).
//!
//! The [encoder](crate::encode) translates the first kind into the second.
//!
//! ## (Boolean) values
//!
//! A [valuation] assigns values to atoms, and is used both to evaluate formulas and to report countermodels.

pub mod atom;
pub mod clause;
pub mod formula;
pub mod literal;
pub mod problem;
pub mod valuation;
