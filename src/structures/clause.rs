/*!
Clauses, aka. a collection of literals, interpreted as the disjunction of those literals, and CNF formulas, aka. a collection of clauses, interpreted as their conjunction.

The canonical representation of a clause is as a vector of [literals](crate::structures::literal).
The order of literals in a clause is the order in which they were emitted by the [encoder](crate::encode).

```rust
# use tfl_entail::structures::clause::{CClause, Clause, Cnf};
let clause: CClause = vec![-3, 1, 2];
assert_eq!(clause.as_dimacs(true), "-3 1 2 0");

let cnf = Cnf { clauses: vec![clause, vec![3]], variable_count: 3 };
assert!(cnf.satisfied_by(&[1, -2, 3]));
assert!(!cnf.satisfied_by(&[-1, -2, 3]));
assert_eq!(cnf.as_dimacs(), "p cnf 3 2\n-3 1 2 0\n3 0\n");
```

- The empty clause is always false (never true).
- Single literals are identified with the clause containing that literal (aka. a 'unit' clause).
*/

use crate::structures::literal::{Literal, Variable};

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// Whether some literal of the clause is in the given model.
    fn satisfied_by(&self, model: &[Literal]) -> bool;
}

/// The canonical implementation of a clause.
pub type CClause = Vec<Literal>;

impl Clause for [Literal] {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = self
            .iter()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        if zero {
            if !the_string.is_empty() {
                the_string.push(' ');
            }
            the_string.push('0');
        }
        the_string
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn satisfied_by(&self, model: &[Literal]) -> bool {
        self.iter().any(|literal| model.contains(literal))
    }
}

impl Clause for CClause {
    fn as_dimacs(&self, zero: bool) -> String {
        self.as_slice().as_dimacs(zero)
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn satisfied_by(&self, model: &[Literal]) -> bool {
        self.as_slice().satisfied_by(model)
    }
}

/// A formula in conjunctive normal form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cnf {
    /// The clauses of the formula.
    pub clauses: Vec<CClause>,

    /// The greatest variable which may appear in some clause.
    pub variable_count: Variable,
}

impl Cnf {
    /// Whether every clause has some literal in the given model.
    pub fn satisfied_by(&self, model: &[Literal]) -> bool {
        self.clauses.iter().all(|clause| clause.satisfied_by(model))
    }

    /// The formula in DIMACS form, including the problem line.
    pub fn as_dimacs(&self) -> String {
        let mut the_string = format!("p cnf {} {}\n", self.variable_count, self.clauses.len());
        for clause in &self.clauses {
            the_string.push_str(&clause.as_dimacs(true));
            the_string.push('\n');
        }
        the_string
    }
}
