/*!
Deciding the satisfiability of clauses.

Checks in the library do not solve clauses themselves.
Instead, clauses are passed to a [SatOracle], which reports whether the clauses are satisfiable and, if so, a model.

The oracle is a complete, sound, black box:
- An oracle must never report satisfiable clauses as unsatisfiable (or the reverse).
- An oracle may fail, in which case the check in progress fails with an [OracleError].
- An oracle holds no state between calls, so the result of a call depends only on the clauses given.

[VarisatOracle] is the oracle used by default, and is backed by the [varisat](https://docs.rs/varisat) solver.

```rust
# use tfl_entail::oracle::{SatOracle, VarisatOracle};
# use tfl_entail::structures::clause::Cnf;
let oracle = VarisatOracle::default();

let cnf = Cnf {
    clauses: vec![vec![1, 2], vec![-1], vec![-2]],
    variable_count: 2,
};
assert!(!oracle.solve(&cnf).unwrap().satisfiable);

let cnf = Cnf {
    clauses: vec![vec![1, 2], vec![-1]],
    variable_count: 2,
};
let report = oracle.solve(&cnf).unwrap();
assert!(report.satisfiable);
assert!(report.model.unwrap().contains(&2));
```
*/

mod varisat;
pub use self::varisat::VarisatOracle;

use crate::{
    structures::{clause::Cnf, literal::Literal},
    types::err::OracleError,
};

/// The outcome of a call to an oracle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OracleReport {
    pub satisfiable: bool,

    /// A model of the clauses, as the literals true on the model, if the clauses are satisfiable.
    ///
    /// A variable which does not appear in the model may be given either value.
    pub model: Option<Vec<Literal>>,
}

impl OracleReport {
    pub fn unsatisfiable() -> Self {
        OracleReport {
            satisfiable: false,
            model: None,
        }
    }
}

/// A decision procedure for the satisfiability of clauses.
pub trait SatOracle {
    /// Whether the clauses are satisfiable, with a model if so.
    fn solve(&self, cnf: &Cnf) -> Result<OracleReport, OracleError>;

    /// Whether the clauses are satisfiable.
    fn is_satisfiable(&self, cnf: &Cnf) -> Result<bool, OracleError> {
        Ok(self.solve(cnf)?.satisfiable)
    }
}

impl<O: SatOracle + ?Sized> SatOracle for &O {
    fn solve(&self, cnf: &Cnf) -> Result<OracleReport, OracleError> {
        (**self).solve(cnf)
    }
}
