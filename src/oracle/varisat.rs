//! An oracle backed by varisat.

use varisat::{ExtendFormula, Lit, Solver};

use crate::{
    misc::log::targets::{self},
    oracle::{OracleReport, SatOracle},
    structures::{clause::Cnf, literal::Literal},
    types::err::OracleError,
};

/// An oracle which solves each call with a fresh varisat solver.
#[derive(Clone, Copy, Debug, Default)]
pub struct VarisatOracle;

impl SatOracle for VarisatOracle {
    fn solve(&self, cnf: &Cnf) -> Result<OracleReport, OracleError> {
        log::trace!(target: targets::ORACLE, "Solving {} clauses over {} variables", cnf.clauses.len(), cnf.variable_count);

        let mut solver = Solver::new();
        let mut buffer: Vec<Lit> = Vec::default();

        for clause in &cnf.clauses {
            buffer.clear();
            buffer.extend(clause.iter().map(|literal| Lit::from_dimacs(*literal as isize)));
            solver.add_clause(&buffer);
        }

        let satisfiable = solver
            .solve()
            .map_err(|e| OracleError::Failure(e.to_string()))?;

        if !satisfiable {
            log::trace!(target: targets::ORACLE, "Unsatisfiable");
            return Ok(OracleReport::unsatisfiable());
        }

        let model = match solver.model() {
            Some(model) => model
                .iter()
                .map(|lit| lit.to_dimacs() as Literal)
                .collect::<Vec<_>>(),
            None => {
                return Err(OracleError::Failure(
                    "no model for satisfiable clauses".to_string(),
                ))
            }
        };
        log::trace!(target: targets::ORACLE, "Satisfiable, with model {model:?}");

        Ok(OracleReport {
            satisfiable,
            model: Some(model),
        })
    }
}
