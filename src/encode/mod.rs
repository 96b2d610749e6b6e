/*!
Encoding formulas as clauses.

An [EncodingContext] owns:
- A map from atoms to variables, fixed for the lifetime of the context.
- A counter of the greatest variable in use, from which fresh variables are allocated.
- The clauses emitted so far.

Every formula is encoded relative to a context, and a context is used for exactly one check.
Contexts are never shared between unrelated problems, so a check never depends on variables allocated by some other check.

The encoding itself is a [Tseitin encoding](tseitin), which adds one fresh variable for each binary subformula.

```rust
# use tfl_entail::encode::EncodingContext;
# use tfl_entail::parse::parse_formula;
# use tfl_entail::structures::atom::Alphabet;
let mut context = EncodingContext::new(&Alphabet::default());
let formula = parse_formula("(P ∧ (¬Q))").unwrap();

let literal = context.encode(&formula).unwrap();

// P, Q, R, S are 1–4, and the conjunction is the first fresh variable.
assert_eq!(literal, 5);
assert_eq!(context.clauses(), &[vec![-5, 1], vec![-5, -2], vec![-1, 2, 5]]);
```
*/

pub mod tseitin;

use std::collections::BTreeMap;

use crate::{
    misc::log::targets::{self},
    structures::{
        atom::{Alphabet, Atom},
        clause::{CClause, Cnf},
        formula::Formula,
        literal::{self, Literal, Variable, VARIABLE_MAX},
        valuation::Valuation,
    },
    types::err::EncodingError,
};

/// The state of an encoding.
#[derive(Clone, Debug, Default)]
pub struct EncodingContext {
    /// The variable of each atom.
    atom_map: BTreeMap<Atom, Variable>,

    /// The greatest variable in use, or zero if no variable is in use.
    top: Variable,

    /// Clauses emitted by the encoder.
    clauses: Vec<CClause>,
}

impl EncodingContext {
    /// A context in which the atoms of the alphabet have the variables 1, 2, …, in order.
    pub fn new(alphabet: &Alphabet) -> Self {
        let mut context = EncodingContext::default();
        for atom in alphabet.atoms() {
            context.top += 1;
            context.atom_map.insert(atom.clone(), context.top);
        }
        context
    }

    /// The variable of an atom, if the atom has a variable.
    pub fn variable_of(&self, atom: &Atom) -> Option<Variable> {
        self.atom_map.get(atom).copied()
    }

    /// The variable of an atom, with a fresh variable assigned to the atom if the atom is not already mapped.
    pub fn atom_variable(&mut self, atom: &Atom) -> Result<Variable, EncodingError> {
        match self.atom_map.get(atom) {
            Some(variable) => Ok(*variable),
            None => {
                let variable = self.fresh_variable()?;
                log::trace!(target: targets::ENCODE, "Atom {atom} mapped to fresh variable {variable}");
                self.atom_map.insert(atom.clone(), variable);
                Ok(variable)
            }
        }
    }

    /// A variable not used for any atom or subformula.
    pub fn fresh_variable(&mut self) -> Result<Variable, EncodingError> {
        if self.top >= VARIABLE_MAX {
            return Err(EncodingError::VariablesExhausted);
        }
        self.top += 1;
        Ok(self.top)
    }

    /// The number of variables in use, which is also the greatest variable in use.
    pub fn variable_count(&self) -> Variable {
        self.top
    }

    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    pub(crate) fn emit(&mut self, clause: CClause) {
        log::trace!(target: targets::ENCODE, "Clause {clause:?}");
        self.clauses.push(clause);
    }

    /// Encodes a formula and adds a unit clause requiring the formula to be true.
    pub fn assert(&mut self, formula: &Formula) -> Result<Literal, EncodingError> {
        let literal = self.encode(formula)?;
        self.emit(vec![literal]);
        Ok(literal)
    }

    /// Encodes a formula and adds a unit clause requiring the formula to be false.
    pub fn deny(&mut self, formula: &Formula) -> Result<Literal, EncodingError> {
        let literal = self.encode(formula)?;
        self.emit(vec![-literal]);
        Ok(literal)
    }

    /// The clauses of the context, as a CNF formula.
    pub fn cnf(&self) -> Cnf {
        Cnf {
            clauses: self.clauses.clone(),
            variable_count: self.top,
        }
    }

    /// The valuation of some atoms on a model, given as a collection of literals.
    ///
    /// Atoms without a variable are skipped, and an atom whose variable does not occur in the model is valued false.
    pub fn valuation_over<'f>(
        &self,
        model: &[Literal],
        atoms: impl IntoIterator<Item = &'f Atom>,
    ) -> Valuation {
        let mut valuation = Valuation::default();
        for atom in atoms {
            if let Some(variable) = self.variable_of(atom) {
                let value = model.contains(&literal::from_variable(variable, true));
                valuation.set(atom.clone(), value);
            }
        }
        valuation
    }
}
