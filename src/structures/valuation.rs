/*!
A (partial) function from atoms to truth values.

Valuations are returned as countermodels when an [entailment check](crate::procedures::entailment) fails, and may be used to [evaluate](crate::structures::formula::Formula::evaluate) formulas directly.

A valuation displays as its atoms in order, with false atoms prefixed by `-`, in the manner of a DIMACS model line.

```rust
# use tfl_entail::structures::atom::Atom;
# use tfl_entail::structures::valuation::Valuation;
let mut valuation = Valuation::default();
valuation.set(Atom::from("Q"), false);
valuation.set(Atom::from("P"), true);

assert_eq!(valuation.to_string(), "P -Q");
assert_eq!(Valuation::all_over(&[Atom::from("P"), Atom::from("Q")]).count(), 4);
```
*/

use std::collections::BTreeMap;

use crate::structures::atom::Atom;

/// A map from atoms to truth values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Valuation {
    values: BTreeMap<Atom, bool>,
}

impl Valuation {
    pub fn set(&mut self, atom: Atom, value: bool) {
        self.values.insert(atom, value);
    }

    pub fn value_of(&self, atom: &Atom) -> Option<bool> {
        self.values.get(atom).copied()
    }

    /// The atoms with a value, paired with that value, in order of atom.
    pub fn iter(&self) -> impl Iterator<Item = (&Atom, bool)> {
        self.values.iter().map(|(atom, value)| (atom, *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Every full valuation of the given atoms, i.e. the rows of a truth table.
    ///
    /// Rows are counted in binary, with the first atom as the least significant digit, so the first row values every atom false.
    /// The number of valuations is exponential in the number of atoms, though rows are only built as the iterator is advanced.
    pub fn all_over(atoms: &[Atom]) -> impl Iterator<Item = Valuation> + '_ {
        let first = vec![false; atoms.len()];
        let rows = std::iter::successors(Some(first), |row| {
            let carry = row.iter().position(|value| !value)?;
            let mut next = row.clone();
            next[..carry].fill(false);
            next[carry] = true;
            Some(next)
        });

        rows.map(move |row| {
            let mut valuation = Valuation::default();
            for (atom, value) in atoms.iter().zip(row) {
                valuation.set(atom.clone(), value);
            }
            valuation
        })
    }
}

impl std::fmt::Display for Valuation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let literals = self
            .iter()
            .map(|(atom, value)| match value {
                true => atom.to_string(),
                false => format!("-{atom}"),
            })
            .collect::<Vec<_>>();
        write!(f, "{}", literals.join(" "))
    }
}
