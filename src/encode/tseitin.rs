/*!
The Tseitin encoding of a formula.

Given a formula 𝐅 and a context, the encoding returns a literal *l* and emits clauses which together force *l* to take the value of 𝐅 on any valuation of the atoms of 𝐅.

- An atom is the literal of its variable, and nothing is emitted.
- A negation ¬𝐅 is the negation of the literal of 𝐅, and nothing is emitted.
- A binary formula is a fresh variable *v*, with clauses stating *v* is equivalent to the connective applied to the literals *a* and *b* of the immediate subformulas:

| Formula | Clauses |
|---------|---------|
| 𝐀 ∧ 𝐁   | ¬*v* ∨ *a*, ¬*v* ∨ *b*, ¬*a* ∨ ¬*b* ∨ *v* |
| 𝐀 ∨ 𝐁   | ¬*v* ∨ *a* ∨ *b*, ¬*a* ∨ *v*, ¬*b* ∨ *v* |
| 𝐀 → 𝐁   | ¬*v* ∨ ¬*a* ∨ *b*, *a* ∨ *v*, ¬*b* ∨ *v* |
| 𝐀 ↔ 𝐁   | ¬*v* ∨ ¬*a* ∨ *b*, ¬*v* ∨ ¬*b* ∨ *a*, *a* ∨ *b* ∨ *v*, ¬*a* ∨ ¬*b* ∨ *v* |

The size of the encoding is linear in the size of the formula, and the encoding of 𝐅 together with the unit clause *l* is satisfiable if and only if 𝐅 is.

Identical subformulas are encoded separately, each with its own fresh variable.
*/

use crate::{
    encode::EncodingContext,
    structures::{
        formula::{BinaryConnective, Formula},
        literal::{self, Literal},
    },
    types::err::EncodingError,
};

impl EncodingContext {
    /// Encodes a formula, returning the literal equivalent to the formula.
    ///
    /// Atoms without a variable are given a fresh variable.
    pub fn encode(&mut self, formula: &Formula) -> Result<Literal, EncodingError> {
        let (connective, left, right) = match formula {
            Formula::Atom(atom) => {
                return Ok(literal::from_variable(self.atom_variable(atom)?, true));
            }

            Formula::Not(subformula) => return Ok(-self.encode(subformula)?),

            Formula::And(left, right) => (BinaryConnective::And, left, right),
            Formula::Or(left, right) => (BinaryConnective::Or, left, right),
            Formula::Implies(left, right) => (BinaryConnective::Implies, left, right),
            Formula::Iff(left, right) => (BinaryConnective::Iff, left, right),
        };

        let a = self.encode(left)?;
        let b = self.encode(right)?;
        let v = literal::from_variable(self.fresh_variable()?, true);

        match connective {
            BinaryConnective::And => {
                self.emit(vec![-v, a]);
                self.emit(vec![-v, b]);
                self.emit(vec![-a, -b, v]);
            }
            BinaryConnective::Or => {
                self.emit(vec![-v, a, b]);
                self.emit(vec![-a, v]);
                self.emit(vec![-b, v]);
            }
            BinaryConnective::Implies => {
                self.emit(vec![-v, -a, b]);
                self.emit(vec![a, v]);
                self.emit(vec![-b, v]);
            }
            BinaryConnective::Iff => {
                self.emit(vec![-v, -a, b]);
                self.emit(vec![-v, -b, a]);
                self.emit(vec![a, b, v]);
                self.emit(vec![-a, -b, v]);
            }
        }

        Ok(v)
    }
}

#[cfg(test)]
mod tseitin_tests {
    use super::*;
    use crate::{
        parse::parse_formula,
        structures::{
            atom::{Alphabet, Atom},
            clause::Clause,
        },
    };

    /// Every assignment to the variables of a context, as a model.
    fn models(variable_count: u32) -> impl Iterator<Item = Vec<Literal>> {
        (0..1_u64 << variable_count).map(move |row| {
            (1..=variable_count)
                .map(|variable| literal::from_variable(variable, row & (1 << (variable - 1)) != 0))
                .collect()
        })
    }

    /// Checks that on every model of the clauses the literal takes the value of the formula, and that every valuation of the atoms extends to a model.
    fn check_equivalence(text: &str) {
        let formula = parse_formula(text).unwrap();
        let alphabet: Alphabet = "P, Q, R".parse().unwrap();
        let mut context = EncodingContext::new(&alphabet);
        let literal = context.encode(&formula).unwrap();

        let atoms = alphabet.atoms().to_vec();
        let mut extended = vec![false; 1 << atoms.len()];

        for model in models(context.variable_count()) {
            if !context.clauses().iter().all(|clause| clause.satisfied_by(&model)) {
                continue;
            }
            let valuation = context.valuation_over(&model, &atoms);
            assert_eq!(
                formula.evaluate(&valuation),
                Some(model.contains(&literal)),
                "{text} on {valuation}"
            );

            let row = atoms
                .iter()
                .enumerate()
                .filter(|(_, atom)| valuation.value_of(atom) == Some(true))
                .map(|(index, _)| 1 << index)
                .sum::<usize>();
            extended[row] = true;
        }

        assert!(extended.into_iter().all(|extended| extended), "{text}");
    }

    #[test]
    fn equivalence_by_connective() {
        check_equivalence("(P ∧ Q)");
        check_equivalence("(P ∨ Q)");
        check_equivalence("(P → Q)");
        check_equivalence("(P ↔ Q)");
        check_equivalence("(¬P)");
    }

    #[test]
    fn equivalence_nested() {
        check_equivalence("((P → Q) ↔ ((¬Q) → (¬P)))");
        check_equivalence("((P ∨ (¬R)) ∧ (Q ↔ (P → R)))");
        check_equivalence("(¬(¬(P ∧ P)))");
    }

    #[test]
    fn fresh_variable_counts() {
        let mut context = EncodingContext::new(&Alphabet::default());
        let formula = parse_formula("((¬P) ↔ (¬(Q ∨ R)))").unwrap();
        context.encode(&formula).unwrap();
        // One variable for each binary connective, none for negations.
        assert_eq!(context.variable_count(), 4 + 2);
        assert_eq!(context.clauses().len(), 3 + 4);
    }

    #[test]
    fn negation_is_free() {
        let mut context = EncodingContext::new(&Alphabet::default());
        let literal = context.encode(&parse_formula("(¬(¬(¬Q)))").unwrap()).unwrap();
        assert_eq!(literal, -2);
        assert!(context.clauses().is_empty());
    }

    #[test]
    fn unknown_atoms_are_fresh() {
        let mut context = EncodingContext::new(&Alphabet::default());
        let literal = context.encode(&parse_formula("(T ∧ P)").unwrap()).unwrap();
        assert_eq!(context.variable_of(&Atom::from("T")), Some(5));
        assert_eq!(literal, 6);

        let again = context.encode(&parse_formula("T").unwrap()).unwrap();
        assert_eq!(again, 5);
    }

    #[test]
    fn iff_clauses() {
        let mut context = EncodingContext::new(&Alphabet::default());
        context.encode(&parse_formula("(P ↔ Q)").unwrap()).unwrap();
        assert_eq!(
            context.clauses(),
            &[vec![-5, -1, 2], vec![-5, -2, 1], vec![1, 2, 5], vec![-1, -2, 5]]
        );
    }

    #[test]
    fn exhausted_variables() {
        let mut context = EncodingContext::default();
        context.top = literal::VARIABLE_MAX;
        assert_eq!(
            context.encode(&parse_formula("P").unwrap()),
            Err(EncodingError::VariablesExhausted)
        );
    }

    #[test]
    fn independent_contexts() {
        let formula = parse_formula("((P ∧ Q) → R)").unwrap();
        let mut one = EncodingContext::new(&Alphabet::default());
        let mut two = EncodingContext::new(&Alphabet::default());

        one.encode(&parse_formula("(S ∨ S)").unwrap()).unwrap();
        let shifted = one.encode(&formula).unwrap();
        let fresh = two.encode(&formula).unwrap();

        assert_eq!(fresh, 6);
        assert_eq!(shifted, 7);
    }
}
