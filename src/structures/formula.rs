/*!
Formulas of truth-functional logic.

A formula is a tree whose leaves are [atoms](crate::structures::atom) and whose interior nodes are connectives:
- The unary connective ¬ (negation).
- The binary connectives ∧ (conjunction), ∨ (disjunction), → (implication), and ↔ (biconditional).

Formulas are immutable once constructed, and there is exactly one internal representation of each connective.
The aliases accepted by the [parser](crate::parse) are normalised during tokenization.

# Notation

Formulas are rendered fully parenthesized, in one of two [notations](Notation):

| Connective | Unicode | ASCII |
|------------|---------|-------|
| negation   | `¬`     | `~`   |
| and        | `∧`     | `&`   |
| or         | `∨`     | `\|`  |
| implies    | `→`     | `->`  |
| iff        | `↔`     | `<->` |

The Unicode notation is canonical, and is used by [Display](std::fmt::Display).

```rust
# use tfl_entail::structures::formula::{Formula, Notation};
let formula = Formula::implies(Formula::not(Formula::atom("P")), Formula::atom("Q"));

assert_eq!(formula.to_string(), "((¬P) → Q)");
assert_eq!(formula.render(Notation::Ascii), "((~P) -> Q)");
assert_eq!(formula.depth(), 2);
```
*/

use std::collections::BTreeSet;

use crate::structures::{atom::Atom, valuation::Valuation};

/// A notation for rendering formulas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Notation {
    /// ¬, ∧, ∨, →, ↔
    #[default]
    Unicode,

    /// ~, &, |, ->, <->
    Ascii,
}

/// The binary connectives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BinaryConnective {
    And,
    Or,
    Implies,
    Iff,
}

impl BinaryConnective {
    /// Each binary connective, in order.
    pub const ALL: [BinaryConnective; 4] = [Self::And, Self::Or, Self::Implies, Self::Iff];

    /// The symbol of the connective in some notation.
    pub fn symbol(&self, notation: Notation) -> &'static str {
        match (self, notation) {
            (Self::And, Notation::Unicode) => "∧",
            (Self::Or, Notation::Unicode) => "∨",
            (Self::Implies, Notation::Unicode) => "→",
            (Self::Iff, Notation::Unicode) => "↔",
            (Self::And, Notation::Ascii) => "&",
            (Self::Or, Notation::Ascii) => "|",
            (Self::Implies, Notation::Ascii) => "->",
            (Self::Iff, Notation::Ascii) => "<->",
        }
    }

    /// The connective with a given symbol, in either notation.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "∧" | "&" => Some(Self::And),
            "∨" | "|" => Some(Self::Or),
            "→" | "->" => Some(Self::Implies),
            "↔" | "<->" => Some(Self::Iff),
            _ => None,
        }
    }

    /// The truth function of the connective.
    pub fn apply(&self, left: bool, right: bool) -> bool {
        match self {
            Self::And => left && right,
            Self::Or => left || right,
            Self::Implies => !left || right,
            Self::Iff => left == right,
        }
    }
}

/// A formula.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Formula {
    Atom(Atom),
    Not(Box<Formula>),
    And(Box<Formula>, Box<Formula>),
    Or(Box<Formula>, Box<Formula>),
    Implies(Box<Formula>, Box<Formula>),
    Iff(Box<Formula>, Box<Formula>),
}

impl Formula {
    pub fn atom(name: &str) -> Self {
        Formula::Atom(Atom::from(name))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(formula: Formula) -> Self {
        Formula::Not(Box::new(formula))
    }

    pub fn and(left: Formula, right: Formula) -> Self {
        Formula::binary(BinaryConnective::And, left, right)
    }

    pub fn or(left: Formula, right: Formula) -> Self {
        Formula::binary(BinaryConnective::Or, left, right)
    }

    pub fn implies(left: Formula, right: Formula) -> Self {
        Formula::binary(BinaryConnective::Implies, left, right)
    }

    pub fn iff(left: Formula, right: Formula) -> Self {
        Formula::binary(BinaryConnective::Iff, left, right)
    }

    /// The formula made by joining two formulas with some binary connective.
    pub fn binary(connective: BinaryConnective, left: Formula, right: Formula) -> Self {
        let (left, right) = (Box::new(left), Box::new(right));
        match connective {
            BinaryConnective::And => Formula::And(left, right),
            BinaryConnective::Or => Formula::Or(left, right),
            BinaryConnective::Implies => Formula::Implies(left, right),
            BinaryConnective::Iff => Formula::Iff(left, right),
        }
    }

    /// The main connective and immediate subformulas of a binary formula, if the formula is binary.
    pub fn as_binary(&self) -> Option<(BinaryConnective, &Formula, &Formula)> {
        match self {
            Formula::Atom(_) | Formula::Not(_) => None,
            Formula::And(l, r) => Some((BinaryConnective::And, l, r)),
            Formula::Or(l, r) => Some((BinaryConnective::Or, l, r)),
            Formula::Implies(l, r) => Some((BinaryConnective::Implies, l, r)),
            Formula::Iff(l, r) => Some((BinaryConnective::Iff, l, r)),
        }
    }

    /// The depth of the formula, where atoms have depth zero.
    pub fn depth(&self) -> usize {
        match self {
            Formula::Atom(_) => 0,
            Formula::Not(f) => 1 + f.depth(),
            _ => match self.as_binary() {
                Some((_, l, r)) => 1 + l.depth().max(r.depth()),
                None => 0,
            },
        }
    }

    /// The number of connectives in the formula.
    pub fn size(&self) -> usize {
        match self {
            Formula::Atom(_) => 0,
            Formula::Not(f) => 1 + f.size(),
            _ => match self.as_binary() {
                Some((_, l, r)) => 1 + l.size() + r.size(),
                None => 0,
            },
        }
    }

    /// The atoms of the formula.
    pub fn atoms(&self) -> BTreeSet<&Atom> {
        let mut atoms = BTreeSet::default();
        self.collect_atoms(&mut atoms);
        atoms
    }

    fn collect_atoms<'f>(&'f self, atoms: &mut BTreeSet<&'f Atom>) {
        match self {
            Formula::Atom(atom) => {
                atoms.insert(atom);
            }
            Formula::Not(f) => f.collect_atoms(atoms),
            _ => {
                if let Some((_, l, r)) = self.as_binary() {
                    l.collect_atoms(atoms);
                    r.collect_atoms(atoms);
                }
            }
        }
    }

    /// The binary connectives which occur in the formula.
    pub fn binary_connectives(&self) -> BTreeSet<BinaryConnective> {
        let mut connectives = BTreeSet::default();
        let mut stack = vec![self];
        while let Some(formula) = stack.pop() {
            match formula {
                Formula::Atom(_) => {}
                Formula::Not(f) => stack.push(f),
                _ => {
                    if let Some((connective, l, r)) = formula.as_binary() {
                        connectives.insert(connective);
                        stack.push(l);
                        stack.push(r);
                    }
                }
            }
        }
        connectives
    }

    /// Whether negation occurs in the formula.
    pub fn has_negation(&self) -> bool {
        match self {
            Formula::Atom(_) => false,
            Formula::Not(_) => true,
            _ => match self.as_binary() {
                Some((_, l, r)) => l.has_negation() || r.has_negation(),
                None => false,
            },
        }
    }

    /// The value of the formula on a valuation, or None if some atom of the formula has no value.
    pub fn evaluate(&self, valuation: &Valuation) -> Option<bool> {
        match self {
            Formula::Atom(atom) => valuation.value_of(atom),
            Formula::Not(f) => f.evaluate(valuation).map(|value| !value),
            _ => {
                let (connective, l, r) = self.as_binary()?;
                Some(connective.apply(l.evaluate(valuation)?, r.evaluate(valuation)?))
            }
        }
    }

    /// The formula, fully parenthesized, in some notation.
    pub fn render(&self, notation: Notation) -> String {
        let mut string = String::default();
        self.render_into(notation, &mut string);
        string
    }

    fn render_into(&self, notation: Notation, string: &mut String) {
        match self {
            Formula::Atom(atom) => string.push_str(atom.name()),
            Formula::Not(f) => {
                string.push('(');
                string.push_str(match notation {
                    Notation::Unicode => "¬",
                    Notation::Ascii => "~",
                });
                f.render_into(notation, string);
                string.push(')');
            }
            _ => {
                if let Some((connective, l, r)) = self.as_binary() {
                    string.push('(');
                    l.render_into(notation, string);
                    string.push(' ');
                    string.push_str(connective.symbol(notation));
                    string.push(' ');
                    r.render_into(notation, string);
                    string.push(')');
                }
            }
        }
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(Notation::Unicode))
    }
}

#[cfg(test)]
mod formula_tests {
    use super::*;

    fn p() -> Formula {
        Formula::atom("P")
    }

    fn q() -> Formula {
        Formula::atom("Q")
    }

    #[test]
    fn rendering() {
        let formula = Formula::iff(Formula::and(p(), q()), Formula::or(q(), Formula::not(p())));
        assert_eq!(formula.to_string(), "((P ∧ Q) ↔ (Q ∨ (¬P)))");
        assert_eq!(formula.render(Notation::Ascii), "((P & Q) <-> (Q | (~P)))");
        assert_eq!(p().to_string(), "P");
    }

    #[test]
    fn measures() {
        let formula = Formula::implies(Formula::not(Formula::not(p())), q());
        assert_eq!(formula.depth(), 3);
        assert_eq!(formula.size(), 3);
        assert_eq!(formula.atoms().len(), 2);
        assert!(formula.has_negation());
        assert_eq!(
            formula.binary_connectives().into_iter().collect::<Vec<_>>(),
            vec![BinaryConnective::Implies]
        );
    }

    #[test]
    fn evaluation() {
        let mut valuation = Valuation::default();
        valuation.set(Atom::from("P"), true);

        let formula = Formula::implies(p(), q());
        assert_eq!(formula.evaluate(&valuation), None);

        valuation.set(Atom::from("Q"), false);
        assert_eq!(formula.evaluate(&valuation), Some(false));
        assert_eq!(Formula::iff(q(), Formula::not(p())).evaluate(&valuation), Some(true));
    }

    #[test]
    fn symbols() {
        for connective in BinaryConnective::ALL {
            for notation in [Notation::Unicode, Notation::Ascii] {
                assert_eq!(
                    BinaryConnective::from_symbol(connective.symbol(notation)),
                    Some(connective)
                );
            }
        }
        assert_eq!(BinaryConnective::from_symbol("v"), None);
    }
}
