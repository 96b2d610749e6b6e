/*!
Parsing formulas from text.

# Notation

A formula is either:
- A bare atom, e.g. `P`.
- A parenthesized negation, e.g. `(¬P)`.
- A parenthesized binary formula, e.g. `(P → (Q ∧ R))`.

Connectives may be written in either notation (see [formula](crate::structures::formula)), and notations may be mixed within a formula.

The precedence of connectives, lowest to highest binding, is ↔, →, ∨, ∧, ¬.
However, every binary formula must be parenthesized, and at most one binary connective may appear in a pair of parentheses outside of any nested parentheses.
So, precedence only matters for negation: `(¬P → Q)` is read as `((¬P) → Q)`.
A negation may omit its parentheses, and redundant parentheses are permitted: `((P ∧ Q))` is read as `(P ∧ Q)`.

Nesting is bounded: at most [NESTING_MAX] parentheses and negations may enclose any part of a formula.

Whitespace is insignificant, though the canonical rendering of a formula places a single space on either side of a binary connective.

# Errors

Any failure is a [ParseError](crate::types::err::ParseError) which names the fragment of text at fault.

```rust
# use tfl_entail::parse::parse_formula;
# use tfl_entail::types::err::ParseError;
assert_eq!(
    parse_formula("(P ∧ Q ∨ R)"),
    Err(ParseError::Ungrouped { fragment: "(P ∧ Q ∨ R)".to_string() })
);
```
*/

mod formula;
pub mod token;

pub use formula::{parse_formula, parse_formula_in, NESTING_MAX};
