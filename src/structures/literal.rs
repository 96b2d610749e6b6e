/*!
Variables and literals of an encoding.

A variable is a positive integer, and a literal is a variable paired with a polarity.
Following DIMACS, a literal is represented as a (non-zero) signed integer, where the sign indicates polarity:
- *v* is the literal 'variable *v* is true'.
- -*v* is the literal 'variable *v* is false'.

```rust
# use tfl_entail::structures::literal::{self, Literal};
let literal: Literal = -7;
assert_eq!(literal::variable_of(literal), 7);
assert!(!literal::polarity_of(literal));
assert_eq!(literal::from_variable(7, false), literal);
```

Variables are allocated by an [encoding context](crate::encode::EncodingContext), and as literals are signed the greatest variable is [VARIABLE_MAX].
*/

/// A variable, aka. an 'atom' internal to an encoding.
pub type Variable = u32;

/// A literal, as a non-zero signed integer.
pub type Literal = i32;

/// The greatest variable which may be used in a literal.
pub const VARIABLE_MAX: Variable = i32::MAX.unsigned_abs();

/// The literal of a variable with some polarity.
///
/// The variable must be at most [VARIABLE_MAX], as is guaranteed for variables from an [encoding context](crate::encode::EncodingContext).
pub fn from_variable(variable: Variable, polarity: bool) -> Literal {
    let literal = variable as Literal;
    match polarity {
        true => literal,
        false => -literal,
    }
}

/// The variable of a literal.
pub fn variable_of(literal: Literal) -> Variable {
    literal.unsigned_abs()
}

/// The polarity of a literal.
pub fn polarity_of(literal: Literal) -> bool {
    literal.is_positive()
}
