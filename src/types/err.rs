//! Error types used in the library.
//!
//! - Parse errors are external, and always returned to the caller. A formula which fails to parse is never treated as 'not entailed'.
//! - Encoding errors are not expected, as the encoder is total over formulas. Still, exhausting the supply of variables is reported rather than allowed to overflow.
//! - Oracle errors abort the check in progress. A check which returns an oracle error has decided *nothing*.
//!
//! Filter failures during problem generation are not errors, see [Rejection](crate::procedures::entailment::Rejection).
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::procedures::entailment::Rejection;

#[derive(Clone, Debug, PartialEq)]
pub enum ErrorKind {
    Config(ConfigError),
    Encoding(EncodingError),
    Generation(GenerationError),
    Oracle(OracleError),
    Parse(ParseError),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration error: {e}"),
            Self::Encoding(e) => write!(f, "encoding error: {e}"),
            Self::Generation(e) => write!(f, "generation error: {e}"),
            Self::Oracle(e) => write!(f, "oracle error: {e}"),
            Self::Parse(e) => write!(f, "parse error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Errors when setting configuration values.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A value outside the bounds of an option.
    OutOfBounds {
        name: &'static str,
        min: String,
        max: String,
        value: String,
    },

    /// A connective symbol which is not recognised.
    UnknownConnective(String),

    /// A palette with no connectives at all.
    EmptyPalette,

    /// An alphabet with no atoms, or with some atom repeated.
    InvalidAlphabet(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfBounds {
                name,
                min,
                max,
                value,
            } => write!(f, "{name} requires a value between {min} and {max}, found {value}"),
            Self::UnknownConnective(symbol) => write!(f, "unknown connective '{symbol}'"),
            Self::EmptyPalette => write!(f, "a palette requires at least one connective"),
            Self::InvalidAlphabet(why) => write!(f, "invalid alphabet: {why}"),
        }
    }
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Errors during encoding.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EncodingError {
    /// There are no more fresh variables.
    VariablesExhausted,
}

impl std::fmt::Display for EncodingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VariablesExhausted => write!(f, "no fresh variables remain"),
        }
    }
}

impl From<EncodingError> for ErrorKind {
    fn from(e: EncodingError) -> Self {
        ErrorKind::Encoding(e)
    }
}

/// Errors from the bounded generate-and-filter loop.
#[derive(Clone, Debug, PartialEq)]
pub enum GenerationError {
    /// Every attempt was rejected.
    AttemptsExhausted {
        /// The number of attempts made.
        attempts: usize,

        /// The reason the final attempt was rejected.
        last: Rejection,
    },
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AttemptsExhausted { attempts, last } => {
                write!(f, "no problem found in {attempts} attempts (last: {last})")
            }
        }
    }
}

impl From<GenerationError> for ErrorKind {
    fn from(e: GenerationError) -> Self {
        ErrorKind::Generation(e)
    }
}

/// Errors from a SAT oracle.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OracleError {
    /// The oracle failed to decide the clauses, for the given reason.
    Failure(String),
}

impl std::fmt::Display for OracleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Failure(why) => write!(f, "{why}"),
        }
    }
}

impl From<OracleError> for ErrorKind {
    fn from(e: OracleError) -> Self {
        ErrorKind::Oracle(e)
    }
}

/// Errors during parsing.
///
/// Each error carries the fragment of the input at fault, and where useful the byte offset of the fragment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An empty string, where some formula was required.
    Empty,

    /// A character which begins no token.
    UnexpectedCharacter { offset: usize, found: String },

    /// An opening parenthesis without a close, or a close without an opening.
    UnmatchedParenthesis { offset: usize, fragment: String },

    /// A pair of parentheses with nothing between them.
    EmptySubexpression { offset: usize, fragment: String },

    /// A connective without a formula to apply to.
    MissingOperand { offset: usize, fragment: String },

    /// A binary connective outside of parentheses, or two binary connectives within the same parentheses.
    Ungrouped { fragment: String },

    /// Input which remains after a complete formula.
    TrailingInput { offset: usize, fragment: String },

    /// An atom outside of the alphabet in use.
    UnknownAtom { offset: usize, atom: String },

    /// Parentheses and negations nested beyond [NESTING_MAX](crate::parse::NESTING_MAX).
    TooDeep { offset: usize, fragment: String },
}

impl ParseError {
    /// The fragment of input at fault.
    pub fn fragment(&self) -> &str {
        match self {
            Self::Empty => "",
            Self::UnexpectedCharacter { found, .. } => found,
            Self::UnmatchedParenthesis { fragment, .. }
            | Self::EmptySubexpression { fragment, .. }
            | Self::MissingOperand { fragment, .. }
            | Self::Ungrouped { fragment }
            | Self::TrailingInput { fragment, .. }
            | Self::TooDeep { fragment, .. } => fragment,
            Self::UnknownAtom { atom, .. } => atom,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty formula"),
            Self::UnexpectedCharacter { offset, found } => {
                write!(f, "unrecognised symbol '{found}' at {offset}")
            }
            Self::UnmatchedParenthesis { offset, fragment } => {
                write!(f, "unmatched parenthesis at {offset} in '{fragment}'")
            }
            Self::EmptySubexpression { offset, fragment } => {
                write!(f, "empty subexpression '{fragment}' at {offset}")
            }
            Self::MissingOperand { offset, fragment } => {
                write!(f, "missing operand for '{fragment}' at {offset}")
            }
            Self::Ungrouped { fragment } => {
                write!(f, "binary connectives must be parenthesized in '{fragment}'")
            }
            Self::TrailingInput { offset, fragment } => {
                write!(f, "unexpected '{fragment}' at {offset}")
            }
            Self::UnknownAtom { offset, atom } => {
                write!(f, "atom '{atom}' at {offset} is not in the alphabet")
            }
            Self::TooDeep { offset, fragment } => write!(
                f,
                "'{fragment}' at {offset} is nested deeper than {}",
                crate::parse::NESTING_MAX
            ),
        }
    }
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}
