//! Recursive descent over tokens.
//!
//! Each group of tokens is examined for binary connectives at nesting depth zero:
//! - None, and the group is an atom, a negation, or a parenthesized formula.
//! - One, and the group is split at the connective, with each side parsed as a group with no binary connectives.
//! - More than one, and the group is ambiguous.
//!
//! At the top level the first case is required, as a binary connective is only permitted within parentheses.

use crate::{
    misc::log::targets::{self},
    parse::token::{tokenize, Token, TokenKind},
    structures::{
        atom::{Alphabet, Atom},
        formula::Formula,
    },
    types::err::ParseError,
};

/// The deepest nesting of parentheses and negations accepted by the parser.
pub const NESTING_MAX: usize = 256;

/// Parses a formula with atoms from any alphabet.
///
/// ```rust
/// # use tfl_entail::parse::parse_formula;
/// # use tfl_entail::structures::formula::Formula;
/// let formula = parse_formula("((P & Q) -> R)").unwrap();
/// assert_eq!(formula, parse_formula("((P ∧ Q) → R)").unwrap());
/// assert_eq!(formula.to_string(), "((P ∧ Q) → R)");
///
/// assert!(parse_formula("P & Q").is_err());
/// ```
pub fn parse_formula(text: &str) -> Result<Formula, ParseError> {
    Parser::new(text, None)?.parse()
}

/// Parses a formula, requiring each atom to belong to the given alphabet.
pub fn parse_formula_in(text: &str, alphabet: &Alphabet) -> Result<Formula, ParseError> {
    Parser::new(text, Some(alphabet))?.parse()
}

struct Parser<'p> {
    text: &'p str,
    tokens: Vec<Token>,
    alphabet: Option<&'p Alphabet>,
}

impl<'p> Parser<'p> {
    fn new(text: &'p str, alphabet: Option<&'p Alphabet>) -> Result<Self, ParseError> {
        let tokens = tokenize(text)?;
        Ok(Parser {
            text,
            tokens,
            alphabet,
        })
    }

    fn parse(&self) -> Result<Formula, ParseError> {
        if self.tokens.is_empty() {
            return Err(ParseError::Empty);
        }
        self.check_balance()?;

        let tokens = self.tokens.as_slice();
        if !self.main_connectives(tokens).is_empty() {
            return Err(ParseError::Ungrouped {
                fragment: self.fragment(tokens).to_string(),
            });
        }

        let formula = self.unit(tokens)?;
        log::trace!(target: targets::PARSE, "Parsed '{}' as {formula}", self.text);
        Ok(formula)
    }

    /// Checks each parenthesis has a match, and that nesting stays within [NESTING_MAX].
    ///
    /// A negation encloses what follows it in its group, up to the next binary connective.
    fn check_balance(&self) -> Result<(), ParseError> {
        let mut open = Vec::default();
        // Negations in scope, for each open group and the top level.
        let mut negations = vec![0_usize];
        let mut depth = 0_usize;

        for token in &self.tokens {
            match token.kind {
                TokenKind::Open => {
                    open.push(token.offset);
                    negations.push(0);
                    depth += 1;
                }

                TokenKind::Close => {
                    if open.pop().is_none() {
                        return Err(ParseError::UnmatchedParenthesis {
                            offset: token.offset,
                            fragment: self.text[..token.end()].trim_start().to_string(),
                        });
                    }
                    depth -= negations.pop().unwrap_or(0) + 1;
                }

                TokenKind::Not => {
                    if let Some(count) = negations.last_mut() {
                        *count += 1;
                    }
                    depth += 1;
                }

                TokenKind::Binary(_) => {
                    if let Some(count) = negations.last_mut() {
                        depth -= *count;
                        *count = 0;
                    }
                }

                TokenKind::Atom(_) => {}
            }

            if depth > NESTING_MAX {
                return Err(ParseError::TooDeep {
                    offset: token.offset,
                    fragment: self.fragment(std::slice::from_ref(token)).to_string(),
                });
            }
        }

        match open.pop() {
            Some(offset) => Err(ParseError::UnmatchedParenthesis {
                offset,
                fragment: self.text[offset..].trim_end().to_string(),
            }),
            None => Ok(()),
        }
    }

    /// The source text of some (non-empty) slice of tokens.
    fn fragment(&self, tokens: &[Token]) -> &'p str {
        let text = self.text;
        match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => &text[first.offset..last.end()],
            _ => "",
        }
    }

    /// Indicies of binary connectives at nesting depth zero.
    fn main_connectives(&self, tokens: &[Token]) -> Vec<usize> {
        let mut depth = 0_usize;
        let mut indicies = Vec::default();
        for (index, token) in tokens.iter().enumerate() {
            match token.kind {
                TokenKind::Open => depth += 1,
                TokenKind::Close => depth = depth.saturating_sub(1),
                TokenKind::Binary(_) if depth == 0 => indicies.push(index),
                _ => {}
            }
        }
        indicies
    }

    /// Parses the tokens between a pair of parentheses.
    fn group(&self, tokens: &[Token]) -> Result<Formula, ParseError> {
        match self.main_connectives(tokens).as_slice() {
            [] => self.unit(tokens),

            [index] => {
                let connective_token = &tokens[*index];
                let TokenKind::Binary(connective) = connective_token.kind else {
                    unreachable!("main connectives are binary");
                };
                let (left, right) = (&tokens[..*index], &tokens[index + 1..]);
                if left.is_empty() || right.is_empty() {
                    return Err(ParseError::MissingOperand {
                        offset: connective_token.offset,
                        fragment: self.fragment(std::slice::from_ref(connective_token)).to_string(),
                    });
                }
                Ok(Formula::binary(connective, self.unit(left)?, self.unit(right)?))
            }

            _ => {
                let first = tokens.first().map_or(0, |token| token.offset);
                let last = tokens.last().map_or(0, |token| token.end());
                // Include the enclosing parentheses, when present.
                let start = self.text[..first].rfind('(').unwrap_or(first);
                let end = self.text[last..].find(')').map_or(last, |i| last + i + 1);
                Err(ParseError::Ungrouped {
                    fragment: self.text[start..end].to_string(),
                })
            }
        }
    }

    /// Parses an atom, a negation, or a parenthesized group.
    fn unit(&self, tokens: &[Token]) -> Result<Formula, ParseError> {
        let Some(first) = tokens.first() else {
            return Err(ParseError::Empty);
        };

        match &first.kind {
            TokenKind::Atom(name) => {
                if let Some(extra) = tokens.get(1) {
                    return Err(self.trailing(extra, tokens));
                }
                let atom = Atom::new(name.as_str());
                if let Some(alphabet) = self.alphabet {
                    if !alphabet.contains(&atom) {
                        return Err(ParseError::UnknownAtom {
                            offset: first.offset,
                            atom: name.clone(),
                        });
                    }
                }
                Ok(Formula::Atom(atom))
            }

            TokenKind::Not => match tokens.len() {
                1 => Err(ParseError::MissingOperand {
                    offset: first.offset,
                    fragment: self.fragment(&tokens[..1]).to_string(),
                }),
                _ => Ok(Formula::not(self.unit(&tokens[1..])?)),
            },

            TokenKind::Open => {
                let close = self.matching_close(tokens)?;
                if let Some(extra) = tokens.get(close + 1) {
                    return Err(self.trailing(extra, tokens));
                }
                let inner = &tokens[1..close];
                if inner.is_empty() {
                    return Err(ParseError::EmptySubexpression {
                        offset: first.offset,
                        fragment: self.fragment(&tokens[..=close]).to_string(),
                    });
                }
                self.group(inner)
            }

            TokenKind::Binary(_) => Err(ParseError::MissingOperand {
                offset: first.offset,
                fragment: self.fragment(&tokens[..1]).to_string(),
            }),

            TokenKind::Close => Err(ParseError::UnmatchedParenthesis {
                offset: first.offset,
                fragment: self.fragment(tokens).to_string(),
            }),
        }
    }

    /// The index of the parenthesis which closes the parenthesis at the start of the tokens.
    fn matching_close(&self, tokens: &[Token]) -> Result<usize, ParseError> {
        let mut depth = 0_usize;
        for (index, token) in tokens.iter().enumerate() {
            match token.kind {
                TokenKind::Open => depth += 1,
                TokenKind::Close => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(index);
                    }
                }
                _ => {}
            }
        }
        Err(ParseError::UnmatchedParenthesis {
            offset: tokens.first().map_or(0, |token| token.offset),
            fragment: self.fragment(tokens).to_string(),
        })
    }

    /// An error for tokens after a complete formula.
    fn trailing(&self, extra: &Token, tokens: &[Token]) -> ParseError {
        let rest = tokens
            .iter()
            .position(|token| token.offset == extra.offset)
            .map_or(&tokens[..0], |index| &tokens[index..]);
        ParseError::TrailingInput {
            offset: extra.offset,
            fragment: self.fragment(rest).to_string(),
        }
    }
}

#[cfg(test)]
mod parser_tests {
    use super::*;

    fn p() -> Formula {
        Formula::atom("P")
    }

    fn q() -> Formula {
        Formula::atom("Q")
    }

    #[test]
    fn atoms_and_groups() {
        assert_eq!(parse_formula("P"), Ok(p()));
        assert_eq!(parse_formula("  P  "), Ok(p()));
        assert_eq!(parse_formula("(P)"), Ok(p()));
        assert_eq!(parse_formula("((P ∧ Q))"), Ok(Formula::and(p(), q())));
    }

    #[test]
    fn negation() {
        assert_eq!(parse_formula("(¬P)"), Ok(Formula::not(p())));
        assert_eq!(parse_formula("~P"), Ok(Formula::not(p())));
        assert_eq!(
            parse_formula("(~P -> Q)"),
            Ok(Formula::implies(Formula::not(p()), q()))
        );
        assert_eq!(
            parse_formula("¬(P ∨ Q)"),
            Ok(Formula::not(Formula::or(p(), q())))
        );
        assert_eq!(
            parse_formula("(¬¬P)"),
            Ok(Formula::not(Formula::not(p())))
        );
    }

    #[test]
    fn nesting() {
        let formula = parse_formula("((P <-> (Q | R)) -> (~S & P))").unwrap();
        let expected = Formula::implies(
            Formula::iff(p(), Formula::or(q(), Formula::atom("R"))),
            Formula::and(Formula::not(Formula::atom("S")), p()),
        );
        assert_eq!(formula, expected);
    }

    #[test]
    fn without_whitespace() {
        assert_eq!(parse_formula("(P->Q)"), parse_formula("(P → Q)"));
        assert_eq!(parse_formula("(P<->~Q)"), parse_formula("(P ↔ (¬Q))"));
    }

    #[test]
    fn ungrouped() {
        assert_eq!(
            parse_formula("P ∧ Q"),
            Err(ParseError::Ungrouped {
                fragment: "P ∧ Q".to_string()
            })
        );
        assert_eq!(
            parse_formula("((P ∧ Q ∨ R) → S)"),
            Err(ParseError::Ungrouped {
                fragment: "(P ∧ Q ∨ R)".to_string()
            })
        );
        assert!(matches!(
            parse_formula("¬P → Q"),
            Err(ParseError::Ungrouped { .. })
        ));
    }

    #[test]
    fn parentheses() {
        assert_eq!(
            parse_formula("((P ∧ Q)"),
            Err(ParseError::UnmatchedParenthesis {
                offset: 0,
                fragment: "((P ∧ Q)".to_string()
            })
        );
        assert_eq!(
            parse_formula("(P ∧ Q))"),
            Err(ParseError::UnmatchedParenthesis {
                offset: 9,
                fragment: "(P ∧ Q))".to_string()
            })
        );
        assert_eq!(
            parse_formula("(P ∧ ())"),
            Err(ParseError::EmptySubexpression {
                offset: 7,
                fragment: "()".to_string()
            })
        );
    }

    #[test]
    fn missing_operands() {
        assert_eq!(
            parse_formula("(P ∧ )"),
            Err(ParseError::MissingOperand {
                offset: 3,
                fragment: "∧".to_string()
            })
        );
        assert_eq!(
            parse_formula("(-> Q)"),
            Err(ParseError::MissingOperand {
                offset: 1,
                fragment: "->".to_string()
            })
        );
        assert!(matches!(
            parse_formula("(P → ¬)"),
            Err(ParseError::MissingOperand { .. })
        ));
        assert_eq!(parse_formula("   "), Err(ParseError::Empty));
    }

    #[test]
    fn trailing_input() {
        assert_eq!(
            parse_formula("(P Q)"),
            Err(ParseError::TrailingInput {
                offset: 3,
                fragment: "Q".to_string()
            })
        );
        assert_eq!(
            parse_formula("(P → Q) R"),
            Err(ParseError::TrailingInput {
                offset: 10,
                fragment: "R".to_string()
            })
        );
    }

    #[test]
    fn nesting_limit() {
        let nested = |n: usize| format!("{}P{}", "(".repeat(n), ")".repeat(n));
        assert_eq!(parse_formula(&nested(NESTING_MAX)), Ok(p()));
        assert_eq!(
            parse_formula(&nested(NESTING_MAX + 1)),
            Err(ParseError::TooDeep {
                offset: NESTING_MAX,
                fragment: "(".to_string()
            })
        );
        assert!(matches!(
            parse_formula(&nested(5_000)),
            Err(ParseError::TooDeep { .. })
        ));

        let negated = format!("{}P", "~".repeat(200_000));
        assert_eq!(
            parse_formula(&negated),
            Err(ParseError::TooDeep {
                offset: NESTING_MAX,
                fragment: "~".to_string()
            })
        );
    }

    #[test]
    fn negations_close_at_connectives() {
        // Each side of the connective is negated to just within the limit.
        let half = "¬".repeat(NESTING_MAX - 1);
        let text = format!("({half}P ∧ {half}Q)");
        let formula = parse_formula(&text).unwrap();
        assert_eq!(formula.depth(), NESTING_MAX);
    }

    #[test]
    fn alphabet() {
        let alphabet = Alphabet::default();
        assert!(parse_formula_in("(P → S)", &alphabet).is_ok());
        assert_eq!(
            parse_formula_in("(P → T)", &alphabet),
            Err(ParseError::UnknownAtom {
                offset: 7,
                atom: "T".to_string()
            })
        );
    }
}
