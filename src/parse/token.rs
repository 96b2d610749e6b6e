//! Tokenization of formula text.
//!
//! Aliases are normalised here, so `&` and `∧` (and so on) are the same token.
//! Multi-character connectives (`->`, `<->`) are read whole, so a `-` or `<` never begins any other token.
//! Whitespace separates tokens and is otherwise ignored.

use crate::{structures::formula::BinaryConnective, types::err::ParseError};

/// The kind of a token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Open,
    Close,
    Not,
    Binary(BinaryConnective),
    Atom(String),
}

/// A token, with the position of the token in the source text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,

    /// The byte offset of the token.
    pub offset: usize,

    /// The length of the token, in bytes.
    pub len: usize,
}

impl Token {
    /// The byte offset immediately after the token.
    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// The tokens of some text, in order.
pub fn tokenize(text: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::default();
    let mut chars = text.char_indices().peekable();

    while let Some((offset, character)) = chars.next() {
        let kind = match character {
            c if c.is_whitespace() => continue,

            '(' => TokenKind::Open,
            ')' => TokenKind::Close,
            '¬' | '~' => TokenKind::Not,
            '∧' | '&' => TokenKind::Binary(BinaryConnective::And),
            '∨' | '|' => TokenKind::Binary(BinaryConnective::Or),
            '→' => TokenKind::Binary(BinaryConnective::Implies),
            '↔' => TokenKind::Binary(BinaryConnective::Iff),

            '-' => match chars.next_if(|(_, c)| *c == '>') {
                Some(_) => TokenKind::Binary(BinaryConnective::Implies),
                None => return Err(unexpected(text, offset)),
            },

            '<' => {
                let arrow = chars.next_if(|(_, c)| *c == '-').is_some()
                    && chars.next_if(|(_, c)| *c == '>').is_some();
                match arrow {
                    true => TokenKind::Binary(BinaryConnective::Iff),
                    false => return Err(unexpected(text, offset)),
                }
            }

            c if c.is_alphabetic() => {
                let mut end = offset + c.len_utf8();
                while let Some((next_offset, next)) =
                    chars.next_if(|(_, c)| c.is_alphanumeric() || *c == '_')
                {
                    end = next_offset + next.len_utf8();
                }
                TokenKind::Atom(text[offset..end].to_string())
            }

            _ => return Err(unexpected(text, offset)),
        };

        let len = match chars.peek() {
            Some((next_offset, _)) => next_offset - offset,
            None => text.len() - offset,
        };
        // Trailing whitespace is not part of the token.
        let len = text[offset..offset + len].trim_end().len();

        tokens.push(Token { kind, offset, len });
    }

    Ok(tokens)
}

/// An error for an unexpected character, with the fragment running to the next whitespace.
fn unexpected(text: &str, offset: usize) -> ParseError {
    let found = text[offset..]
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string();
    ParseError::UnexpectedCharacter { offset, found }
}

#[cfg(test)]
mod token_tests {
    use super::*;

    fn kinds(text: &str) -> Vec<TokenKind> {
        tokenize(text)
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn aliases_are_one_token() {
        assert_eq!(kinds("P -> Q"), kinds("P → Q"));
        assert_eq!(kinds("P<->Q"), kinds("P ↔ Q"));
        assert_eq!(kinds("~P & Q | R"), kinds("¬P ∧ Q ∨ R"));
    }

    #[test]
    fn greedy_arrows() {
        assert_eq!(
            kinds("(P<->Q)"),
            vec![
                TokenKind::Open,
                TokenKind::Atom("P".to_string()),
                TokenKind::Binary(BinaryConnective::Iff),
                TokenKind::Atom("Q".to_string()),
                TokenKind::Close,
            ]
        );
    }

    #[test]
    fn positions() {
        let tokens = tokenize("(rain → P2)").unwrap();
        assert_eq!(tokens[1].kind, TokenKind::Atom("rain".to_string()));
        assert_eq!((tokens[1].offset, tokens[1].len), (1, 4));
        assert_eq!((tokens[2].offset, tokens[2].len), (6, "→".len()));
        assert_eq!(tokens[4].end(), "(rain → P2)".len());
    }

    #[test]
    fn unrecognised() {
        assert_eq!(
            tokenize("(P - Q)"),
            Err(ParseError::UnexpectedCharacter {
                offset: 3,
                found: "-".to_string()
            })
        );
        assert_eq!(
            tokenize("(P <= Q)"),
            Err(ParseError::UnexpectedCharacter {
                offset: 3,
                found: "<=".to_string()
            })
        );
        assert!(matches!(
            tokenize("P % Q"),
            Err(ParseError::UnexpectedCharacter { offset: 2, .. })
        ));
    }
}
