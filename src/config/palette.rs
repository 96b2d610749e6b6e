/*!
The connectives available to the [generator](crate::procedures::generate).

A palette is some subset of the unary connective ¬ and the binary connectives ∧, ∨, →, and ↔.

Three bundles are named:
- [basic](Palette::basic): ∧ and →.
- [positive](Palette::positive): ∧, ∨, →, and ↔.
- [full](Palette::full): ∧, ∨, →, ↔, and ¬.

A palette may also be read from a comma separated list of connective symbols, in any notation.

```rust
# use tfl_entail::config::Palette;
# use tfl_entail::structures::formula::BinaryConnective;
let palette: Palette = "&, ->".parse().unwrap();
assert_eq!(palette, Palette::basic());

let palette: Palette = "¬,↔".parse().unwrap();
assert!(palette.negation);
assert_eq!(palette.binary, vec![BinaryConnective::Iff]);
```
*/

use crate::{structures::formula::BinaryConnective, types::err::ConfigError};

/// A collection of connectives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Whether negation is available.
    pub negation: bool,

    /// The available binary connectives, without duplicates.
    pub binary: Vec<BinaryConnective>,
}

/// The kinds of connective, from which the generator first chooses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectiveKind {
    Unary,
    Binary,
}

impl Palette {
    /// A palette, with any duplicate binary connectives removed.
    pub fn new(negation: bool, binary: &[BinaryConnective]) -> Self {
        let mut unique = Vec::with_capacity(binary.len());
        for connective in binary {
            if !unique.contains(connective) {
                unique.push(*connective);
            }
        }
        Palette {
            negation,
            binary: unique,
        }
    }

    /// Conjunction and implication.
    pub fn basic() -> Self {
        Self::new(false, &[BinaryConnective::And, BinaryConnective::Implies])
    }

    /// All binary connectives, without negation.
    pub fn positive() -> Self {
        Self::new(false, &BinaryConnective::ALL)
    }

    /// All connectives.
    pub fn full() -> Self {
        Self::new(true, &BinaryConnective::ALL)
    }

    pub fn is_empty(&self) -> bool {
        !self.negation && self.binary.is_empty()
    }

    /// The kinds of connective with at least one member in the palette, unary first.
    pub fn kinds(&self) -> Vec<ConnectiveKind> {
        let mut kinds = Vec::with_capacity(2);
        if self.negation {
            kinds.push(ConnectiveKind::Unary);
        }
        if !self.binary.is_empty() {
            kinds.push(ConnectiveKind::Binary);
        }
        kinds
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::full()
    }
}

impl std::str::FromStr for Palette {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "basic" => return Ok(Self::basic()),
            "positive" => return Ok(Self::positive()),
            "full" => return Ok(Self::full()),
            _ => {}
        }

        let mut negation = false;
        let mut binary = Vec::new();
        for symbol in s.split(',').map(str::trim).filter(|symbol| !symbol.is_empty()) {
            match symbol {
                "¬" | "~" => negation = true,
                _ => match BinaryConnective::from_symbol(symbol) {
                    Some(connective) => binary.push(connective),
                    None => return Err(ConfigError::UnknownConnective(symbol.to_string())),
                },
            }
        }

        let palette = Self::new(negation, &binary);
        match palette.is_empty() {
            true => Err(ConfigError::EmptyPalette),
            false => Ok(palette),
        }
    }
}

impl std::fmt::Display for Palette {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut symbols = self
            .binary
            .iter()
            .map(|connective| connective.symbol(crate::structures::formula::Notation::Unicode))
            .collect::<Vec<_>>();
        if self.negation {
            symbols.push("¬");
        }
        write!(f, "{}", symbols.join(","))
    }
}

#[cfg(test)]
mod palette_tests {
    use super::*;

    #[test]
    fn named_bundles() {
        assert_eq!("full".parse::<Palette>(), Ok(Palette::full()));
        assert_eq!("positive".parse::<Palette>(), Ok(Palette::positive()));
        assert_eq!(Palette::basic().kinds(), vec![ConnectiveKind::Binary]);
        assert_eq!(
            Palette::full().kinds(),
            vec![ConnectiveKind::Unary, ConnectiveKind::Binary]
        );
    }

    #[test]
    fn duplicates_and_aliases() {
        let palette: Palette = "&, ∧, |".parse().unwrap();
        assert_eq!(
            palette.binary,
            vec![BinaryConnective::And, BinaryConnective::Or]
        );
        assert!(!palette.negation);
    }

    #[test]
    fn unknown_symbol() {
        assert_eq!(
            "&, %".parse::<Palette>(),
            Err(ConfigError::UnknownConnective("%".to_string()))
        );
        assert_eq!(" , ".parse::<Palette>(), Err(ConfigError::EmptyPalette));
    }

    #[test]
    fn negation_only() {
        let palette: Palette = "~".parse().unwrap();
        assert_eq!(palette.kinds(), vec![ConnectiveKind::Unary]);
        assert_eq!(palette.to_string(), "¬");
    }
}
