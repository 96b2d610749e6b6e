/*!
Atoms, and alphabets of atoms.

An atom is an opaque identifier, to which a (boolean) value may be assigned.
In text, an atom is a letter followed by any number of letters, digits, or underscores.
Examples: `P`, `Q2`, `rain_today`.

An [Alphabet] is an ordered collection of distinct atoms.
Alphabets are used by the [generator](crate::procedures::generate) to choose atoms, by the [parser](crate::parse) to reject unknown atoms (if requested), and by an [encoding context](crate::encode::EncodingContext) to fix the variable of each atom before encoding.

```rust
# use tfl_entail::structures::atom::{Alphabet, Atom};
let alphabet = Alphabet::default();
assert_eq!(alphabet.len(), 4);
assert!(alphabet.contains(&Atom::from("R")));

let alphabet: Alphabet = "A, B, rain".parse().unwrap();
assert_eq!(alphabet.position(&Atom::from("rain")), Some(2));
```

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
  Here, atoms are external, and [variables](crate::structures::literal::Variable) are internal to an encoding.
*/

use crate::types::err::ConfigError;

/// An atom, identified by name.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Atom(String);

impl Atom {
    pub fn new(name: impl Into<String>) -> Self {
        Atom(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Whether some string is a well-formed atom.
    pub fn is_identifier(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) if first.is_alphabetic() => {
                chars.all(|c| c.is_alphanumeric() || c == '_')
            }
            _ => false,
        }
    }
}

impl From<&str> for Atom {
    fn from(name: &str) -> Self {
        Atom(name.to_string())
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered collection of distinct atoms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    atoms: Vec<Atom>,
}

impl Alphabet {
    /// An alphabet from some non-empty collection of distinct, well-formed, atoms.
    pub fn new(atoms: Vec<Atom>) -> Result<Self, ConfigError> {
        if atoms.is_empty() {
            return Err(ConfigError::InvalidAlphabet("no atoms".to_string()));
        }
        for (index, atom) in atoms.iter().enumerate() {
            if !Atom::is_identifier(atom.name()) {
                return Err(ConfigError::InvalidAlphabet(format!(
                    "'{atom}' is not an identifier"
                )));
            }
            if atoms[..index].contains(atom) {
                return Err(ConfigError::InvalidAlphabet(format!("'{atom}' is repeated")));
            }
        }
        Ok(Alphabet { atoms })
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Always false, as an alphabet has at least one atom.
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn contains(&self, atom: &Atom) -> bool {
        self.atoms.contains(atom)
    }

    pub fn position(&self, atom: &Atom) -> Option<usize> {
        self.atoms.iter().position(|a| a == atom)
    }
}

impl Default for Alphabet {
    /// The atoms P, Q, R, and S.
    fn default() -> Self {
        Alphabet {
            atoms: ["P", "Q", "R", "S"].into_iter().map(Atom::from).collect(),
        }
    }
}

impl std::str::FromStr for Alphabet {
    type Err = ConfigError;

    /// Reads an alphabet from names separated by commas and/or whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let atoms = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|name| !name.is_empty())
            .map(Atom::from)
            .collect();
        Alphabet::new(atoms)
    }
}
