/*!
Random formulas.

A formula is built top-down, with a bound on depth:

- At depth zero, or with some fixed probability at any depth, the formula is an atom of the alphabet, chosen uniformly.
- Otherwise, a kind of connective (unary or binary) is chosen uniformly from those present in the palette:
  + For a unary connective, the formula is the negation of a formula generated with one less depth.
  + For a binary connective, two formulas are generated (independently) with one less depth and joined by a binary connective chosen uniformly from the palette.

So, a generated formula never has depth greater than the bound, and contains only connectives from the palette.

No check is made on the formula generated, and any filtering is left to the [search](crate::procedures::search) procedures.

```rust
# use tfl_entail::config::Palette;
# use tfl_entail::generic::random::MinimalPCG32;
# use tfl_entail::procedures::generate::random_formula;
# use tfl_entail::structures::atom::Alphabet;
# use rand::SeedableRng;
let mut rng = MinimalPCG32::seed_from_u64(7);
let formula = random_formula(&mut rng, 2, &Alphabet::default(), &Palette::basic(), 0.25);

assert!(formula.depth() <= 2);
assert!(!formula.has_negation());
```
*/

use rand::Rng;

use crate::{
    config::{ConnectiveKind, EarlyTermination, Palette},
    structures::{atom::Alphabet, formula::Formula},
};

/// A random formula, with depth at most `depth`, over the atoms of the alphabet and the connectives of the palette.
///
/// With an empty palette, the formula is an atom.
pub fn random_formula<R: Rng + ?Sized>(
    rng: &mut R,
    depth: usize,
    alphabet: &Alphabet,
    palette: &Palette,
    early_termination: EarlyTermination,
) -> Formula {
    let kinds = palette.kinds();

    if depth == 0 || kinds.is_empty() || rng.random::<f64>() < early_termination {
        return random_atom(rng, alphabet);
    }

    match kinds[rng.random_range(0..kinds.len())] {
        ConnectiveKind::Unary => {
            let formula = random_formula(rng, depth - 1, alphabet, palette, early_termination);
            Formula::not(formula)
        }

        ConnectiveKind::Binary => {
            let left = random_formula(rng, depth - 1, alphabet, palette, early_termination);
            let right = random_formula(rng, depth - 1, alphabet, palette, early_termination);
            let connective = palette.binary[rng.random_range(0..palette.binary.len())];
            Formula::binary(connective, left, right)
        }
    }
}

/// An atom of the alphabet, chosen uniformly.
fn random_atom<R: Rng + ?Sized>(rng: &mut R, alphabet: &Alphabet) -> Formula {
    let atoms = alphabet.atoms();
    Formula::Atom(atoms[rng.random_range(0..atoms.len())].clone())
}
