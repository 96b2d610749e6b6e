/*!
Configuration of problem generation.

All configuration is contained within [Config], which is read by the [search](crate::procedures::search) procedures.
Entailment checks themselves require no configuration beyond a choice of [oracle](crate::oracle).

Numeric options are [ConfigOption]s, which pair a value with bounds, and values should be updated through [ConfigOption::set].
*/

mod config_option;
pub use config_option::ConfigOption;

mod palette;
pub use palette::{ConnectiveKind, Palette};

use crate::{structures::atom::Alphabet, types::err::ConfigError};

/// Representation for the probability of ending generation at an atom, regardless of depth.
pub type EarlyTermination = f64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The atoms which may appear in generated formulas.
    pub alphabet: Alphabet,

    /// The connectives which may appear in generated formulas.
    pub palette: Palette,

    /// The maximum depth of a generated formula.
    pub max_depth: ConfigOption<usize>,

    /// The probability of generating an atom at any depth.
    pub early_termination: ConfigOption<EarlyTermination>,

    /// The fewest premises of a generated problem.
    pub premise_count_min: ConfigOption<usize>,

    /// The most premises of a generated problem.
    pub premise_count_max: ConfigOption<usize>,

    /// The number of generate-and-filter attempts made before giving up on a problem.
    pub max_attempts: ConfigOption<usize>,

    /// The number of threads used when generating a batch of problems.
    pub workers: ConfigOption<usize>,
}

impl Config {
    /// Sets the bounds on the number of premises of a generated problem, provided `min` ≤ `max`.
    pub fn set_premise_counts(&mut self, min: usize, max: usize) -> Result<(), ConfigError> {
        if min > max {
            return Err(ConfigError::OutOfBounds {
                name: self.premise_count_min.name,
                min: self.premise_count_min.min.to_string(),
                max: max.to_string(),
                value: min.to_string(),
            });
        }
        // Both bounds are checked before either is updated.
        let mut lower = self.premise_count_min.clone();
        let mut upper = self.premise_count_max.clone();
        lower.set(min)?;
        upper.set(max)?;
        self.premise_count_min = lower;
        self.premise_count_max = upper;
        Ok(())
    }
}

impl Default for Config {
    /// The default configuration: depth 2, two or three premises over P, Q, R, and S, with all connectives.
    fn default() -> Self {
        Config {
            alphabet: Alphabet::default(),

            palette: Palette::default(),

            max_depth: ConfigOption {
                name: "max_depth",
                min: 0,
                max: 8,
                value: 2,
            },

            early_termination: ConfigOption {
                name: "early_termination",
                min: 0.0,
                max: 1.0,
                value: 0.25,
            },

            premise_count_min: ConfigOption {
                name: "premise_count_min",
                min: 1,
                max: 8,
                value: 2,
            },

            premise_count_max: ConfigOption {
                name: "premise_count_max",
                min: 1,
                max: 8,
                value: 3,
            },

            max_attempts: ConfigOption {
                name: "max_attempts",
                min: 1,
                max: 1_000_000,
                value: 100,
            },

            workers: ConfigOption {
                name: "workers",
                min: 1,
                max: 256,
                value: 1,
            },
        }
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn premise_bounds() {
        let mut config = Config::default();
        assert!(config.set_premise_counts(1, 4).is_ok());
        assert_eq!(config.premise_count_min.value, 1);
        assert_eq!(config.premise_count_max.value, 4);

        assert!(config.set_premise_counts(3, 2).is_err());
        assert!(config.set_premise_counts(0, 2).is_err());
        assert_eq!(config.premise_count_min.value, 1);
    }

    #[test]
    fn probability_bounds() {
        let mut config = Config::default();
        assert!(config.early_termination.set(1.5).is_err());
        assert!(config.early_termination.set(0.0).is_ok());
        assert_eq!(config.early_termination.min_max(), (0.0, 1.0));
    }
}
