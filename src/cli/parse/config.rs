use clap::ArgMatches;

use tfl_entail::{
    config::{Config, Palette},
    structures::atom::Alphabet,
    types::err::{self, ErrorKind},
};

use crate::misc::premise_range;

pub fn alphabet_from_args(args: &ArgMatches) -> Result<Alphabet, ErrorKind> {
    match args.try_get_one::<String>("atoms") {
        Ok(Some(atoms)) => Ok(atoms.parse::<Alphabet>()?),
        _ => Ok(Alphabet::default()),
    }
}

pub fn config_from_args(args: &ArgMatches) -> Result<Config, ErrorKind> {
    let mut the_config = Config {
        alphabet: alphabet_from_args(args)?,
        ..Config::default()
    };

    if let Ok(Some(depth)) = args.try_get_one::<usize>("depth") {
        the_config.max_depth.set(*depth)?;
    };

    if let Ok(Some(palette)) = args.try_get_one::<String>("palette") {
        the_config.palette = palette.parse::<Palette>()?;
    };

    if let Ok(Some(premises)) = args.try_get_one::<String>("premises") {
        match premise_range(premises) {
            Some((min, max)) => the_config.set_premise_counts(min, max)?,
            None => {
                return Err(err::ConfigError::OutOfBounds {
                    name: "premises",
                    min: the_config.premise_count_min.min.to_string(),
                    max: the_config.premise_count_max.max.to_string(),
                    value: premises.to_string(),
                }
                .into())
            }
        }
    };

    if let Ok(Some(probability)) = args.try_get_one::<f64>("early_termination") {
        the_config.early_termination.set(*probability)?;
    };

    if let Ok(Some(attempts)) = args.try_get_one::<usize>("attempts") {
        the_config.max_attempts.set(*attempts)?;
    };

    if let Ok(Some(workers)) = args.try_get_one::<usize>("workers") {
        the_config.workers.set(*workers)?;
    };

    Ok(the_config)
}
