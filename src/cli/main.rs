#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

use clap::ArgMatches;

use tfl_entail::{
    encode::EncodingContext,
    oracle::VarisatOracle,
    parse::parse_formula_in,
    procedures::{
        entailment::{Engine, Verdict},
        search::generate_batch,
    },
    structures::{formula::Formula, problem::ProblemRecord},
    types::err::{self, ErrorKind},
};

mod misc;
mod parse;

use crate::misc::exit_code;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli::cli().get_matches();

    let result = match matches.subcommand() {
        Some(("check", args)) => check(args),
        Some(("generate", args)) => generate(args),
        Some(("cnf", args)) => cnf(args),
        _ => Ok(()),
    };

    if let Err(e) = result {
        println!("c Error: {e}");
        std::process::exit(exit_code(&e));
    }
}

fn check(args: &ArgMatches) -> Result<(), ErrorKind> {
    let engine = Engine::new(VarisatOracle, parse::config::alphabet_from_args(args)?);

    let premises = match args.try_get_many::<String>("premise") {
        Ok(Some(texts)) => texts
            .map(|text| parse_formula_in(text, engine.alphabet()))
            .collect::<Result<Vec<Formula>, _>>()?,
        _ => Vec::default(),
    };

    let conclusion = match args.try_get_one::<String>("conclusion") {
        Ok(Some(text)) => parse_formula_in(text, engine.alphabet())?,
        _ => return Err(err::ParseError::Empty.into()),
    };

    if engine.is_contradictory(&premises)? {
        println!("c The premises are contradictory");
    }

    match engine.entailment(&premises, &conclusion)? {
        Verdict::Entailed => {
            if let Some(index) = engine.redundant_premise(&premises, &conclusion)? {
                println!("c Premise {} is redundant: {}", index + 1, premises[index]);
            }
            println!("s ENTAILED");
        }

        Verdict::NotEntailed { countermodel } => {
            println!("s NOT ENTAILED");
            println!("v {countermodel}");
        }
    }

    Ok(())
}

fn generate(args: &ArgMatches) -> Result<(), ErrorKind> {
    let config = parse::config::config_from_args(args)?;
    let engine = Engine::new(VarisatOracle, config.alphabet.clone());

    let count = match args.try_get_one::<usize>("count") {
        Ok(Some(count)) => *count,
        _ => 1,
    };
    let seed = match args.try_get_one::<u64>("seed") {
        Ok(Some(seed)) => *seed,
        _ => 0,
    };

    let problems = generate_batch(&engine, &config, count, seed)?;
    let records = problems
        .iter()
        .map(|problem| problem.to_record())
        .collect::<Vec<ProblemRecord>>();

    match serde_json::to_string_pretty(&records) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            println!("c Error writing problems: {e}");
            std::process::exit(2);
        }
    }

    Ok(())
}

fn cnf(args: &ArgMatches) -> Result<(), ErrorKind> {
    let alphabet = parse::config::alphabet_from_args(args)?;

    let formula = match args.try_get_one::<String>("formula") {
        Ok(Some(text)) => parse_formula_in(text, &alphabet)?,
        _ => return Err(err::ParseError::Empty.into()),
    };

    let mut context = EncodingContext::new(&alphabet);
    context.assert(&formula)?;

    println!("c {formula}");
    for atom in alphabet.atoms() {
        if let Some(variable) = context.variable_of(atom) {
            println!("c {atom} {variable}");
        }
    }
    print!("{}", context.cnf().as_dimacs());

    Ok(())
}
