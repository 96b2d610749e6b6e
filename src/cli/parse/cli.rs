use clap::{value_parser, Arg, ArgAction, Command};

use tfl_entail::config::Config;

fn atoms_arg() -> Arg {
    Arg::new("atoms")
        .long("atoms")
        .value_parser(value_parser!(String))
        .required(false)
        .num_args(1)
        .help("The atoms which may appear in formulas, separated by commas.
Default: P,Q,R,S")
}

pub fn cli() -> Command {
    let config = Config::default();

    Command::new("tfl_entail")
        .about("Decides entailment between truth-functional formulas, and generates entailment problems")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)

        .subcommand(Command::new("check")
            .about("Determines whether some premises entail a conclusion")

            .arg(Arg::new("premise")
                .short('p')
                .long("premise")
                .value_parser(value_parser!(String))
                .action(ArgAction::Append)
                .required(false)
                .num_args(1)
                .help("A premise. May be given any number of times."))

            .arg(Arg::new("conclusion")
                .short('c')
                .long("conclusion")
                .value_parser(value_parser!(String))
                .required(true)
                .num_args(1)
                .help("The conclusion."))

            .arg(atoms_arg()))

        .subcommand(Command::new("generate")
            .about("Generates entailment problems, written as a JSON array")

            .arg(Arg::new("count")
                .short('n')
                .long("count")
                .value_parser(value_parser!(usize))
                .required(false)
                .num_args(1)
                .help("The number of problems to generate.
Default: 1"))

            .arg(Arg::new("depth")
                .short('d')
                .long("depth")
                .value_parser(value_parser!(usize))
                .required(false)
                .num_args(1)
                .help(format!("The maximum depth of a formula.
Default: {}", config.max_depth.value)))

            .arg(Arg::new("palette")
                .long("palette")
                .value_parser(value_parser!(String))
                .required(false)
                .num_args(1)
                .help(format!("The connectives which may appear in a formula.
Default: {}

Either one of 'basic', 'positive', or 'full', or a list of connective symbols separated by commas, such as '&,->'.", config.palette)))

            .arg(Arg::new("premises")
                .long("premises")
                .value_parser(value_parser!(String))
                .required(false)
                .num_args(1)
                .help(format!("The number of premises of a problem, as either N or MIN..=MAX.
Default: {}..={}", config.premise_count_min.value, config.premise_count_max.value)))

            .arg(Arg::new("early_termination")
                .long("early-termination")
                .value_parser(value_parser!(f64))
                .required(false)
                .num_args(1)
                .help(format!("The probability of ending a formula with an atom before the maximum depth.
Default: {}", config.early_termination.value)))

            .arg(Arg::new("attempts")
                .long("attempts")
                .value_parser(value_parser!(usize))
                .required(false)
                .num_args(1)
                .help(format!("The number of attempts made to find each problem.
Default: {}", config.max_attempts.value)))

            .arg(Arg::new("workers")
                .short('w')
                .long("workers")
                .value_parser(value_parser!(usize))
                .required(false)
                .num_args(1)
                .help(format!("The number of threads used to find problems.
Default: {}

The problems generated do not depend on the number of workers.", config.workers.value)))

            .arg(Arg::new("seed")
                .short('s')
                .long("seed")
                .value_parser(value_parser!(u64))
                .required(false)
                .num_args(1)
                .help("The seed for generation.
Default: 0"))

            .arg(atoms_arg()))

        .subcommand(Command::new("cnf")
            .about("Writes the Tseitin encoding of a formula, asserted, in DIMACS form")

            .arg(Arg::new("formula")
                .value_parser(value_parser!(String))
                .required(true)
                .num_args(1)
                .help("The formula to encode."))

            .arg(atoms_arg()))
}
