use clap::{Arg, Command, arg};

pub const REVCOMP_CMD: &str = "revcomp";

pub fn create_revcomp_cli() -> Command {
    Command::new(REVCOMP_CMD)
        .author("Databio")
        .about("Reverse complement sequences for searching the opposite strand.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("sequence")
                .required(true)
                .num_args(1..)
                .help("One or more sequences"),
        )
        .arg(arg!(--strict "Reject symbols other than A, C, G, T and N"))
}
