use clap::{Arg, ArgAction, Command, arg, value_parser};

pub const NEIGHBORS_CMD: &str = "neighbors";

pub fn create_neighbors_cli() -> Command {
    Command::new(NEIGHBORS_CMD)
        .author("Databio")
        .about("Expand primers into every sequence within an edit budget.")
        .arg_required_else_help(true)
        .arg(
            Arg::new("query")
                .required(true)
                .num_args(1..)
                .help("One or more primer sequences"),
        )
        .arg(
            arg!(-d --distance <distance> "Maximum number of edits per variant")
                .value_parser(value_parser!(i64))
                .allow_hyphen_values(true),
        )
        .arg(arg!(-a --alphabet <alphabet> "Symbols usable for substitutions and insertions (default ACGTN)"))
        .arg(arg!(-p --policy <policy> "Which generator to use (scan or ball)"))
        .arg(arg!(-c --config <config> "TOML file with default settings"))
        .arg(arg!(--indel "Allow insertions and deletions"))
        .arg(
            Arg::new("both-strands")
                .long("both-strands")
                .action(ArgAction::SetTrue)
                .help("Also emit the reverse complement of every variant"),
        )
        .arg(
            Arg::new("with-distance")
                .long("with-distance")
                .action(ArgAction::SetTrue)
                .help("Add the edit distance of each variant from its query"),
        )
        .arg(
            Arg::new("max-variants")
                .long("max-variants")
                .value_parser(value_parser!(usize))
                .help("Fail instead of printing more variants than this per query"),
        )
}
