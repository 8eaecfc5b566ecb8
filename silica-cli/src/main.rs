mod neighbors;
mod revcomp;

use anyhow::Result;
use clap::Command;
use env_logger::Env;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "silica";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Approximate primer matching: expand primers into every sequence within an edit budget for exact-match search.")
        .subcommand_required(true)
        .subcommand(neighbors::cli::create_neighbors_cli())
        .subcommand(revcomp::cli::create_revcomp_cli())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // NEIGHBORS
        //
        Some((neighbors::cli::NEIGHBORS_CMD, matches)) => {
            neighbors::handlers::run_neighbors(matches)?;
        }

        //
        // REVERSE COMPLEMENT
        //
        Some((revcomp::cli::REVCOMP_CMD, matches)) => {
            revcomp::handlers::run_revcomp(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
