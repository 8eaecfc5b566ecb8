use std::io::{self, BufWriter, Write};

use anyhow::Result;
use clap::ArgMatches;

use silica_neighbors::{reverse_complement, reverse_complement_strict};

pub fn run_revcomp(matches: &ArgMatches) -> Result<()> {
    let strict = matches.get_flag("strict");

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    for sequence in matches
        .get_many::<String>("sequence")
        .expect("At least one sequence is required.")
    {
        let complemented = if strict {
            reverse_complement_strict(sequence)?
        } else {
            reverse_complement(sequence)
        };
        writeln!(writer, "{}", complemented)?;
    }

    writer.flush()?;

    Ok(())
}
