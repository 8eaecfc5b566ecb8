use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;
use log::info;

use silica_core::{Alphabet, ErrorBudget};
use silica_neighbors::{NeighborConfig, NeighborPolicy, edit_distance, reverse_complement};

fn build_config(matches: &ArgMatches) -> Result<NeighborConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => NeighborConfig::try_from(Path::new(path))?,
        None => NeighborConfig::default(),
    };

    if let Some(alphabet) = matches.get_one::<String>("alphabet") {
        config.alphabet = alphabet.parse::<Alphabet>()?;
    }
    if let Some(&distance) = matches.get_one::<i64>("distance") {
        config.distance = ErrorBudget::try_from(distance)?;
    }
    if let Some(policy) = matches.get_one::<String>("policy") {
        config.policy = policy
            .parse::<NeighborPolicy>()
            .map_err(|e| anyhow::anyhow!(e))?;
    }
    if let Some(&max_variants) = matches.get_one::<usize>("max-variants") {
        config.max_variants = Some(max_variants);
    }
    if matches.get_flag("indel") {
        config.indel = true;
    }
    if matches.get_flag("both-strands") {
        config.both_strands = true;
    }

    Ok(config)
}

pub fn run_neighbors(matches: &ArgMatches) -> Result<()> {
    let queries: Vec<String> = matches
        .get_many::<String>("query")
        .expect("At least one query sequence is required.")
        .map(|query| query.to_uppercase())
        .collect();
    let with_distance = matches.get_flag("with-distance");

    let config = build_config(matches)?;
    info!(
        "Generating neighbors of {} queries (alphabet {}, distance {}, indel {}, policy {})",
        queries.len(),
        config.alphabet,
        config.distance,
        config.indel,
        config.policy
    );

    // nothing is written unless every query succeeds
    let sets = config
        .generate_batch(&queries)
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    for (query, set) in queries.iter().zip(sets) {
        let mut variants: Vec<String> = set.into_iter().collect();
        variants.sort_unstable();

        let opposite = reverse_complement(query);
        for variant in &variants {
            if with_distance {
                let mut distance = edit_distance(query, variant);
                if config.both_strands {
                    distance = distance.min(edit_distance(&opposite, variant));
                }
                writeln!(writer, "{}\t{}\t{}", query, variant, distance)?;
            } else {
                writeln!(writer, "{}\t{}", query, variant)?;
            }
        }
    }

    writer.flush()?;

    Ok(())
}
