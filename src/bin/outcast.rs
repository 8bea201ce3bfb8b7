//! `outcast` CLI: print the least related noun of each noun-list file.

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordnet_sap::{Outcast, TargetIds, WordNet, WordNetConfig};

/// Find the outcast noun in each list, using WordNet distance.
#[derive(Parser, Debug)]
#[command(name = "outcast")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
struct OutcastArgs {
    /// Verbosity on stderr (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors (overrides verbose)
    #[arg(short, long)]
    quiet: bool,

    /// Read hypernym targets as vertex indices instead of synset ids
    #[arg(long)]
    vertex_targets: bool,

    /// Synsets file: `<id>,<nouns>,<gloss>` per line
    synsets: PathBuf,

    /// Hypernyms file: `<id>,<hypernym-id>...` per line
    hypernyms: PathBuf,

    /// Files of whitespace-separated nouns
    #[arg(required = true)]
    noun_files: Vec<PathBuf>,
}

impl OutcastArgs {
    fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    fn config(&self) -> WordNetConfig {
        let hypernym_targets =
            if self.vertex_targets { TargetIds::VertexIndex } else { TargetIds::SynsetId };
        WordNetConfig { hypernym_targets, ..WordNetConfig::default() }
    }
}

fn run(args: &OutcastArgs) -> anyhow::Result<()> {
    let wordnet = WordNet::open_with(&args.synsets, &args.hypernyms, args.config())
        .context("failed to load WordNet")?;
    info!(
        synsets = wordnet.synset_count(),
        nouns = wordnet.noun_count(),
        "wordnet loaded"
    );

    let outcast = Outcast::new(&wordnet);
    for path in &args.noun_files {
        let text = fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        let nouns: Vec<&str> = text.split_whitespace().collect();
        let odd = outcast
            .outcast(&nouns)
            .with_context(|| format!("no outcast for {}", path.display()))?;
        println!("{}: {odd}", path.display());
    }
    Ok(())
}

fn main() {
    let args = OutcastArgs::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level()));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
