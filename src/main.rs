use std::io;

use structopt::StructOpt;
use tracing::Level;

use dictionary_search::{Driver, DriverConfig, OutputFormat};


/// Build a dictionary from the words you type, then look words up in it.
#[derive(StructOpt)]
struct Cli {
    /// Token that ends the current phase (any token starting with it counts)
    #[structopt(long, default_value = ":q")]
    sentinel: String,
    /// Longest word accepted into the dictionary
    #[structopt(long, default_value = "15")]
    max_word_length: usize,
    /// Don't print prompts before reading input
    #[structopt(long)]
    no_prompt: bool,
    /// Print one JSON object per verdict instead of text
    #[structopt(long)]
    json: bool,
    /// Log more to stderr (-v info, -vv debug, -vvv trace)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::from_args();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let config = DriverConfig::builder()
        .sentinel(args.sentinel)
        .max_word_length(args.max_word_length)
        .prompts(!args.no_prompt)
        .format(if args.json { OutputFormat::Json } else { OutputFormat::Text })
        .build();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = Driver::new(config, stdin.lock(), stdout.lock())?.run()?;
    tracing::info!(words = session.words_inserted,
                   queries = session.verdicts.len(),
                   rejected = session.rejected,
                   "session finished");
    Ok(())
}
