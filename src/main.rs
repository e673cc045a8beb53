//! `proverbs`: query an ordered index of Hawaiian proverbs.
//!
//! ```bash
//! proverbs                                   # run the demo queries
//! proverbs succ "Piliʻuhane"
//! proverbs --data sayings.json mehua hula
//! RUST_LOG=proverb_index=trace proverbs list
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use proverb_index::{load_path, sample, Entry, Proverb, ProverbIndex};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "proverbs")]
#[command(about = "Ordered lookup over Hawaiian proverbs")]
struct Args {
    /// JSON array of {saying, translation, explanation_haw, explanation_eng};
    /// the built-in sample is used when omitted
    #[arg(long, global = true, env = "PROVERBS_DATA")]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the sample queries
    Demo,
    /// Report whether a saying is present
    Member { saying: String },
    /// Print the smallest saying
    First,
    /// Print the largest saying
    Last,
    /// Print the saying just before SAYING
    Pred { saying: String },
    /// Print the saying just after SAYING
    Succ { saying: String },
    /// Sayings containing a Hawaiian word
    Mehua { word: String },
    /// Sayings whose translation contains an English word
    Withword { word: String },
    /// All sayings in order
    List,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("proverb_index=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let db = match &args.data {
        Some(path) => load_path(path)
            .with_context(|| format!("failed to load dataset {}", path.display()))?,
        None => sample::seeded(),
    };
    info!(sayings = db.len(), height = db.index().height(), "index ready");

    match args.command.unwrap_or(Command::Demo) {
        Command::Demo => demo(&db),
        Command::Member { saying } => println!("{}", db.member(&saying)),
        Command::First => print_entry(db.first()),
        Command::Last => print_entry(db.last()),
        Command::Pred { saying } => print_entry(db.predecessor(&saying)),
        Command::Succ { saying } => print_entry(db.successor(&saying)),
        Command::Mehua { word } => print_keys(db.mehua(&word)),
        Command::Withword { word } => print_keys(db.withword(&word)),
        Command::List => {
            for entry in db.iter() {
                println!("{}\t{}", entry.key, entry.value.translation);
            }
        }
    }
    Ok(())
}

fn print_entry(entry: Option<Entry<'_, Proverb>>) {
    match entry {
        Some(e) => {
            println!("{}", e.key);
            println!("  {}", e.value.translation);
            println!("  {}", e.value.explanation_haw);
            println!("  {}", e.value.explanation_eng);
        }
        None => println!("(none)"),
    }
}

fn print_keys(keys: &[String]) {
    for key in keys {
        println!("{key}");
    }
}

fn neighbor(label: &str, saying: &str, found: Option<Entry<'_, Proverb>>) {
    match found {
        Some(e) => println!("{label} of '{saying}': {}", e.key),
        None => println!("No {} found for '{saying}'", label.to_lowercase()),
    }
}

fn demo(db: &ProverbIndex) {
    println!("{:?}", db.mehua("hula"));
    println!("{:?}", db.withword("dance"));
    println!("{}", db.member("ʻAʻa i ka hula"));
    if let Some(e) = db.first() {
        println!("{}", e.key);
    }
    if let Some(e) = db.last() {
        println!("{}", e.key);
    }

    let huli = "Huli ka lima i lalo";
    neighbor("Predecessor", huli, db.predecessor(huli));
    let aa = "ʻAʻa i ka hula";
    neighbor("Successor", aa, db.successor(aa));
    let pili = "Piliʻuhane";
    neighbor("Predecessor", pili, db.predecessor(pili));
    neighbor("Successor", pili, db.successor(pili));
}
