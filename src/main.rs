use anyhow::Result;
use bix::corpus::{self, Corpus};
use bix::index::types::CorpusConfig;
use bix::output;
use bix::query::BooleanSearch;
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "bix")]
#[command(about = "In-memory boolean search over a JSONL corpus")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Index a corpus and answer queries interactively
    Search {
        /// Path to a JSONL file of {"url", "text"} records
        corpus: PathBuf,

        /// Index at most this many documents (0 = all)
        #[arg(short, long, default_value = "0")]
        limit: usize,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Run a single query and exit
    Query {
        /// Path to a JSONL file of {"url", "text"} records
        corpus: PathBuf,

        /// Boolean query: AND, OR, NOT, parentheses, implicit AND
        query: String,

        /// Index at most this many documents (0 = all)
        #[arg(short, long, default_value = "0")]
        limit: usize,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Print corpus and index statistics
    Stats {
        /// Path to a JSONL file of {"url", "text"} records
        corpus: PathBuf,

        /// Index at most this many documents (0 = all)
        #[arg(short, long, default_value = "0")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            corpus,
            limit,
            no_color,
        } => run_interactive(&corpus, limit, !no_color),
        Commands::Query {
            corpus,
            query,
            limit,
            no_color,
        } => run_query(&corpus, &query, limit, !no_color),
        Commands::Stats { corpus, limit } => show_stats(&corpus, limit),
    }
}

fn load(path: &Path, limit: usize) -> Result<Corpus> {
    let config = CorpusConfig {
        limit,
        ..CorpusConfig::default()
    };
    corpus::load_jsonl(path, &config)
}

fn run_interactive(path: &Path, limit: usize, color: bool) -> Result<()> {
    let corpus = load(path, limit)?;
    let search = BooleanSearch::new(&corpus.index);

    println!(
        "Boolean search ready: {} documents, {} terms.",
        corpus.index.docs_count(),
        corpus.index.terms_count()
    );
    println!("Syntax: AND OR NOT, parentheses. Implicit AND between terms.");
    println!("Examples:");
    println!("  нефть AND газ");
    println!("  (нефть OR газ) AND NOT европа");
    println!("Ctrl+D to exit.");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim();
        if query.is_empty() {
            continue;
        }
        let hits = search.search(query);
        output::print_hits(&hits, &corpus.keys, color)?;
    }
    Ok(())
}

fn run_query(path: &Path, query: &str, limit: usize, color: bool) -> Result<()> {
    let corpus = load(path, limit)?;
    let search = BooleanSearch::new(&corpus.index);
    let hits = search.search(query);
    output::print_hits(&hits, &corpus.keys, color)?;
    Ok(())
}

fn show_stats(path: &Path, limit: usize) -> Result<()> {
    let corpus = load(path, limit)?;

    println!("Index Statistics");
    println!("================");
    println!();
    println!("Corpus file:      {}", path.display());
    println!("Documents:        {}", corpus.index.docs_count());
    println!("Universe size:    {}", corpus.index.all_docs().len());
    println!("Distinct terms:   {}", corpus.index.terms_count());

    Ok(())
}
