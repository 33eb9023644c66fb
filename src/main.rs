use anyhow::{Context, Result};
use clap::Parser;
use pm2bib::fetch::{DEFAULT_TIMEOUT_SECS, DEFAULT_URL};
use pm2bib::{FetchConfig, PubmedFetcher};
use std::io::Write;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "pm2bib",
    version,
    about = "Converts PubMed records to BibTeX references",
    long_about = "Searches PubMed for a query (by default a PubMed accession number, PMID) \
                  and prints the matching records as BibTeX entries"
)]
struct Cli {
    /// PubMed query, by default a PubMed accession number (PMID)
    query: String,

    /// Treat the query as a text file with one query per line
    #[arg(short, long)]
    file: bool,

    /// PubMed search URL
    #[arg(long, env = "PM2BIB_URL", default_value = DEFAULT_URL)]
    url: String,

    /// HTTP request timeout in seconds
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let mut config = FetchConfig::new();
    config.set_url(cli.url.as_str()).set_timeout_secs(cli.timeout);
    let fetcher = PubmedFetcher::with_config(config).context("Failed to create HTTP client")?;

    let results = if cli.file {
        fetch_all(&fetcher, Path::new(&cli.query))?
    } else {
        fetcher
            .fetch_bibtex(&cli.query)
            .with_context(|| format!("Failed to fetch PubMed records for '{}'", cli.query))?
    };

    writeln!(std::io::stdout().lock(), "{results}")?;
    Ok(())
}

/// Fetch BibTeX for every non-blank line of the query file at `path`.
fn fetch_all(fetcher: &PubmedFetcher, path: &Path) -> Result<String> {
    let queries = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read query file {}", path.display()))?;

    let mut results = String::new();
    for query in queries.lines().map(str::trim).filter(|q| !q.is_empty()) {
        tracing::info!(query, "fetching");
        let bibtex = fetcher
            .fetch_bibtex(query)
            .with_context(|| format!("Failed to fetch PubMed records for '{query}'"))?;
        results.push_str(&bibtex);
    }
    Ok(results)
}
