use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tokio::io::{self, AsyncBufReadExt, BufReader};
use tokio::time::Duration;
use tracing_subscriber::EnvFilter;
use url::Url;

use directory_search::formatter::{results_table_rows, summary_line};
use directory_search::page::{MemoryPage, boot};
use directory_search::services::{
    DEFAULT_SHOW_LIMIT, FetchOutcome, build_client, directory_url, fetch_directory, select_users,
};
use directory_search::types::{SearchQuery, UserRecord};

#[derive(Parser)]
#[command(name = "directory-search-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(
    about = "Directory Search CLI - query a site's user directory from the terminal, with the same substring matching, result cap, and rendered output the page produces"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Site root the directory document is fetched from (the fixed /users.json path is resolved against it)
    #[arg(long, global = true, default_value = "http://localhost:8000/")]
    base_url: Url,
    /// Request timeout in seconds for the directory download (default: 30 seconds)
    #[arg(long, global = true)]
    request_timeout: Option<u64>,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Html,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the directory once and run a single filter pass, printing the summary line and the matches
    Search {
        /// Query text - matched case-insensitively as a substring of each record's name or login; an empty query selects every record
        query: String,
        /// Maximum number of matches to print (default: 10, the page's cap)
        #[arg(short, long, default_value_t = DEFAULT_SHOW_LIMIT)]
        limit: usize,
        /// Output format - html prints the rendered table rows, json the matched records with their counts
        #[arg(long, default_value = "html")]
        format: OutputFormat,
    },
    /// Fetch the directory once, then read query lines from stdin and re-render summary and rows per line
    Interactive,
}

/// JSON shape of one search pass for programmatic use
#[derive(Serialize)]
struct SearchReport<'a> {
    total: usize,
    selected: usize,
    shown: usize,
    records: Vec<&'a UserRecord>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("directory_search=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = build_client(cli.request_timeout.map(Duration::from_secs))?;

    match cli.command {
        Commands::Search {
            query,
            limit,
            format,
        } => {
            let url = directory_url(&cli.base_url)?;
            let records = match fetch_directory(&client, url).await {
                FetchOutcome::Success(records) => records,
                failure => anyhow::bail!("Directory fetch failed: {}", failure),
            };

            let selection =
                select_users(&records, &SearchQuery::new(query)).with_show_limit(limit);
            match format {
                OutputFormat::Html => {
                    println!(
                        "{}",
                        summary_line(
                            selection.total(),
                            selection.selected(),
                            selection.shown_count()
                        )
                    );
                    println!("{}", results_table_rows(selection.shown()));
                }
                OutputFormat::Json => {
                    let report = SearchReport {
                        total: selection.total(),
                        selected: selection.selected(),
                        shown: selection.shown_count(),
                        records: selection.shown().to_vec(),
                    };
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
            }
        }
        Commands::Interactive => {
            // Drive the page wiring end-to-end over the in-memory surface:
            // load once at startup, then one render pass per input line. A
            // failed download leaves the store failed and every pass
            // renders the empty view, as on the page.
            let mut page = MemoryPage::new();
            page.add_search_widgets();

            let (_menu, panel) = boot(&mut page, &client, &cli.base_url).await?;
            let panel =
                panel.expect("search widgets were added, boot must return a search panel");

            let mut lines = BufReader::new(io::stdin()).lines();
            while let Some(line) = lines.next_line().await? {
                page.set_query(line.trim_end());
                panel.on_query_changed(&mut page);
                println!("{}", page.summary_text());
                println!("{}", page.result_rows_html());
            }
        }
    }

    Ok(())
}
