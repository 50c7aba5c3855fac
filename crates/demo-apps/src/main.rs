use clap::{Parser, Subcommand};
use demo_apps::app::run_app;
use demo_apps::middleware::MatchFetchMiddleware;
use demo_apps::state::{CounterState, LibraryState, MatchBrowserState, TodoState};
use demo_apps::views::{CounterView, LibraryView, MatchView, TodoView};
use match_client::HttpMatchClient;
use std::sync::Arc;
use tokio::io::BufReader;
use unistore::{Action, LoggingMiddleware, Reducer, Store};
use unistore_config::AppConfig;

mod logger;

#[derive(Parser, Debug)]
#[command(name = "demo-apps", version, about = "Demo apps on a unidirectional store")]
struct Cli {
    #[command(subcommand)]
    app: App,
}

#[derive(Subcommand, Debug)]
enum App {
    /// Increment and decrement a counter
    Counter,
    /// Keep a todo list
    Todo,
    /// Manage a book library
    Library,
    /// Browse football matches fetched from the listing endpoint
    Matches {
        /// Listing URL, overrides the configured endpoint
        #[arg(long)]
        endpoint: Option<String>,
        /// Page to request, overrides the configured page
        #[arg(long)]
        page: Option<u32>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // The config picks the log level, so its errors are logged after init
    let loaded = AppConfig::load();
    let log_level = match &loaded {
        Ok(config) => config.log_level.clone(),
        Err(_) => AppConfig::default().log_level,
    };
    let log_file = logger::init(&log_level)?;
    log::info!("Starting demo-apps, logging to {}", log_file.display());

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("{:#}, using defaults", e);
        AppConfig::default()
    });

    match cli.app {
        App::Counter => {
            run_app(new_store::<CounterState, _>(), CounterView, stdin(), stdout()).await?
        }
        App::Todo => {
            run_app(new_store::<TodoState, _>(), TodoView, stdin(), stdout()).await?
        }
        App::Library => {
            run_app(new_store::<LibraryState, _>(), LibraryView, stdin(), stdout()).await?
        }
        App::Matches { endpoint, page } => {
            let endpoint = endpoint.unwrap_or(config.matches.endpoint);
            let page = page.unwrap_or(config.matches.page);
            log::info!("Fetching matches from {} (page {})", endpoint, page);

            let mut store = new_store::<MatchBrowserState, _>();
            store.add_middleware(Box::new(MatchFetchMiddleware::new(
                Arc::new(HttpMatchClient::new(endpoint)),
                page,
            )));
            run_app(store, MatchView, stdin(), stdout()).await?
        }
    }

    log::info!("Exiting demo-apps");
    Ok(())
}

fn new_store<S, A>() -> Store<S, A>
where
    S: Reducer<A> + Default + 'static,
    A: Action,
{
    let mut store = Store::default();
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store
}

fn stdin() -> BufReader<tokio::io::Stdin> {
    BufReader::new(tokio::io::stdin())
}

fn stdout() -> std::io::Stdout {
    std::io::stdout()
}
