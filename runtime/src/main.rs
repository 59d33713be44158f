use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use catalog_core::{CatalogConfig, MovieCard, MovieDetail, SearchSnapshot};
use catalog_runtime::{init_tracing, EngineSettings, FetchClient, SearchEngine};
use clap::Parser;

#[derive(Parser)]
#[command(name = "catalog", about = "Browse the top-rated movie catalog")]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Only list movies whose title contains this text.
    #[arg(long)]
    query: Option<String>,

    /// Show the detail view of one movie by id.
    #[arg(long)]
    detail: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => CatalogConfig::load(path)?,
        None => CatalogConfig::from_env(),
    };
    init_tracing(config.logging.level.as_deref());

    let source = Arc::new(FetchClient::from_config(&config.api));
    let engine = SearchEngine::spawn(source, EngineSettings::from(&config.search));
    let mut updates = engine.subscribe();

    let loaded = updates
        .wait_for(|s| s.fetches_completed > 0)
        .await?
        .clone();
    if let Some(err) = loaded.last_error {
        bail!("could not load the catalog: {err}");
    }

    if let Some(id) = cli.detail {
        let Some(movie) = loaded.all_movies.iter().find(|m| m.id == id) else {
            bail!("movie {id} is not in the top-rated list");
        };
        print_detail(&MovieDetail::from(movie));
        return Ok(());
    }

    let snapshot = match cli.query.filter(|q| !q.is_empty()) {
        Some(query) => {
            engine.set_query(query);
            updates.wait_for(|s| s.filter_passes > 0).await?.clone()
        }
        None => loaded,
    };
    print_cards(&snapshot);
    Ok(())
}

fn print_cards(snapshot: &SearchSnapshot) {
    if snapshot.visible.is_empty() {
        println!("no movies match {:?}", snapshot.query);
        return;
    }
    for movie in &snapshot.visible {
        let card = MovieCard::from(movie);
        let rating = card.rating.unwrap_or_default();
        println!("{:>8}  {rating:>4}  {}", card.id, card.title);
        if !card.genres.is_empty() {
            println!("{:>16}{}", "", card.genres);
        }
    }
}

fn print_detail(detail: &MovieDetail) {
    println!("{}", detail.title);
    println!("{}", detail.release_date);
    if let Some(url) = &detail.poster_url {
        println!("{url}");
    }
    println!();
    println!("{}", detail.overview);
    if !detail.genres.is_empty() {
        println!();
        println!("{}", detail.genres.join(", "));
    }
}
