// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::application::{
    CoinAnalyzer, CoinCataloguer, CoinDeleter, CoinLister, CoinRepository, CoinViewer,
};
use crate::cli::args::{Args, Command};
use crate::constants::{COLLECTION_FILE_NAME, DATA_DIR_NAME};
use crate::domain::{CoinAnalysisResult, CoinDraft, DomainError};
use crate::infrastructure::image::prepare_image;
use crate::infrastructure::renderer::PageRenderer;
use crate::infrastructure::{GeminiAnalyzer, JsonCoinRepository};
use crate::ports::HtmlPresenter;
use crate::util::text::truncate;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting numisma with arguments");

    // Initialize infrastructure
    let collection_path = find_collection_path(args.collection)?;
    debug!(?collection_path, "Using collection document");
    let repository = JsonCoinRepository::new(&collection_path)?;

    match args.command {
        Command::Add {
            image,
            title,
            country,
            year,
            description,
            composition,
            estimated_value,
            skip_analysis,
        } => add_coin(
            repository,
            &image,
            FieldOverrides {
                title,
                country,
                year,
                description,
                composition,
                estimated_value,
            },
            skip_analysis,
        ),
        Command::List { search, json } => list_coins(repository, search.as_deref(), json),
        Command::View { coin_id, json } => view_coin(repository, &coin_id, json),
        Command::Delete { coin_id, yes } => delete_coin(repository, &coin_id, yes),
    }
}

/// Resolve the collection document location: an explicit path wins,
/// otherwise the platform data directory.
pub fn find_collection_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = custom {
        debug!(?path, "Using provided collection path");
        return Ok(path);
    }

    let data_dir = dirs::data_dir().context("Could not find user data directory")?;
    Ok(data_dir.join(DATA_DIR_NAME).join(COLLECTION_FILE_NAME))
}

/// User-supplied field values that overwrite the AI draft.
#[derive(Debug, Default)]
struct FieldOverrides {
    title: Option<String>,
    country: Option<String>,
    year: Option<String>,
    description: Option<String>,
    composition: Option<String>,
    estimated_value: Option<String>,
}

fn add_coin(
    repository: JsonCoinRepository,
    image_path: &Path,
    overrides: FieldOverrides,
    skip_analysis: bool,
) -> Result<()> {
    let prepared = prepare_image(image_path)?;
    info!(
        width = prepared.width,
        height = prepared.height,
        "Prepared photo"
    );

    let analysis = if skip_analysis {
        debug!("Skipping analysis on request");
        None
    } else {
        run_analysis(&prepared.data_uri)
    };

    let mut draft = match analysis {
        Some(result) => CoinDraft::from_analysis(result, prepared.data_uri),
        None => CoinDraft::new(prepared.data_uri),
    };
    apply_overrides(&mut draft, overrides);

    let mut cataloguer = CoinCataloguer::new(repository);
    let record = cataloguer.add_coin(draft)?;

    println!(
        "Saved \"{}\" ({}, {})",
        record.title, record.country, record.year
    );
    println!("  id: {}", record.id);
    Ok(())
}

/// Single analysis attempt. Every failure degrades to manual entry; the
/// photo stays usable and the save path stays open.
fn run_analysis(image_data_uri: &str) -> Option<CoinAnalysisResult> {
    let analyzer = match GeminiAnalyzer::new() {
        Ok(analyzer) => analyzer,
        Err(e) => {
            eprintln!("AI analysis unavailable ({e:#}).");
            eprintln!("Enter the details yourself via --title, --country, ...");
            return None;
        }
    };

    eprintln!("Analyzing photo...");
    match analyzer.analyze(image_data_uri) {
        Ok(result) => {
            info!(title = %result.title, "Coin identified");
            Some(result)
        }
        Err(e) => {
            warn!(error = %e, "Analysis failed");
            eprintln!("{e}");
            eprintln!("You can still save the coin by passing the details yourself.");
            None
        }
    }
}

fn apply_overrides(draft: &mut CoinDraft, overrides: FieldOverrides) {
    if let Some(title) = overrides.title {
        draft.title = title;
    }
    if let Some(country) = overrides.country {
        draft.country = country;
    }
    if let Some(year) = overrides.year {
        draft.year = year;
    }
    if let Some(description) = overrides.description {
        draft.description = description;
    }
    if let Some(composition) = overrides.composition {
        draft.composition = Some(composition);
    }
    if let Some(value) = overrides.estimated_value {
        draft.estimated_value = Some(value);
    }
}

fn list_coins(repository: JsonCoinRepository, search: Option<&str>, json: bool) -> Result<()> {
    let mut lister = CoinLister::new(repository);
    let coins = lister.list_coins(search)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&coins)?);
        return Ok(());
    }

    if coins.is_empty() {
        match search {
            Some(query) => println!("No coins match \"{query}\"."),
            None => {
                println!("Your collection is empty.");
                println!("Photograph a coin and add it with: numisma add <photo>");
            }
        }
        return Ok(());
    }

    for coin in &coins {
        println!(
            "{}  {:<32}  {:<18}  {}",
            coin.id,
            truncate(&coin.title, 32),
            truncate(&coin.country, 18),
            coin.year
        );
    }
    Ok(())
}

fn view_coin(repository: JsonCoinRepository, coin_id: &str, json: bool) -> Result<()> {
    let mut viewer = CoinViewer::new(repository);

    info!(coin_id, "Viewing coin");
    let coin = viewer.view_coin(coin_id)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&coin)?);
        return Ok(());
    }

    let presenter = HtmlPresenter::new();
    let html = presenter.render(&coin);

    let mut renderer = PageRenderer::new();
    let temp_path = renderer.create_temp_file(&html)?;
    renderer.open_in_browser(&temp_path)?;

    Ok(())
}

fn delete_coin(mut repository: JsonCoinRepository, coin_id: &str, yes: bool) -> Result<()> {
    let coin = match repository.get_coin(coin_id) {
        Ok(coin) => coin,
        Err(DomainError::CoinNotFound(_)) => {
            println!("No coin with id {coin_id} in the collection.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    if !yes {
        let question = format!(
            "Are you sure you want to remove \"{}\" from your collection?",
            coin.title
        );
        if !confirm(&question)? {
            println!("Nothing deleted.");
            return Ok(());
        }
    }

    let mut deleter = CoinDeleter::new(repository);
    if deleter.delete_coin(coin_id)? {
        println!("Removed \"{}\".", coin.title);
    } else {
        println!("No coin with id {coin_id} in the collection.");
    }
    Ok(())
}

fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut answer = String::new();
    io::stdin()
        .read_line(&mut answer)
        .context("Failed to read confirmation")?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
