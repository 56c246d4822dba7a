// src/util/testing.rs

use anyhow::Result;
use chrono::Utc;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{CoinAnalyzer, CoinRepository};
use crate::domain::{CoinAnalysisResult, CoinRecord, DomainError};

// Common test environment variables
pub const TEST_ENV_VARS: &[&str] = &["RUST_LOG", "NO_CLEANUP", "GEMINI_API_KEY"];

/// A ready-made record for tests that don't care about most fields.
pub fn sample_coin(id: &str, title: &str, country: &str) -> CoinRecord {
    CoinRecord {
        id: id.to_string(),
        title: title.to_string(),
        country: country.to_string(),
        year: "1900".to_string(),
        description: String::new(),
        image: "data:image/jpeg;base64,/9j/AAA=".to_string(),
        composition: None,
        estimated_value: None,
        date_added: Utc::now(),
    }
}

/// A ready-made analysis draft for capture-flow tests.
pub fn sample_analysis() -> CoinAnalysisResult {
    CoinAnalysisResult {
        title: "Lincoln Penny".to_string(),
        country: "USA".to_string(),
        year: "1945".to_string(),
        description: "Wheat reverse, minted during WWII.".to_string(),
        composition: Some("95% Copper".to_string()),
        estimated_value: Some("$1 - $5".to_string()),
    }
}

/// Shared in-memory repository for testing use cases that depend on
/// CoinRepository, eliminating the need for each test file to define its
/// own mock.
///
/// # Examples
///
/// ```
/// use numisma::util::testing::{sample_coin, MockCoinRepository};
///
/// let mock = MockCoinRepository::builder()
///     .with_coin(sample_coin("abc", "Lincoln Penny", "USA"))
///     .build();
/// ```
pub struct MockCoinRepository {
    coins: Vec<CoinRecord>,
    quota_exceeded: bool,
}

impl MockCoinRepository {
    pub fn builder() -> MockCoinRepositoryBuilder {
        MockCoinRepositoryBuilder::new()
    }
}

impl CoinRepository for MockCoinRepository {
    fn list_coins(&mut self) -> Result<Vec<CoinRecord>, DomainError> {
        Ok(self.coins.clone())
    }

    fn get_coin(&mut self, id: &str) -> Result<CoinRecord, DomainError> {
        self.coins
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| DomainError::CoinNotFound(id.to_string()))
    }

    fn add_coin(&mut self, coin: CoinRecord) -> Result<(), DomainError> {
        if self.quota_exceeded {
            return Err(DomainError::QuotaExceeded);
        }
        self.coins.insert(0, coin);
        Ok(())
    }

    fn remove_coin(&mut self, id: &str) -> Result<bool, DomainError> {
        let before = self.coins.len();
        self.coins.retain(|c| c.id != id);
        Ok(self.coins.len() != before)
    }
}

/// Builder for MockCoinRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockCoinRepositoryBuilder {
    coins: Vec<CoinRecord>,
    quota_exceeded: bool,
}

impl MockCoinRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            coins: Vec::new(),
            quota_exceeded: false,
        }
    }

    /// Seed a record. Records are prepended, mirroring the store's
    /// newest-first order: the last `with_coin` call lists first.
    pub fn with_coin(mut self, coin: CoinRecord) -> Self {
        self.coins.insert(0, coin);
        self
    }

    /// Make every subsequent add fail as if the storage limit were reached.
    pub fn with_quota_exceeded(mut self) -> Self {
        self.quota_exceeded = true;
        self
    }

    pub fn build(self) -> MockCoinRepository {
        MockCoinRepository {
            coins: self.coins,
            quota_exceeded: self.quota_exceeded,
        }
    }
}

impl Default for MockCoinRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Analyzer double with a fixed outcome, for capture-flow tests without
/// network access.
pub struct MockCoinAnalyzer {
    outcome: Result<CoinAnalysisResult, String>,
}

impl MockCoinAnalyzer {
    pub fn succeeding(result: CoinAnalysisResult) -> Self {
        Self {
            outcome: Ok(result),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
        }
    }
}

impl CoinAnalyzer for MockCoinAnalyzer {
    fn analyze(&self, _image_data_uri: &str) -> Result<CoinAnalysisResult, DomainError> {
        self.outcome.clone().map_err(DomainError::Analysis)
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "reqwest", "mio", "want"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

pub fn print_active_env_vars() {
    for var in TEST_ENV_VARS {
        if let Ok(value) = env::var(var) {
            println!("{var}={value}");
        } else {
            println!("{var} is not set");
        }
    }
}
