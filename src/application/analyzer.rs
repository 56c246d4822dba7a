// src/application/analyzer.rs
use crate::domain::{CoinAnalysisResult, DomainError};

/// Capability interface for the external coin identification service.
///
/// Takes the prepared photo as a `data:image/jpeg;base64,...` URI and
/// returns a structured draft. Implementations make a single attempt; a
/// failure is recoverable for the caller, who falls back to manual entry.
pub trait CoinAnalyzer {
    fn analyze(&self, image_data_uri: &str) -> Result<CoinAnalysisResult, DomainError>;
}
