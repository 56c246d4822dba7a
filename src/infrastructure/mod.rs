// src/infrastructure/mod.rs
pub mod gemini;
pub mod image;
pub mod renderer;
pub mod store;

pub use gemini::GeminiAnalyzer;
pub use store::JsonCoinRepository;
