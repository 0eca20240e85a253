//! Market-data retrieval and normalization tools for a financial-research
//! agent.
//!
//! The agent hands a tool a loosely-specified parameter record (relative
//! dates, `"now"`, free-form timeframe units); the tool normalizes it into a
//! bounded historical-data request, fetches from a [`providers::DataProvider`],
//! and shapes the result into a token-bounded payload.

#[cfg(feature = "cli")]
pub mod cli;
pub mod errors;
pub mod models;
pub mod providers;
pub mod tool;
