//! Core audience-filtering logic for the market-research simulator.
//!
//! The UI collects a free-text target-demographic sentence from the user and
//! a panel of generated personas from the backend (or the bundled fixture
//! set); this crate turns the sentence into structured criteria and selects
//! the matching subset. See [`query::parse_and_filter`].

pub mod error;
pub mod fixtures;
pub mod logging;
pub mod models;
pub mod query;
pub mod validation;

pub use error::AppError;
pub use models::PersonaRecord;
pub use query::{parse_and_filter, parse_query, QueryCriteria};
