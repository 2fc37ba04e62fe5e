pub mod catalog;
pub mod pantry;

pub use catalog::{load_catalog, save_catalog};
pub use pantry::{load_pantry, save_pantry};

use recipe::Unit;
use thiserror::Error;

/// Errors surfaced while loading or saving JSON files.
#[derive(Error, Debug)]
pub enum IoError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown unit token: {0} (use PCS|G|KG|ML|L)")]
    UnknownUnit(String),

    #[error(transparent)]
    Recipe(#[from] recipe::RecipeError),

    #[error(transparent)]
    Shopping(#[from] shopping::ShoppingError),
}

/// Parses a unit token case-insensitively; domain files and CLI specs share
/// this.
pub(crate) fn parse_unit(token: &str) -> Result<Unit, IoError> {
    token
        .trim()
        .parse()
        .map_err(|_| IoError::UnknownUnit(token.trim().to_string()))
}
