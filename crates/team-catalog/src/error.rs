//! Error types for the team-catalog crate.
//!
//! Every failure while reading or validating catalog files maps to one
//! variant of [`CatalogError`], carrying enough context (file, line, id)
//! to point at the offending record.

use thiserror::Error;

/// Errors that can occur while loading or validating a team catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in a data file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// A field had a value outside its allowed set
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// The same team id was listed twice
    #[error("Duplicate {collection} entry for team {id}")]
    DuplicateTeam { collection: String, id: String },

    /// A followed entry points at a team the catalog doesn't know
    #[error("Missing reference: {entity} with id {id}")]
    MissingReference { entity: String, id: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
