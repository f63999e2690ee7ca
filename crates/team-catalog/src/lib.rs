//! # Team Catalog Crate
//!
//! Loads and indexes the team catalog and the user's followed list.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Team, Prefecture, TeamLevel, TeamCatalog)
//! - **parser**: Parse `.dat` files into Rust structs
//! - **index**: Build and validate the catalog from disk
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use team_catalog::TeamCatalog;
//! use std::path::Path;
//!
//! let catalog = TeamCatalog::load_from_files(Path::new("data/teams"))?;
//! let followed = catalog.followed_teams();
//! println!("Following {} of {} teams", followed.len(), catalog.teams().len());
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

pub use error::{CatalogError, Result};
pub use types::{FollowedEntry, Prefecture, Team, TeamCatalog, TeamId, TeamLevel};
