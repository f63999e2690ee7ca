//! Filter engine for the followed-teams roster.
//!
//! This crate provides:
//! - Filter trait and implementations for roster and discovery filtering
//! - FilterPipeline for composing filters
//! - FilterCriteria, the user-entered roster filters
//! - The two pure computations the roster page is built on
//!
//! ## Architecture
//! Every computation is a stable filter over an input slice:
//! 1. The followed view runs prefecture, city and name filters over the
//!    followed teams
//! 2. The discovery sample runs managed-team and already-followed filters
//!    over the catalog and stops at the limit
//!
//! ## Example Usage
//! ```ignore
//! use filter_engine::{compute_discovery_sample, compute_filtered_followed, FilterCriteria};
//!
//! let criteria = FilterCriteria::new().with_name("united");
//! let visible = compute_filtered_followed(&followed, &criteria);
//!
//! let suggestions = compute_discovery_sample(catalog.teams(), &followed, Some("my-team"), 3);
//! ```

pub mod context;
pub mod criteria;
pub mod engine;
pub mod filter_pipeline;
pub mod filters;
pub mod traits;

// Re-export main types
pub use context::RosterContext;
pub use criteria::FilterCriteria;
pub use engine::{
    compute_discovery_sample, compute_filtered_followed, limit_from_signed,
    DEFAULT_DISCOVERY_LIMIT,
};
pub use filter_pipeline::FilterPipeline;
pub use traits::Filter;
