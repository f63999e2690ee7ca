//! User-entered filter criteria for the followed roster.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{CityFilter, NameFilter, PrefectureFilter};
use serde::{Deserialize, Serialize};
use team_catalog::Prefecture;

/// The three roster filters, applied together.
///
/// The default value matches every team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// `None` means any prefecture
    pub prefecture: Option<Prefecture>,
    /// Case-insensitive substring of the city; empty matches all
    pub city: String,
    /// Case-insensitive substring of the team name; empty matches all
    pub name: String,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefecture(mut self, prefecture: Prefecture) -> Self {
        self.prefecture = Some(prefecture);
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// True when no criterion narrows the roster.
    pub fn is_empty(&self) -> bool {
        self.prefecture.is_none() && self.city.is_empty() && self.name.is_empty()
    }

    /// Build the pipeline for these criteria. Inactive criteria add no stage.
    pub fn to_pipeline(&self) -> FilterPipeline {
        let mut pipeline = FilterPipeline::new();
        if self.prefecture.is_some() {
            pipeline = pipeline.add_filter(PrefectureFilter::new(self.prefecture));
        }
        if !self.city.is_empty() {
            pipeline = pipeline.add_filter(CityFilter::new(&self.city));
        }
        if !self.name.is_empty() {
            pipeline = pipeline.add_filter(NameFilter::new(&self.name));
        }
        pipeline
    }
}
