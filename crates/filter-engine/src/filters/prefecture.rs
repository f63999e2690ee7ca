//! Filter to keep teams from one prefecture.

use crate::context::RosterContext;
use crate::traits::Filter;
use team_catalog::{Prefecture, Team};

/// Keeps teams whose prefecture equals the selected one.
///
/// `None` is the "any prefecture" selection and keeps every team.
pub struct PrefectureFilter {
    prefecture: Option<Prefecture>,
}

impl PrefectureFilter {
    pub fn new(prefecture: Option<Prefecture>) -> Self {
        Self { prefecture }
    }
}

impl Filter for PrefectureFilter {
    fn name(&self) -> &str {
        "PrefectureFilter"
    }

    fn keep(&self, team: &Team, _context: &RosterContext<'_>) -> bool {
        self.prefecture.is_none_or(|selected| team.prefecture == selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefecture_filter() {
        let tokyo = Team::new("1", "Shibuya FC", Prefecture::Tokyo);
        let osaka = Team::new("2", "Osaka United", Prefecture::Osaka);
        let context = RosterContext::default();

        let filter = PrefectureFilter::new(Some(Prefecture::Tokyo));
        assert!(filter.keep(&tokyo, &context));
        assert!(!filter.keep(&osaka, &context));

        let any = PrefectureFilter::new(None);
        assert!(any.keep(&tokyo, &context));
        assert!(any.keep(&osaka, &context));
    }
}
