//! Filter implementations for the roster pipelines.
//!
//! The followed-view filters (prefecture, city, name) narrow the user's
//! roster; the discovery filters (already followed, managed team) decide
//! which catalog teams may be suggested.

pub mod already_followed;
pub mod city;
pub mod managed_team;
pub mod name;
pub mod prefecture;

// Re-export for convenience
pub use already_followed::AlreadyFollowedFilter;
pub use city::CityFilter;
pub use managed_team::ManagedTeamFilter;
pub use name::NameFilter;
pub use prefecture::PrefectureFilter;

/// Case-insensitive substring test. `needle_lower` must already be lowercase.
pub(crate) fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    needle_lower.is_empty() || haystack.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("Osaka United", "united"));
        assert!(contains_ignore_case("OSAKA UNITED", "ka un"));
        assert!(contains_ignore_case("anything", ""));
        assert!(contains_ignore_case("", ""));
        assert!(!contains_ignore_case("", "a"));
        assert!(contains_ignore_case("渋谷区", "渋谷"));
    }
}
