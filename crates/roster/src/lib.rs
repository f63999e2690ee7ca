//! Roster crate for the followed-teams page.
//!
//! This crate wires the pure filter engine into a page:
//! - [`RosterPage`] caches the filtered roster and discovery sample
//! - [`RosterEvents`] is how the page reports user actions
//! - [`FollowStore`] owns follow/favorite state and applies those actions
//! - [`TeamCard`] / [`DiscoveryCard`] are what a renderer draws
//!
//! ## Event loop
//! ```ignore
//! let mut store = FollowStore::new(catalog.clone());
//! let mut page = RosterPage::new(store.followed_teams(), catalog.teams().to_vec(), None, IntentQueue::new());
//!
//! page.follow("4")?;
//! for intent in page.events_mut().drain() {
//!     store.apply(&intent)?;
//! }
//! page.set_followed_teams(store.followed_teams());
//! ```

pub mod card;
pub mod events;
pub mod page;
pub mod store;

pub use card::{DiscoveryCard, TeamCard, EMPTY_STATE_MESSAGE};
pub use events::{IntentQueue, RosterEvents, RosterIntent};
pub use page::RosterPage;
pub use store::FollowStore;
