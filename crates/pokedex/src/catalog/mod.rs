//! State machines behind every view. Each controller owns its state behind
//! an async lock and applies a response only while its request is still the
//! latest one issued.

pub mod detail;
pub mod list;
pub mod search;
pub mod types;

pub use detail::{DetailController, DetailState};
pub use list::{ListController, ListState};
pub use search::{SearchController, SearchState};
pub use types::{TypeFilter, TypeFilterState};
