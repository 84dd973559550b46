// Browsing core: option extraction, cascading filters, player dedup and
// selection, pagination, and the session tying them together.

pub mod engine;
pub mod options;
pub mod pagination;
pub mod players;
pub mod selection;
pub mod session;

pub use engine::FilterEngine;
pub use options::{extract_options, FilterOptions};
pub use pagination::{paginate, Page, Pager, ROWS_PER_PAGE_OPTIONS};
pub use players::{dedup_players, next_selection};
pub use selection::{FilterSelection, PlayerGate};
pub use session::{BrowseSession, ListStatus};
