pub mod aggregate;
pub mod api;
pub mod error;
pub mod filter;
pub mod model;
pub mod selection;
pub mod session;
pub mod size;
pub mod sort;

pub use aggregate::{ViewTotals, aggregate};
pub use api::ApiClient;
pub use error::{ReclaimError, Result};
pub use filter::{FileFilter, KindFilter, known_kinds};
pub use model::{CleanupResult, FileListResponse, FileRecord};
pub use selection::SelectionSet;
pub use session::{Phase, Session};
pub use size::{Severity, format_count, format_size, format_size_short, size_percentage};
pub use sort::{SortKey, SortOrder, sorted_view};
