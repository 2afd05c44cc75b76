pub mod api;
pub mod pool;
pub mod query;

pub use pool::PoolRecord;
pub use pool::PoolStatus;
pub use query::{FilterCriteria, FilterUpdate, PoolsQuery, SortDirection, SortKey, SortSpec};
