pub mod render;
pub mod state;
pub mod summary;

pub use state::PoolsStore;
pub use summary::PoolsSummary;
