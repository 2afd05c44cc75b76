mod api;
mod error;
mod store;

pub use api::docs::ApiDoc;
pub use api::server::{configure, start_server, AppState, ResponseDelay};
pub use error::{FixtureError, PoolsApiError};
pub use store::pool_store::{PoolRepository, PoolStore};
