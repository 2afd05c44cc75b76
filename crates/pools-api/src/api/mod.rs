pub mod docs;
pub mod routes;
pub mod server;
