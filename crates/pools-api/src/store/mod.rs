pub mod pool_store;
