pub mod connection;
pub mod entities;
pub mod stores;

pub use stores::SqliteStore;
