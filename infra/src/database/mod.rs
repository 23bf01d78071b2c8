//! Database access layer
//!
//! Connection pool management and repository implementations backed by MySQL.

pub mod connection;
pub mod mysql;

pub use connection::DatabasePool;
pub use mysql::MySqlAccountRepository;
