//! Raw-data storage for the Points+ engine
//!
//! Upstream data for a season lands in a SQLite file before any computation
//! runs. Organized as:
//! - `models`: Row structures for the four raw datasets
//! - `schema`: Database connection and schema management
//! - `queries`: Season replacement and loaders

pub mod models;
pub mod queries;
pub mod schema;

#[cfg(test)]
mod tests;

pub use models::*;
pub use schema::RawDatabase;
