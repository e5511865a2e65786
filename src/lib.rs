//! Bus route bookkeeping backed by a local SQLite file.
//!
//! # Intention
//!
//! - Record routes (start station, end station, route number) and query them back.
//! - Keep every SQLite detail inside [`store`] and [`schema`].
//!
//! # Architectural Boundaries
//!
//! - [`store`] owns connections; nothing else opens the database.
//! - [`table`] only formats [`Route`] records, it never touches storage.
//! - [`cli`] parses arguments and dispatches, it holds no SQL.

pub mod cli;
pub mod config;
pub mod error;
pub mod schema;
pub mod store;
pub mod table;

pub use config::Config;
pub use error::{Error, Result};
pub use store::{Route, RouteStore};
