//! Tax table configuration for the payroll engine.
//!
//! The tables currently in force are compiled into the crate and returned by
//! [`TaxTables::current`]. A replacement set can be loaded from YAML files
//! with [`ConfigLoader`]; it is validated once at load time.
//!
//! # Example
//!
//! ```no_run
//! use br_payroll::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/current").unwrap();
//! println!("Loaded tables: {}", loader.tables().metadata().name);
//! ```

mod current;
mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    Band, Bracket, BracketMode, PayrollConstants, TablesMetadata, TaxTable, TaxTableConfig,
    TaxTables,
};
