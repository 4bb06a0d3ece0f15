//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a tax table
//! set from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{PayrollError, PayrollResult};

use super::types::{PayrollConstants, TablesMetadata, TaxTable, TaxTableConfig, TaxTables};

/// Loads a tax table set from a configuration directory.
///
/// # Directory Structure
///
/// ```text
/// config/current/
/// ├── metadata.yaml   # Name, effective date and source of the figures
/// ├── inss.yaml       # INSS contribution table
/// ├── irrf.yaml       # IRRF salary table
/// ├── irrf_plr.yaml   # IRRF profit-sharing table
/// └── constants.yaml  # Simplified deduction, per-dependant deduction, FGTS rate
/// ```
///
/// # Example
///
/// ```no_run
/// use br_payroll::calculation::inss_tax;
/// use br_payroll::config::ConfigLoader;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/current")?;
/// let inss = inss_tax(Decimal::new(300000, 2), loader.tables());
/// println!("INSS: R$ {}", inss);
/// # Ok::<(), br_payroll::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    tables: TaxTables,
}

impl ConfigLoader {
    /// Loads and validates the table set in the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or misses a field (`ConfigParseError`)
    /// - A table or constant is malformed (`InvalidTaxTable`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<TablesMetadata>(&path.join("metadata.yaml"))?;
        let inss = Self::load_table(&path.join("inss.yaml"))?;
        let irrf = Self::load_table(&path.join("irrf.yaml"))?;
        let irrf_plr = Self::load_table(&path.join("irrf_plr.yaml"))?;
        let constants = Self::load_yaml::<PayrollConstants>(&path.join("constants.yaml"))?;

        let tables = TaxTables::new(metadata, inss, irrf, irrf_plr, constants)?;

        info!(
            path = %path.display(),
            name = %tables.metadata().name,
            effective_from = %tables.metadata().effective_from,
            "Loaded payroll tax tables"
        );

        Ok(Self { tables })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PayrollResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads a single table file and validates its brackets.
    fn load_table(path: &Path) -> PayrollResult<TaxTable> {
        let config = Self::load_yaml::<TaxTableConfig>(path)?;
        TaxTable::from_config(config)
    }

    /// Returns the loaded table set.
    pub fn tables(&self) -> &TaxTables {
        &self.tables
    }

    /// Consumes the loader and returns the table set.
    pub fn into_tables(self) -> TaxTables {
        self.tables
    }
}
