use serde::Deserialize;

use super::ComponentTable;
use crate::hangul::{L_COUNT, T_COUNT, V_COUNT};

#[derive(Deserialize)]
struct TableConfig {
    lead: Vec<String>,
    vowel: Vec<String>,
    trail: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("{component} table has {actual} entries, expected {expected}")]
    WrongLength {
        component: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("empty value for vowel {0}")]
    EmptyVowel(usize),
    #[error("component table already initialized")]
    AlreadyInitialized,
}

fn check_len(
    component: &'static str,
    values: &[String],
    expected: u32,
) -> Result<(), TableConfigError> {
    if values.len() != expected as usize {
        return Err(TableConfigError::WrongLength {
            component,
            expected: expected as usize,
            actual: values.len(),
        });
    }
    Ok(())
}

/// Parse and validate TOML text into a [`ComponentTable`].
pub fn parse_table_toml(toml_str: &str) -> Result<ComponentTable, TableConfigError> {
    let config: TableConfig =
        toml::from_str(toml_str).map_err(|e| TableConfigError::Parse(e.to_string()))?;

    check_len("lead", &config.lead, L_COUNT)?;
    check_len("vowel", &config.vowel, V_COUNT)?;
    check_len("trail", &config.trail, T_COUNT)?;

    if let Some(idx) = config.vowel.iter().position(|v| v.is_empty()) {
        return Err(TableConfigError::EmptyVowel(idx));
    }

    Ok(ComponentTable {
        lead: config.lead,
        vowel: config.vowel,
        trail: config.trail,
    })
}
