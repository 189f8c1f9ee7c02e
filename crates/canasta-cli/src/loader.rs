//! Rules dataset loader.
//!
//! The store itself never touches the filesystem; this shell materializes
//! the rows. The expected format is a JSON array of row objects with the
//! mined-rules columns (`antecedents`/`antecedents_str`,
//! `consequents`/`consequents_str`, `confidence`, `lift`).

use std::fs;
use std::path::Path;

use canasta::rules::{RawRuleRecord, RuleStore};

use crate::error::{CliError, Result};

/// Load and normalize a rules file into a store.
pub(crate) fn load_store(path: &Path) -> Result<RuleStore> {
    validate_path(path)?;
    let text = fs::read_to_string(path)?;
    let records: Vec<RawRuleRecord> = serde_json::from_str(&text)?;
    Ok(RuleStore::from_records(records))
}

fn validate_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(CliError::NotAFile(path.to_path_buf()));
    }
    Ok(())
}
