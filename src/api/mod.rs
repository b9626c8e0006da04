//! UniFFI export layer — generated Swift/Kotlin/C# bindings for the engine.
//!
//! Unlike the C ABI in [`crate::ffi`], these functions take and return
//! owned host strings, so there is no output capacity to honour.

mod types;

pub use types::{HanError, HanScript};

use std::path::Path;

use han_core::table::{ComponentTable, Script};
use han_core::translit;

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Latin romanization with syllable capitalization and K/G assimilation.
#[uniffi::export]
fn romanize(input: String) -> String {
    translit::romanize_str(&input)
}

/// Cyrillic transliteration; non-Hangul characters are dropped.
#[uniffi::export]
fn transliterate_ru(input: String) -> String {
    translit::transliterate_ru(input.as_bytes())
}

#[uniffi::export]
fn tables_load_config(script: HanScript, path: String) -> Result<(), HanError> {
    let content = std::fs::read_to_string(&path).map_err(|e| HanError::Io {
        msg: format!("{path}: {e}"),
    })?;
    ComponentTable::init_custom(script.into(), content)
        .map_err(|e| HanError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn tables_default_config(script: HanScript) -> String {
    Script::from(script).default_toml().to_string()
}

#[uniffi::export]
fn trace_init(log_dir: String) {
    crate::trace_init::init_tracing(Path::new(&log_dir));
}
