use han_core::table::Script;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum HanError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Target script of a component table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum HanScript {
    Latin,
    Cyrillic,
}

impl From<HanScript> for Script {
    fn from(script: HanScript) -> Self {
        match script {
            HanScript::Latin => Script::Latin,
            HanScript::Cyrillic => Script::Cyrillic,
        }
    }
}
