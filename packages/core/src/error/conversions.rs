//! Standard conversions into [`KeyError`]

use super::types::KeyError;

impl From<serde_json::Error> for KeyError {
    fn from(error: serde_json::Error) -> Self {
        let line = error.line();
        if line > 0 {
            KeyError::Deserialization(format!("{error} (line {line}, column {})", error.column()))
        } else {
            KeyError::Deserialization(error.to_string())
        }
    }
}
