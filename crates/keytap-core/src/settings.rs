//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub display: DisplaySettings,
    pub corpus: CorpusSettings,
    pub index: IndexSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplaySettings {
    pub line_width: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CorpusSettings {
    pub min_word_len: usize,
    pub max_word_len: usize,
    pub file_pattern: String,
}

impl CorpusSettings {
    /// Partition file name for `len`-letter words.
    pub fn partition_file(&self, len: usize) -> String {
        self.file_pattern.replacen("{}", &len.to_string(), 1)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndexSettings {
    pub file_name: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.display.line_width == 0 {
        return Err(SettingsError::InvalidValue {
            field: "display.line_width".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    if s.corpus.min_word_len == 0 {
        return Err(SettingsError::InvalidValue {
            field: "corpus.min_word_len".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }
    if s.corpus.max_word_len < s.corpus.min_word_len {
        return Err(SettingsError::InvalidValue {
            field: "corpus.max_word_len".to_string(),
            reason: "must not be less than corpus.min_word_len".to_string(),
        });
    }
    if !s.corpus.file_pattern.contains("{}") {
        return Err(SettingsError::InvalidValue {
            field: "corpus.file_pattern".to_string(),
            reason: "must contain a {} length placeholder".to_string(),
        });
    }
    if s.index.file_name.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "index.file_name".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse_and_validate() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.display.line_width, 40);
        assert_eq!(s.corpus.min_word_len, 2);
        assert_eq!(s.corpus.max_word_len, 15);
        assert_eq!(s.index.file_name, "word_list.json");
    }

    #[test]
    fn partition_file_substitutes_length() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.corpus.partition_file(2), "2-letter-words.json");
        assert_eq!(s.corpus.partition_file(15), "15-letter-words.json");
    }

    #[test]
    fn error_zero_line_width() {
        let toml = r#"
[display]
line_width = 0

[corpus]
min_word_len = 2
max_word_len = 15
file_pattern = "{}-letter-words.json"

[index]
file_name = "word_list.json"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("display.line_width"));
    }

    #[test]
    fn error_max_below_min() {
        let toml = r#"
[display]
line_width = 40

[corpus]
min_word_len = 5
max_word_len = 3
file_pattern = "{}-letter-words.json"

[index]
file_name = "word_list.json"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("corpus.max_word_len"));
    }

    #[test]
    fn error_pattern_without_placeholder() {
        let toml = r#"
[display]
line_width = 40

[corpus]
min_word_len = 2
max_word_len = 15
file_pattern = "words.json"

[index]
file_name = "word_list.json"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("corpus.file_pattern"));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let err = parse_settings_toml("[display]\nline_width = 40\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
