use std::path::PathBuf;

/// Errors raised while decoding an initial board layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("layout has {found} cells, expected {expected}")]
    WrongCellCount { expected: usize, found: usize },

    #[error("layout cell {index} has code {code} (expected 0, 1 or 2)")]
    BadCellCode { index: usize, code: u8 },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("invalid board layout: {0}")]
    Layout(#[from] LayoutError),

    #[error("config validation error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_error_display() {
        let err = LayoutError::WrongCellCount {
            expected: 16,
            found: 15,
        };
        assert_eq!(err.to_string(), "layout has 15 cells, expected 16");

        let err = LayoutError::BadCellCode { index: 3, code: 7 };
        assert_eq!(
            err.to_string(),
            "layout cell 3 has code 7 (expected 0, 1 or 2)"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("arena.games must be > 0".to_string());
        assert_eq!(
            err.to_string(),
            "config validation error: arena.games must be > 0"
        );
    }

    #[test]
    fn test_config_error_from_layout() {
        let err: ConfigError = LayoutError::BadCellCode { index: 0, code: 9 }.into();
        assert!(matches!(err, ConfigError::Layout(_)));
        assert!(err.to_string().starts_with("invalid board layout"));
    }
}
