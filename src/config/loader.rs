//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding `wallet.rpc_url`.
pub const RPC_URL_ENV_VAR: &str = "DATASET_ACCESS_RPC_URL";

/// Environment variable overriding `contract.address`.
pub const CONTRACT_ADDRESS_ENV_VAR: &str = "DATASET_ACCESS_CONTRACT";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parse configuration text, apply environment overrides, and validate.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let mut config: AppConfig = toml::from_str(content).map_err(ConfigError::Parse)?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    parse_config(&content)
}

/// Load from `path` when given, otherwise start from defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match path {
        Some(path) => load_config(path),
        None => parse_config(""),
    }
}

/// Overlay values taken from the environment.
///
/// `lookup` is `std::env::var` in production; tests pass a closure.
pub fn apply_env_overrides<F>(config: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(RPC_URL_ENV_VAR).filter(|v| !v.is_empty()) {
        config.wallet.rpc_url = Some(url);
    }
    if let Some(address) = lookup(CONTRACT_ADDRESS_ENV_VAR).filter(|v| !v.is_empty()) {
        config.contract.address = address;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::WalletKind;
    use std::io::Write;

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [wallet]
            kind = "legacy"

            [datasets]
            ids = [4, 5]
            currency_symbol = "xDAI"
            "#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.wallet.kind, WalletKind::Legacy);
        assert_eq!(config.datasets.ids, vec![4, 5]);
        assert_eq!(config.datasets.currency_symbol, "xDAI");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[wallet\nkind = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("Parse error"));
    }

    #[test]
    fn test_validation_errors_are_joined() {
        let err = parse_config("[datasets]\nids = []\ncurrency_symbol = \"\"").unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Validation failed: "));
        assert!(message.contains("datasets.ids must not be empty, "));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        apply_env_overrides(&mut config, |key| match key {
            RPC_URL_ENV_VAR => Some("http://rpc.example:8545".to_string()),
            CONTRACT_ADDRESS_ENV_VAR => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.wallet.rpc_url.as_deref(), Some("http://rpc.example:8545"));
        // Empty values are ignored
        assert!(config.contract.address.is_empty());
    }
}
