use mdstruct::{ConversionError, ConversionResult, GenOptions};

const ENV_PRESET: &str = "MDSTRUCT_PRESET";
const ENV_STRUCT_NAME: &str = "MDSTRUCT_STRUCT_NAME";
const ENV_LOG_LEVEL: &str = "MDSTRUCT_LOG_LEVEL";

/// mdstruct runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Generation options (preset plus overrides)
    pub options: GenOptions,
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> ConversionResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ConversionResult<Self> {
        let mut options = match lookup(ENV_PRESET) {
            Some(name) => GenOptions::preset(&name).ok_or_else(|| {
                ConversionError::invalid_config(format!(
                    "{} must be 'basic' or 'extended', got '{}'",
                    ENV_PRESET, name
                ))
            })?,
            None => GenOptions::default(),
        };

        if let Some(name) = lookup(ENV_STRUCT_NAME) {
            let name = name.trim();
            if name.is_empty() {
                return Err(ConversionError::invalid_config(format!(
                    "{} must not be empty",
                    ENV_STRUCT_NAME
                )));
            }
            options.struct_name = name.to_string();
        }

        Ok(Self {
            options,
            log_level: lookup(ENV_LOG_LEVEL).unwrap_or_else(|| "warn".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> ConversionResult<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.options, GenOptions::default());
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_extended_preset_with_name() {
        let config = load(&[
            ("MDSTRUCT_PRESET", "extended"),
            ("MDSTRUCT_STRUCT_NAME", " ListReq "),
            ("MDSTRUCT_LOG_LEVEL", "debug"),
        ])
        .unwrap();
        assert!(config.options.extended_types);
        assert_eq!(config.options.struct_name, "ListReq");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            load(&[("MDSTRUCT_PRESET", "verbose")]),
            Err(ConversionError::InvalidConfig { .. })
        ));
        assert!(load(&[("MDSTRUCT_PRESET", "default")]).is_err());
        assert!(load(&[("MDSTRUCT_STRUCT_NAME", "  ")]).is_err());
    }
}
