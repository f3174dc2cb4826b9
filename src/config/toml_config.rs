use crate::domain::model::{HairTexture, Undertone, UserHairData};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, ShapeError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// 設定檔，所有區段皆可省略
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub profile: ProfileConfig,
    pub storage: StorageConfig,
    pub analysis: AnalysisConfig,
    pub logging: LoggingConfig,
}

/// 預設的頭髮數據
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub base_level: u8,
    pub undertone: Undertone,
    pub hair_texture: HairTexture,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub delay_ms: u64,
    pub record_history: bool,
    pub history_limit: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: bool,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        let hair = UserHairData::default();
        Self {
            base_level: hair.base_level,
            undertone: hair.undertone,
            hair_texture: hair.hair_texture,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: "./.shapesense".to_string(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            delay_ms: 0,
            record_history: true,
            history_limit: crate::app::stores::hairstyle_store::DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ShapeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 檔案不存在時使用預設值
    pub fn from_optional_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(
                "Settings file {} not found, using defaults",
                path.as_ref().display()
            );
            Ok(Self::default())
        }
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ShapeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SHAPESENSE_HOME})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ShapeError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_level("profile.base_level", self.profile.base_level)?;
        validation::validate_path("storage.path", &self.storage.path)?;
        validation::validate_positive_number("analysis.history_limit", self.analysis.history_limit, 1)?;

        if let Some(level) = &self.logging.level {
            let valid_levels = ["trace", "debug", "info", "warn", "error"];
            if !valid_levels.contains(&level.as_str()) {
                return Err(ShapeError::InvalidConfigValueError {
                    field: "logging.level".to_string(),
                    value: level.clone(),
                    reason: format!("Valid levels: {}", valid_levels.join(", ")),
                });
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn default_hair(&self) -> UserHairData {
        UserHairData {
            base_level: self.profile.base_level,
            undertone: self.profile.undertone,
            hair_texture: self.profile.hair_texture,
        }
    }

    fn storage_path(&self) -> &str {
        &self.storage.path
    }

    fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis.delay_ms)
    }

    fn record_history(&self) -> bool {
        self.analysis.record_history
    }

    fn history_limit(&self) -> usize {
        self.analysis.history_limit
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.default_hair(), UserHairData::default());
        assert_eq!(config.storage_path(), "./.shapesense");
        assert_eq!(config.analysis_delay(), Duration::ZERO);
        assert!(config.record_history());
        assert_eq!(config.history_limit(), 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[profile]
base_level = 3
undertone = "red"
hair_texture = "resistant"

[storage]
path = "/tmp/shapesense"

[analysis]
delay_ms = 2000
record_history = false
history_limit = 5

[logging]
level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.profile.base_level, 3);
        assert_eq!(config.profile.undertone, Undertone::Red);
        assert_eq!(config.profile.hair_texture, HairTexture::Resistant);
        assert_eq!(config.analysis_delay(), Duration::from_millis(2000));
        assert!(!config.record_history());
        assert_eq!(config.history_limit(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_section_keeps_field_defaults() {
        let config = TomlConfig::from_toml_str("[profile]\nbase_level = 8\n").unwrap();

        assert_eq!(config.profile.base_level, 8);
        assert_eq!(config.profile.undertone, Undertone::Yellow);
        assert_eq!(config.profile.hair_texture, HairTexture::Normal);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SHAPESENSE_TEST_HOME", "/srv/shapesense");

        let config =
            TomlConfig::from_toml_str("[storage]\npath = \"${SHAPESENSE_TEST_HOME}/state\"\n")
                .unwrap();
        assert_eq!(config.storage.path, "/srv/shapesense/state");

        std::env::remove_var("SHAPESENSE_TEST_HOME");
    }

    #[test]
    fn test_unknown_enum_value_is_rejected() {
        let result = TomlConfig::from_toml_str("[profile]\nundertone = \"blue\"\n");
        assert!(matches!(
            result,
            Err(ShapeError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[profile]\nbase_level = 11\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[analysis]\nhistory_limit = 0\n").unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[analysis]\ndelay_ms = 10\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.analysis.delay_ms, 10);

        let missing = temp_file.path().with_extension("missing.toml");
        let config = TomlConfig::from_optional_file(missing).unwrap();
        assert_eq!(config.analysis.delay_ms, 0);
    }
}
