use crate::core::WriteMode;
use crate::utils::error::{Result, RewriteError};
use crate::utils::validation::{validate_exclusive, validate_marker, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub target: Option<TargetConfig>,
    pub replacement: Option<ReplacementConfig>,
    pub write: Option<WriteConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetConfig {
    pub path: Option<String>,
    pub marker: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReplacementConfig {
    pub text: Option<String>,
    pub file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WriteConfig {
    pub mode: Option<WriteMode>,
    pub dry_run: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| RewriteError::file_read(path, e))?;

        let config: Self =
            toml::from_str(&content).map_err(|source| RewriteError::ConfigParseError {
                path: path.to_path_buf(),
                source,
            })?;
        config.with_env_vars()
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| RewriteError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })?;
        config.with_env_vars()
    }

    /// 只替換路徑與 marker 欄位中的環境變數 (例如 ${PAGE_PATH})。
    /// `replacement.text` 原樣寫入，TSX 的 `${...}` template literal 不能被動到
    fn with_env_vars(mut self) -> Result<Self> {
        let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").map_err(|e| {
            RewriteError::ConfigError {
                message: format!("Invalid substitution pattern: {}", e),
            }
        })?;

        if let Some(target) = self.target.as_mut() {
            substitute_env_vars(&re, &mut target.path);
            substitute_env_vars(&re, &mut target.marker);
        }
        if let Some(replacement) = self.replacement.as_mut() {
            substitute_env_vars(&re, &mut replacement.file);
        }

        Ok(self)
    }

    pub fn target_path(&self) -> Option<&str> {
        self.target.as_ref()?.path.as_deref()
    }

    pub fn marker(&self) -> Option<&str> {
        self.target.as_ref()?.marker.as_deref()
    }

    pub fn replacement_text(&self) -> Option<&str> {
        self.replacement.as_ref()?.text.as_deref()
    }

    pub fn replacement_file(&self) -> Option<&str> {
        self.replacement.as_ref()?.file.as_deref()
    }

    pub fn write_mode(&self) -> Option<WriteMode> {
        self.write.as_ref()?.mode
    }

    pub fn dry_run(&self) -> bool {
        self.write.as_ref().and_then(|w| w.dry_run).unwrap_or(false)
    }
}

/// 未設定的變數原樣保留
fn substitute_env_vars(re: &Regex, value: &mut Option<String>) {
    if let Some(text) = value.as_mut() {
        let replaced = re
            .replace_all(text.as_str(), |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned();
        *text = replaced;
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.target_path() {
            validate_path("target.path", path)?;
        }

        if let Some(marker) = self.marker() {
            validate_marker("target.marker", marker)?;
        }

        if let Some(replacement) = &self.replacement {
            validate_exclusive(
                "replacement.text",
                &replacement.text,
                "replacement.file",
                &replacement.file,
            )?;

            if replacement.text.is_none() && replacement.file.is_none() {
                return Err(RewriteError::MissingConfigError {
                    field: "replacement.text or replacement.file".to_string(),
                });
            }

            if let Some(file) = &replacement.file {
                validate_path("replacement.file", file)?;
            }
        }

        Ok(())
    }
}
