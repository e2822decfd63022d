use crate::config::defaults::{DEFAULT_MARKER, DEFAULT_REPLACEMENT, DEFAULT_TARGET_PATH};
use crate::config::toml_config::TomlConfig;
use crate::core::{ConfigProvider, Storage, WriteMode};
use crate::utils::error::Result;
use crate::utils::validation::{validate_exclusive, validate_marker, validate_path, Validate};
use std::path::{Path, PathBuf};

/// 命令列可覆蓋的欄位，`None` 表示沿用設定檔或內建預設值
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub path: Option<String>,
    pub marker: Option<String>,
    pub replacement_text: Option<String>,
    pub replacement_file: Option<String>,
    pub mode: Option<WriteMode>,
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteSettings {
    pub path: PathBuf,
    pub marker: String,
    pub replacement: String,
    pub mode: WriteMode,
    pub dry_run: bool,
}

impl Default for RewriteSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_TARGET_PATH),
            marker: DEFAULT_MARKER.to_string(),
            replacement: DEFAULT_REPLACEMENT.to_string(),
            mode: WriteMode::InPlace,
            dry_run: false,
        }
    }
}

impl RewriteSettings {
    /// Merges command-line overrides, an optional config file and the
    /// built-in defaults, in that order of precedence.
    ///
    /// A replacement file is read through `storage`.
    pub fn resolve<S: Storage>(
        overrides: &SettingsOverrides,
        file_config: Option<&TomlConfig>,
        storage: &S,
    ) -> Result<Self> {
        validate_exclusive(
            "--replacement",
            &overrides.replacement_text,
            "--replacement-file",
            &overrides.replacement_file,
        )?;
        if let Some(config) = file_config {
            config.validate()?;
        }

        let defaults = Self::default();

        let path = overrides
            .path
            .as_deref()
            .or_else(|| file_config.and_then(TomlConfig::target_path))
            .map(PathBuf::from)
            .unwrap_or(defaults.path);

        let marker = overrides
            .marker
            .as_deref()
            .or_else(|| file_config.and_then(TomlConfig::marker))
            .map(str::to_string)
            .unwrap_or(defaults.marker);

        // 文字與檔案在同一層互斥，CLI 層整組優先於設定檔
        let replacement = if let Some(text) = &overrides.replacement_text {
            text.clone()
        } else if let Some(file) = &overrides.replacement_file {
            Self::load_replacement(storage, file)?
        } else if let Some(text) = file_config.and_then(TomlConfig::replacement_text) {
            text.to_string()
        } else if let Some(file) = file_config.and_then(TomlConfig::replacement_file) {
            Self::load_replacement(storage, file)?
        } else {
            defaults.replacement
        };

        let mode = overrides
            .mode
            .or_else(|| file_config.and_then(TomlConfig::write_mode))
            .unwrap_or(defaults.mode);

        let dry_run = overrides.dry_run || file_config.is_some_and(TomlConfig::dry_run);

        let settings = Self {
            path,
            marker,
            replacement,
            mode,
            dry_run,
        };
        settings.validate()?;

        tracing::debug!(
            "Resolved settings: path={}, marker={:?}, replacement={} bytes, mode={:?}, dry_run={}",
            settings.path.display(),
            settings.marker,
            settings.replacement.len(),
            settings.mode,
            settings.dry_run
        );

        Ok(settings)
    }

    fn load_replacement<S: Storage>(storage: &S, file: &str) -> Result<String> {
        validate_path("replacement.file", file)?;
        tracing::debug!("Loading replacement block from {}", file);
        storage.read_text(Path::new(file))
    }
}

impl Validate for RewriteSettings {
    fn validate(&self) -> Result<()> {
        validate_path("target.path", &self.path.to_string_lossy())?;
        validate_marker("target.marker", &self.marker)?;

        if self.replacement.contains(&self.marker) {
            // 不算錯誤，但重跑時會切在 replacement 裡
            tracing::warn!(
                "⚠️ Replacement block contains the marker; re-running will split inside it"
            );
        }

        Ok(())
    }
}

impl ConfigProvider for RewriteSettings {
    fn target_path(&self) -> &Path {
        &self.path
    }

    fn marker(&self) -> &str {
        &self.marker
    }

    fn replacement(&self) -> &str {
        &self.replacement
    }

    fn write_mode(&self) -> WriteMode {
        self.mode
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::LocalStorage;
    use crate::utils::error::RewriteError;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_when_nothing_overrides() {
        let settings =
            RewriteSettings::resolve(&SettingsOverrides::default(), None, &LocalStorage::default())
                .unwrap();

        assert_eq!(settings, RewriteSettings::default());
        assert_eq!(settings.target_path(), Path::new("src/app/page.tsx"));
        assert_eq!(settings.marker(), "export default function Page");
    }

    #[test]
    fn test_cli_overrides_win_over_file() {
        let file_config = TomlConfig::from_toml_str(
            r#"
[target]
path = "from-file.tsx"
marker = "file marker"

[replacement]
text = "from file\n"

[write]
mode = "atomic"
"#,
        )
        .unwrap();

        let overrides = SettingsOverrides {
            path: Some("from-cli.tsx".to_string()),
            replacement_text: Some("from cli\n".to_string()),
            ..Default::default()
        };

        let settings =
            RewriteSettings::resolve(&overrides, Some(&file_config), &LocalStorage::default())
                .unwrap();

        assert_eq!(settings.path, PathBuf::from("from-cli.tsx"));
        assert_eq!(settings.marker, "file marker");
        assert_eq!(settings.replacement, "from cli\n");
        assert_eq!(settings.mode, WriteMode::Atomic);
        assert!(!settings.dry_run);
    }

    #[test]
    fn test_replacement_loaded_from_file() {
        let dir = TempDir::new().unwrap();
        let block = dir.path().join("imports.tsx");
        fs::write(&block, "import a from \"a\";\n").unwrap();

        let overrides = SettingsOverrides {
            replacement_file: Some(block.to_string_lossy().into_owned()),
            ..Default::default()
        };
        let settings =
            RewriteSettings::resolve(&overrides, None, &LocalStorage::default()).unwrap();

        assert_eq!(settings.replacement, "import a from \"a\";\n");
    }

    #[test]
    fn test_missing_replacement_file_is_file_access_error() {
        let dir = TempDir::new().unwrap();
        let overrides = SettingsOverrides {
            replacement_file: Some(dir.path().join("nope.tsx").to_string_lossy().into_owned()),
            ..Default::default()
        };

        let err = RewriteSettings::resolve(&overrides, None, &LocalStorage::default()).unwrap_err();
        assert!(matches!(err, RewriteError::FileAccess { .. }));
    }

    #[test]
    fn test_cli_text_and_file_conflict() {
        let overrides = SettingsOverrides {
            replacement_text: Some("x".to_string()),
            replacement_file: Some("y.tsx".to_string()),
            ..Default::default()
        };

        let err = RewriteSettings::resolve(&overrides, None, &LocalStorage::default()).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_empty_marker_override_rejected() {
        let overrides = SettingsOverrides {
            marker: Some(String::new()),
            ..Default::default()
        };

        assert!(RewriteSettings::resolve(&overrides, None, &LocalStorage::default()).is_err());
    }

    #[test]
    fn test_dry_run_from_either_layer() {
        let file_config = TomlConfig::from_toml_str("[write]\ndry_run = true\n").unwrap();
        let settings = RewriteSettings::resolve(
            &SettingsOverrides::default(),
            Some(&file_config),
            &LocalStorage::default(),
        )
        .unwrap();
        assert!(settings.dry_run());

        let overrides = SettingsOverrides {
            dry_run: true,
            ..Default::default()
        };
        let settings =
            RewriteSettings::resolve(&overrides, None, &LocalStorage::default()).unwrap();
        assert!(settings.dry_run());
    }
}
