use crate::core::splice::splice_file;
use crate::core::{ConfigProvider, RewriteOutcome, RewriteSummary, Storage, TargetFile};
use crate::utils::error::Result;
use crate::utils::validation::{validate_marker, validate_path};
use std::path::Path;

pub struct FileRewriter<S: Storage> {
    storage: S,
    dry_run: bool,
}

impl<S: Storage> FileRewriter<S> {
    pub fn new(storage: S) -> Self {
        Self::new_with_dry_run(storage, false)
    }

    pub fn new_with_dry_run(storage: S, dry_run: bool) -> Self {
        Self { storage, dry_run }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// 依設定執行一次改寫
    pub fn run<C: ConfigProvider>(&self, config: &C) -> Result<RewriteOutcome> {
        self.rewrite(config.target_path(), config.marker(), config.replacement())
    }

    /// Replaces everything before the first line containing `marker` with
    /// `replacement` and writes the result back to `path`.
    ///
    /// The file is not written when the marker is missing, or when the
    /// rewriter is in dry-run mode.
    pub fn rewrite(&self, path: &Path, marker: &str, replacement: &str) -> Result<RewriteOutcome> {
        validate_path("target.path", &path.to_string_lossy())?;
        validate_marker("target.marker", marker)?;

        tracing::debug!("📖 Reading {}", path.display());
        let content = self.storage.read_text(path)?;
        let file = TargetFile::from_content(path, &content);
        tracing::debug!("Read {} lines ({} bytes)", file.lines.len(), content.len());

        let Some(spliced) = splice_file(&file, marker, replacement) else {
            tracing::warn!("🔍 Marker '{}' not found in {}", marker, path.display());
            return Ok(RewriteOutcome::MarkerNotFound {
                path: path.to_path_buf(),
                marker: marker.to_string(),
            });
        };

        tracing::info!(
            "✂️ Marker found at line {}, replacing {} line(s) before it",
            spliced.marker_line + 1,
            spliced.marker_line
        );
        if spliced.content == content {
            tracing::debug!("Content unchanged after splice");
        }

        let summary = RewriteSummary {
            path: path.to_path_buf(),
            marker_line: spliced.marker_line,
            bytes_before: content.len(),
            bytes_after: spliced.content.len(),
            written: !self.dry_run,
        };

        if self.dry_run {
            tracing::info!("🔍 DRY RUN - {} left untouched", path.display());
            return Ok(RewriteOutcome::Updated(summary));
        }

        self.storage.write_text(path, &spliced.content)?;
        tracing::info!(
            "💾 Wrote {} ({} -> {} bytes)",
            path.display(),
            summary.bytes_before,
            summary.bytes_after
        );

        Ok(RewriteOutcome::Updated(summary))
    }
}
