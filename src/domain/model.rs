use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 目標檔案：路徑加上保留行尾的各行內容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetFile {
    pub path: PathBuf,
    pub lines: Vec<String>,
}

impl TargetFile {
    /// Splits `content` into lines, each keeping its own terminator.
    pub fn from_content(path: impl Into<PathBuf>, content: &str) -> Self {
        Self {
            path: path.into(),
            lines: content.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    /// Index of the first line containing `marker`.
    pub fn find_marker(&self, marker: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.contains(marker))
    }
}

pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// 直接截斷後覆寫
    #[default]
    InPlace,
    /// 寫到同目錄的暫存檔再 rename
    Atomic,
}

/// 拼接結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splice {
    pub content: String,
    pub marker_line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteSummary {
    pub path: PathBuf,
    /// 0 起算，也等於被取代的前綴行數
    pub marker_line: usize,
    pub bytes_before: usize,
    pub bytes_after: usize,
    pub written: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteOutcome {
    Updated(RewriteSummary),
    MarkerNotFound { path: PathBuf, marker: String },
}

impl RewriteOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, RewriteOutcome::Updated(_))
    }

    /// 印到 stdout 的單行狀態訊息
    pub fn status_line(&self) -> String {
        match self {
            RewriteOutcome::Updated(summary) if summary.written => {
                format!("Successfully updated {}", display_name(&summary.path))
            }
            RewriteOutcome::Updated(summary) => {
                format!("Would update {}", display_name(&summary.path))
            }
            // 行尾轉義，維持 stdout 單行
            RewriteOutcome::MarkerNotFound { marker, .. } => format!(
                "Could not find '{}'",
                marker.replace('\r', "\\r").replace('\n', "\\n")
            ),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            RewriteOutcome::Updated(_) => 0,
            RewriteOutcome::MarkerNotFound { .. } => 2,
        }
    }
}
