pub mod rewriter;
pub mod splice;

pub use crate::domain::model::{RewriteOutcome, RewriteSummary, Splice, TargetFile, WriteMode};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
