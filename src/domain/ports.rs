use crate::domain::model::WriteMode;
use crate::utils::error::Result;
use std::path::Path;

pub trait Storage {
    fn read_text(&self, path: &Path) -> Result<String>;
    fn write_text(&self, path: &Path, content: &str) -> Result<()>;
}

pub trait ConfigProvider {
    fn target_path(&self) -> &Path;
    fn marker(&self) -> &str;
    fn replacement(&self) -> &str;
    fn write_mode(&self) -> WriteMode;
    fn dry_run(&self) -> bool;
}
