use crate::utils::error::{Result, RewriteError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RewriteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RewriteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Marker 是對保留行尾的單行做原始子字串比對，所以只要求非空。
/// 空白與結尾的 `\n` 都是合法的 marker，跨行的 marker 只會找不到
pub fn validate_marker(field_name: &str, marker: &str) -> Result<()> {
    if marker.is_empty() {
        return Err(RewriteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: marker.to_string(),
            reason: "Marker cannot be empty".to_string(),
        });
    }

    Ok(())
}

pub fn validate_exclusive<A, B>(
    first_field: &str,
    first: &Option<A>,
    second_field: &str,
    second: &Option<B>,
) -> Result<()> {
    if first.is_some() && second.is_some() {
        return Err(RewriteError::ConfigError {
            message: format!(
                "'{}' and '{}' cannot be set at the same time",
                first_field, second_field
            ),
        });
    }
    Ok(())
}
