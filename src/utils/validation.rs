use std::path::Path;

use crate::errors::AppError;

/// Checks whether anything exists at the credentials path.
/// An unset or empty path counts as missing. The file is not opened.
pub fn credentials_file_exists(path: Option<&str>) -> Result<bool, AppError> {
    let path = match path {
        Some(p) if !p.is_empty() => p,
        _ => return Ok(false),
    };

    Path::new(path)
        .try_exists()
        .map_err(|e| AppError::Io(format!("Failed to check {}: {}", path, e)))
}
