//! Metrics log reader.
//!
//! Loads the whole log into memory; fuzz-run logs are bounded.
//! Invalid UTF-8 is replaced rather than rejected, so a stray byte in an
//! ignored field never stops a run.

use crate::utils::error::InputError;
use log::{debug, info};
use std::path::Path;

/// Read a metrics log file
///
/// **Public** - main entry point for input
///
/// # Arguments
/// * `input_path` - Path to the metrics log
///
/// # Returns
/// Full text content of the file, invalid UTF-8 sequences replaced by U+FFFD
///
/// # Errors
/// * `InputError::InvalidPath` - Path is empty or a directory
/// * `InputError::ReadFailed` - File missing or unreadable
pub fn read_metrics(input_path: impl AsRef<Path>) -> Result<String, InputError> {
    let input_path = input_path.as_ref();

    debug!("Reading metrics from: {}", input_path.display());

    validate_input_path(input_path)?;

    let bytes = std::fs::read(input_path).map_err(|source| InputError::ReadFailed {
        path: input_path.to_path_buf(),
        source,
    })?;

    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(err) => {
            debug!(
                "{} is not valid UTF-8, replacing invalid sequences",
                input_path.display()
            );
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    };

    info!(
        "Loaded {} ({} bytes)",
        input_path.display(),
        content.len()
    );

    Ok(content)
}

/// Reject paths that can never be read as a log
///
/// **Private** - internal validation
fn validate_input_path(path: &Path) -> Result<(), InputError> {
    if path.as_os_str().is_empty() {
        return Err(InputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(InputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}
