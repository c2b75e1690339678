//! JSON report of an analysis run

use log::info;
use std::fs;
use std::path::Path;

use crate::analysis::AnalysisResult;
use crate::error::{Error, Result};

/// Renders the result as pretty-printed JSON
pub fn to_json(result: &AnalysisResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Writes the JSON report, creating missing parent directories
///
/// Returns the JSON text that was written.
pub fn write_report(path: &Path, result: &AnalysisResult) -> Result<String> {
    let json = to_json(result)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(path, &json).map_err(|e| Error::io(path, e))?;
    info!("Report written to {:?}", path);

    Ok(json)
}
