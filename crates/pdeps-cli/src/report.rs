//! Rendering of resolved dependencies for stdout.

use serde::Serialize;

use pdeps_core::config::OutputFormat;
use pdeps_core::dependency::Resolution;
use pdeps_util::errors::{PdepsError, PdepsResult};

#[derive(Serialize)]
struct DependencyEntry<'a> {
    package: &'a str,
    version: &'a str,
    qualifier: String,
}

/// Render `resolution` in `format`, newline-terminated.
pub fn render(resolution: &Resolution, format: OutputFormat) -> PdepsResult<String> {
    match format {
        OutputFormat::Plain => Ok(resolution
            .iter()
            .map(|dep| format!("{dep}\n"))
            .collect()),
        OutputFormat::Json => {
            let entries: Vec<DependencyEntry<'_>> = resolution
                .iter()
                .map(|dep| DependencyEntry {
                    package: &dep.name,
                    version: &dep.version,
                    qualifier: dep.qualifier.to_string(),
                })
                .collect();
            let mut out = serde_json::to_string_pretty(&entries).map_err(|e| PdepsError::Output {
                message: e.to_string(),
            })?;
            out.push('\n');
            Ok(out)
        }
    }
}
