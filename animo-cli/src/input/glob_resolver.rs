//! File pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::path::{Path, PathBuf};

/// Resolve file patterns to actual file paths
///
/// Plain paths that exist are taken as-is; everything else goes through
/// glob expansion. The result is sorted and deduplicated.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let direct = Path::new(pattern);
        if direct.is_file() {
            files.push(direct.to_path_buf());
            continue;
        }

        let paths = glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No input documents matched the provided patterns");
    }

    files.sort();
    files.dedup();

    Ok(files)
}
