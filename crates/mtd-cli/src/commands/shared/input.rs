use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;

/// Read model text from `path`, or stdin when absent or `-`.
pub fn read_text(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Write `bytes` to `out`, or to `default_name` in the current directory.
pub fn write_output(out: Option<&Path>, default_name: &str, bytes: &[u8]) -> anyhow::Result<PathBuf> {
    let path = out.map_or_else(|| PathBuf::from(default_name), Path::to_path_buf);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(&path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path)
}
