// crates/core/src/output/file.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::error::{Result, SiftError};

/// Write `path` through a sibling temporary file that is renamed into place
/// once `fill` succeeds. On failure the temporary file is removed and `path`
/// is left as it was.
pub fn write_atomically<T, F>(path: &Path, fill: F) -> Result<T>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<T>,
{
    let tmp = temp_sibling(path);
    let guard = TempGuard(Some(tmp.clone()));

    let file = File::create(&tmp).map_err(|source| SiftError::Write {
        path: tmp.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    let value = fill(&mut writer)?;
    writer.flush().map_err(|source| SiftError::Write {
        path: tmp.clone(),
        source,
    })?;
    let _ = writer.get_ref().sync_all();
    drop(writer);

    fs::rename(&tmp, path).map_err(|source| SiftError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    guard.disarm();

    #[cfg(unix)]
    {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }
    }

    Ok(value)
}

fn temp_sibling(path: &Path) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    path.with_file_name(format!(".{name}.{}.{nanos}.tmp", std::process::id()))
}

/// Removes the temporary file unless disarmed.
struct TempGuard(Option<PathBuf>);

impl TempGuard {
    fn disarm(mut self) {
        self.0 = None;
    }
}

impl Drop for TempGuard {
    fn drop(&mut self) {
        if let Some(path) = self.0.take() {
            let _ = fs::remove_file(path);
        }
    }
}
