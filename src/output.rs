//! Plain-text trajectory files.
//!
//! A file starts with free-text metadata lines, each prefixed by `#` (a
//! header item spanning several lines gets one prefix per line), followed by
//! one line per time point:
//!
//! ```text
//! # Exponential decay
//! 0, 1
//! 0.02, 0.98
//! ```
//!
//! Values use the shortest representation that round-trips, separated by
//! `", "`.

use log::info;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::fixed::Solution;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Writes the header lines and every row of `solution` to `writer`.
pub fn write_trajectory<W, H>(mut writer: W, header: H, solution: &Solution) -> io::Result<()>
where
    W: Write,
    H: IntoIterator,
    H::Item: AsRef<str>,
{
    for item in header {
        let item = item.as_ref();
        if item.is_empty() {
            writeln!(writer, "#")?;
        }
        // Every physical line of an item is commented.
        for line in item.lines() {
            if line.is_empty() {
                writeln!(writer, "#")?;
            } else {
                writeln!(writer, "# {}", line)?;
            }
        }
    }
    for (t, row) in solution.iter() {
        write!(writer, "{}", t)?;
        for y in row.iter() {
            write!(writer, ", {}", y)?;
        }
        writeln!(writer)?;
    }
    writer.flush()
}

/// Writes `solution` to `path` as UTF-8, creating missing parent directories.
pub fn save_trajectory<P, H>(path: P, header: H, solution: &Solution) -> Result<(), OutputError>
where
    P: AsRef<Path>,
    H: IntoIterator,
    H::Item: AsRef<str>,
{
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let write_err = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(write_err)?;
    write_trajectory(BufWriter::new(file), header, solution).map_err(write_err)?;

    info!("wrote {} rows to {}", solution.len(), path.display());
    Ok(())
}
