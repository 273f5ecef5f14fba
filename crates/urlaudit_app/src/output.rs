use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("report directory {} does not exist", .0.display())]
    MissingDirectory(PathBuf),
    #[error("report directory {} is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("cannot write report: {0}")]
    Io(#[from] io::Error),
}

/// Where the report goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportTarget {
    Stdout,
    File(PathBuf),
}

impl From<Option<PathBuf>> for ReportTarget {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(ReportTarget::Stdout, ReportTarget::File)
    }
}

pub fn write_report(target: &ReportTarget, lines: &[String]) -> Result<(), PersistError> {
    match target {
        ReportTarget::Stdout => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            for line in lines {
                writeln!(out, "{line}")?;
            }
            out.flush()?;
            Ok(())
        }
        ReportTarget::File(path) => write_atomically(path, &render(lines)),
    }
}

fn render(lines: &[String]) -> String {
    let mut content = lines.join("\n");
    content.push('\n');
    content
}

/// The report goes next to existing files only; missing directories are not created.
pub fn check_report_dir(dir: &Path) -> Result<(), PersistError> {
    match fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(PersistError::NotADirectory(dir.to_path_buf())),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(PersistError::MissingDirectory(dir.to_path_buf()))
        }
        Err(err) => Err(PersistError::Io(err)),
    }
}

/// Write `content` to `path` through a temp file in the same directory, then rename.
pub fn write_atomically(path: &Path, content: &str) -> Result<(), PersistError> {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    check_report_dir(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(path).map_err(|e| PersistError::Io(e.error))?;
    Ok(())
}
