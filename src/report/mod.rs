use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub mod json;
pub mod tsv;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub(crate) fn write_text(path: &Path, contents: &str) -> Result<(), ReportError> {
    let io_err = |source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut w = BufWriter::new(File::create(path).map_err(io_err)?);
    w.write_all(contents.as_bytes()).map_err(io_err)?;
    w.flush().map_err(io_err)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
