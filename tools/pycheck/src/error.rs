use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PycheckError {
    #[error("source root {} does not exist", .0.display())]
    MissingSourceRoot(PathBuf),

    #[error("failed to read directory {}: {source}", path.display())]
    Scan { path: PathBuf, source: io::Error },

    #[error("failed to run {checker} on {path}: {source}")]
    Launch {
        checker: String,
        path: String,
        source: io::Error,
    },

    #[error("invalid diagnostic pattern for {path}: {source}")]
    Pattern { path: String, source: regex::Error },

    #[error("failed to write report {}: {source}", path.display())]
    Report { path: PathBuf, source: io::Error },

    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("failed to install signal handler: {0}")]
    Signal(io::Error),
}

impl PycheckError {
    /// The checker was killed from outside while it ran.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Launch { source, .. } if source.kind() == io::ErrorKind::Interrupted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launch(kind: io::ErrorKind) -> PycheckError {
        PycheckError::Launch {
            checker: "pychecker".to_string(),
            path: "germinate/a.py".to_string(),
            source: io::Error::new(kind, "stopped"),
        }
    }

    #[test]
    fn only_a_killed_checker_counts_as_interrupted() {
        assert!(launch(io::ErrorKind::Interrupted).is_interrupted());
        assert!(!launch(io::ErrorKind::NotFound).is_interrupted());
        assert!(!PycheckError::Output(io::Error::new(io::ErrorKind::Interrupted, "x")).is_interrupted());
    }
}
