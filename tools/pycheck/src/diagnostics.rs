use crate::error::PycheckError;
use regex::Regex;
use serde::Serialize;

/// One checker line attributed to the file being checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line: Option<u32>,
    pub message: String,
    /// The line exactly as the checker printed it.
    #[serde(skip)]
    pub raw: String,
}

/// Separates a file's own diagnostics from the checker's banner and summary noise.
///
/// The checker prefixes every real finding with `<path>:`; nothing else counts.
#[derive(Debug, Clone)]
pub struct DiagnosticFilter {
    prefix: Regex,
    prefix_len: usize,
}

impl DiagnosticFilter {
    pub fn for_path(path: &str) -> Result<Self, PycheckError> {
        let prefix = Regex::new(&format!("^{}:", regex::escape(path))).map_err(|source| {
            PycheckError::Pattern {
                path: path.to_string(),
                source,
            }
        })?;
        Ok(Self {
            prefix,
            prefix_len: path.len() + 1,
        })
    }

    pub fn matches(&self, line: &str) -> bool {
        self.prefix.is_match(line)
    }

    pub fn extract(&self, output: &str) -> Vec<Diagnostic> {
        output
            .lines()
            .filter(|line| self.matches(line))
            .map(|line| {
                let (line_no, message) = split_location(&line[self.prefix_len..]);
                Diagnostic {
                    line: line_no,
                    message,
                    raw: line.to_string(),
                }
            })
            .collect()
    }
}

fn split_location(rest: &str) -> (Option<u32>, String) {
    if let Some((head, tail)) = rest.split_once(':') {
        if !head.is_empty() && head.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(line) = head.parse() {
                return (Some(line), tail.trim().to_string());
            }
        }
    }
    (None, rest.trim().to_string())
}
