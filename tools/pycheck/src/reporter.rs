use crate::check::{CheckSummary, FileOutcome};
use crate::config::RunnerConfig;
use crate::error::PycheckError;
use owo_colors::OwoColorize;
use owo_colors::Stream::{Stderr, Stdout};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Print a failing file's diagnostics exactly as the checker wrote them.
pub fn print_diagnostics<W: Write>(out: &mut W, outcome: &FileOutcome) -> io::Result<()> {
    for diagnostic in &outcome.diagnostics {
        writeln!(out, "{}", diagnostic.raw)?;
    }
    Ok(())
}

pub fn checker_missing_message(checker: &str) -> String {
    format!("{checker} not installed, so not running it")
}

pub fn print_checker_missing(checker: &str) {
    eprintln!(
        "{}",
        checker_missing_message(checker).if_supports_color(Stderr, |s| s.yellow())
    );
}

pub fn print_error(error: &PycheckError) {
    eprintln!(
        "{} {error}",
        "error:".if_supports_color(Stderr, |s| s.red().bold().to_string())
    );
}

pub fn print_clean_action<W: Write>(out: &mut W, path: &Path, dry_run: bool) -> io::Result<()> {
    let verb = if dry_run { "would remove" } else { "removing" };
    writeln!(
        out,
        "{} {}",
        verb.if_supports_color(Stdout, |s| s.dimmed()),
        path.display()
    )
}

pub fn print_clean_failure(path: &Path, error: &str) {
    eprintln!(
        "{} failed to remove {}: {error}",
        "\u{2717}".if_supports_color(Stderr, |s| s.red()),
        path.display()
    );
}

#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub checker: &'a str,
    pub source_root: String,
    pub files_checked: usize,
    pub failed: bool,
    pub files: &'a [FileOutcome],
}

impl<'a> RunReport<'a> {
    pub fn new(config: &'a RunnerConfig, summary: &'a CheckSummary) -> Self {
        Self {
            checker: &config.checker,
            source_root: config.source_root.to_string_lossy().to_string(),
            files_checked: summary.files_checked(),
            failed: summary.failed(),
            files: &summary.files,
        }
    }
}

pub fn write_report(path: &Path, config: &RunnerConfig, summary: &CheckSummary) -> Result<(), PycheckError> {
    let mut body = serde_json::to_string_pretty(&RunReport::new(config, summary))?;
    body.push('\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| PycheckError::Report {
            path: path.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, body).map_err(|source| PycheckError::Report {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Diagnostic;

    fn failing_summary() -> CheckSummary {
        CheckSummary {
            files: vec![
                FileOutcome {
                    path: "germinate/a.py".to_string(),
                    passed: false,
                    diagnostics: vec![Diagnostic {
                        line: Some(10),
                        message: "unused variable".to_string(),
                        raw: "germinate/a.py:10: unused variable".to_string(),
                    }],
                },
                FileOutcome {
                    path: "germinate/b.py".to_string(),
                    passed: true,
                    diagnostics: vec![],
                },
            ],
        }
    }

    #[test]
    fn diagnostics_print_raw_lines() {
        let summary = failing_summary();
        let mut out = Vec::new();
        print_diagnostics(&mut out, &summary.files[0]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "germinate/a.py:10: unused variable\n");
    }

    #[test]
    fn missing_checker_message_names_the_tool() {
        assert_eq!(
            checker_missing_message("pychecker"),
            "pychecker not installed, so not running it"
        );
    }

    #[test]
    fn clean_action_wording_depends_on_dry_run() {
        let mut out = Vec::new();
        print_clean_action(&mut out, Path::new("build/x.pyc"), true).unwrap();
        print_clean_action(&mut out, Path::new("build/y.pyc"), false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("would remove build/x.pyc"));
        assert!(text.contains("removing build/y.pyc"));
    }

    #[test]
    fn report_is_written_as_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/report.json");
        let config = RunnerConfig::default();

        write_report(&path, &config, &failing_summary()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["checker"], "pychecker");
        assert_eq!(value["source_root"], "germinate");
        assert_eq!(value["files_checked"], 2);
        assert_eq!(value["failed"], true);
        assert_eq!(value["files"][0]["diagnostics"][0]["line"], 10);
        assert_eq!(value["files"][0]["diagnostics"][0]["message"], "unused variable");
        assert!(value["files"][0]["diagnostics"][0].get("raw").is_none());
        assert_eq!(value["files"][1]["passed"], true);
    }
}
