//! Output formatting for the CLI.
//!
//! Human-readable and JSON renderers for a [`ValidationReport`].

use codeowner_validator_core::validate::{Comment, CommentGroup, Severity, ValidationReport};
use colored::Colorize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

/// JSON output: comments keyed by check name.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct JsonOutput<'a> {
    checks: BTreeMap<&'a str, &'a [Comment]>,
}

impl<'a> JsonOutput<'a> {
    /// Builds the JSON view of a report. Every check that ran gets a key.
    pub fn new(report: &'a ValidationReport) -> Self {
        let checks = report
            .groups
            .iter()
            .map(|group| (group.check.as_str(), group.comments.as_slice()))
            .collect();
        Self { checks }
    }

    /// Writes the JSON output to a writer.
    pub fn write<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)
    }
}

/// Output formatter for human-readable console output.
pub struct HumanOutput<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> HumanOutput<W> {
    /// Creates a new human output formatter.
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Writes a header for a check.
    pub fn write_check_header(&mut self, summary: &str) -> std::io::Result<()> {
        let header = format!("==> {}", summary);
        if self.use_colors {
            writeln!(self.writer, "\n{}", header.cyan().bold())?;
        } else {
            writeln!(self.writer, "\n{}", header)?;
        }
        Ok(())
    }

    /// Writes one check's comments under its heading. Silent groups print nothing.
    pub fn write_group(&mut self, group: &CommentGroup) -> std::io::Result<()> {
        if group.comments.is_empty() {
            return Ok(());
        }

        self.write_check_header(&group.heading.message)?;
        for comment in &group.comments {
            self.write_comment(comment)?;
        }
        Ok(())
    }

    /// Writes a single comment.
    pub fn write_comment(&mut self, comment: &Comment) -> std::io::Result<()> {
        let label = match comment.severity {
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
            Severity::Info => "INFO",
            Severity::Verbose => return writeln!(self.writer, "  {}", comment.message),
        };

        if self.use_colors {
            let tag = format!("[{}]", label);
            let tag = match comment.severity {
                Severity::Error => tag.red().bold(),
                Severity::Warn => tag.yellow().bold(),
                _ => tag.blue().bold(),
            };
            writeln!(self.writer, "  {} {}", tag, comment.message)
        } else {
            writeln!(self.writer, "  [{}] {}", label, comment.message)
        }
    }

    /// Writes the closing summary line.
    pub fn write_summary(
        &mut self,
        total_errors: usize,
        total_warnings: usize,
    ) -> std::io::Result<()> {
        writeln!(self.writer)?;

        if total_errors == 0 {
            let message = "✓ CODEOWNERS file is valid";
            if self.use_colors {
                writeln!(self.writer, "{}", message.green().bold())?;
            } else {
                writeln!(self.writer, "{}", message)?;
            }
        } else {
            let message = format!(
                "✗ Found {} error(s) and {} warning(s)",
                total_errors, total_warnings
            );
            if self.use_colors {
                writeln!(self.writer, "{}", message.red().bold())?;
            } else {
                writeln!(self.writer, "{}", message)?;
            }
        }
        Ok(())
    }

    /// Writes an error message.
    pub fn write_error(&mut self, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{} {}", "Error:".red().bold(), message)
        } else {
            writeln!(self.writer, "Error: {}", message)
        }
    }

    /// Writes a whole report followed by the summary line.
    pub fn write_report(&mut self, report: &ValidationReport) -> std::io::Result<()> {
        for group in &report.groups {
            self.write_group(group)?;
        }
        self.write_summary(report.finding_count(), count_severity(report, Severity::Warn))
    }
}

fn count_severity(report: &ValidationReport, severity: Severity) -> usize {
    report
        .groups
        .iter()
        .flat_map(|g| &g.comments)
        .filter(|c| c.severity == severity)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use codeowner_validator_core::validate::Finding;

    fn sample_report() -> ValidationReport {
        let mut report = ValidationReport::new();
        report.push(CommentGroup::new(
            "duppatterns",
            "Executing Duplicated Pattern Checker",
            vec![Comment::from_finding(Finding::DuplicatePattern {
                pattern: "/build/logs/".to_string(),
                lines: vec![1, 4],
            })],
        ));
        report.push(CommentGroup::new(
            "syntax",
            "Executing Valid Syntax Checker",
            Vec::new(),
        ));
        report.push(CommentGroup::new(
            "useless",
            "Executing Useless Pattern Checker",
            vec![Comment::warn("git is not available")],
        ));
        report
    }

    fn render(report: &ValidationReport) -> String {
        let mut buffer = Vec::new();
        HumanOutput::new(&mut buffer, false)
            .write_report(report)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_human_output_lists_groups_with_comments() {
        let output = render(&sample_report());

        assert!(output.contains("==> Executing Duplicated Pattern Checker"));
        assert!(output.contains(
            "  [ERROR] Pattern '/build/logs/' is defined 2 times on lines 1, 4"
        ));
        assert!(output.contains("  [WARN] git is not available"));
        assert!(!output.contains("Executing Valid Syntax Checker"));
        assert!(output.contains("✗ Found 1 error(s) and 1 warning(s)"));
    }

    #[test]
    fn test_human_output_clean_report() {
        let mut report = ValidationReport::new();
        report.push(CommentGroup::new(
            "notowned",
            "Executing Missing Assignment Checker",
            Vec::new(),
        ));
        let output = render(&report);

        assert!(!output.contains("==>"));
        assert!(output.contains("✓ CODEOWNERS file is valid"));
    }

    #[test]
    fn test_write_error_plain() {
        let mut buffer = Vec::new();
        HumanOutput::new(&mut buffer, false)
            .write_error("boom")
            .unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "Error: boom\n");
    }

    #[test]
    fn test_json_output_keyed_by_check() {
        let report = sample_report();
        let mut buffer = Vec::new();
        JsonOutput::new(&report).write(&mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["syntax"], serde_json::json!([]));

        let dup = &value["duppatterns"][0];
        assert_eq!(dup["severity"], "error");
        assert_eq!(
            dup["message"],
            "Pattern '/build/logs/' is defined 2 times on lines 1, 4"
        );
        assert_eq!(dup["finding"]["type"], "duplicate_pattern");
        assert_eq!(dup["finding"]["lines"], serde_json::json!([1, 4]));

        let warn = &value["useless"][0];
        assert_eq!(warn["severity"], "warn");
        assert!(warn.get("finding").is_none());
    }
}
