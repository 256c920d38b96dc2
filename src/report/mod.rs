//! Test outcome accumulation and the append-only report file
//!
//! Outcomes live in an explicit `ReportContext` handed to each test case,
//! not in process-wide lists. One context covers one run; dropping it ends
//! the run's bookkeeping.

use std::fmt;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::common::{paths, Result};

/// Terminal status of a test case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pass,
    Fail,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Pass => write!(f, "Pass"),
            Status::Fail => write!(f, "Fail"),
        }
    }
}

/// One completed test case, as persisted to the report
#[derive(Debug, Clone)]
pub struct TestRecord {
    /// Test case identifier
    pub id: String,
    /// Raw response text the verify command returned
    pub response: String,
    /// Pass or Fail
    pub status: Status,
    /// Human-readable outcome message
    pub message: String,
}

/// Per-run outcome accumulator backed by the report CSV
pub struct ReportContext {
    passed: Vec<String>,
    failed: Vec<String>,
    report_path: PathBuf,
}

impl ReportContext {
    /// Open a report context appending to the given CSV file
    ///
    /// The file is created (with a header row) if missing; existing rows
    /// from earlier runs are preserved.
    pub fn open(report_path: &Path) -> Result<Self> {
        paths::ensure_parent_dir(report_path)?;

        if !report_path.exists() {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(report_path)?;
            let mut writer = csv::Writer::from_writer(file);
            writer.write_record(["Testcase ID", "Output Response", "Status", "Message"])?;
            writer.flush()?;
        }

        Ok(Self {
            passed: Vec::new(),
            failed: Vec::new(),
            report_path: report_path.to_path_buf(),
        })
    }

    /// Record one outcome: accumulate the id and append the report row
    ///
    /// The row is flushed before returning so a crash in a later test case
    /// cannot lose an already-decided outcome.
    pub fn record(&mut self, record: &TestRecord) -> Result<()> {
        match record.status {
            Status::Pass => self.passed.push(record.id.clone()),
            Status::Fail => self.failed.push(record.id.clone()),
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.report_path)?;
        let mut writer = csv::Writer::from_writer(file);
        let status = record.status.to_string();
        writer.write_record([
            record.id.as_str(),
            record.response.as_str(),
            status.as_str(),
            record.message.as_str(),
        ])?;
        writer.flush()?;

        Ok(())
    }

    /// Test case ids that passed so far in this run
    pub fn passed(&self) -> &[String] {
        &self.passed
    }

    /// Test case ids that failed so far in this run
    pub fn failed(&self) -> &[String] {
        &self.failed
    }

    /// Where the report rows are being appended
    pub fn report_path(&self) -> &Path {
        &self.report_path
    }

    /// Print the end-of-run summary
    pub fn print_summary(&self) {
        println!();
        println!(
            "{} {} passed, {} failed",
            "Summary:".blue().bold(),
            self.passed.len().to_string().green(),
            self.failed.len().to_string().red()
        );

        for id in &self.passed {
            println!("  {} {}", "✓".green(), id);
        }
        for id in &self.failed {
            println!("  {} {}", "✗".red(), id);
        }

        println!("Report: {}", self.report_path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, status: Status) -> TestRecord {
        TestRecord {
            id: id.to_string(),
            response: r#"{"jsonrpc":"2.0","id":42,"result":{"success":true}}"#.to_string(),
            status,
            message: "Output response is matching with expected one".to_string(),
        }
    }

    #[test]
    fn test_record_sorts_ids_into_lists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        let mut ctx = ReportContext::open(&path).unwrap();

        ctx.record(&record("TCID001", Status::Pass)).unwrap();
        ctx.record(&record("TCID002", Status::Fail)).unwrap();
        ctx.record(&record("TCID003", Status::Pass)).unwrap();

        assert_eq!(ctx.passed(), ["TCID001", "TCID003"]);
        assert_eq!(ctx.failed(), ["TCID002"]);
    }

    #[test]
    fn test_rows_append_in_execution_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        let mut ctx = ReportContext::open(&path).unwrap();
        ctx.record(&record("TCID001", Status::Pass)).unwrap();
        ctx.record(&record("TCID002", Status::Fail)).unwrap();
        drop(ctx);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3); // header + two rows
        assert!(lines[0].starts_with("Testcase ID"));
        assert!(lines[1].starts_with("TCID001"));
        assert!(lines[1].ends_with("Pass,Output response is matching with expected one"));
        assert!(lines[2].starts_with("TCID002"));
    }

    #[test]
    fn test_reopen_preserves_history_and_writes_header_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        let mut ctx = ReportContext::open(&path).unwrap();
        ctx.record(&record("TCID001", Status::Pass)).unwrap();
        drop(ctx);

        // Second run appends below the first run's rows
        let mut ctx = ReportContext::open(&path).unwrap();
        assert!(ctx.passed().is_empty());
        ctx.record(&record("TCID001", Status::Pass)).unwrap();
        drop(ctx);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("Testcase ID").count(), 1);
        assert_eq!(content.matches("TCID001").count(), 2);
    }
}
