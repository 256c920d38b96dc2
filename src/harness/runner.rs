//! Test case runner
//!
//! Executes one scenario at a time, strictly in order: setup steps, the
//! verify command, the byte-for-byte comparison, then the report row.
//! A transport failure never aborts a case early; it surfaces as an empty
//! response that the comparison turns into a Fail.

use std::path::Path;
use std::time::{Duration, Instant};

use colored::Colorize;
use tracing::{error, info, warn};

use crate::common::config::Timeouts;
use crate::common::{Error, Result};
use crate::emulation::StimulusSender;
use crate::report::{ReportContext, Status, TestRecord};
use crate::rpc::{catalog, DeviceClient};

use super::scenario::{Scenario, Step, Verify};

const SEPARATOR: &str = "---------------------------------------------------------------------------";

/// Shared handles for one run of scenarios
///
/// Built once per run and passed into every test case; test cases own no
/// state of their own beyond their script.
pub struct RunContext {
    pub device: DeviceClient,
    pub stimulus: StimulusSender,
    pub timeouts: Timeouts,
}

/// Run one test case scenario from a YAML file
///
/// Returns the record that was appended to the report. An `Err` means the
/// case could not be executed at all (unreadable file, unknown command);
/// no report row is written in that situation.
pub async fn run_scenario(
    path: &Path,
    run: &RunContext,
    report: &mut ReportContext,
    verbose: bool,
) -> Result<TestRecord> {
    let scenario = Scenario::load(path)?;

    // Resolve every command name up front so an unknown alias fails the
    // case before any stimulus has been sent.
    for step in &scenario.steps {
        if let Step::Command { method, .. } | Step::WaitUntil { method, .. } = step {
            resolve(method)?;
        }
    }
    resolve(&scenario.verify.method)?;

    println!(
        "\n{} {}",
        "Running Test:".blue().bold(),
        scenario.name.white().bold()
    );
    if let Some(desc) = &scenario.description {
        println!("TC Description - {}", desc);
    }
    println!("{}", SEPARATOR);

    for step in &scenario.steps {
        execute_step(run, step, verbose).await?;
    }

    println!("{}", SEPARATOR);

    let record = execute_verify(run, &scenario.name, &scenario.verify).await;

    // Terminal log block, one case at a time
    println!("Testcase ID : {}", record.id);
    println!("Testcase Output Response : {}", record.response);
    let status = match record.status {
        Status::Pass => "Pass".green().bold(),
        Status::Fail => "Fail".red().bold(),
    };
    println!("Testcase Status : {}", status);
    println!("Testcase Message : {}", record.message);
    println!();

    report.record(&record)?;

    Ok(record)
}

/// Execute a single setup step
async fn execute_step(run: &RunContext, step: &Step, verbose: bool) -> Result<()> {
    match step {
        Step::Stimulus { event, payload } => {
            if verbose {
                println!("  > stimulus {} {}", event, payload);
            }
            // The mock listener answering non-2xx is logged and ignored;
            // the verify comparison decides the case.
            if let Err(e) = run.stimulus.send(event, payload).await {
                error!("sendMessage emulation failed for {}: {}", event, e);
            }
            Ok(())
        }

        Step::Command { method, params } => {
            let method = resolve(method)?;
            if verbose {
                println!("  > command {}", method);
            }
            let response = run.device.dispatch_logged(method, params.clone()).await;
            if response.is_empty() {
                warn!("setup command {} returned no response", method);
            }
            Ok(())
        }

        Step::Settle { secs } => {
            let secs = secs.unwrap_or(run.timeouts.settle_secs);
            if verbose {
                println!("  > settle {}s", secs);
            }
            tokio::time::sleep(Duration::from_secs(secs)).await;
            Ok(())
        }

        Step::WaitUntil {
            method,
            params,
            contains,
            timeout_secs,
            interval_ms,
        } => {
            let method = resolve(method)?;
            let timeout = Duration::from_secs(timeout_secs.unwrap_or(run.timeouts.poll_timeout_secs));
            let interval = Duration::from_millis(interval_ms.unwrap_or(run.timeouts.poll_interval_ms));

            if verbose {
                println!(
                    "  > wait_until {} contains {:?} (timeout {:?})",
                    method, contains, timeout
                );
            }

            let started = Instant::now();
            loop {
                let response = run.device.dispatch_logged(method, params.clone()).await;
                if response.contains(contains) {
                    info!("condition {:?} observed on {}", contains, method);
                    return Ok(());
                }
                if started.elapsed() >= timeout {
                    // The case goes on; an unmet condition shows up as a
                    // mismatch when the verify command runs.
                    error!(
                        "condition {:?} not observed on {} within {:?}",
                        contains, method, timeout
                    );
                    return Ok(());
                }
                tokio::time::sleep(interval).await;
            }
        }
    }
}

/// Dispatch the verify command and close the comparison
async fn execute_verify(run: &RunContext, id: &str, verify: &Verify) -> TestRecord {
    // resolve() was checked before any step ran
    let method = catalog::resolve(&verify.method).unwrap_or(&verify.method);

    let actual = run.device.dispatch_logged(method, verify.params.clone()).await;

    // Exact-match law: any whitespace or key-order difference fails, even
    // if the JSON is semantically equivalent.
    if actual == verify.expect {
        TestRecord {
            id: id.to_string(),
            response: actual,
            status: Status::Pass,
            message: verify
                .pass_message
                .clone()
                .unwrap_or_else(|| "Output response is matching with expected one".to_string()),
        }
    } else {
        println!("Expected : {}", verify.expect);
        println!("Received : {}", actual);
        TestRecord {
            id: id.to_string(),
            response: actual,
            status: Status::Fail,
            message: verify
                .fail_message
                .clone()
                .unwrap_or_else(|| "Output response is different from expected one".to_string()),
        }
    }
}

fn resolve(name: &str) -> Result<&str> {
    catalog::resolve(name).ok_or_else(|| Error::UnknownCommand(name.to_string()))
}
