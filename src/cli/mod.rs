//! CLI command handling
//!
//! Dispatches CLI commands: collects scenario files, owns the run-wide
//! resources (HTTP clients, listener handle, report context) and formats
//! the end-of-run output.

use std::path::{Path, PathBuf};

use colored::Colorize;
use tracing::error;

use crate::commands::Commands;
use crate::common::{Config, Error, Result};
use crate::emulation::{MockListener, StimulusSender};
use crate::harness::{run_scenario, RunContext, Scenario};
use crate::report::ReportContext;
use crate::rpc::{catalog, DeviceClient};

/// Dispatch a CLI command
pub async fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            paths,
            report,
            device_url,
            control_url,
            verbose,
        } => {
            let mut config = Config::load()?;
            if let Some(url) = device_url {
                config.endpoints.device_url = url;
            }
            if let Some(url) = control_url {
                config.endpoints.control_url = url;
            }
            if let Some(path) = report {
                config.report.path = path;
            }

            run(&config, &paths, verbose).await
        }

        Commands::Validate { path } => {
            let scenario = Scenario::load(&path)?;
            for step in &scenario.steps {
                if let crate::harness::Step::Command { method, .. }
                | crate::harness::Step::WaitUntil { method, .. } = step
                {
                    catalog::resolve(method)
                        .ok_or_else(|| Error::UnknownCommand(method.clone()))?;
                }
            }
            catalog::resolve(&scenario.verify.method)
                .ok_or_else(|| Error::UnknownCommand(scenario.verify.method.clone()))?;

            println!(
                "{} {} ({} step(s), verify {})",
                "OK".green().bold(),
                scenario.name,
                scenario.steps.len(),
                scenario.verify.method
            );
            Ok(())
        }

        Commands::Apis => {
            println!("Known device commands:");
            for api in catalog::APIS {
                println!("  {:36} {}", api.alias, api.method);
                println!("  {:36} {}", "", api.description.dimmed());
            }
            Ok(())
        }

        Commands::Mock { port } => {
            let addr = format!("127.0.0.1:{}", port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            println!("Mock CEC HAL listening at http://{}", addr);
            crate::mock::serve(listener).await?;
            Ok(())
        }
    }
}

/// Execute a full run of scenarios
async fn run(config: &Config, paths: &[PathBuf], verbose: bool) -> Result<()> {
    let scenarios = collect_scenarios(paths)?;

    let device = DeviceClient::new(&config.endpoints.device_url, config.timeouts.request_secs)?;
    let stimulus =
        StimulusSender::new(&config.endpoints.control_url, config.timeouts.request_secs)?;
    let run = RunContext {
        device,
        stimulus: stimulus.clone(),
        timeouts: config.timeouts.clone(),
    };

    let mut report = ReportContext::open(&config.report.path)?;

    // The listener is a run-scoped resource: initialized once here, reset
    // once after the last case, never from inside a scenario.
    let listener = MockListener::acquire(stimulus).await?;

    let mut not_executed = 0usize;
    for path in &scenarios {
        match run_scenario(path, &run, &mut report, verbose).await {
            Ok(_) => {}
            Err(e) => {
                // No report row for a case that never reached its
                // comparison; it still fails the run.
                error!("test case '{}' was not executed: {}", path.display(), e);
                not_executed += 1;
            }
        }
    }

    listener.release().await;
    report.print_summary();

    let failed = report.failed().len() + not_executed;
    if failed > 0 {
        return Err(Error::ScenariosFailed { failed });
    }

    Ok(())
}

/// Expand files and directories into an ordered list of scenario files
///
/// Directory entries are sorted by name so report rows land in a stable
/// execution order.
fn collect_scenarios(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut scenarios = Vec::new();

    for path in paths {
        if path.is_dir() {
            let mut entries: Vec<PathBuf> = std::fs::read_dir(path)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| is_scenario_file(p))
                .collect();
            entries.sort();
            scenarios.extend(entries);
        } else {
            scenarios.push(path.clone());
        }
    }

    if scenarios.is_empty() {
        let shown = paths
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(Error::NoScenarios(shown));
    }

    Ok(scenarios)
}

fn is_scenario_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_scenarios_sorts_directory_entries() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["TCID008.yaml", "TCID004.yaml", "notes.txt", "TCID013.yml"] {
            std::fs::write(dir.path().join(name), "x").unwrap();
        }

        let scenarios = collect_scenarios(&[dir.path().to_path_buf()]).unwrap();
        let names: Vec<_> = scenarios
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, ["TCID004.yaml", "TCID008.yaml", "TCID013.yml"]);
    }

    #[test]
    fn test_collect_scenarios_rejects_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            collect_scenarios(&[dir.path().to_path_buf()]),
            Err(Error::NoScenarios(_))
        ));
    }
}
