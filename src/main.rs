use clap::Parser;
use std::fs;
use std::io::Read;

use probex::{HybridConfig, SortedSequence, Strategy};
use serde::Serialize;

mod cli;
use cli::{Cli, Commands, StrategyArg};

/// What `find` prints (directly, or as JSON with `--json`).
#[derive(Debug, Serialize)]
struct FindOutput {
    target: f64,
    index: Option<usize>,
    strategy: Strategy,
    /// Interpolation probes taken; only populated by the hybrid strategy.
    #[serde(skip_serializing_if = "Option::is_none")]
    probes: Option<usize>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Find {
            target,
            file,
            strategy,
            threshold,
            json,
        } => {
            if let Err(e) = run_find(target, file.as_deref(), strategy, threshold, json) {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn run_find(
    target: f64,
    file: Option<&str>,
    strategy: StrategyArg,
    threshold: Option<f64>,
    json: bool,
) -> Result<(), String> {
    let raw = match file {
        Some(path) => {
            fs::read_to_string(path).map_err(|e| format!("cannot read {}: {}", path, e))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("cannot read stdin: {}", e))?;
            buf
        }
    };

    let values = parse_sequence(&raw)?;
    let output = find_in_values(&values, target, strategy, threshold)?;

    if json {
        let line = serde_json::to_string(&output).map_err(|e| e.to_string())?;
        println!("{}", line);
    } else {
        match output.index {
            Some(i) => println!("found {} at index {}", output.target, i),
            None => println!("{} not found", output.target),
        }
    }

    Ok(())
}

fn parse_sequence(raw: &str) -> Result<Vec<f64>, String> {
    raw.split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| format!("not a number: {:?}", token))
        })
        .collect()
}

fn find_in_values(
    values: &[f64],
    target: f64,
    strategy: StrategyArg,
    threshold: Option<f64>,
) -> Result<FindOutput, String> {
    let seq = SortedSequence::new(values).map_err(|e| e.to_string())?;

    let output = match strategy {
        StrategyArg::Fibonacci => FindOutput {
            target,
            index: seq.fibonacci(target),
            strategy: Strategy::Fibonacci,
            probes: None,
        },
        StrategyArg::Interpolation => FindOutput {
            target,
            index: seq.interpolation(target),
            strategy: Strategy::Interpolation,
            probes: None,
        },
        StrategyArg::Hybrid => {
            let config = match threshold {
                Some(deviation_threshold) => {
                    if deviation_threshold.is_nan() || deviation_threshold < 0.0 {
                        return Err(format!(
                            "threshold must be non-negative, got {}",
                            deviation_threshold
                        ));
                    }
                    HybridConfig {
                        deviation_threshold,
                    }
                }
                None => HybridConfig::default(),
            };
            let report = seq.hybrid_with(target, &config);
            FindOutput {
                target,
                index: report.index,
                strategy: report.resolved_by,
                probes: Some(report.probes),
            }
        }
    };

    Ok(output)
}
