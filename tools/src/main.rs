//! demo-runner: headless runner for the fraud analysis demo.
//!
//! Usage:
//!   demo-runner --seed 42 --amount 150 --time 50000 --scenario random
//!   demo-runner --seed 42 --ipc-mode

use anyhow::Result;
use frauddemo_core::{
    analysis::Analyzer,
    config::DemoConfig,
    report::{render_model_card, render_report},
    transaction::{Scenario, TransactionInput},
};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::thread;
use std::time::Duration;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    Analyze {
        amount: f64,
        time: i64,
        scenario: String,
    },
    GetDefaults,
    Quit,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");

    let mut config = match args
        .windows(2)
        .find(|w| w[0] == "--config")
        .map(|w| w[1].as_str())
    {
        Some(path) => DemoConfig::load(Path::new(path))?,
        None => DemoConfig::default(),
    };
    if let Some(delay) = args
        .windows(2)
        .find(|w| w[0] == "--delay-ms")
        .and_then(|w| w[1].parse().ok())
    {
        config.processing_delay_ms = delay;
    }

    let amount = parse_arg(&args, "--amount", config.input_domain.default_amount);
    let time = parse_arg(&args, "--time", config.input_domain.default_time_seconds);
    let scenario_label = args
        .windows(2)
        .find(|w| w[0] == "--scenario")
        .map(|w| w[1].clone())
        .unwrap_or_else(|| "random".to_string());

    let mut analyzer = Analyzer::new(seed, config)?;

    if ipc_mode {
        run_ipc_loop(&mut analyzer)?;
    } else {
        run_one_shot(&mut analyzer, amount, time, &scenario_label)?;
    }

    Ok(())
}

fn run_one_shot(
    analyzer: &mut Analyzer,
    amount: f64,
    time: i64,
    scenario_label: &str,
) -> Result<()> {
    println!("Fraud Analysis Demo");
    println!("  seed:     {}", analyzer.seed());
    println!("  amount:   {amount}");
    println!("  time:     {time}");
    println!("  scenario: {scenario_label}");
    println!();

    let scenario = Scenario::parse(scenario_label)?;
    let input = TransactionInput::new(amount, time, scenario, &analyzer.config().input_domain)?;

    // The original demo shows a spinner here. Same effect, no spinner.
    let delay = analyzer.config().processing_delay_ms;
    if delay > 0 {
        log::debug!("Simulating {delay}ms of processing");
        thread::sleep(Duration::from_millis(delay));
    }

    let result = analyzer.analyze(input)?;
    println!("{}", render_report(&result));
    println!("{}", render_model_card());
    Ok(())
}

/// Newline-delimited JSON commands on stdin, one JSON response per line.
/// Bad commands get an error object; the loop keeps running.
fn run_ipc_loop(analyzer: &mut Analyzer) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                write_error(&mut stdout, &e.to_string())?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::GetDefaults => {
                let defaults =
                    TransactionInput::defaults(&analyzer.config().input_domain);
                writeln!(stdout, "{}", serde_json::to_string(&defaults)?)?;
            }
            IpcCommand::Analyze {
                amount,
                time,
                scenario,
            } => match handle_analyze(analyzer, amount, time, &scenario) {
                Ok(json) => writeln!(stdout, "{json}")?,
                Err(e) => {
                    log::warn!("Analyze rejected: {e}");
                    write_error(&mut stdout, &e.to_string())?;
                }
            },
        }
        stdout.flush()?;
    }
    Ok(())
}

fn handle_analyze(
    analyzer: &mut Analyzer,
    amount: f64,
    time: i64,
    scenario_label: &str,
) -> Result<String> {
    let scenario = Scenario::parse(scenario_label)?;
    let input =
        TransactionInput::new(amount, time, scenario, &analyzer.config().input_domain)?;
    let result = analyzer.analyze(input)?;
    Ok(serde_json::to_string(&result)?)
}

fn write_error(stdout: &mut io::Stdout, message: &str) -> Result<()> {
    let err_json = serde_json::json!({ "error": message });
    writeln!(stdout, "{}", err_json)?;
    stdout.flush()?;
    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
