#![allow(clippy::print_stdout, clippy::print_stderr, clippy::exit)]

use clap::{Parser, Subcommand};
use freqtab::frequency::frequency_table;
use freqtab::harness::{run_builtin_suite, TestStatus};
use freqtab::report;
use freqtab::value::Value;
use std::process;

#[derive(Parser)]
#[command(name = "freqtab")]
#[command(version = "0.1.0")]
#[command(about = "Count occurrences of each distinct item in a sequence")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Count the items given as arguments and print their frequencies
    Count {
        /// Treat every item as text instead of inferring numbers, booleans,
        /// null and undefined
        #[arg(long)]
        raw: bool,
        items: Vec<String>,
    },
    /// Run the built-in verification suite and print the results table
    /// (this default action may be omitted)
    Check,
}

impl Default for Command {
    fn default() -> Self {
        Self::Check
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Count { raw, items } => {
            let values: Vec<Value> = items
                .iter()
                .map(|item| {
                    if raw {
                        Value::from(item.as_str())
                    } else {
                        parse_item(item)
                    }
                })
                .collect();

            let table = frequency_table(&Value::from(values))?;
            let key_width = table
                .iter()
                .map(|(key, _)| key.as_str().chars().count())
                .max()
                .unwrap_or(0);
            for (key, count) in &table {
                println!("{:<key_width$}  {count}", key.as_str());
            }
        }
        Command::Check => {
            let records = run_builtin_suite();
            let failed = records
                .iter()
                .any(|record| record.status == TestStatus::Fail);

            let stdout = std::io::stdout();
            report::render(&records, &mut stdout.lock())?;

            if failed {
                process::exit(1);
            }
        }
    }
    Ok(())
}

/// Interprets a command line item the way a script literal would read:
/// integers and floats become numbers, `true`/`false` booleans, `null` and
/// `undefined` the respective markers, everything else stays text.
fn parse_item(item: &str) -> Value {
    match item {
        "null" => return Value::Null,
        "undefined" => return Value::Undefined,
        "true" => return Value::from(true),
        "false" => return Value::from(false),
        _ => {}
    }
    if let Ok(int) = item.parse::<i64>() {
        return Value::from(int);
    }
    if let Ok(float) = item.parse::<f64>() {
        return Value::from(float);
    }
    Value::from(item)
}
