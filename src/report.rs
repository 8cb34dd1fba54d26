use crate::harness::{TestRecord, TestStatus};
use crate::value::{Sequence, Value};
use itertools::Itertools;
use owo_colors::OwoColorize;
use std::io;

const NAME_WIDTH: usize = 35;
const INPUT_WIDTH: usize = 30;
const STATUS_WIDTH: usize = 8;
const DURATION_WIDTH: usize = 13;
const ERROR_WIDTH: usize = 25;

/// Renders an ordered set of test records as a fixed-width console table
/// with a summary row. The format is presentational only; nothing in the
/// counting contract depends on it.
#[allow(clippy::cast_precision_loss)]
pub fn render(records: &[TestRecord], out: &mut impl io::Write) -> io::Result<()> {
    let total_width = NAME_WIDTH + INPUT_WIDTH + STATUS_WIDTH + DURATION_WIDTH + ERROR_WIDTH + 16;

    writeln!(out, "{}", "=".repeat(total_width))?;
    writeln!(out, "TEST RESULTS")?;
    writeln!(out, "{}", "=".repeat(total_width))?;

    writeln!(
        out,
        "| {} | {} | {} | {} | {} |",
        pad("Test Case", NAME_WIDTH),
        pad("Input Data", INPUT_WIDTH),
        pad("Status", STATUS_WIDTH),
        pad("Duration (ms)", DURATION_WIDTH),
        pad("Error Message", ERROR_WIDTH),
    )?;
    write_separator(out)?;

    for record in records {
        let status = match record.status {
            TestStatus::Pass => format!("{}", pad("✓ PASS", STATUS_WIDTH).green()),
            TestStatus::Fail => format!("{}", pad("✗ FAIL", STATUS_WIDTH).red()),
        };
        let error = record.error.as_deref().unwrap_or("-");

        writeln!(
            out,
            "| {} | {} | {} | {} | {} |",
            pad(&record.name, NAME_WIDTH),
            pad(&format_input(&record.input, INPUT_WIDTH), INPUT_WIDTH),
            status,
            pad(&record.duration_ms.to_string(), DURATION_WIDTH),
            pad(&truncate(error, ERROR_WIDTH), ERROR_WIDTH),
        )?;
    }

    write_separator(out)?;

    let passed = records
        .iter()
        .filter(|record| record.status == TestStatus::Pass)
        .count();
    let total = records.len();
    let failed = total - passed;
    let total_duration: u128 = records.iter().map(|record| record.duration_ms).sum();
    let (avg_duration, success_rate) = if total == 0 {
        (0.0, 0.0)
    } else {
        (
            total_duration as f64 / total as f64,
            passed as f64 / total as f64 * 100.0,
        )
    };

    writeln!(
        out,
        "| {} | {} | {} | {} | {} |",
        pad("SUMMARY", NAME_WIDTH),
        pad("-", INPUT_WIDTH),
        pad(&format!("{passed}/{total}"), STATUS_WIDTH),
        pad(&format!("{avg_duration:.2} avg"), DURATION_WIDTH),
        pad(&format!("{success_rate:.1}% success"), ERROR_WIDTH),
    )?;
    writeln!(out, "{}", "=".repeat(total_width))?;

    if failed == 0 {
        writeln!(out, "{}", "All tests passed!".green().bold())?;
    } else {
        writeln!(out, "{}", format!("{failed} test(s) failed").red().bold())?;
    }
    writeln!(out, "Total execution time: {total_duration}ms")?;

    Ok(())
}

fn write_separator(out: &mut impl io::Write) -> io::Result<()> {
    writeln!(
        out,
        "|{}|{}|{}|{}|{}|",
        "-".repeat(NAME_WIDTH + 2),
        "-".repeat(INPUT_WIDTH + 2),
        "-".repeat(STATUS_WIDTH + 2),
        "-".repeat(DURATION_WIDTH + 2),
        "-".repeat(ERROR_WIDTH + 2),
    )
}

/// Pads to `width` display characters without truncating mid-codepoint.
fn pad(text: &str, width: usize) -> String {
    let length = text.chars().count();
    if length >= width {
        return text.to_string();
    }
    let mut padded = String::from(text);
    padded.extend(std::iter::repeat(' ').take(width - length));
    padded
}

fn truncate(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
    format!("{kept}...")
}

/// Short preview of a counting input. Long lists are summarized by length
/// and their first three elements; everything is capped at `max_length`.
fn format_input(input: &Value, max_length: usize) -> String {
    let formatted = match input {
        Value::Sequence(Sequence::List(items)) if items.is_empty() => "[]".to_string(),
        Value::Sequence(Sequence::List(items)) if items.len() > 20 => {
            let sample = items.iter().take(3).map(|item| format!("{item:?}")).join(",");
            format!("[{} items: {sample}...]", items.len())
        }
        Value::Sequence(Sequence::List(items)) => {
            let body = items.iter().map(|item| format!("{item:?}")).join(",");
            format!("[{body}]")
        }
        other => format!("{other:?}"),
    };
    truncate(&formatted, max_length)
}

#[cfg(test)]
mod tests {
    use super::{format_input, pad, render, truncate};
    use crate::harness::{run_builtin_suite, TestRecord, TestStatus};
    use crate::value::Value;

    #[test]
    fn empty_list_previews_as_brackets() {
        assert_eq!(format_input(&Value::from(Vec::<Value>::new()), 30), "[]");
    }

    #[test]
    fn short_lists_show_every_element() {
        let input = Value::from(vec![Value::from(1), Value::from("a"), Value::Undefined]);
        assert_eq!(format_input(&input, 30), "[1,\"a\",undefined]");
    }

    #[test]
    fn long_lists_are_summarized() {
        let input = Value::from((0..1000).map(Value::from).collect::<Vec<Value>>());
        assert_eq!(format_input(&input, 40), "[1000 items: 0,1,2...]");
    }

    #[test]
    fn previews_are_truncated() {
        let long = "x".repeat(50);
        let preview = truncate(&long, 10);
        assert_eq!(preview.chars().count(), 10);
        assert!(preview.ends_with("..."));
    }

    #[test]
    fn padding_counts_characters_not_bytes() {
        assert_eq!(pad("🚀", 4).chars().count(), 4);
    }

    #[test]
    fn renders_the_builtin_suite() {
        let records = run_builtin_suite();
        let mut out = Vec::new();
        render(&records, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("TC-001: Array with unique items"));
        assert!(text.contains("15/15"));
        assert!(text.contains("All tests passed!"));
    }

    #[test]
    fn failed_records_surface_their_error() {
        let records = vec![TestRecord {
            name: "broken".to_string(),
            input: Value::Null,
            status: TestStatus::Fail,
            duration_ms: 1,
            error: Some("Input must be an array".to_string()),
        }];
        let mut out = Vec::new();
        render(&records, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Input must be an array"));
        assert!(text.contains("1 test(s) failed"));
    }
}
