use crate::frequency::frequency_table;
use crate::value::{Sequence, Value};
use anyhow::{anyhow, ensure};
use std::rc::Rc;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestStatus {
    Pass,
    Fail,
}

/// One completed check: what ran, what it was fed, how it went.
#[derive(Debug)]
pub struct TestRecord {
    pub name: String,
    pub input: Value,
    pub status: TestStatus,
    pub duration_ms: u128,
    pub error: Option<String>,
}

/// Accumulates results of checks run against the counter. The runner owns
/// its records and hands them over through [`TestRunner::into_records`];
/// there is no process-wide state.
#[derive(Debug, Default)]
pub struct TestRunner {
    records: Vec<TestRecord>,
}

impl TestRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `check` against `input`, timing it and recording the outcome.
    /// Returns whether the check passed; a failed check contributes a record
    /// carrying the error's display text.
    pub fn run(
        &mut self,
        name: &str,
        input: Value,
        check: impl FnOnce(&Value) -> anyhow::Result<()>,
    ) -> bool {
        let start = Instant::now();
        let result = check(&input);
        let duration_ms = start.elapsed().as_millis();

        let passed = result.is_ok();
        self.records.push(TestRecord {
            name: name.to_string(),
            input,
            status: if passed {
                TestStatus::Pass
            } else {
                TestStatus::Fail
            },
            duration_ms,
            error: result.err().map(|err| err.to_string()),
        });
        passed
    }

    #[must_use]
    pub fn records(&self) -> &[TestRecord] {
        &self.records
    }

    #[must_use]
    pub fn into_records(self) -> Vec<TestRecord> {
        self.records
    }

    #[must_use]
    pub fn passed(&self) -> usize {
        self.records
            .iter()
            .filter(|record| record.status == TestStatus::Pass)
            .count()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.passed() == self.total()
    }
}

/// Asserts that counting `input` produces exactly the given key/count pairs.
fn expect_table(input: &Value, expected: &[(&str, usize)]) -> anyhow::Result<()> {
    let table = frequency_table(input)?;
    ensure!(
        table.len() == expected.len(),
        "expected {} distinct keys, got {}",
        expected.len(),
        table.len()
    );
    for (key, count) in expected {
        let actual = table
            .get(key)
            .ok_or_else(|| anyhow!("missing key {key:?}"))?;
        ensure!(
            actual == *count,
            "key {key:?}: expected count {count}, got {actual}"
        );
    }
    Ok(())
}

/// Asserts that counting `input` is rejected with the fixed message.
fn expect_not_an_array(input: &Value) -> anyhow::Result<()> {
    match frequency_table(input) {
        Ok(_) => Err(anyhow!("expected an error for non-array input")),
        Err(err) => {
            ensure!(
                err.to_string() == "Input must be an array",
                "unexpected error message: {err}"
            );
            Ok(())
        }
    }
}

fn list<T: Into<Value>>(items: Vec<T>) -> Value {
    Value::from(items)
}

/// Runs the built-in verification suite and returns its records in order.
#[must_use]
pub fn run_builtin_suite() -> Vec<TestRecord> {
    let mut runner = TestRunner::new();

    runner.run(
        "TC-001: Array with unique items",
        list(vec![1, 2, 3, 4]),
        |input| expect_table(input, &[("1", 1), ("2", 1), ("3", 1), ("4", 1)]),
    );

    runner.run(
        "TC-002: Array with duplicate items",
        list(vec![1, 2, 2, 3, 3, 3]),
        |input| expect_table(input, &[("1", 1), ("2", 2), ("3", 3)]),
    );

    runner.run(
        "TC-003: Array with all same items",
        list(vec![5, 5, 5, 5, 5]),
        |input| expect_table(input, &[("5", 5)]),
    );

    runner.run(
        "TC-004: String array",
        list(vec!["a", "b", "a", "c", "b", "a"]),
        |input| expect_table(input, &[("a", 3), ("b", 2), ("c", 1)]),
    );

    runner.run(
        "TC-005: Mixed types array",
        list(vec![
            Value::from(1),
            Value::from("1"),
            Value::from(1),
            Value::from("1"),
            Value::from("a"),
        ]),
        // the number 1 and the text "1" coerce to the same key
        |input| expect_table(input, &[("1", 4), ("a", 1)]),
    );

    runner.run(
        "TC-006: Array with null/undefined",
        list(vec![
            Value::Null,
            Value::Undefined,
            Value::Null,
            Value::from("test"),
        ]),
        |input| expect_table(input, &[("null", 2), ("undefined", 1), ("test", 1)]),
    );

    runner.run(
        "TC-007: Array with boolean values",
        list(vec![true, false, true, true, false]),
        |input| expect_table(input, &[("true", 3), ("false", 2)]),
    );

    runner.run("TC-008: Empty array", list(Vec::<Value>::new()), |input| {
        expect_table(input, &[])
    });

    runner.run("TC-009: Single item array", list(vec![42]), |input| {
        expect_table(input, &[("42", 1)])
    });

    runner.run(
        "TC-010: Unicode characters",
        list(vec!["🚀", "🍌", "🚀", "🍌", "🍌"]),
        |input| expect_table(input, &[("🚀", 2), ("🍌", 3)]),
    );

    runner.run(
        "TC-011: Special string characters",
        list(vec!["", " ", "  ", "", " "]),
        |input| expect_table(input, &[("", 2), (" ", 2), ("  ", 1)]),
    );

    runner.run(
        "TC-012: Large array",
        list((0..1000).map(|i| Value::from(i % 10)).collect::<Vec<Value>>()),
        |input| {
            let expected: Vec<(String, usize)> =
                (0..10).map(|digit| (digit.to_string(), 100)).collect();
            let expected: Vec<(&str, usize)> = expected
                .iter()
                .map(|(key, count)| (key.as_str(), *count))
                .collect();
            expect_table(input, &expected)
        },
    );

    runner.run(
        "TC-013: Input validation (non-array)",
        Value::from("not-an-array"),
        expect_not_an_array,
    );

    runner.run(
        "TC-014: Input validation (null)",
        Value::Null,
        expect_not_an_array,
    );

    runner.run(
        "TC-015: Input validation (object)",
        Value::Sequence(Sequence::Map(Rc::new(vec![
            ("a".to_string(), Value::from(1)),
            ("b".to_string(), Value::from(2)),
        ]))),
        expect_not_an_array,
    );

    runner.into_records()
}

#[cfg(test)]
mod tests {
    use super::{run_builtin_suite, TestRunner, TestStatus};
    use crate::value::Value;
    use anyhow::anyhow;

    #[test]
    fn runner_records_pass_and_fail_in_order() {
        let mut runner = TestRunner::new();
        assert!(runner.run("ok", Value::from(1), |_| Ok(())));
        assert!(!runner.run("broken", Value::Null, |_| Err(anyhow!("boom"))));

        let records = runner.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].status, TestStatus::Pass);
        assert_eq!(records[0].error, None);
        assert_eq!(records[1].status, TestStatus::Fail);
        assert_eq!(records[1].error.as_deref(), Some("boom"));
        assert_eq!(runner.passed(), 1);
        assert_eq!(runner.total(), 2);
        assert!(!runner.all_passed());
    }

    #[test]
    fn builtin_suite_passes() {
        let records = run_builtin_suite();
        assert_eq!(records.len(), 15);
        for record in &records {
            assert_eq!(
                record.status,
                TestStatus::Pass,
                "{} failed: {:?}",
                record.name,
                record.error
            );
        }
    }
}
