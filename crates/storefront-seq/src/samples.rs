//! Literal datasets and the sample usages run against them.

use serde::Serialize;
use serde_json::{Value, json};

use crate::{accumulate, select, transform};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub name: &'static str,
    pub age: u32,
    pub state: &'static str,
}

pub const NUMBERS: [i64; 5] = [2, 4, 6, 7, 8];
pub const FILTER_NUMBERS: [i64; 6] = [2, 4, 6, 7, 8, 10];
pub const SUM_NUMBERS: [i64; 5] = [1, 2, 3, 4, 5];

pub fn roster() -> Vec<Student> {
    vec![
        Student {
            name: "Prabir",
            age: 20,
            state: "Odisha",
        },
        Student {
            name: "Rohit",
            age: 22,
            state: "Karnatak",
        },
        Student {
            name: "Prithvi",
            age: 23,
            state: "Delhi",
        },
        Student {
            name: "Arvind",
            age: 25,
            state: "Bihar",
        },
    ]
}

/// Names of the students older than `age`, in roster order.
pub fn names_older_than(students: &[Student], age: u32) -> Vec<&'static str> {
    let older = select(students, |s, _, _| s.age > age);
    transform(&older, |s, _, _| s.name)
}

/// A labelled sample result.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub label: &'static str,
    pub value: Value,
}

/// Run every sample usage in order.
pub fn run_all() -> Vec<Sample> {
    let students = roster();

    vec![
        Sample {
            label: "doubled",
            value: json!(transform(&NUMBERS, |n, _, _| n * 2)),
        },
        Sample {
            label: "greater than 5",
            value: json!(select(&FILTER_NUMBERS, |n, _, _| *n > 5)),
        },
        Sample {
            label: "sum",
            value: json!(accumulate(&SUM_NUMBERS, |acc, n, _, _| acc + n, 0i64)),
        },
        Sample {
            label: "names upper-cased",
            value: json!(transform(&students, |s, _, _| s.name.to_uppercase())),
        },
        Sample {
            label: "older than 22",
            value: json!(select(&students, |s, _, _| s.age > 22)),
        },
        Sample {
            label: "sum of ages",
            value: json!(accumulate(&students, |acc, s, _, _| acc + s.age, 0u32)),
        },
        Sample {
            label: "names older than 22",
            value: json!(names_older_than(&students, 22)),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of(label: &str) -> Value {
        run_all()
            .into_iter()
            .find(|s| s.label == label)
            .map(|s| s.value)
            .unwrap()
    }

    #[test]
    fn test_names_older_than_22() {
        assert_eq!(names_older_than(&roster(), 22), vec!["Prithvi", "Arvind"]);
    }

    #[test]
    fn test_sample_results() {
        assert_eq!(value_of("doubled"), json!([4, 8, 12, 14, 16]));
        assert_eq!(value_of("greater than 5"), json!([6, 7, 8, 10]));
        assert_eq!(value_of("sum"), json!(15));
        assert_eq!(
            value_of("names upper-cased"),
            json!(["PRABIR", "ROHIT", "PRITHVI", "ARVIND"])
        );
        assert_eq!(value_of("sum of ages"), json!(90));
        assert_eq!(value_of("names older than 22"), json!(["Prithvi", "Arvind"]));
    }

    #[test]
    fn test_older_than_22_keeps_records() {
        assert_eq!(
            value_of("older than 22"),
            json!([
                { "name": "Prithvi", "age": 23, "state": "Delhi" },
                { "name": "Arvind", "age": 25, "state": "Bihar" }
            ])
        );
    }
}
