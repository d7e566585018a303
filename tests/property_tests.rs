//! Property-based tests for the scalar literals and table rows.
//!
//! These complement the integration tests by checking that generated
//! literals load to exactly the value they were written from.

use proptest::prelude::*;
use serde_fable::{load_str, Value};

fn load_one(input: &str) -> Option<Value> {
    match load_str(input) {
        Ok(doc) => doc.value("x").cloned(),
        Err(e) => {
            eprintln!("Load failed: {}", e);
            eprintln!("Input was: {}", input);
            None
        }
    }
}

fn with_digit_groups(digits: &str) -> String {
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 {
            grouped.push('_');
        }
        grouped.push(c);
    }
    grouped
}

proptest! {
    #[test]
    fn prop_integer(n in any::<i64>()) {
        prop_assert_eq!(load_one(&format!("integer x {}", n)), Some(Value::Integer(n)));
    }

    #[test]
    fn prop_integer_truncates(n in any::<i64>(), frac in "[0-9]{1,6}") {
        prop_assert_eq!(
            load_one(&format!("integer x {}.{}", n, frac)),
            Some(Value::Integer(n))
        );
    }

    #[test]
    fn prop_float(f in -1e300f64..1e300f64) {
        prop_assert_eq!(load_one(&format!("float x {}", f)), Some(Value::Float(f)));
    }

    #[test]
    fn prop_float_digit_groups(n in any::<u32>()) {
        let grouped = with_digit_groups(&n.to_string());
        prop_assert_eq!(
            load_one(&format!("float x {}", grouped)),
            Some(Value::Float(f64::from(n)))
        );
    }

    #[test]
    fn prop_string(s in "[a-zA-Z0-9 .,#()_-]{0,30}") {
        prop_assert_eq!(
            load_one(&format!("string x \"{}\"  # comment", s)),
            Some(Value::String(s))
        );
    }

    #[test]
    fn prop_nullable(b in any::<bool>(), null in any::<bool>()) {
        let literal = if null { "null".to_string() } else { b.to_string() };
        let expected = if null { Value::Null } else { Value::Boolean(b) };
        prop_assert_eq!(load_one(&format!("boolean? x {}", literal)), Some(expected));
    }

    #[test]
    fn prop_table_rows(rows in prop::collection::vec((any::<i32>(), any::<bool>()), 0..20)) {
        let mut input = String::from("table x\ninteger,boolean\n");
        for (n, b) in &rows {
            input.push_str(&format!("{},{}\n", n, b));
        }

        let doc = load_str(&input).unwrap();
        let table = doc.table("x").unwrap();
        prop_assert_eq!(table.len(), rows.len());
        for (row, (n, b)) in table.rows().iter().zip(&rows) {
            prop_assert_eq!(row, &vec![Value::Integer(i64::from(*n)), Value::Boolean(*b)]);
        }
    }
}
