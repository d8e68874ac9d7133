use serde_json::{Number, Value};

/// Render a record field the way string interpolation in a page script would.
///
/// A missing field prints `undefined`; integral numbers drop their fractional
/// part; very large or small numbers use exponent notation; objects print
/// `[object Object]`.
pub fn display_field(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(v) => display_value(v),
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => display_number(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                // nested holes print as empty
                Value::Null => String::new(),
                other => display_value(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Numbers print like a double converted to text: shortest round-trip digits,
/// plain notation for decimal exponents in `-7..21`, `d.ddde±N` otherwise.
fn display_number(n: &Number) -> String {
    match n.as_f64() {
        Some(f) => display_f64(f),
        None => n.to_string(),
    }
}

fn display_f64(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f == 0.0 {
        return "0".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if f < 0.0 {
        return format!("-{}", display_f64(-f));
    }

    // `{:e}` yields the shortest digits that round-trip, e.g. "1.5e-7"
    let sci = format!("{f:e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exp: i32 = exp.parse().unwrap_or(0);

    let k = digits.len() as i32;
    let n = exp + 1;

    if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let sign = if n - 1 < 0 { '-' } else { '+' };
        let e = (n - 1).abs();
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{sign}{e}")
        } else {
            format!("{first}.{rest}e{sign}{e}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn show(value: Value) -> String {
        display_field(Some(&value))
    }

    #[test]
    fn test_missing_is_undefined() {
        assert_eq!(display_field(None), "undefined");
        assert_eq!(show(Value::Null), "null");
    }

    #[test]
    fn test_numbers() {
        assert_eq!(show(json!(5)), "5");
        assert_eq!(show(json!(-42)), "-42");
        assert_eq!(show(json!(10.0)), "10");
        assert_eq!(show(json!(-0.0)), "0");
        assert_eq!(show(json!(2.5)), "2.5");
        assert_eq!(show(json!(-0.1)), "-0.1");
        assert_eq!(show(json!(0.000001)), "0.000001");
    }

    #[test]
    fn test_large_and_small_numbers() {
        assert_eq!(show(json!(1e21)), "1e+21");
        assert_eq!(show(json!(2.5e30)), "2.5e+30");
        assert_eq!(show(json!(1.5e-7)), "1.5e-7");
        assert_eq!(show(json!(1e-7)), "1e-7");
        assert_eq!(show(json!(1.2345678901234568e20)), "123456789012345680000");
    }

    #[test]
    fn test_integers_beyond_double_precision_round() {
        assert_eq!(show(json!(u64::MAX)), "18446744073709552000");
        assert_eq!(show(json!(i64::MIN)), "-9223372036854776000");
        assert_eq!(show(json!(9007199254740993u64)), "9007199254740992");
    }

    #[test]
    fn test_compound_values() {
        assert_eq!(show(json!([1, null, "x"])), "1,,x");
        assert_eq!(show(json!({ "a": 1 })), "[object Object]");
        assert_eq!(show(json!(true)), "true");
    }
}
