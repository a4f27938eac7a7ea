//! Field-level coercions shared by the source normalizers.
//!
//! Nothing here fails: every helper falls back to a fixed default when the
//! raw value is missing, mistyped or unparseable.

use serde_json::Value;

use crate::domain::RemoteFlag;

/// Text of a free-text field, copied verbatim. `None` when absent or null.
///
/// Scalars that are not strings are stringified; arrays and objects are kept
/// as compact JSON text.
pub fn text_field(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

/// Like [`text_field`] but only for truthy values: non-empty strings,
/// non-zero numbers and `true`. Used for the company filter and URL picks.
pub fn truthy_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64().map_or(true, |f| f != 0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// Parses a finite number out of trimmed text.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Splits a salary range such as `"50,000-70,000"` into `(min, max)`.
///
/// A single value is used for both bounds. Anything else, including more
/// than one `-`, yields `(0.0, 0.0)`.
pub fn parse_salary_range(value: Option<&Value>) -> (f64, f64) {
    let parsed = match value {
        Some(Value::String(s)) => parse_salary_text(s),
        Some(Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()).map(|v| (v, v)),
        _ => None,
    };
    parsed.unwrap_or((0.0, 0.0))
}

fn parse_salary_text(raw: &str) -> Option<(f64, f64)> {
    let cleaned = raw.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }

    match cleaned.split('-').collect::<Vec<_>>().as_slice() {
        [single] => {
            let amount = parse_number(single)?;
            Some((amount, amount))
        }
        [min, max] => Some((parse_number(min)?, parse_number(max)?)),
        _ => None,
    }
}

/// First truthy `url` among the object entries of a provider list.
pub fn pick_provider_url(value: Option<&Value>) -> Option<String> {
    value?
        .as_array()?
        .iter()
        .filter_map(Value::as_object)
        .find_map(|provider| truthy_text(provider.get("url")))
}

/// Best-effort float conversion. Absent, null and unparseable values are 0.0.
pub fn coerce_float(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
        Some(Value::String(s)) => parse_number(s).unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Maps a native boolean directly; otherwise only the trimmed literals
/// `1`, `True` and `true` count as remote.
pub fn normalize_remote_flag(value: Option<&Value>) -> RemoteFlag {
    let text = match value {
        Some(Value::Bool(b)) => return RemoteFlag::from(*b),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        _ => return RemoteFlag::No,
    };
    RemoteFlag::from(matches!(text.as_str(), "1" | "True" | "true"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn salary(raw: Value) -> (f64, f64) {
        parse_salary_range(Some(&raw))
    }

    #[test]
    fn test_salary_range_with_both_bounds() {
        assert_eq!(salary(json!("50000-70000")), (50000.0, 70000.0));
        assert_eq!(salary(json!(" 50,000 - 70,000 ")), (50000.0, 70000.0));
    }

    #[test]
    fn test_salary_single_value_sets_both_bounds() {
        assert_eq!(salary(json!("60000")), (60000.0, 60000.0));
        assert_eq!(salary(json!(60000)), (60000.0, 60000.0));
    }

    #[test]
    fn test_salary_inverted_range_is_kept() {
        assert_eq!(salary(json!("90000-10000")), (90000.0, 10000.0));
    }

    #[test]
    fn test_salary_unparseable_falls_back_to_zero() {
        assert_eq!(salary(json!("abc")), (0.0, 0.0));
        assert_eq!(salary(json!("")), (0.0, 0.0));
        assert_eq!(salary(json!("$50k-$70k")), (0.0, 0.0));
        assert_eq!(salary(json!("50000-")), (0.0, 0.0));
        assert_eq!(salary(json!(null)), (0.0, 0.0));
        assert_eq!(salary(json!(["50000"])), (0.0, 0.0));
        assert_eq!(parse_salary_range(None), (0.0, 0.0));
    }

    #[test]
    fn test_salary_with_extra_hyphens_falls_back_to_zero() {
        assert_eq!(salary(json!("-5000")), (0.0, 0.0));
        assert_eq!(salary(json!("10-20-30")), (0.0, 0.0));
        assert_eq!(salary(json!("-10--5")), (0.0, 0.0));
    }

    #[test]
    fn test_salary_rejects_non_finite() {
        assert_eq!(salary(json!("inf")), (0.0, 0.0));
        assert_eq!(salary(json!("NaN-100")), (0.0, 0.0));
    }

    #[test]
    fn test_provider_url_skips_empty_entries() {
        let providers = json!([{"url": null}, {"url": "http://x"}, {"url": "http://z"}]);
        assert_eq!(pick_provider_url(Some(&providers)), Some("http://x".to_string()));

        let providers = json!([{"title": "LinkedIn"}, "http://ignored", {"url": ""}, {"url": "http://y"}]);
        assert_eq!(pick_provider_url(Some(&providers)), Some("http://y".to_string()));
    }

    #[test]
    fn test_provider_url_absent() {
        assert_eq!(pick_provider_url(None), None);
        assert_eq!(pick_provider_url(Some(&json!([]))), None);
        assert_eq!(pick_provider_url(Some(&json!([{"url": null}]))), None);
        assert_eq!(pick_provider_url(Some(&json!({"url": "http://x"}))), None);
    }

    #[test]
    fn test_coerce_float() {
        assert_eq!(coerce_float(Some(&json!("50000"))), 50000.0);
        assert_eq!(coerce_float(Some(&json!(" 42.5 "))), 42.5);
        assert_eq!(coerce_float(Some(&json!(61000))), 61000.0);
        assert_eq!(coerce_float(Some(&json!(null))), 0.0);
        assert_eq!(coerce_float(None), 0.0);
        assert_eq!(coerce_float(Some(&json!("not-a-number"))), 0.0);
        assert_eq!(coerce_float(Some(&json!(true))), 0.0);
        assert_eq!(coerce_float(Some(&json!({"amount": 5}))), 0.0);
    }

    #[test]
    fn test_remote_flag_from_booleans() {
        assert_eq!(normalize_remote_flag(Some(&json!(true))), RemoteFlag::Yes);
        assert_eq!(normalize_remote_flag(Some(&json!(false))), RemoteFlag::No);
    }

    #[test]
    fn test_remote_flag_from_text_and_numbers() {
        for yes in [json!("True"), json!("true"), json!("1"), json!(" true "), json!(1)] {
            assert_eq!(normalize_remote_flag(Some(&yes)), RemoteFlag::Yes, "{}", yes);
        }
        for no in [json!("False"), json!("0"), json!("yes"), json!("TRUE"), json!(1.0), json!(0), json!(null)] {
            assert_eq!(normalize_remote_flag(Some(&no)), RemoteFlag::No, "{}", no);
        }
        assert_eq!(normalize_remote_flag(None), RemoteFlag::No);
    }

    #[test]
    fn test_truthy_text() {
        assert_eq!(truthy_text(Some(&json!("Acme"))), Some("Acme".to_string()));
        assert_eq!(truthy_text(Some(&json!(""))), None);
        assert_eq!(truthy_text(Some(&json!(null))), None);
        assert_eq!(truthy_text(Some(&json!(false))), None);
        assert_eq!(truthy_text(Some(&json!(0))), None);
        assert_eq!(truthy_text(Some(&json!(3))), Some("3".to_string()));
        assert_eq!(truthy_text(Some(&json!(["Acme"]))), None);
        assert_eq!(truthy_text(None), None);
    }

    #[test]
    fn test_text_field() {
        assert_eq!(text_field(Some(&json!("Remote"))), Some("Remote".to_string()));
        assert_eq!(text_field(Some(&json!(""))), Some(String::new()));
        assert_eq!(text_field(Some(&json!(null))), None);
        assert_eq!(text_field(Some(&json!(12))), Some("12".to_string()));
        assert_eq!(text_field(None), None);
    }
}
