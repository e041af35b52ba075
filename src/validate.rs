//! Pure validation of a parameter bag against its endpoint schema.

use serde_json::Value;

use crate::error::{ValidationError, ValidationReason};
use crate::schema::{CrossCheck, FieldKind, NormalizedBag, ParameterBag, ParameterSchema};

/// A bag that passed validation, plus any non-fatal warnings raised by
/// cross-field rules.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Validated {
    pub params: NormalizedBag,
    pub warnings: Vec<String>,
}

/// Check `bag` against `schema`, field by field in declaration order, then
/// run the schema's cross-field rules over the result.
///
/// Fields the schema does not declare are dropped. Explicit nulls are
/// treated as absent, so they never survive into the normalized bag.
pub fn validate(schema: &ParameterSchema, mut bag: ParameterBag) -> Result<Validated, ValidationError> {
    let mut params = NormalizedBag::new();

    for field in &schema.fields {
        match bag.remove(field.name) {
            None | Some(Value::Null) if field.required => {
                return Err(ValidationError::new(field.name, ValidationReason::Missing));
            }
            None | Some(Value::Null) => {
                if let Some(default) = &field.default {
                    params.insert(field.name.to_string(), default.clone());
                }
            }
            Some(value) => {
                check_kind(field.name, field.kind, &value)?;
                if let Some((min, max)) = field.range {
                    check_range(field.name, &value, min, max)?;
                }
                if let Some((min, max)) = field.length_range {
                    check_length(field.name, &value, min, max)?;
                }
                params.insert(field.name.to_string(), value);
            }
        }
    }

    let mut warnings = Vec::new();
    for rule in &schema.cross_rules {
        match rule(&params) {
            CrossCheck::Pass => {}
            CrossCheck::Warn(message) => warnings.push(message),
            CrossCheck::Fail(err) => return Err(err),
        }
    }

    Ok(Validated { params, warnings })
}

fn check_kind(name: &str, kind: FieldKind, value: &Value) -> Result<(), ValidationError> {
    let ok = match kind {
        FieldKind::String => value.is_string(),
        FieldKind::StringList => value
            .as_array()
            .is_some_and(|items| !items.is_empty() && items.iter().all(Value::is_string)),
        FieldKind::Integer => value.as_i64().is_some() || value.as_u64().is_some(),
        FieldKind::Float => value.is_number(),
        FieldKind::Boolean => value.is_boolean(),
        FieldKind::Map => value.is_object(),
        FieldKind::Enum(allowed) => value.as_str().is_some_and(|s| allowed.contains(&s)),
    };
    if ok {
        Ok(())
    } else {
        Err(ValidationError::new(name, ValidationReason::TypeMismatch { expected: kind.expected() }))
    }
}

fn check_range(name: &str, value: &Value, min: f64, max: f64) -> Result<(), ValidationError> {
    // kind check already ran, so a non-number never reaches this point
    let Some(n) = value.as_f64() else { return Ok(()) };
    if n < min || n > max {
        return Err(ValidationError::new(name, ValidationReason::OutOfRange { value: n, min, max }));
    }
    Ok(())
}

fn check_length(name: &str, value: &Value, min: usize, max: usize) -> Result<(), ValidationError> {
    let len = match value {
        Value::Array(items) => items.len(),
        Value::String(s) => s.chars().count(),
        _ => return Ok(()),
    };
    if len < min || len > max {
        return Err(ValidationError::new(name, ValidationReason::LengthOutOfRange { len, min, max }));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::schema::FieldSpec;

    fn schema() -> ParameterSchema {
        ParameterSchema::new(vec![
            FieldSpec::required("model", FieldKind::String),
            FieldSpec::optional("temperature", FieldKind::Float).range(0.0, 2.0),
            FieldSpec::optional("n", FieldKind::Integer).range(1.0, 128.0),
            FieldSpec::optional("stop", FieldKind::StringList).length(1, 4),
            FieldSpec::optional("echo", FieldKind::Boolean),
            FieldSpec::optional("format", FieldKind::Enum(&["json", "text"])),
            FieldSpec::optional("units", FieldKind::String).default_value(json!("tokens")),
        ])
    }

    fn bag(value: Value) -> ParameterBag {
        match value {
            Value::Object(map) => map,
            _ => panic!("bag must be an object"),
        }
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let err = validate(&schema(), bag(json!({"temperature": 1.0}))).unwrap_err();
        assert_eq!(err, ValidationError::new("model", ValidationReason::Missing));
    }

    #[test]
    fn explicit_null_counts_as_missing() {
        let err = validate(&schema(), bag(json!({"model": null}))).unwrap_err();
        assert_eq!(err.reason, ValidationReason::Missing);
    }

    #[test]
    fn inclusive_bounds_pass_and_one_outside_fails() {
        for t in [0.0, 2.0] {
            let v = validate(&schema(), bag(json!({"model": "m", "temperature": t}))).unwrap();
            assert_eq!(v.params["temperature"], json!(t));
        }
        let err = validate(&schema(), bag(json!({"model": "m", "temperature": 2.1}))).unwrap_err();
        assert!(matches!(err.reason, ValidationReason::OutOfRange { .. }));

        for n in [1, 128] {
            validate(&schema(), bag(json!({"model": "m", "n": n}))).unwrap();
        }
        for n in [0, 129] {
            let err = validate(&schema(), bag(json!({"model": "m", "n": n}))).unwrap_err();
            assert_eq!(err.field, "n");
            assert!(matches!(err.reason, ValidationReason::OutOfRange { .. }));
        }
    }

    #[test]
    fn kind_mismatch_is_not_coerced() {
        let err = validate(&schema(), bag(json!({"model": 42}))).unwrap_err();
        assert_eq!(err.reason, ValidationReason::TypeMismatch { expected: "string" });

        // "1" does not become the integer 1
        let err = validate(&schema(), bag(json!({"model": "m", "n": "1"}))).unwrap_err();
        assert_eq!(err.field, "n");

        // a float is not an integer
        let err = validate(&schema(), bag(json!({"model": "m", "n": 1.5}))).unwrap_err();
        assert_eq!(err.reason, ValidationReason::TypeMismatch { expected: "integer" });
    }

    #[test]
    fn string_lists_must_be_non_empty_and_all_strings() {
        let err = validate(&schema(), bag(json!({"model": "m", "stop": []}))).unwrap_err();
        assert_eq!(err.field, "stop");

        let err = validate(&schema(), bag(json!({"model": "m", "stop": ["a", null]}))).unwrap_err();
        assert_eq!(err.field, "stop");

        let err =
            validate(&schema(), bag(json!({"model": "m", "stop": ["a", "b", "c", "d", "e"]}))).unwrap_err();
        assert!(matches!(err.reason, ValidationReason::LengthOutOfRange { len: 5, .. }));

        validate(&schema(), bag(json!({"model": "m", "stop": ["\n"]}))).unwrap();
    }

    #[test]
    fn enum_kind_accepts_listed_values_only() {
        let v = validate(&schema(), bag(json!({"model": "m", "format": "json"}))).unwrap();
        assert_eq!(v.params["format"], json!("json"));

        let err = validate(&schema(), bag(json!({"model": "m", "format": "xml"}))).unwrap_err();
        assert_eq!(err.reason, ValidationReason::TypeMismatch { expected: "one of the allowed values" });
    }

    #[test]
    fn defaults_fill_absent_optionals_and_absent_fields_stay_absent() {
        let v = validate(&schema(), bag(json!({"model": "m"}))).unwrap();
        assert_eq!(v.params["units"], json!("tokens"));
        assert!(!v.params.contains_key("temperature"));
        assert!(!v.params.values().any(Value::is_null));
    }

    #[test]
    fn undeclared_fields_are_dropped() {
        let v = validate(&schema(), bag(json!({"model": "m", "bogus": true}))).unwrap();
        assert!(!v.params.contains_key("bogus"));
    }

    #[test]
    fn validation_is_idempotent() {
        let input = bag(json!({"model": "m", "temperature": 0.5, "echo": true}));
        let first = validate(&schema(), input.clone()).unwrap();
        let second = validate(&schema(), input).unwrap();
        assert_eq!(first, second);
    }
}
