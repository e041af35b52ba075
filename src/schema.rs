//! Declarative parameter schemas: one per endpoint, defined once at startup.

use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Raw caller-supplied parameters for one call.
pub type ParameterBag = Map<String, Value>;

/// Validated, default-applied parameters ready for serialization. Absent
/// optional fields are omitted entirely, never present as nulls.
pub type NormalizedBag = Map<String, Value>;

/// Accepted shape of one field's value. Values are never coerced between
/// kinds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldKind {
    String,
    /// Non-empty list of strings with no missing elements.
    StringList,
    Integer,
    Float,
    Boolean,
    Map,
    /// String restricted to a fixed set of values.
    Enum(&'static [&'static str]),
}

impl FieldKind {
    pub(crate) fn expected(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::StringList => "non-empty list of strings",
            FieldKind::Integer => "integer",
            FieldKind::Float => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Map => "object",
            FieldKind::Enum(_) => "one of the allowed values",
        }
    }
}

/// Constraints for one field.
#[derive(Clone, Debug)]
pub struct FieldSpec {
    pub name: &'static str,
    pub required: bool,
    pub kind: FieldKind,
    pub range: Option<(f64, f64)>,            // inclusive numeric bounds
    pub length_range: Option<(usize, usize)>, // inclusive list/string length bounds
    pub default: Option<Value>,
}

impl FieldSpec {
    pub fn required(name: &'static str, kind: FieldKind) -> Self {
        Self { name, required: true, kind, range: None, length_range: None, default: None }
    }

    pub fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self { name, required: false, kind, range: None, length_range: None, default: None }
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = Some((min, max));
        self
    }

    pub fn length(mut self, min: usize, max: usize) -> Self {
        self.length_range = Some((min, max));
        self
    }

    /// Value inserted when the field is absent from the caller's bag.
    pub fn default_value(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }
}

/// Outcome of one cross-field rule.
pub enum CrossCheck {
    Pass,
    /// Suspicious but allowed; surfaced through the warning channel.
    Warn(String),
    Fail(ValidationError),
}

/// Final-pass rule over the whole normalized bag, for constraints that span
/// more than one field.
pub type CrossRule = fn(&NormalizedBag) -> CrossCheck;

/// Ordered field constraints plus cross-field rules for one endpoint.
#[derive(Clone, Debug)]
pub struct ParameterSchema {
    pub fields: Vec<FieldSpec>,
    pub cross_rules: Vec<CrossRule>,
}

impl ParameterSchema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields, cross_rules: Vec::new() }
    }

    pub fn cross_rule(mut self, rule: CrossRule) -> Self {
        self.cross_rules.push(rule);
        self
    }
}
