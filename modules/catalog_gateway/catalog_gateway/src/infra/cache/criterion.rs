//! Evaluation of query criteria against cached catalogs.
//!
//! Left operands name a catalog field (`id`, `participantId`, `origin`) or a
//! property. A property is looked up by its exact key first and then as a
//! dot-separated path into nested objects. A criterion whose left operand
//! resolves to nothing never matches.

use catalog_gateway_sdk::{Criterion, RawCatalog};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    NotEq,
    In,
    Like,
}

impl Operator {
    #[must_use]
    pub fn parse(op: &str) -> Option<Self> {
        match op.trim().to_ascii_lowercase().as_str() {
            "=" => Some(Self::Eq),
            "!=" => Some(Self::NotEq),
            "in" => Some(Self::In),
            "like" => Some(Self::Like),
            _ => None,
        }
    }
}

/// Whether the criterion is well formed enough to evaluate.
#[must_use]
pub fn is_supported(criterion: &Criterion) -> bool {
    if criterion.operand_left.trim().is_empty() {
        return false;
    }
    match Operator::parse(&criterion.operator) {
        Some(Operator::In) => criterion.operand_right.is_array(),
        Some(Operator::Like) => criterion.operand_right.is_string(),
        Some(Operator::Eq | Operator::NotEq) => true,
        None => false,
    }
}

/// Evaluate one criterion. Unsupported criteria never match.
#[must_use]
pub fn matches(criterion: &Criterion, raw: &RawCatalog) -> bool {
    let Some(op) = Operator::parse(&criterion.operator) else {
        return false;
    };
    let Some(left) = resolve(raw, criterion.operand_left.trim()) else {
        return false;
    };
    let right = &criterion.operand_right;

    match op {
        Operator::Eq => loosely_equal(&left, right),
        Operator::NotEq => !loosely_equal(&left, right),
        Operator::In => right
            .as_array()
            .is_some_and(|items| items.iter().any(|item| loosely_equal(&left, item))),
        Operator::Like => match (as_text(&left), right.as_str()) {
            (Some(text), Some(pattern)) => like(&text, pattern),
            _ => false,
        },
    }
}

fn resolve(raw: &RawCatalog, path: &str) -> Option<Value> {
    match path {
        "id" => return Some(Value::String(raw.id.clone())),
        "participantId" => return raw.participant_id.clone().map(Value::String),
        "origin" => return Some(Value::String(raw.origin.clone())),
        _ => {}
    }

    if let Some(value) = raw.properties.get(path) {
        return Some(value.clone());
    }

    let mut segments = path.split('.');
    let mut current = raw.properties.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current.clone())
}

fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Equal as JSON, or equal once scalars are rendered as text (`5` vs `"5"`).
fn loosely_equal(left: &Value, right: &Value) -> bool {
    if left == right {
        return true;
    }
    match (as_text(left), as_text(right)) {
        (Some(l), Some(r)) => l == r,
        _ => false,
    }
}

/// SQL `LIKE` with `%` as the only wildcard. Case-sensitive.
fn like(text: &str, pattern: &str) -> bool {
    let mut parts = pattern.split('%');
    let Some(rest) = parts.next().and_then(|prefix| text.strip_prefix(prefix)) else {
        return false;
    };
    let parts: Vec<&str> = parts.collect();
    let Some((suffix, middle)) = parts.split_last() else {
        return rest.is_empty();
    };

    let mut rest = rest;
    for part in middle {
        match rest.find(part) {
            Some(pos) => rest = &rest[pos + part.len()..],
            None => return false,
        }
    }
    rest.ends_with(suffix)
}
