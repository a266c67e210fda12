use serde_json::{Number, Value};

/// How a coordinate or radius was spelled in the source JSON, so that
/// `[100, 0]` serializes back as integers rather than `[100.0, 0.0]`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NumberLiteral {
    #[default]
    Float,
    Int(i64),
    UInt(u64),
}

impl NumberLiteral {
    pub(crate) fn of(number: &Number) -> Self {
        if let Some(i) = number.as_i64() {
            NumberLiteral::Int(i)
        } else if let Some(u) = number.as_u64() {
            NumberLiteral::UInt(u)
        } else {
            NumberLiteral::Float
        }
    }

    /// The integer spelling only survives while it still describes `value`.
    pub(crate) fn to_value(self, value: f64) -> Value {
        match self {
            NumberLiteral::Int(i) if i as f64 == value => Value::from(i),
            NumberLiteral::UInt(u) if u as f64 == value => Value::from(u),
            _ => Value::from(value),
        }
    }
}
