// ============================================================
// Layer 3 - Identifier Domain Type
// ============================================================
// The prediction file and the test dataset both carry an "id"
// column, but the two formats type it differently: JSON lines
// hold typed numbers and strings, CSV only ever holds text.
//
// Identifiers compare the way the column values would after a
// typed load, so every numeric spelling of a value is one id:
//
//   JSON 2, JSON 2.0, CSV "2", CSV "2.0", CSV "02"  -> Integer(2)
//   JSON 2.5, CSV "2.5"                              -> Real(2.5)
//   JSON true, CSV "True"                            -> Integer(1)
//   JSON "2"                                         -> Text("2")
//   CSV "", "NA", "nan", ...                         -> Missing
//
// A JSON string stays text even when it looks like a number.
// CSV cells are classified one at a time: a numeric cell is a
// number even if other cells in the column are not.

use serde_json::Value;

/// CSV cells treated as an absent value
const MISSING_MARKERS: [&str; 9] = ["", "NA", "N/A", "#N/A", "NaN", "nan", "null", "NULL", "None"];

/// One opaque identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// Any finite number without a fractional part that fits an i64
    Integer(i64),

    /// Every other number, as the bits of its f64 value
    Real(u64),

    /// Non-numeric text
    Text(String),

    /// Blank or NA cell. Only the CSV reader produces this.
    Missing,
}

impl Identifier {
    pub fn text(raw: impl Into<String>) -> Self {
        Self::Text(raw.into())
    }

    /// Canonical form of a numeric value; NaN is Missing.
    pub fn number(value: f64) -> Self {
        if value.is_nan() {
            return Self::Missing;
        }
        if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
            return Self::Integer(value as i64);
        }
        Self::Real(value.to_bits())
    }

    /// Convert a JSON scalar into an Identifier.
    /// Returns None for null, arrays and objects.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Text(s.clone())),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Some(Self::Integer(i)),
                None    => n.as_f64().map(Self::number),
            },
            Value::Bool(b)   => Some(Self::Integer(i64::from(*b))),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Classify one (already trimmed) CSV cell.
    pub fn from_csv_field(field: &str) -> Self {
        if MISSING_MARKERS.contains(&field) {
            return Self::Missing;
        }
        if let Ok(i) = field.parse::<i64>() {
            return Self::Integer(i);
        }
        if let Ok(v) = field.parse::<f64>() {
            return Self::number(v);
        }
        match field {
            "True" | "true" | "TRUE"    => Self::Integer(1),
            "False" | "false" | "FALSE" => Self::Integer(0),
            _                           => Self::text(field),
        }
    }
}
