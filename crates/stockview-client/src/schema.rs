use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt;

/// One display value sent by the backend.
///
/// Values are opaque: nothing is validated, the client only needs to print
/// them back the way a browser would.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(from = "Value", into = "Value")]
pub enum Field {
    /// `null`, or a key the backend left out.
    #[default]
    Empty,
    Bool(bool),
    Number(Number),
    Text(String),
    /// Arrays and objects; printed as compact JSON.
    Other(Value),
}

impl Field {
    /// JSON truthiness: empty strings, zero, `false` and `null` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Field::Empty => false,
            Field::Bool(b) => *b,
            Field::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
            Field::Text(s) => !s.is_empty(),
            Field::Other(_) => true,
        }
    }
}

impl From<Value> for Field {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Field::Empty,
            Value::Bool(b) => Field::Bool(b),
            Value::Number(n) => Field::Number(n),
            Value::String(s) => Field::Text(s),
            other => Field::Other(other),
        }
    }
}

impl From<Field> for Value {
    fn from(field: Field) -> Self {
        match field {
            Field::Empty => Value::Null,
            Field::Bool(b) => Value::Bool(b),
            Field::Number(n) => Value::Number(n),
            Field::Text(s) => Value::String(s),
            Field::Other(v) => v,
        }
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Field::Text(s.to_string())
    }
}

impl From<i64> for Field {
    fn from(n: i64) -> Self {
        Field::Number(n.into())
    }
}

impl From<f64> for Field {
    fn from(n: f64) -> Self {
        Number::from_f64(n).map_or(Field::Empty, Field::Number)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Empty => Ok(()),
            Field::Bool(b) => write!(f, "{b}"),
            Field::Number(n) => f.write_str(&display_number(n)),
            Field::Text(s) => f.write_str(s),
            Field::Other(v) => write!(f, "{v}"),
        }
    }
}

/// Number text as a browser prints it: `150.0` reads `150`, `1.50` reads
/// `1.5`, `1E6` reads `1000000`, and exponents only outside `[1e-6, 1e21)`.
fn display_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }

    let Some(x) = n.as_f64() else {
        return n.to_string();
    };
    if x == 0.0 {
        // covers -0.0
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&x.abs()) {
        return x.to_string();
    }

    let exp = format!("{x:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}

/// A single stock, as listed by `get_main_stocks` or found by `search_stock`.
///
/// ```json
/// {
///     "name": "Apple",
///     "price": 150,
///     "change": 1.2,
///     "volume": 1000000
/// }
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct StockRecord {
    #[serde(default)]
    pub name: Field,
    #[serde(default)]
    pub price: Field,
    #[serde(default)]
    pub change: Field,
    #[serde(default)]
    pub volume: Field,
}

impl StockRecord {
    /// The four table cells, in column order.
    pub fn cells(&self) -> [String; 4] {
        [
            self.name.to_string(),
            self.price.to_string(),
            self.change.to_string(),
            self.volume.to_string(),
        ]
    }
}

/// Body of a `search_stock` response: a record, or `{"error": "..."}`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "RawSearch")]
pub enum SearchResult {
    Found(StockRecord),
    Failed(String),
}

#[derive(Deserialize)]
struct RawSearch {
    #[serde(default)]
    error: Field,
    #[serde(flatten)]
    record: StockRecord,
}

impl From<RawSearch> for SearchResult {
    fn from(raw: RawSearch) -> Self {
        if raw.error.is_truthy() {
            SearchResult::Failed(raw.error.to_string())
        } else {
            SearchResult::Found(raw.record)
        }
    }
}

/// Body of a `search_stock` request.
#[derive(Serialize, Debug)]
pub struct SearchRequest<'a> {
    pub symbol: &'a str,
}
