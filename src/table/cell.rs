use std::fmt;

use serde_json::Value;

use super::schema::ColumnType;

/// One value in a flattened table
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Arrays are kept whole rather than exploded into rows
    Array(Vec<Value>),
}

impl Cell {
    /// Convert a JSON leaf into a cell. Objects never reach here; the
    /// flattener turns them into columns.
    pub fn from_leaf(value: Value) -> Self {
        match value {
            Value::Null => Cell::Null,
            Value::Bool(b) => Cell::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Cell::Int(i),
                None => n.as_f64().map(Cell::Float).unwrap_or(Cell::Null),
            },
            Value::String(s) => Cell::Text(s),
            Value::Array(items) => Cell::Array(items),
            Value::Object(map) => Cell::Text(Value::Object(map).to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    pub fn column_type(&self) -> ColumnType {
        match self {
            Cell::Null => ColumnType::Null,
            Cell::Bool(_) => ColumnType::Boolean,
            Cell::Int(_) => ColumnType::Integer,
            Cell::Float(_) => ColumnType::Float,
            Cell::Text(_) => ColumnType::Text,
            Cell::Array(_) => ColumnType::Array,
        }
    }

    /// Numeric value for summing; `None` for null and non-numeric cells
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(i) => Some(*i as f64),
            Cell::Float(f) => Some(*f),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => write!(f, "null"),
            Cell::Bool(b) => write!(f, "{}", b),
            Cell::Int(i) => write!(f, "{}", i),
            Cell::Float(x) => write!(f, "{}", x),
            Cell::Text(s) => write!(f, "{}", s),
            Cell::Array(items) => write!(f, "{}", Value::Array(items.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integers_stay_integers() {
        assert_eq!(Cell::from_leaf(json!(42)), Cell::Int(42));
        assert_eq!(Cell::from_leaf(json!(-3)), Cell::Int(-3));
    }

    #[test]
    fn test_fractional_and_huge_numbers_become_floats() {
        assert_eq!(Cell::from_leaf(json!(1.5)), Cell::Float(1.5));
        assert_eq!(
            Cell::from_leaf(json!(u64::MAX)),
            Cell::Float(u64::MAX as f64)
        );
    }

    #[test]
    fn test_leaf_kinds() {
        assert_eq!(Cell::from_leaf(Value::Null), Cell::Null);
        assert_eq!(Cell::from_leaf(json!(true)), Cell::Bool(true));
        assert_eq!(Cell::from_leaf(json!("Kohli")), Cell::Text("Kohli".into()));
        assert_eq!(
            Cell::from_leaf(json!([1, 2])),
            Cell::Array(vec![json!(1), json!(2)])
        );
    }

    #[test]
    fn test_as_f64_only_for_numbers() {
        assert_eq!(Cell::Int(7).as_f64(), Some(7.0));
        assert_eq!(Cell::Float(2.5).as_f64(), Some(2.5));
        assert_eq!(Cell::Null.as_f64(), None);
        assert_eq!(Cell::Text("7".into()).as_f64(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::Int(30).to_string(), "30");
        assert_eq!(Cell::Text("A".into()).to_string(), "A");
        assert_eq!(Cell::Array(vec![json!("x")]).to_string(), r#"["x"]"#);
    }
}
