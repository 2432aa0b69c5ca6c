//! Column type inference for flattened tables

use std::fmt;

use super::Table;

/// Inferred type of a column, widened across all of its cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Every cell is null (or the table has no rows)
    Null,
    Boolean,
    Integer,
    /// Numbers where at least one is not an integer
    Float,
    Text,
    Array,
    /// Cells of incompatible kinds, e.g. text and numbers
    Mixed,
}

impl ColumnType {
    /// Combine two observations of the same column.
    ///
    /// Null yields to anything, integers widen to floats, every other
    /// disagreement is `Mixed`.
    pub fn merge(self, other: ColumnType) -> ColumnType {
        use ColumnType::*;
        match (self, other) {
            (a, b) if a == b => a,
            (Null, t) | (t, Null) => t,
            (Integer, Float) | (Float, Integer) => Float,
            _ => Mixed,
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::Null => write!(f, "null"),
            ColumnType::Boolean => write!(f, "boolean"),
            ColumnType::Integer => write!(f, "integer"),
            ColumnType::Float => write!(f, "float"),
            ColumnType::Text => write!(f, "text"),
            ColumnType::Array => write!(f, "array"),
            ColumnType::Mixed => write!(f, "mixed"),
        }
    }
}

/// Typed column list of one table
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schema {
    pub columns: Vec<(String, ColumnType)>,
}

impl Schema {
    pub fn infer(table: &Table) -> Self {
        let mut types = vec![ColumnType::Null; table.columns.len()];
        for row in &table.rows {
            for (ty, cell) in types.iter_mut().zip(row) {
                *ty = ty.merge(cell.column_type());
            }
        }

        Self {
            columns: table.columns.iter().cloned().zip(types).collect(),
        }
    }

    pub fn column_type(&self, column: &str) -> Option<ColumnType> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, ty)| *ty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::flatten_document;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_infer_basic_types() {
        let table = flatten_document(
            "t.json",
            json!([
                {"batsman": "A", "runs": 30, "sr": 1.5, "out": true, "tags": []},
                {"batsman": "B", "runs": 4, "sr": 2, "out": false, "tags": ["x"]}
            ]),
        )
        .unwrap();
        let schema = Schema::infer(&table);

        assert_eq!(schema.column_type("batsman"), Some(ColumnType::Text));
        assert_eq!(schema.column_type("runs"), Some(ColumnType::Integer));
        assert_eq!(schema.column_type("sr"), Some(ColumnType::Float));
        assert_eq!(schema.column_type("out"), Some(ColumnType::Boolean));
        assert_eq!(schema.column_type("tags"), Some(ColumnType::Array));
        assert_eq!(schema.column_type("missing"), None);
    }

    #[test]
    fn test_nulls_do_not_change_type() {
        let table = flatten_document(
            "t.json",
            json!([{"runs": null}, {"runs": 3}, {"runs": null}]),
        )
        .unwrap();
        assert_eq!(
            Schema::infer(&table).column_type("runs"),
            Some(ColumnType::Integer)
        );
    }

    #[test]
    fn test_all_null_column_is_null() {
        let table = flatten_document("t.json", json!([{"runs": null}])).unwrap();
        assert_eq!(
            Schema::infer(&table).column_type("runs"),
            Some(ColumnType::Null)
        );
    }

    #[test]
    fn test_text_and_numbers_are_mixed() {
        let table =
            flatten_document("t.json", json!([{"runs": "ten"}, {"runs": 10}])).unwrap();
        assert_eq!(
            Schema::infer(&table).column_type("runs"),
            Some(ColumnType::Mixed)
        );
    }

    #[test]
    fn test_schema_preserves_column_order() {
        let table = flatten_document("t.json", json!({"b": 1, "a": "x"})).unwrap();
        let schema = Schema::infer(&table);
        let names: Vec<&str> = schema
            .columns
            .iter()
            .map(|(n, _)| n.as_str())
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    fn arb_column_type() -> impl Strategy<Value = ColumnType> {
        prop_oneof![
            Just(ColumnType::Null),
            Just(ColumnType::Boolean),
            Just(ColumnType::Integer),
            Just(ColumnType::Float),
            Just(ColumnType::Text),
            Just(ColumnType::Array),
            Just(ColumnType::Mixed),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_merge_is_commutative(a in arb_column_type(), b in arb_column_type()) {
            prop_assert_eq!(a.merge(b), b.merge(a));
        }

        #[test]
        fn prop_null_is_identity(a in arb_column_type()) {
            prop_assert_eq!(a.merge(ColumnType::Null), a);
        }

        #[test]
        fn prop_mixed_absorbs(a in arb_column_type()) {
            prop_assert_eq!(a.merge(ColumnType::Mixed), ColumnType::Mixed);
        }
    }
}
