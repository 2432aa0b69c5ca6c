//! Schema checks between loading and aggregation
//!
//! A table survives only if it has the player column and the columns the
//! aggregation reads have usable types. Nothing is renamed or repaired.

use crate::config::ColumnsConfig;
use crate::error::StatsError;
use crate::table::{Cell, ColumnType, Schema, Table};

/// Check one table against the configured columns.
///
/// Returns the inferred schema when the table is usable.
pub fn validate_table(table: &Table, columns: &ColumnsConfig) -> Result<Schema, StatsError> {
    if !table.has_column(&columns.player) {
        return Err(StatsError::MissingColumn {
            name: table.name.clone(),
            column: columns.player.clone(),
        });
    }

    let schema = Schema::infer(table);

    if let Some(ty) = schema.column_type(&columns.player)
        && !player_type_allowed(table, &columns.player, ty)
    {
        return Err(type_error(table, &columns.player, "text or integer", ty));
    }

    for column in [&columns.runs, &columns.balls] {
        if let Some(ty) = schema.column_type(column)
            && !(ty.is_numeric() || ty == ColumnType::Null)
        {
            return Err(type_error(table, column, "numeric", ty));
        }
    }

    Ok(schema)
}

/// Split tables into the usable ones and an error per rejected table.
/// Order of the survivors is preserved.
pub fn validate_tables(
    tables: Vec<Table>,
    columns: &ColumnsConfig,
) -> (Vec<Table>, Vec<StatsError>) {
    let mut valid = Vec::with_capacity(tables.len());
    let mut errors = Vec::new();

    for table in tables {
        match validate_table(&table, columns) {
            Ok(schema) => {
                log::debug!("{} passed validation: {:?}", table.name, schema.columns);
                valid.push(table);
            }
            Err(e) => {
                log::warn!("{}", e);
                errors.push(e);
            }
        }
    }

    (valid, errors)
}

/// Text, integers and nulls group as they are; floats only when every
/// value is whole, so `7.0` groups with `7`
fn player_type_allowed(table: &Table, column: &str, ty: ColumnType) -> bool {
    match ty {
        ColumnType::Text | ColumnType::Integer | ColumnType::Null => true,
        ColumnType::Float => table.column_cells(column).is_some_and(|mut cells| {
            cells.all(|cell| match cell {
                Cell::Float(f) => f.fract() == 0.0,
                _ => true,
            })
        }),
        _ => false,
    }
}

fn type_error(table: &Table, column: &str, expected: &str, found: ColumnType) -> StatsError {
    StatsError::ColumnType {
        name: table.name.clone(),
        column: column.to_string(),
        expected: expected.to_string(),
        found: found.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::flatten_document;
    use serde_json::json;

    fn table(name: &str, doc: serde_json::Value) -> Table {
        flatten_document(name, doc).unwrap()
    }

    #[test]
    fn test_valid_table_passes() {
        let t = table("ok.json", json!([{"batsman": "A", "runs": 10, "balls": 8}]));
        let schema = validate_table(&t, &ColumnsConfig::default()).unwrap();
        assert_eq!(schema.column_type("runs"), Some(ColumnType::Integer));
    }

    #[test]
    fn test_missing_player_column_is_rejected() {
        let t = table("old.json", json!([{"batter": "A", "runs": 10}]));
        assert_eq!(
            validate_table(&t, &ColumnsConfig::default()),
            Err(StatsError::MissingColumn {
                name: "old.json".into(),
                column: "batsman".into()
            })
        );
    }

    #[test]
    fn test_configured_player_column_is_used() {
        let t = table("new.json", json!([{"batter": "A", "runs": 10}]));
        let columns = ColumnsConfig {
            player: "batter".into(),
            ..ColumnsConfig::default()
        };
        assert!(validate_table(&t, &columns).is_ok());
    }

    #[test]
    fn test_missing_runs_or_balls_is_allowed() {
        let t = table("partial.json", json!([{"batsman": "A"}]));
        assert!(validate_table(&t, &ColumnsConfig::default()).is_ok());
    }

    #[test]
    fn test_text_runs_are_a_type_error() {
        let t = table("text.json", json!([{"batsman": "A", "runs": "ten"}]));
        assert_eq!(
            validate_table(&t, &ColumnsConfig::default()),
            Err(StatsError::ColumnType {
                name: "text.json".into(),
                column: "runs".into(),
                expected: "numeric".into(),
                found: "text".into()
            })
        );
    }

    #[test]
    fn test_mixed_player_column_is_a_type_error() {
        let t = table("mixed.json", json!([{"batsman": "A"}, {"batsman": 7}]));
        match validate_table(&t, &ColumnsConfig::default()) {
            Err(StatsError::ColumnType { column, found, .. }) => {
                assert_eq!(column, "batsman");
                assert_eq!(found, "mixed");
            }
            other => panic!("Expected ColumnType error, got {:?}", other),
        }
    }

    #[test]
    fn test_whole_float_player_ids_are_accepted() {
        let t = table("ids.json", json!([{"batsman": 7.0}, {"batsman": 12}]));
        assert!(validate_table(&t, &ColumnsConfig::default()).is_ok());
    }

    #[test]
    fn test_fractional_player_ids_are_a_type_error() {
        let t = table("ids.json", json!([{"batsman": 7.5}]));
        match validate_table(&t, &ColumnsConfig::default()) {
            Err(StatsError::ColumnType { column, found, .. }) => {
                assert_eq!(column, "batsman");
                assert_eq!(found, "float");
            }
            other => panic!("Expected ColumnType error, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_tables_keeps_order_and_collects_errors() {
        let tables = vec![
            table("a.json", json!({"batsman": "A", "runs": 1})),
            table("b.json", json!({"player": "B"})),
            table("c.json", json!({"batsman": "C", "balls": 2})),
        ];

        let (valid, errors) = validate_tables(tables, &ColumnsConfig::default());

        let names: Vec<&str> = valid.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["a.json", "c.json"]);
        assert_eq!(errors.len(), 1);
        assert!(matches!(errors[0], StatsError::MissingColumn { .. }));
    }
}
