//! Tests for output rendering

use super::*;
use insta::assert_snapshot;
use serde_json::json;

fn sample() -> StatsTable {
    StatsTable {
        player_column: "batsman".into(),
        rows: vec![
            PlayerStats::new(PlayerId::from("A"), 2, 50.0, 30.0),
            PlayerStats::new(PlayerId::from("Bumrah"), 1, 0.0, 0.0),
        ],
    }
}

fn written(format: OutputFormat, precision: usize) -> String {
    let mut buf = Vec::new();
    write_table(&mut buf, &sample(), format, precision).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn snapshot_text_table() {
    let text = render_text(&sample(), 2);
    assert_snapshot!(text.trim_end(), @r"
    batsman  innings  runs  balls  average  strike_rate
    -------  -------  ----  -----  -------  -----------
    A              2    50     30    25.00       166.67
    Bumrah         1     0      0     0.00          NaN
    ");
}

#[test]
fn test_text_lines_have_no_trailing_whitespace() {
    for line in render_text(&sample(), 2).lines() {
        assert_eq!(line, line.trim_end());
    }
}

#[test]
fn test_header_uses_player_column_name() {
    let mut table = sample();
    table.player_column = "batter".into();
    assert_eq!(
        header(&table),
        vec!["batter", "innings", "runs", "balls", "average", "strike_rate"]
    );
}

#[test]
fn test_format_count() {
    assert_eq!(format_count(50.0), "50");
    assert_eq!(format_count(12.5), "12.5");
}

#[test]
fn test_format_ratio_precision_and_non_finite() {
    assert_eq!(format_ratio(166.666_666, 2), "166.67");
    assert_eq!(format_ratio(166.666_666, 0), "167");
    assert_eq!(format_ratio(f64::INFINITY, 2), "inf");
    assert_eq!(format_ratio(f64::NAN, 2), "NaN");
}

#[test]
fn test_format_ratio_caps_precision() {
    assert_eq!(format_ratio(0.5, 1_000_000_000), format!("{:.15}", 0.5));
    assert_eq!(format_ratio(0.5, MAX_PRECISION).len(), 17);
}

#[test]
fn test_json_output() {
    let value: serde_json::Value = serde_json::from_str(&written(OutputFormat::Json, 2)).unwrap();
    assert_eq!(
        value,
        json!([
            {"batsman": "A", "innings": 2, "runs": 50, "balls": 30, "average": 25.0, "strike_rate": 166.67},
            {"batsman": "Bumrah", "innings": 1, "runs": 0, "balls": 0, "average": 0.0, "strike_rate": null}
        ])
    );
}

#[test]
fn test_json_keeps_column_order() {
    let json = written(OutputFormat::Json, 2);
    let player = json.find("\"batsman\"").unwrap();
    let strike = json.find("\"strike_rate\"").unwrap();
    assert!(player < strike);
}

#[test]
fn test_json_numeric_player_ids_stay_numbers() {
    let table = StatsTable {
        player_column: "batsman".into(),
        rows: vec![PlayerStats::new(PlayerId::Number(7), 1, 4.0, 4.0)],
    };
    assert_eq!(to_json(&table, 2)[0]["batsman"], json!(7));
}

#[test]
fn test_json_infinite_strike_rate_is_null() {
    let table = StatsTable {
        player_column: "batsman".into(),
        rows: vec![PlayerStats::new(PlayerId::from("A"), 1, 4.0, 0.0)],
    };
    assert_eq!(to_json(&table, 2)[0]["strike_rate"], serde_json::Value::Null);
}

#[test]
fn test_csv_output() {
    assert_eq!(
        written(OutputFormat::Csv, 1),
        "batsman,innings,runs,balls,average,strike_rate\n\
         A,2,50,30,25.0,166.7\n\
         Bumrah,1,0,0,0.0,NaN\n"
    );
}

#[test]
fn test_output_format_default_is_table() {
    assert_eq!(OutputFormat::default(), OutputFormat::Table);
}
