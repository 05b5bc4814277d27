//! Behavioural tests for the CSV codec.

use deckport_csv::{from_csv, needs_quoting, to_csv};
use deckport_model::Table;
use proptest::prelude::*;

fn cell() -> impl Strategy<Value = String> {
    "[ -~\n]{1,12}"
}

fn table() -> impl Strategy<Value = Table> {
    prop::collection::vec(prop::collection::vec(cell(), 1..6), 1..6).prop_map(Table::from)
}

proptest! {
    #[test]
    fn decoding_inverts_encoding(table in table()) {
        prop_assert_eq!(from_csv(&to_csv(&table)), table);
    }

    #[test]
    fn plain_cells_encode_verbatim(value in "[A-Za-z0-9_#./-]{0,16}") {
        let table = Table::from_iter(vec![vec![value.clone()]]);
        prop_assert!(!needs_quoting(&value));
        prop_assert_eq!(to_csv(&table), value);
    }

    #[test]
    fn quoted_cells_double_inner_quotes(value in "[ -~]{0,16}") {
        let encoded = to_csv(&Table::from_iter(vec![vec![value.clone()]]));
        if needs_quoting(&value) {
            let expected = format!("\"{}\"", value.replace('"', "\"\""));
            prop_assert_eq!(encoded, expected);
        } else {
            prop_assert_eq!(encoded, value);
        }
    }
}

#[test]
fn comma_quote_and_space_force_quoting() {
    let table = Table::from_iter(vec![vec!["a,b", "say \"hi\"", "two words", "plain"]]);
    assert_eq!(
        to_csv(&table),
        "\"a,b\",\"say \"\"hi\"\"\",\"two words\",plain"
    );
}

#[test]
fn quoted_field_with_escapes_is_one_cell() {
    let table = from_csv(r#""123,4""5""6,789""#);
    assert_eq!(table.len(), 1);
    assert_eq!(table.rows()[0], vec!["123,4\"5\"6,789"]);
}

#[test]
fn stray_quotes_in_unquoted_field_drop_characters() {
    let table = from_csv(r#"123,4"5"6,789"#);
    assert_eq!(table.rows()[0], vec!["123", "5", "789"]);
}

#[test]
fn multi_line_quoted_cells_round_trip() {
    let table = Table::from_iter(vec![
        vec!["Name", "Notes"],
        vec!["Fury Sliver", "line one\nline two"],
        vec!["\"Ach! Hans, Run!\"", ""],
    ]);
    let text = to_csv(&table);
    assert_eq!(from_csv(&text), table);
}

#[test]
fn byte_order_marks_at_the_edges_survive() {
    let table = Table::from_iter(vec![vec!["\u{feff}x", "y"], vec!["z", "w\u{feff}"]]);
    let text = to_csv(&table);
    assert!(text.starts_with('"'));
    assert_eq!(from_csv(&text), table);
}

#[test]
fn malformed_input_never_panics() {
    for text in [
        "\"",
        "\"\"\"",
        ",\"",
        "a\"b\"c\"d",
        "\"a\"\"",
        "\n\n\"\n",
        "\"x\"y\"z\",\"",
    ] {
        let table = from_csv(text);
        assert!(!table.is_empty(), "no rows for {text:?}");
    }
}
