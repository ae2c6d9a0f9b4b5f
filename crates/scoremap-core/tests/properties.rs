//! Property tests over randomly generated score and rule tables.

use std::collections::BTreeMap;

use proptest::prelude::*;

use scoremap_core::assign;
use scoremap_model::{
    AssignOptions, AugmentedTable, CellValue, LayoutPolicy, RawTable, RuleTable, parse_f64,
};

const SUBJECTS: [&str; 3] = ["math", "physics", "history"];

fn raw_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => (0u32..=150).prop_map(|v| v.to_string()),
        1 => Just(String::new()),
        1 => Just("absent".to_string()),
        1 => (0u32..=1000).prop_map(|v| format!("{}.5", v / 10)),
    ]
}

fn raw_table() -> impl Strategy<Value = RawTable> {
    prop::collection::vec(prop::collection::vec(raw_cell(), 3), 0..25).prop_map(|rows| {
        let columns = std::iter::once("id".to_string())
            .chain(SUBJECTS.iter().map(|s| (*s).to_string()))
            .collect();
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(idx, cells)| std::iter::once(idx.to_string()).chain(cells).collect())
            .collect();
        RawTable::new(columns, rows)
    })
}

fn rule_cell() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => (0u32..=120).prop_map(|v| v.to_string()),
        1 => Just(String::new()),
    ]
}

fn rule_table() -> impl Strategy<Value = RuleTable> {
    prop::collection::vec(prop::collection::vec(rule_cell(), 4), 0..8).prop_map(|rows| {
        let headers = std::iter::once("assigned".to_string())
            .chain(SUBJECTS.iter().map(|s| (*s).to_string()))
            .collect();
        RuleTable::from_text(headers, &rows).expect("rule table")
    })
}

fn by_name(table: &AugmentedTable, row: usize) -> BTreeMap<String, CellValue> {
    table
        .columns()
        .iter()
        .cloned()
        .zip(table.rows()[row].iter().cloned())
        .collect()
}

proptest! {
    #[test]
    fn layouts_hold_the_same_cells(raw in raw_table(), rules in rule_table()) {
        let after = assign(&raw, &rules, &AssignOptions::default()).expect("after");
        let end = assign(&raw, &rules, &AssignOptions::default().with_layout(LayoutPolicy::End))
            .expect("end");
        let mut after_columns = after.columns().to_vec();
        let mut end_columns = end.columns().to_vec();
        after_columns.sort();
        end_columns.sort();
        prop_assert_eq!(after_columns, end_columns);
        prop_assert_eq!(after.row_count(), end.row_count());
        for row in 0..after.row_count() {
            prop_assert_eq!(by_name(&after, row), by_name(&end, row));
        }
    }

    #[test]
    fn total_is_sum_of_assigned_cells(raw in raw_table(), rules in rule_table()) {
        let table = assign(&raw, &rules, &AssignOptions::default()).expect("assign");
        for row in 0..table.row_count() {
            let values: Vec<f64> = SUBJECTS
                .iter()
                .filter_map(|s| table.get(row, &format!("{s}_assigned")))
                .filter_map(CellValue::as_number)
                .collect();
            let total = table.get(row, "total_assigned").expect("total");
            if values.is_empty() {
                prop_assert_eq!(total, &CellValue::Missing);
            } else {
                let expected: f64 = values.iter().sum();
                let actual = total.as_number().expect("numeric total");
                prop_assert!((actual - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn unparseable_raw_cells_stay_missing(raw in raw_table(), rules in rule_table()) {
        let table = assign(&raw, &rules, &AssignOptions::default()).expect("assign");
        for (row, cells) in raw.rows().iter().enumerate() {
            for (offset, subject) in SUBJECTS.iter().enumerate() {
                if parse_f64(&cells[offset + 1]).is_none() {
                    let generated = table.get(row, &format!("{subject}_assigned"));
                    prop_assert_eq!(generated, Some(&CellValue::Missing));
                }
            }
        }
    }

    #[test]
    fn row_order_is_preserved(raw in raw_table(), rules in rule_table()) {
        let table = assign(&raw, &rules, &AssignOptions::default()).expect("assign");
        prop_assert_eq!(table.row_count(), raw.row_count());
        for row in 0..raw.row_count() {
            let id = table.get(row, "id").expect("id").to_string();
            prop_assert_eq!(id, row.to_string());
        }
    }
}
