use scoremap_core::{assign, assign_detailed};
use scoremap_model::{
    AssignError, AssignOptions, AugmentedTable, CellValue, LayoutPolicy, RawTable, RuleTable,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

fn raw(columns: &[&str], rows: &[&[&str]]) -> RawTable {
    RawTable::new(
        strings(columns),
        rows.iter().map(|row| strings(row)).collect(),
    )
}

fn rules(headers: &[&str], rows: &[&[&str]]) -> RuleTable {
    let rows: Vec<Vec<String>> = rows.iter().map(|row| strings(row)).collect();
    RuleTable::from_text(strings(headers), &rows).expect("rule table")
}

/// Bands: >=90 -> 100, >=75 -> 85, >=60 -> 70 for math; physics has two bands.
fn band_rules() -> RuleTable {
    rules(
        &["assigned", "math", "physics"],
        &[&["100", "90", "80"], &["85", "75", ""], &["70", "60", "50"]],
    )
}

fn column(table: &AugmentedTable, name: &str) -> Vec<String> {
    (0..table.row_count())
        .map(|row| table.get(row, name).expect("column").to_string())
        .collect()
}

#[test]
fn end_to_end_example() {
    let raw = raw(&["id", "math"], &[&["1", "85"], &["2", ""]]);
    let rules = rules(&["assigned", "math"], &[&["100", "90"], &["85", "60"]]);
    let table = assign(&raw, &rules, &AssignOptions::default()).expect("assign");

    assert_eq!(
        table.columns(),
        &strings(&["id", "math", "math_assigned", "total_assigned"])
    );
    assert_eq!(
        table.rows()[0],
        vec![
            CellValue::Text("1".to_string()),
            CellValue::Text("85".to_string()),
            CellValue::Number(85.0),
            CellValue::Number(85.0),
        ]
    );
    assert_eq!(
        table.rows()[1],
        vec![
            CellValue::Text("2".to_string()),
            CellValue::Text(String::new()),
            CellValue::Missing,
            CellValue::Missing,
        ]
    );
}

#[test]
fn threshold_bands_are_matched() {
    let raw = raw(
        &["id", "math"],
        &[&["a", "80"], &["b", "59"], &["c", "90"], &["d", "75"]],
    );
    let table = assign(&raw, &band_rules(), &AssignOptions::default()).expect("assign");
    assert_eq!(column(&table, "math_assigned"), vec!["85", "", "100", "85"]);
}

#[test]
fn unparseable_cells_never_count_toward_total() {
    let raw = raw(
        &["id", "math", "physics"],
        &[&["1", "absent", "85"], &["2", " ", "x"], &["3", "91", "55"]],
    );
    let assignment =
        assign_detailed(&raw, &band_rules(), &AssignOptions::default()).expect("assign");
    let table = &assignment.table;
    assert_eq!(column(table, "math_assigned"), vec!["", "", "100"]);
    assert_eq!(column(table, "physics_assigned"), vec!["100", "", "70"]);
    assert_eq!(column(table, "total_assigned"), vec!["100", "", "170"]);
    assert_eq!(assignment.rows_with_total, 2);

    let math = &assignment.subjects[0];
    assert_eq!(math.subject, "math");
    assert_eq!((math.assigned, math.blank, math.unparsed, math.unmatched), (1, 1, 1, 0));
    assert_eq!(math.unparsed_example.as_deref(), Some("absent"));
    let physics = &assignment.subjects[1];
    assert_eq!(physics.rule_count, 2);
    assert_eq!((physics.assigned, physics.unparsed), (2, 1));
}

#[test]
fn below_threshold_rows_have_empty_total_not_zero() {
    let raw = raw(&["id", "math", "physics"], &[&["1", "10", "20"]]);
    let table = assign(&raw, &band_rules(), &AssignOptions::default()).expect("assign");
    assert_eq!(table.get(0, "total_assigned"), Some(&CellValue::Missing));
}

#[test]
fn subject_without_rules_yields_empty_cells() {
    let raw = raw(&["id", "chemistry"], &[&["1", "99"]]);
    let rules = rules(&["assigned", "chemistry"], &[&["100", ""], &["", "80"]]);
    let table = assign(&raw, &rules, &AssignOptions::default()).expect("assign");
    assert_eq!(table.get(0, "chemistry_assigned"), Some(&CellValue::Missing));
    assert_eq!(table.get(0, "total_assigned"), Some(&CellValue::Missing));
}

#[test]
fn subjects_missing_from_raw_table_get_no_column() {
    let raw = raw(&["id", "math"], &[&["1", "95"]]);
    let assignment =
        assign_detailed(&raw, &band_rules(), &AssignOptions::default()).expect("assign");
    assert!(assignment.table.column_index("physics_assigned").is_none());
    assert_eq!(assignment.skipped_subjects, vec!["physics"]);
}

#[test]
fn after_subject_layout_interleaves_columns() {
    let raw = raw(&["id", "physics", "name", "math"], &[&["1", "81", "Li", "76"]]);
    let table = assign(&raw, &band_rules(), &AssignOptions::default()).expect("assign");
    assert_eq!(
        table.columns(),
        &strings(&[
            "id",
            "physics",
            "physics_assigned",
            "name",
            "math",
            "math_assigned",
            "total_assigned"
        ])
    );
    assert_eq!(table.get(0, "total_assigned"), Some(&CellValue::Number(185.0)));
}

#[test]
fn end_layout_appends_in_subject_order() {
    let raw = raw(&["id", "physics", "name", "math"], &[&["1", "81", "Li", "76"]]);
    let options = AssignOptions::default().with_layout(LayoutPolicy::End);
    let table = assign(&raw, &band_rules(), &options).expect("assign");
    assert_eq!(
        table.columns(),
        &strings(&[
            "id",
            "physics",
            "name",
            "math",
            "math_assigned",
            "physics_assigned",
            "total_assigned"
        ])
    );
}

#[test]
fn custom_column_names_are_used() {
    let raw = raw(&["math"], &[&["95"]]);
    let options = AssignOptions::default()
        .with_assigned_suffix("_std")
        .with_total_column("sum");
    let table = assign(&raw, &band_rules(), &options).expect("assign");
    assert_eq!(table.columns(), &strings(&["math", "math_std", "sum"]));
}

#[test]
fn zero_rows_keep_columns() {
    let raw = raw(&["id", "math"], &[]);
    let table = assign(&raw, &band_rules(), &AssignOptions::default()).expect("assign");
    assert_eq!(table.row_count(), 0);
    assert_eq!(
        table.columns(),
        &strings(&["id", "math", "math_assigned", "total_assigned"])
    );
}

#[test]
fn raw_table_without_columns_is_rejected() {
    let raw = RawTable::new(Vec::new(), Vec::new());
    let err = assign(&raw, &band_rules(), &AssignOptions::default()).unwrap_err();
    assert_eq!(err, AssignError::RawTableEmpty);
}

#[test]
fn existing_total_column_is_rejected() {
    let raw = raw(&["math", "total_assigned"], &[&["95", "1"]]);
    let err = assign(&raw, &band_rules(), &AssignOptions::default()).unwrap_err();
    assert_eq!(
        err,
        AssignError::ColumnCollision {
            column: "total_assigned".to_string()
        }
    );
}

#[test]
fn inputs_are_left_untouched() {
    let raw = raw(&["id", "math"], &[&["1", "85"]]);
    let before = raw.clone();
    let _ = assign(&raw, &band_rules(), &AssignOptions::default()).expect("assign");
    assert_eq!(raw, before);
}

#[test]
fn deserialized_short_rows_assign_as_blank() {
    let raw: RawTable =
        serde_json::from_str(r#"{"columns":["id","math"],"rows":[["1"],["2","95"]]}"#)
            .expect("raw table");
    let table = assign(&raw, &band_rules(), &AssignOptions::default()).expect("assign");
    assert_eq!(column(&table, "math_assigned"), vec!["", "100"]);
    assert_eq!(column(&table, "total_assigned"), vec!["", "100"]);
}
