use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use tempfile::TempDir;

use scoremap_model::{AugmentedTable, CellValue};
use scoremap_output::{
    OutputError, OutputFormat, csv_to_bytes, write_table, xlsx_to_bytes,
};

fn sample_table() -> AugmentedTable {
    let mut table = AugmentedTable::new(
        ["id", "name", "math", "math_assigned", "total_assigned"]
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
    );
    table.push_row(vec![
        CellValue::Text("1".to_string()),
        CellValue::Text("Li, Wei".to_string()),
        CellValue::Text("85".to_string()),
        CellValue::Number(85.0),
        CellValue::Number(85.0),
    ])
    .unwrap();
    table.push_row(vec![
        CellValue::Text("2".to_string()),
        CellValue::Text("Wang".to_string()),
        CellValue::Text(String::new()),
        CellValue::Missing,
        CellValue::Missing,
    ])
    .unwrap();
    table.push_row(vec![
        CellValue::Text("3".to_string()),
        CellValue::Text("Zhao".to_string()),
        CellValue::Text("77.5".to_string()),
        CellValue::Number(72.5),
        CellValue::Number(72.5),
    ])
    .unwrap();
    table
}

#[test]
fn csv_output_keeps_column_order_and_blanks() {
    let bytes = csv_to_bytes(&sample_table()).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    insta::assert_snapshot!(text.trim_end(), @r#"
    id,name,math,math_assigned,total_assigned
    1,"Li, Wei",85,85,85
    2,Wang,,,
    3,Zhao,77.5,72.5,72.5
    "#);
}

#[test]
fn xlsx_output_round_trips_through_calamine() {
    let bytes = xlsx_to_bytes(&sample_table()).unwrap();
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes)).unwrap();
    let range = workbook.worksheet_range("Assigned").unwrap();

    let header: Vec<String> = range.rows().next().unwrap().iter().map(ToString::to_string).collect();
    assert_eq!(header, vec!["id", "name", "math", "math_assigned", "total_assigned"]);

    let rows: Vec<&[Data]> = range.rows().skip(1).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0][1], Data::String("Li, Wei".to_string()));
    assert_eq!(rows[0][3], Data::Float(85.0));
    assert_eq!(rows[1][3], Data::Empty);
    assert_eq!(rows[2][4], Data::Float(72.5));
}

#[test]
fn write_table_dispatches_on_extension() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("nested/out.csv");
    let xlsx_path = dir.path().join("out.xlsx");

    assert_eq!(write_table(&csv_path, &sample_table()).unwrap(), OutputFormat::Csv);
    assert_eq!(write_table(&xlsx_path, &sample_table()).unwrap(), OutputFormat::Xlsx);

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert!(csv.starts_with("id,name,math,math_assigned,total_assigned"));
    let xlsx = std::fs::read(&xlsx_path).unwrap();
    assert!(xlsx.starts_with(b"PK"));
}

#[test]
fn unwritable_csv_path_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, b"x").unwrap();
    let err = write_table(&blocker.join("out.csv"), &sample_table()).unwrap_err();
    assert!(matches!(err, OutputError::Io { .. }));
}
