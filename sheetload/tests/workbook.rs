#![cfg(feature = "xlsx")]

use rust_xlsxwriter::{Workbook, XlsxError};
use sheetload::*;
use std::path::Path;

// writes a workbook with a notes sheet ahead of the visitor counts, whose
// sheet name is upper-cased
fn write_visitors(path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();

    let notes = workbook.add_worksheet();
    notes.set_name("Notes")?;
    notes.write_string(0, 0, "source")?;
    notes.write_string(1, 0, "dinas pariwisata")?;

    let sheet = workbook.add_worksheet();
    sheet.set_name("DATATRAIN")?;

    for (col, header) in [" ID", "Bulan", "Tahun", "Kuta ", "Ubud"].iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }

    let rows: [(f64, &str, f64, Option<f64>, f64); 3] = [
        (1.0, "Januari", 2023.0, Some(120.0), 40.0),
        (2.0, "Februari", 2023.0, None, 55.5),
        (3.0, "Maret", 2023.0, Some(131.0), 61.0),
    ];

    for (i, (id, month, year, kuta, ubud)) in rows.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_number(row, 0, *id)?;
        sheet.write_string(row, 1, *month)?;
        sheet.write_number(row, 2, *year)?;
        if let Some(kuta) = kuta {
            sheet.write_number(row, 3, *kuta)?;
        }
        sheet.write_number(row, 4, *ubud)?;
    }

    workbook.save(path)
}

fn fixture() -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Tubes_Mosi.xlsx");
    write_visitors(&path).unwrap();
    (dir, path)
}

#[test]
// the sheet name is matched ignoring case and surrounding whitespace
fn sheet_name_normalized() {
    let (_dir, path) = fixture();
    let table = load(&path, " DataTrain ").unwrap();

    assert_eq!(table.len(), 3);
    assert_eq!(table.headers(), vec![" ID", "Bulan", "Tahun", "Kuta ", "Ubud"]);
    assert_eq!(
        table.columns_except(&["id", "bulan", "tahun"]),
        vec!["kuta", "ubud"]
    );
}

#[test]
fn cells() {
    let (_dir, path) = fixture();
    let table = load(&path, "datatrain").unwrap();

    // the gap in kuta is an empty cell and is dropped
    assert_eq!(table.numeric_column("kuta"), Some(vec![120.0, 131.0]));
    assert_eq!(table.numeric_column("ubud"), Some(vec![40.0, 55.5, 61.0]));
    assert_eq!(table.numeric_column("bulan"), Some(vec![]));

    let row: Vec<String> = table
        .row(1)
        .unwrap()
        .iter()
        .map(|c| c.to_string())
        .collect();
    assert_eq!(row, vec!["2", "Februari", "2023", "", "55.5"]);
    assert_eq!(table.column("kuta").map(|c| c.cells()[1].is_empty()), Some(true));
}

#[test]
fn other_sheet() {
    let (_dir, path) = fixture();
    let table = load(&path, "notes").unwrap();
    assert_eq!(table.headers(), vec!["source"]);
    assert_eq!(table.len(), 1);
}

#[test]
fn missing_sheet() {
    let (_dir, path) = fixture();
    assert_eq!(
        load(&path, "DataTest"),
        Err(LoadError::SheetNotFound("DataTest".to_string()))
    );
}

#[test]
fn cached_workbook() {
    let (_dir, path) = fixture();
    let loader = Loader::new();
    let table = loader.load(&path, "DataTrain").unwrap();
    assert_eq!(table.numeric_column("kuta"), Some(vec![120.0, 131.0]));
    assert!(loader.load(&path, "DataTest").is_err());
    assert_eq!(loader.len(), 1);
}
