#![allow(dead_code)]

use std::path::{Path, PathBuf};

use budget_dashboard::budget::RawRow;
use rust_xlsxwriter::Workbook;
use tempfile::TempDir;

pub const SAMPLE_CSV: &str = "Main Category,Subcategory,Budget,Spent\n\
Food,Groceries,200,150\n\
Food,Dining,50,60\n\
Rent,Rent,1000,1000\n";

/// The three-line household sheet used across the suites.
pub fn sample_rows() -> Vec<RawRow> {
    vec![
        RawRow::new("Food", "Groceries", 200.0, 150.0),
        RawRow::new("Food", "Dining", 50.0, 60.0),
        RawRow::new("Rent", "Rent", 1000.0, 1000.0),
    ]
}

pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}

pub enum Cell<'a> {
    Text(&'a str),
    Number(f64),
    Blank,
}

/// Writes a single-sheet workbook with a header row followed by `rows`.
pub fn write_workbook(path: &Path, sheet: &str, headers: &[&str], rows: &[Vec<Cell<'_>>]) {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet).expect("sheet name");
    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .expect("write header");
    }
    for (idx, row) in rows.iter().enumerate() {
        let row_num = idx as u32 + 1;
        for (col, cell) in row.iter().enumerate() {
            match cell {
                Cell::Text(text) => {
                    worksheet
                        .write_string(row_num, col as u16, *text)
                        .expect("write text");
                }
                Cell::Number(n) => {
                    worksheet
                        .write_number(row_num, col as u16, *n)
                        .expect("write number");
                }
                Cell::Blank => {}
            }
        }
    }
    workbook.save(path).expect("save workbook");
}
