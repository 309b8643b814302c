//! Catalog loaders for JSON, CSV and xlsx sources.
//!
//! All loaders share the same cell coercion rules:
//!
//! - blank / null / error cells become `""`
//! - whole numbers in text columns render without a fractional part
//!   (`123.0` → `"123"`)
//! - stock cells that are not a non-negative number become `0`
//! - codes are normalized with [`normalize_code`](crate::normalize_code)

use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use calamine::{Data, Reader, Xlsx};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::columns::{ColumnIndices, ColumnMapping};
use crate::error::LoadError;
use crate::record::{parse_stock, stock_from_f64, ProductRecord};

/// Supported tabular source formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Array of row objects keyed by column header.
    Json,
    /// Comma-separated values with a header row.
    Csv,
    /// Excel workbook; the first sheet is read, its first row holds headers.
    Xlsx,
}

impl SourceFormat {
    /// Infer the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(SourceFormat::Json),
            "csv" => Ok(SourceFormat::Csv),
            "xlsx" | "xlsm" => Ok(SourceFormat::Xlsx),
            other => Err(LoadError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Options controlling how a source file is read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Explicit format; inferred from the extension when `None`.
    #[serde(default)]
    pub format: Option<SourceFormat>,
    /// Header names for the required columns.
    #[serde(default)]
    pub columns: ColumnMapping,
}

/// Load a catalog from a file on disk.
///
/// # Errors
///
/// Returns [`LoadError`] when the file is missing or unreadable, when the
/// format is unknown or malformed, or when a required column is absent.
///
/// ```rust,no_run
/// use catalog::{load, LoadOptions};
///
/// let catalog = load("resultado_final.csv", &LoadOptions::default())?;
/// println!("{} products", catalog.len());
/// # Ok::<(), catalog::LoadError>(())
/// ```
pub fn load(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Catalog, LoadError> {
    let path = path.as_ref();
    let format = match options.format {
        Some(format) => format,
        None => SourceFormat::from_path(path)?,
    };

    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let catalog = match format {
        SourceFormat::Json => {
            let text = std::fs::read_to_string(path).map_err(io_err)?;
            from_json_str(&text, &options.columns)?
        }
        SourceFormat::Csv => {
            let file = File::open(path).map_err(io_err)?;
            from_csv_reader(file, &options.columns)?
        }
        SourceFormat::Xlsx => {
            let file = File::open(path).map_err(io_err)?;
            from_xlsx_reader(BufReader::new(file), &options.columns)?
        }
    };

    info!(
        path = %path.display(),
        format = ?format,
        rows = catalog.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Parse a JSON array of row objects.
///
/// Required columns are checked against the union of keys across all rows;
/// a row that lacks one of them gets a blank cell. An empty array yields an
/// empty catalog.
pub fn from_json_str(text: &str, columns: &ColumnMapping) -> Result<Catalog, LoadError> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Array(rows) = value else {
        return Err(LoadError::InvalidShape(
            "expected a top-level array of rows".into(),
        ));
    };

    let mut objects: Vec<Map<String, Value>> = Vec::with_capacity(rows.len());
    for (i, row) in rows.into_iter().enumerate() {
        match row {
            Value::Object(map) => objects.push(trim_keys(map)),
            other => {
                return Err(LoadError::InvalidShape(format!(
                    "row {i} is {} instead of an object",
                    json_kind(&other)
                )))
            }
        }
    }

    if objects.is_empty() {
        return Ok(Catalog::default());
    }

    let mut seen: Vec<&str> = Vec::new();
    for object in &objects {
        for key in object.keys() {
            if !seen.contains(&key.as_str()) {
                seen.push(key.as_str());
            }
        }
    }
    columns.resolve(seen.iter().copied())?;

    let mut coerced = 0usize;
    let records: Vec<ProductRecord> = objects
        .iter()
        .map(|object| {
            let cell = |name: &str| object.get(name.trim());
            let stock_cell = cell(&columns.stock_quantity);
            let stock = stock_cell.and_then(json_stock);
            if stock.is_none() && stock_cell.is_some_and(|v| !is_blank(v)) {
                coerced += 1;
            }
            ProductRecord::new(
                json_text(cell(&columns.code)),
                json_text(cell(&columns.description)),
                json_text(cell(&columns.manufacturer)),
                json_text(cell(&columns.category)),
                stock.unwrap_or(0),
            )
        })
        .collect();

    report_coercions(coerced);
    Ok(Catalog::from_records(records))
}

/// Parse CSV with a header row from any reader.
pub fn from_csv_reader<R: Read>(reader: R, columns: &ColumnMapping) -> Result<Catalog, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let indices: ColumnIndices = columns.resolve(rdr.headers()?.iter())?;

    let mut coerced = 0usize;
    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let cell = |idx: usize| row.get(idx).unwrap_or("");
        let raw_stock = cell(indices.stock_quantity);
        let stock = parse_stock(raw_stock);
        if stock.is_none() && !raw_stock.trim().is_empty() {
            coerced += 1;
        }
        records.push(ProductRecord::new(
            cell(indices.code),
            cell(indices.description),
            cell(indices.manufacturer),
            cell(indices.category),
            stock.unwrap_or(0),
        ));
    }

    report_coercions(coerced);
    Ok(Catalog::from_records(records))
}

/// Parse the first sheet of an xlsx workbook from any seekable reader.
///
/// The first row of the sheet's used range is the header row. An empty
/// sheet has no headers and so fails with [`LoadError::MissingColumn`].
pub fn from_xlsx_reader<RS: Read + Seek>(
    reader: RS,
    columns: &ColumnMapping,
) -> Result<Catalog, LoadError> {
    let mut workbook: Xlsx<RS> = Xlsx::new(reader)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LoadError::InvalidShape("workbook has no sheets".into()))??;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|row| row.iter().map(xlsx_text).collect())
        .unwrap_or_default();
    let indices = columns.resolve(headers.iter().map(String::as_str))?;

    let mut coerced = 0usize;
    let mut records = Vec::new();
    for row in rows {
        let cell = |idx: usize| row.get(idx).unwrap_or(&Data::Empty);
        let stock_cell = cell(indices.stock_quantity);
        let stock = xlsx_stock(stock_cell);
        if stock.is_none() && !xlsx_text(stock_cell).trim().is_empty() {
            coerced += 1;
        }
        records.push(ProductRecord::new(
            xlsx_text(cell(indices.code)),
            xlsx_text(cell(indices.description)),
            xlsx_text(cell(indices.manufacturer)),
            xlsx_text(cell(indices.category)),
            stock.unwrap_or(0),
        ));
    }

    report_coercions(coerced);
    Ok(Catalog::from_records(records))
}

fn report_coercions(coerced: usize) {
    if coerced > 0 {
        warn!(cells = coerced, "non-numeric stock values coerced to 0");
    }
}

fn trim_keys(map: Map<String, Value>) -> Map<String, Value> {
    map.into_iter()
        .map(|(k, v)| (k.trim().to_string(), v))
        .collect()
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn json_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
            (Some(i), _, _) => i.to_string(),
            (None, Some(u), _) => u.to_string(),
            (None, None, Some(f)) if f.is_finite() && f.fract() == 0.0 => format!("{f:.0}"),
            _ => n.to_string(),
        },
        Some(other) => other.to_string(),
    }
}

fn json_stock(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_i64().and_then(|i| u64::try_from(i).ok()))
            .or_else(|| n.as_f64().and_then(stock_from_f64)),
        Value::String(s) => parse_stock(s),
        _ => None,
    }
}

fn xlsx_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{f:.0}"),
        other => other.to_string(),
    }
}

fn xlsx_stock(cell: &Data) -> Option<u64> {
    match cell {
        Data::Int(i) => u64::try_from(*i).ok(),
        Data::Float(f) => stock_from_f64(*f),
        Data::String(s) => parse_stock(s),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(code: Value, stock: Value) -> Value {
        json!({
            "Codigo del Articulo": code,
            "Descripcion": "Martillo 500g",
            "Fabricante": "AcmeTools",
            "Categoria": "Herramientas",
            "Suma Bodegas": stock,
        })
    }

    #[test]
    fn json_rows_are_normalized() {
        let text = json!([
            row(json!("000123"), json!(20)),
            row(json!(456.0), json!("7")),
            row(json!(null), json!(null)),
        ])
        .to_string();
        let catalog = from_json_str(&text, &ColumnMapping::default()).expect("valid catalog");

        let codes: Vec<_> = catalog.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, ["123", "456", ""]);
        let stock: Vec<_> = catalog.iter().map(|r| r.stock_quantity).collect();
        assert_eq!(stock, [20, 7, 0]);
    }

    #[test]
    fn json_stock_coercion() {
        assert_eq!(json_stock(&json!(3.9)), Some(3));
        assert_eq!(json_stock(&json!(-2)), None);
        assert_eq!(json_stock(&json!("abc")), None);
        assert_eq!(json_stock(&json!(true)), None);
    }

    #[test]
    fn json_missing_cells_become_blank() {
        let text = json!([
            {"Codigo del Articulo": "1", "Descripcion": "Llave", "Suma Bodegas": 4},
            {"Fabricante": "Fixa", "Categoria": "Ferreteria", "Codigo del Articulo": "2"},
        ])
        .to_string();
        let catalog = from_json_str(&text, &ColumnMapping::default()).expect("union of keys");
        assert_eq!(catalog.records()[0].manufacturer, "");
        assert_eq!(catalog.records()[1].description, "");
        assert_eq!(catalog.records()[1].stock_quantity, 0);
    }

    #[test]
    fn json_missing_column_fails() {
        let text = json!([{"Codigo del Articulo": "1", "Descripcion": "x"}]).to_string();
        let err = from_json_str(&text, &ColumnMapping::default()).expect_err("columns missing");
        assert!(matches!(err, LoadError::MissingColumn(_)));
    }

    #[test]
    fn json_wrong_shape_fails() {
        let err = from_json_str("{\"rows\": []}", &ColumnMapping::default())
            .expect_err("object is not an array");
        assert!(matches!(err, LoadError::InvalidShape(_)));

        let err = from_json_str("[1, 2]", &ColumnMapping::default())
            .expect_err("rows must be objects");
        assert!(matches!(err, LoadError::InvalidShape(msg) if msg.contains("a number")));
    }

    #[test]
    fn empty_json_array_is_an_empty_catalog() {
        let catalog = from_json_str("[]", &ColumnMapping::default()).expect("empty is fine");
        assert!(catalog.is_empty());
    }

    #[test]
    fn csv_headers_are_trimmed_and_cells_coerced() {
        let data = "\
 Codigo del Articulo ,Descripcion,Fabricante,Categoria,Suma Bodegas
0042,Tornillo 10mm acero,Fixa,Ferreteria,15
7,Llave inglesa,,Herramientas,sin dato
";
        let catalog =
            from_csv_reader(data.as_bytes(), &ColumnMapping::default()).expect("valid csv");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[0].code, "42");
        assert_eq!(catalog.records()[0].stock_quantity, 15);
        assert_eq!(catalog.records()[1].manufacturer, "");
        assert_eq!(catalog.records()[1].stock_quantity, 0);
    }

    #[test]
    fn csv_missing_column_fails() {
        let data = "Codigo del Articulo,Descripcion\n1,x\n";
        let err = from_csv_reader(data.as_bytes(), &ColumnMapping::default())
            .expect_err("missing columns");
        assert!(matches!(err, LoadError::MissingColumn(name) if name == "Fabricante"));
    }

    #[test]
    fn format_is_inferred_from_extension() {
        assert_eq!(
            SourceFormat::from_path(Path::new("a/b/catalog.JSON")).expect("json"),
            SourceFormat::Json
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("catalog.csv")).expect("csv"),
            SourceFormat::Csv
        );
        assert_eq!(
            SourceFormat::from_path(Path::new("resultado_final.xlsx")).expect("xlsx"),
            SourceFormat::Xlsx
        );
        assert!(matches!(
            SourceFormat::from_path(Path::new("catalog.ods")),
            Err(LoadError::UnsupportedFormat(ext)) if ext == "ods"
        ));
    }

    fn xlsx_fixture() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/catalogo.xlsx")
    }

    #[test]
    fn xlsx_first_sheet_is_loaded_and_coerced() {
        let catalog = load(xlsx_fixture(), &LoadOptions::default()).expect("valid workbook");
        assert_eq!(catalog.len(), 3);

        let codes: Vec<_> = catalog.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, ["42", "7", "123"]);
        let stock: Vec<_> = catalog.iter().map(|r| r.stock_quantity).collect();
        assert_eq!(stock, [15, 3, 0]);

        assert_eq!(catalog.records()[0].description, "Tornillo 10mm acero");
        assert_eq!(catalog.records()[1].manufacturer, "");
        assert_eq!(catalog.records()[2].manufacturer, "AcmeTools");
    }

    #[test]
    fn xlsx_columns_follow_the_mapping() {
        let columns = ColumnMapping {
            stock_quantity: "Stock Total".into(),
            ..ColumnMapping::default()
        };
        let err = load(
            xlsx_fixture(),
            &LoadOptions {
                format: Some(SourceFormat::Xlsx),
                columns,
            },
        )
        .expect_err("header is absent");
        assert!(matches!(err, LoadError::MissingColumn(name) if name == "Stock Total"));
    }

    #[test]
    fn xlsx_that_is_not_a_workbook_fails() {
        let garbage = std::io::Cursor::new(b"not a zip".to_vec());
        let err = from_xlsx_reader(garbage, &ColumnMapping::default()).expect_err("garbage");
        assert!(matches!(err, LoadError::Xlsx(_)));
    }

    #[test]
    fn xlsx_cell_coercion() {
        assert_eq!(xlsx_text(&Data::Float(456.0)), "456");
        assert_eq!(xlsx_text(&Data::Float(2.5)), "2.5");
        assert_eq!(xlsx_text(&Data::Int(9)), "9");
        assert_eq!(xlsx_text(&Data::Empty), "");
        assert_eq!(xlsx_stock(&Data::Float(7.9)), Some(7));
        assert_eq!(xlsx_stock(&Data::Int(-1)), None);
        assert_eq!(xlsx_stock(&Data::String(" 12 ".into())), Some(12));
        assert_eq!(xlsx_stock(&Data::Bool(true)), None);
    }
}
