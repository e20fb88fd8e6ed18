use std::fs::File;
use std::path::Path;

use arrow::array::{Array, ArrayRef, AsArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::error::DataLoadError;
use super::model::{
    COL_CLASS, COL_LAUNCH_SITE, COL_PAYLOAD_MASS, Dataset, LaunchRecord, Outcome,
};

const REQUIRED_COLUMNS: [&str; 3] = [COL_LAUNCH_SITE, COL_PAYLOAD_MASS, COL_CLASS];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row, comma delimited (the usual export)
/// * `.json`    – `[{ "Launch Site": ..., "Payload Mass (kg)": ..., "class": ... }, ...]`
/// * `.parquet` – flat columns with the same names
///
/// Columns other than the three required ones are ignored.
pub fn load_file(path: &Path) -> Result<Dataset, DataLoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let records = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        "parquet" | "pq" => load_parquet(path)?,
        other => return Err(DataLoadError::UnsupportedFormat(other.to_string())),
    };

    Dataset::from_records(records)
}

fn open(path: &Path) -> Result<File, DataLoadError> {
    File::open(path).map_err(|source| DataLoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: String,
}

fn load_csv(path: &Path) -> Result<Vec<LaunchRecord>, DataLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(open(path)?);

    let headers = reader.headers()?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(DataLoadError::MissingColumn(col));
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<CsvRow>().enumerate() {
        let row = result.map_err(|e| DataLoadError::row(row_no, e.to_string()))?;
        let outcome = Outcome::parse(&row.class).ok_or_else(|| {
            DataLoadError::row(row_no, format!("class '{}' is not 0 or 1", row.class))
        })?;
        records.push(LaunchRecord::new(row.launch_site, row.payload_mass_kg, outcome));
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Records-oriented JSON, i.e. what `df.to_json(orient='records')` writes.
fn load_json(path: &Path) -> Result<Vec<LaunchRecord>, DataLoadError> {
    let root: JsonValue = serde_json::from_reader(std::io::BufReader::new(open(path)?))?;

    let rows = root
        .as_array()
        .ok_or_else(|| DataLoadError::Format("expected a top-level JSON array of records".into()))?;

    rows.iter()
        .enumerate()
        .map(|(i, rec)| {
            let obj = rec
                .as_object()
                .ok_or_else(|| DataLoadError::row(i, "not a JSON object"))?;

            let field = |name: &'static str| obj.get(name).ok_or(DataLoadError::MissingColumn(name));

            let launch_site = field(COL_LAUNCH_SITE)?
                .as_str()
                .ok_or_else(|| DataLoadError::row(i, "launch site is not a string"))?;
            let payload = field(COL_PAYLOAD_MASS)?
                .as_f64()
                .ok_or_else(|| DataLoadError::row(i, "payload mass is not a number"))?;
            let outcome = match field(COL_CLASS)? {
                JsonValue::Bool(b) => Some(if *b { Outcome::Success } else { Outcome::Failure }),
                JsonValue::Number(n) => n.as_f64().and_then(Outcome::from_class),
                JsonValue::String(s) => Outcome::parse(s),
                _ => None,
            }
            .ok_or_else(|| DataLoadError::row(i, "class is not 0 or 1"))?;

            Ok(LaunchRecord::new(launch_site, payload, outcome))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load launch records from a Parquet file.
///
/// The payload and class columns may be any numeric type (class may also be
/// boolean); they are cast to `Float64` before reading. Works with files
/// written by both **Pandas** and **Polars**.
fn load_parquet(path: &Path) -> Result<Vec<LaunchRecord>, DataLoadError> {
    let builder = ParquetRecordBatchReaderBuilder::try_new(open(path)?)?;
    let reader = builder.build()?;

    let mut records = Vec::new();
    for batch in reader {
        let batch = batch?;
        read_batch(&batch, &mut records)?;
    }
    Ok(records)
}

fn read_batch(batch: &RecordBatch, out: &mut Vec<LaunchRecord>) -> Result<(), DataLoadError> {
    let sites = cast(column(batch, COL_LAUNCH_SITE)?.as_ref(), &DataType::Utf8)?;
    let payloads = cast(column(batch, COL_PAYLOAD_MASS)?.as_ref(), &DataType::Float64)?;
    let classes = cast(column(batch, COL_CLASS)?.as_ref(), &DataType::Float64)?;

    let sites = sites
        .as_string_opt::<i32>()
        .ok_or(DataLoadError::MissingColumn(COL_LAUNCH_SITE))?;
    let payloads = payloads
        .as_primitive_opt::<Float64Type>()
        .ok_or(DataLoadError::MissingColumn(COL_PAYLOAD_MASS))?;
    let classes = classes
        .as_primitive_opt::<Float64Type>()
        .ok_or(DataLoadError::MissingColumn(COL_CLASS))?;

    let offset = out.len();
    for i in 0..batch.num_rows() {
        let row = offset + i;
        if sites.is_null(i) || payloads.is_null(i) || classes.is_null(i) {
            return Err(DataLoadError::row(row, "null value in a required column"));
        }
        let outcome = Outcome::from_class(classes.value(i))
            .ok_or_else(|| DataLoadError::row(row, format!("class {} is not 0 or 1", classes.value(i))))?;
        out.push(LaunchRecord::new(sites.value(i), payloads.value(i), outcome));
    }
    Ok(())
}

fn column<'a>(batch: &'a RecordBatch, name: &'static str) -> Result<&'a ArrayRef, DataLoadError> {
    batch
        .schema_ref()
        .index_of(name)
        .map(|idx| batch.column(idx))
        .map_err(|_| DataLoadError::MissingColumn(name))
}
