use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use vital_alert::schema;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Fresh scratch directory under the system temp dir
#[must_use]
pub fn scratch_dir(name: &str) -> PathBuf {
    let n = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = std::env::temp_dir().join(format!(
        "vital-alert-{}-{name}-{n}",
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("scratch dir");
    dir
}

/// One row of vitals: pulse, systolic, MAP, resp rate, SpO2, blood loss
pub type VitalRow = [f64; 6];

/// Calm vitals with no blood loss
pub const CALM: VitalRow = [80.0, 120.0, 90.0, 16.0, 98.0, 0.0];

/// Decompensated vitals with heavy blood loss
pub const SHOCKED: VitalRow = [150.0, 75.0, 50.0, 40.0, 82.0, 35.0];

/// Build a vitals batch with all six input columns
#[must_use]
pub fn vitals_batch(rows: &[VitalRow]) -> RecordBatch {
    let names = [
        schema::PULSE,
        schema::SYSTOLIC,
        schema::MAP,
        schema::RESP_RATE,
        schema::SPO2,
        schema::BLOOD_LOSS,
    ];
    let fields: Vec<Field> = names
        .iter()
        .map(|n| Field::new(*n, DataType::Float64, true))
        .collect();
    let columns: Vec<ArrayRef> = (0..names.len())
        .map(|c| Arc::new(Float64Array::from_iter_values(rows.iter().map(|r| r[c]))) as ArrayRef)
        .collect();
    RecordBatch::try_new(Arc::new(Schema::new(fields)), columns).expect("vitals batch")
}

/// Add a string column in front of a batch, as patient identifiers often are
#[must_use]
pub fn with_leading_label(batch: &RecordBatch, name: &str) -> RecordBatch {
    let labels: ArrayRef = Arc::new(StringArray::from_iter_values(
        (0..batch.num_rows()).map(|i| format!("t{i}")),
    ));
    let mut fields = vec![Arc::new(Field::new(name, DataType::Utf8, false))];
    fields.extend(batch.schema().fields().iter().cloned());
    let mut columns = vec![labels];
    columns.extend(batch.columns().iter().cloned());
    RecordBatch::try_new(Arc::new(Schema::new(fields)), columns).expect("labelled batch")
}

/// Column names of a batch, in order
#[must_use]
pub fn column_names(batch: &RecordBatch) -> Vec<String> {
    batch
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().clone())
        .collect()
}

/// Values of a string column
#[must_use]
pub fn string_column(batch: &RecordBatch, name: &str) -> Vec<String> {
    let idx = batch.schema().index_of(name).expect("column present");
    batch
        .column(idx)
        .as_any()
        .downcast_ref::<StringArray>()
        .expect("string column")
        .iter()
        .map(|v| v.unwrap_or_default().to_string())
        .collect()
}

/// Values of a numeric column, cast to `f64`
#[must_use]
pub fn float_column(batch: &RecordBatch, name: &str) -> Vec<f64> {
    let idx = batch.schema().index_of(name).expect("column present");
    let cast = arrow::compute::cast(batch.column(idx), &DataType::Float64).expect("cast");
    cast.as_any()
        .downcast_ref::<Float64Array>()
        .expect("float column")
        .iter()
        .map(|v| v.unwrap_or(f64::NAN))
        .collect()
}

/// Print summary information about record batches
pub fn print_batch_summary(batch: &RecordBatch) {
    println!(
        "{} rows, columns: {}",
        batch.num_rows(),
        column_names(batch).join(", ")
    );
}
