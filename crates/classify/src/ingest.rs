use std::io::Read;

use thiserror::Error;

use rowhouse_core::BucketConfig;

use crate::engine::{classify_grid, ClassificationResult, ClassifyOptions};

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Reads CSV bytes into a string grid. Header inference is off so row 0
/// stays in the grid; the engine treats it as the header row. Record lengths
/// may vary (hand-edited exports often do).
pub fn read_grid<R: Read>(data: R) -> Result<Vec<Vec<String>>, CsvError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut grid = Vec::new();
    for result in reader.records() {
        let record = result?;
        grid.push(record.iter().map(str::to_string).collect());
    }
    Ok(grid)
}

/// Parses CSV bytes and classifies the resulting table.
pub fn classify_csv<R: Read>(
    data: R,
    property: &str,
    config: &BucketConfig,
    options: &ClassifyOptions,
) -> Result<ClassificationResult, CsvError> {
    let grid = read_grid(data)?;
    Ok(classify_grid(&grid, property, config, options))
}
