//! Reads work items from CSV: `url[,expected redirect suffix]`, no header row.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use urlaudit_core::{Mode, WorkItem};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("cannot read {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: missing url")]
    MissingUrl { line: u64 },
    #[error("line {line}: missing expected redirect target for {url}")]
    MissingExpectation { line: u64, url: String },
}

pub fn read_work_items(path: &Path, mode: Mode) -> Result<Vec<WorkItem>, InputError> {
    let reader = reader_builder()
        .from_path(path)
        .map_err(|source| InputError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    collect_items(reader, mode)
}

pub fn parse_work_items<R: io::Read>(input: R, mode: Mode) -> Result<Vec<WorkItem>, InputError> {
    collect_items(reader_builder().from_reader(input), mode)
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All);
    builder
}

fn collect_items<R: io::Read>(
    mut reader: csv::Reader<R>,
    mode: Mode,
) -> Result<Vec<WorkItem>, InputError> {
    let mut items = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();

        let url = record.get(0).unwrap_or_default();
        if url.is_empty() {
            return Err(InputError::MissingUrl { line });
        }
        let expectation = record
            .get(1)
            .filter(|value| !value.is_empty())
            .map(|value| value.to_string());
        if mode == Mode::RedirectCheck && expectation.is_none() {
            return Err(InputError::MissingExpectation {
                line,
                url: url.to_string(),
            });
        }

        items.push(WorkItem::new(items.len(), url, expectation));
    }
    Ok(items)
}
