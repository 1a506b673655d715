use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::{MstError, Result};
use crate::graph::InputData;
use crate::report::OutputData;

fn io_error(path: &Path, source: std::io::Error) -> MstError {
    MstError::Io {
        path: path.to_path_buf(),
        source,
    }
}

pub fn read_input<R: Read>(reader: R) -> Result<InputData> {
    let input = serde_json::from_reader(reader)?;
    Ok(input)
}

/// Reads the graphs to process from the JSON file at `path`.
pub fn load_input<P: AsRef<Path>>(path: P) -> Result<InputData> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| io_error(path, e))?;
    read_input(BufReader::new(file))
}

pub fn write_output<W: Write>(writer: W, output: &OutputData, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, output)?;
    } else {
        serde_json::to_writer(writer, output)?;
    }
    Ok(())
}

/// Writes the report to `path`, replacing any existing file.
pub fn save_output<P: AsRef<Path>>(path: P, output: &OutputData, pretty: bool) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| io_error(path, e))?;
    let mut writer = BufWriter::new(file);
    write_output(&mut writer, output, pretty)?;
    writer.flush().map_err(|e| io_error(path, e))
}
