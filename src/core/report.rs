//! Console rendering of sampled sequences and CSV output of
//! histograms, one row per scheme.

// std
use std::fs;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
// pbrt
use crate::core::error::{Result, SamplingError};
use crate::core::histogram::Histogram;
use crate::core::pbrt::Float;

/// Render the first *count* indices as characters `base + index`.
pub fn format_sequence(sequence: &[usize], count: usize, base: char) -> String {
    sequence
        .iter()
        .take(count)
        .map(|index| std::char::from_u32(base as u32 + *index as u32).unwrap_or('?'))
        .collect()
}

/// Rows of cells; every cell is written quoted and comma separated.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Csv {
    pub rows: Vec<Vec<String>>,
}

impl Csv {
    pub fn new() -> Self {
        Csv::default()
    }
    /// Append a row holding *label* followed by *values* with six
    /// decimals.
    pub fn add_row(&mut self, label: &str, values: &[Float]) {
        let mut row: Vec<String> = Vec::with_capacity(values.len() + 1);
        row.push(label.to_string());
        for v in values {
            row.push(format!("{:.6}", v));
        }
        self.rows.push(row);
    }
    pub fn add_histogram(&mut self, histogram: &Histogram) {
        self.add_row(&histogram.label, &histogram.frequencies);
    }
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for row in &self.rows {
            let line: Vec<String> = row
                .iter()
                .map(|cell| format!("\"{}\"", cell.replace('"', "\"\"")))
                .collect();
            writeln!(writer, "{}", line.join(","))?;
        }
        Ok(())
    }
    /// Write to `<dir>/histogram_<kind>_<count>.csv`, creating *dir*
    /// if needed.
    pub fn save(&self, dir: &Path, kind: &str, count: usize) -> Result<PathBuf> {
        fs::create_dir_all(dir).map_err(|source| SamplingError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path: PathBuf = dir.join(format!("histogram_{}_{}.csv", kind, count));
        let io_error = |source| SamplingError::Io {
            path: path.clone(),
            source,
        };
        let file: File = File::create(&path).map_err(io_error)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);
        self.write_to(&mut writer).map_err(io_error)?;
        writer.flush().map_err(io_error)?;
        Ok(path)
    }
}
