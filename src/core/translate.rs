use crate::core::{Result, Storage, TranslateReport, HEADER_FIELDS, MINIMIZE_MARKER};
use crate::utils::paths::{INPUT_FILE, OUTPUT_FILE};

pub fn header_line() -> String {
    format!("{}\n", HEADER_FIELDS.join(","))
}

/// One minimize marker per header field.
pub fn marker_line() -> String {
    format!("{}\n", vec![MINIMIZE_MARKER; HEADER_FIELDS.len()].join(","))
}

/// Header and marker rows followed by `input` byte for byte.
pub fn render(input: &[u8]) -> Vec<u8> {
    let header = header_line();
    let marker = marker_line();

    let mut out = Vec::with_capacity(header.len() + marker.len() + input.len());
    out.extend_from_slice(header.as_bytes());
    out.extend_from_slice(marker.as_bytes());
    out.extend_from_slice(input);
    out
}

/// Number of lines in `data`; a final line without a terminator still counts.
pub fn count_lines(data: &[u8]) -> usize {
    let terminated = data.iter().filter(|&&b| b == b'\n').count();
    match data.last() {
        Some(b'\n') | None => terminated,
        Some(_) => terminated + 1,
    }
}

pub struct Translator<S: Storage> {
    storage: S,
    input: String,
    output: String,
}

impl<S: Storage> Translator<S> {
    pub fn new(storage: S) -> Self {
        Self::with_files(storage, INPUT_FILE, OUTPUT_FILE)
    }

    pub fn with_files(storage: S, input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            storage,
            input: input.into(),
            output: output.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn translate(&self) -> Result<TranslateReport> {
        let input_path = self.storage.location(&self.input);
        let output_path = self.storage.location(&self.output);

        // The input is fully read before the output is touched.
        tracing::debug!("Reading {}", input_path);
        let raw = self.storage.read_file(&self.input)?;
        let input_lines = count_lines(&raw);
        tracing::info!("Read {} lines from {}", input_lines, input_path);

        let rendered = render(&raw);

        tracing::debug!("Writing {} bytes to {}", rendered.len(), output_path);
        self.storage.write_file(&self.output, &rendered)?;

        let report = TranslateReport {
            input_path,
            output_path,
            input_lines,
            output_lines: count_lines(&rendered),
            bytes_written: rendered.len(),
        };
        tracing::info!(
            "Wrote {} lines to {}",
            report.output_lines,
            report.output_path
        );
        Ok(report)
    }
}
