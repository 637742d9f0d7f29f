use serde::Serialize;

/// Objective names written as the first row of a design file.
pub const HEADER_FIELDS: [&str; 4] = ["L_D", "M_empty", "MTOW", "Stall"];

/// Token marking an objective as "minimize" in the second row.
pub const MINIMIZE_MARKER: &str = "TRUE";

#[derive(Debug, Clone, PartialEq)]
pub struct TranslateReport {
    pub input_path: String,
    pub output_path: String,
    pub input_lines: usize,
    pub output_lines: usize,
    pub bytes_written: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Design {
    /// Zero-based position among the design rows.
    pub index: usize,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DesignTable {
    pub metrics: Vec<String>,
    pub minimize: Vec<bool>,
    pub designs: Vec<Design>,
}

/// Designs not dominated by any other design on a pair of metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParetoFront {
    pub metrics: [String; 2],
    pub designs: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectSummary {
    pub metrics: Vec<String>,
    pub minimize: Vec<bool>,
    pub design_count: usize,
    /// Design indices whose column count differs from the header.
    pub mismatched_designs: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pareto_front: Option<ParetoFront>,
}
