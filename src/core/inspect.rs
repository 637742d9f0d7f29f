use crate::core::{Design, DesignTable, InspectSummary, Result, MINIMIZE_MARKER};
use crate::utils::error::AdapterError;
use std::path::Path;

impl DesignTable {
    /// Parses a design file: metric names, then minimize flags, then one design per row.
    /// Blank rows are rejected rather than skipped.
    pub fn parse(data: &[u8]) -> Result<Self> {
        reject_blank_rows(data)?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(data);

        let mut records = reader.records();

        let metrics: Vec<String> = match records.next() {
            Some(record) => record?.iter().map(str::to_string).collect(),
            None => {
                return Err(AdapterError::MalformedDesignError {
                    row: 1,
                    message: "missing metric name row".to_string(),
                })
            }
        };

        let minimize: Vec<bool> = match records.next() {
            Some(record) => record?.iter().map(|flag| flag == MINIMIZE_MARKER).collect(),
            None => {
                return Err(AdapterError::MalformedDesignError {
                    row: 2,
                    message: "missing minimize flag row".to_string(),
                })
            }
        };

        let mut designs = Vec::new();
        for (index, record) in records.enumerate() {
            let record = record?;
            let row = record
                .position()
                .map(|p| p.line() as usize)
                .unwrap_or(index + 3);

            let values = record
                .iter()
                .map(|field| {
                    field.trim().parse::<f64>().map_err(|e| {
                        AdapterError::MalformedDesignError {
                            row,
                            message: format!("'{}' is not a number: {}", field, e),
                        }
                    })
                })
                .collect::<Result<Vec<f64>>>()?;

            designs.push(Design { index, values });
        }

        tracing::debug!(
            "Parsed design table: {} metrics, {} designs",
            metrics.len(),
            designs.len()
        );

        Ok(Self {
            metrics,
            minimize,
            designs,
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| AdapterError::io(path, e))?;
        Self::parse(&data)
    }

    pub fn summary(&self) -> InspectSummary {
        let mismatched_designs: Vec<usize> = self
            .designs
            .iter()
            .filter(|design| design.values.len() != self.metrics.len())
            .map(|design| design.index)
            .collect();

        if !mismatched_designs.is_empty() {
            tracing::warn!(
                "{} design rows do not have {} columns",
                mismatched_designs.len(),
                self.metrics.len()
            );
        }

        InspectSummary {
            metrics: self.metrics.clone(),
            minimize: self.minimize.clone(),
            design_count: self.designs.len(),
            mismatched_designs,
            pareto_front: None,
        }
    }
}

fn reject_blank_rows(data: &[u8]) -> Result<()> {
    let rows: Vec<&[u8]> = data.split(|&b| b == b'\n').collect();
    // the piece after a final newline is not a row
    let last = rows.len().saturating_sub(1);

    for (index, row) in rows.iter().enumerate() {
        if index == last && row.is_empty() {
            break;
        }
        if row.strip_suffix(b"\r").unwrap_or(*row).is_empty() {
            return Err(AdapterError::MalformedDesignError {
                row: index + 1,
                message: "empty row".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::translate::render;

    #[test]
    fn test_parse_translated_output() {
        let data = render(b"15.2,1200,1850,28.4\n14.8,1180,1820,27.9\n");
        let table = DesignTable::parse(&data).unwrap();

        assert_eq!(table.metrics, vec!["L_D", "M_empty", "MTOW", "Stall"]);
        assert_eq!(table.minimize, vec![true; 4]);
        assert_eq!(table.designs.len(), 2);
        assert_eq!(table.designs[1].index, 1);
        assert_eq!(table.designs[1].values, vec![14.8, 1180.0, 1820.0, 27.9]);
    }

    #[test]
    fn test_flags_other_than_true_mean_maximize() {
        let table = DesignTable::parse(b"a,b\nTRUE,FALSE\n1,2\n").unwrap();
        assert_eq!(table.minimize, vec![true, false]);
    }

    #[test]
    fn test_header_only_has_no_designs() {
        let table = DesignTable::parse(&render(b"")).unwrap();
        assert!(table.designs.is_empty());
        assert_eq!(table.summary().design_count, 0);
    }

    #[test]
    fn test_missing_flag_row() {
        let err = DesignTable::parse(b"L_D,M_empty,MTOW,Stall\n").unwrap_err();
        assert!(matches!(err, AdapterError::MalformedDesignError { row: 2, .. }));

        let err = DesignTable::parse(b"").unwrap_err();
        assert!(matches!(err, AdapterError::MalformedDesignError { row: 1, .. }));
    }

    #[test]
    fn test_non_numeric_value_reports_row() {
        let err = DesignTable::parse(&render(b"1,2,3,4\n1,x,3,4\n")).unwrap_err();
        match err {
            AdapterError::MalformedDesignError { row, message } => {
                assert_eq!(row, 4);
                assert!(message.contains("'x'"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_blank_row_between_designs_rejected() {
        let err = DesignTable::parse(&render(b"1,2,3,4\n\n5,6,7,8")).unwrap_err();
        assert!(matches!(err, AdapterError::MalformedDesignError { row: 4, .. }));

        let err = DesignTable::parse(&render(b"1,2,3,4\r\n\r\n")).unwrap_err();
        assert!(matches!(err, AdapterError::MalformedDesignError { row: 4, .. }));
    }

    #[test]
    fn test_missing_final_newline_is_fine() {
        let table = DesignTable::parse(&render(b"1,2,3,4\n5,6,7,8")).unwrap();
        assert_eq!(table.designs.len(), 2);
    }

    #[test]
    fn test_summary_reports_column_mismatch() {
        let table = DesignTable::parse(&render(b"1,2,3,4\n1,2,3\n1,2,3,4,5\n")).unwrap();
        let summary = table.summary();

        assert_eq!(summary.design_count, 3);
        assert_eq!(summary.mismatched_designs, vec![1, 2]);
        assert!(summary.pareto_front.is_none());
    }
}
