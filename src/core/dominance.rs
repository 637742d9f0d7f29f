use crate::core::{Design, DesignTable, ParetoFront, Result};
use crate::utils::error::AdapterError;

impl Design {
    pub fn value(&self, metric: usize) -> Option<f64> {
        self.values.get(metric).copied()
    }

    /// Strict dominance on metrics `a` and `b`: `self` must be better on both.
    /// A metric without a flag in `minimize` is minimized. Missing values never dominate.
    pub fn dominates(&self, other: &Design, a: usize, b: usize, minimize: &[bool]) -> bool {
        [a, b].iter().all(|&metric| {
            let better_when_lower = minimize.get(metric).copied().unwrap_or(true);
            match (self.value(metric), other.value(metric)) {
                (Some(mine), Some(theirs)) if better_when_lower => mine < theirs,
                (Some(mine), Some(theirs)) => mine > theirs,
                _ => false,
            }
        })
    }
}

impl DesignTable {
    pub fn metric_index(&self, name: &str) -> Result<usize> {
        self.metrics
            .iter()
            .position(|metric| metric == name)
            .ok_or_else(|| AdapterError::InvalidConfigValueError {
                field: "front".to_string(),
                value: name.to_string(),
                reason: format!("Unknown metric. Known metrics: {}", self.metrics.join(", ")),
            })
    }

    /// Indices of designs that no other design dominates on metrics `a` and `b`.
    /// Designs lacking either metric are left out.
    pub fn pareto_front(&self, a: usize, b: usize) -> Vec<usize> {
        let candidates: Vec<&Design> = self
            .designs
            .iter()
            .filter(|design| design.value(a).is_some() && design.value(b).is_some())
            .collect();

        candidates
            .iter()
            .filter(|design| {
                !candidates
                    .iter()
                    .any(|other| other.dominates(design, a, b, &self.minimize))
            })
            .map(|design| design.index)
            .collect()
    }

    /// Pareto front for two metric names, e.g. `["L_D", "MTOW"]`.
    pub fn front_for(&self, names: &[String]) -> Result<ParetoFront> {
        let [first, second] = names else {
            return Err(AdapterError::InvalidConfigValueError {
                field: "front".to_string(),
                value: names.join(","),
                reason: "Expected exactly two metric names".to_string(),
            });
        };
        if first == second {
            return Err(AdapterError::InvalidConfigValueError {
                field: "front".to_string(),
                value: names.join(","),
                reason: "The two metrics must differ".to_string(),
            });
        }

        let a = self.metric_index(first)?;
        let b = self.metric_index(second)?;
        let designs = self.pareto_front(a, b);
        tracing::debug!(
            "Pareto front on {}/{}: {} of {} designs",
            first,
            second,
            designs.len(),
            self.designs.len()
        );

        Ok(ParetoFront {
            metrics: [first.clone(), second.clone()],
            designs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn design(index: usize, values: &[f64]) -> Design {
        Design {
            index,
            values: values.to_vec(),
        }
    }

    fn table(minimize: &[bool], rows: &[&[f64]]) -> DesignTable {
        DesignTable {
            metrics: vec!["L_D".into(), "M_empty".into(), "MTOW".into(), "Stall".into()],
            minimize: minimize.to_vec(),
            designs: rows
                .iter()
                .enumerate()
                .map(|(index, values)| design(index, values))
                .collect(),
        }
    }

    #[test]
    fn test_dominates_when_minimizing() {
        let lighter = design(0, &[10.0, 900.0]);
        let heavier = design(1, &[12.0, 950.0]);
        let minimize = [true, true];

        assert!(lighter.dominates(&heavier, 0, 1, &minimize));
        assert!(!heavier.dominates(&lighter, 0, 1, &minimize));
    }

    #[test]
    fn test_dominates_when_maximizing() {
        let low = design(0, &[10.0, 900.0]);
        let high = design(1, &[12.0, 950.0]);
        let maximize = [false, false];

        assert!(high.dominates(&low, 0, 1, &maximize));
        assert!(!low.dominates(&high, 0, 1, &maximize));
    }

    #[test]
    fn test_mixed_directions() {
        // maximize L_D, minimize M_empty
        let good = design(0, &[16.0, 1100.0]);
        let poor = design(1, &[14.0, 1200.0]);
        let flags = [false, true];

        assert!(good.dominates(&poor, 0, 1, &flags));
        assert!(!poor.dominates(&good, 0, 1, &flags));
    }

    #[test]
    fn test_tie_is_not_dominance() {
        let a = design(0, &[10.0, 900.0]);
        let b = design(1, &[10.0, 950.0]);
        let minimize = [true, true];

        assert!(!a.dominates(&b, 0, 1, &minimize));
        assert!(!b.dominates(&a, 0, 1, &minimize));
        assert!(!a.dominates(&a, 0, 1, &minimize));
    }

    #[test]
    fn test_missing_value_never_dominates() {
        let short = design(0, &[1.0]);
        let full = design(1, &[5.0, 5.0]);

        assert!(!short.dominates(&full, 0, 1, &[true, true]));
        assert!(!full.dominates(&short, 0, 1, &[true, true]));
    }

    #[test]
    fn test_pareto_front_minimizing() {
        let table = table(
            &[true; 4],
            &[
                &[1.0, 0.0, 5.0, 0.0],
                &[2.0, 0.0, 3.0, 0.0],
                &[3.0, 0.0, 1.0, 0.0],
                &[3.0, 0.0, 4.0, 0.0], // dominated by 1
                &[4.0, 0.0, 6.0, 0.0], // dominated by everything
            ],
        );

        assert_eq!(table.pareto_front(0, 2), vec![0, 1, 2]);
    }

    #[test]
    fn test_pareto_front_mixed_flags() {
        // maximize L_D, minimize MTOW
        let table = table(
            &[false, true, true, true],
            &[
                &[15.0, 0.0, 1800.0, 0.0],
                &[16.0, 0.0, 1900.0, 0.0],
                &[14.0, 0.0, 1850.0, 0.0], // dominated by 0
                &[16.0, 0.0, 1950.0, 0.0], // dominated by none: ties 1 on L_D
            ],
        );

        assert_eq!(table.pareto_front(0, 2), vec![0, 1, 3]);
    }

    #[test]
    fn test_pareto_front_of_empty_table() {
        assert!(table(&[true; 4], &[]).pareto_front(0, 1).is_empty());
    }

    #[test]
    fn test_front_for_names() {
        let table = table(&[true; 4], &[&[1.0, 2.0, 3.0, 4.0], &[2.0, 3.0, 4.0, 5.0]]);

        let front = table
            .front_for(&["L_D".to_string(), "Stall".to_string()])
            .unwrap();
        assert_eq!(front.metrics, ["L_D".to_string(), "Stall".to_string()]);
        assert_eq!(front.designs, vec![0]);
    }

    #[test]
    fn test_front_for_rejects_bad_names() {
        let table = table(&[true; 4], &[]);

        assert!(table.front_for(&["L_D".to_string()]).is_err());
        assert!(table
            .front_for(&["L_D".to_string(), "L_D".to_string()])
            .is_err());
        assert!(matches!(
            table.front_for(&["L_D".to_string(), "Range".to_string()]),
            Err(AdapterError::InvalidConfigValueError { .. })
        ));
    }
}
