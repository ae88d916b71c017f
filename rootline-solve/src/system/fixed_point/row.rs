use crate::trace::Row;

/// One fixed-point iterate.
///
/// The seed row carries the start point with no changes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemRow {
    /// Coordinates of the iterate.
    pub values: Vec<f64>,
    /// `|x_i^k - x_i^(k-1)|` per coordinate, absent for the seed row.
    pub changes: Option<Vec<f64>>,
}

impl SystemRow {
    pub(super) fn seed(start: &[f64]) -> Self {
        Self {
            values: start.to_vec(),
            changes: None,
        }
    }

    /// Largest coordinate change, or `None` for the seed row.
    #[must_use]
    pub fn max_change(&self) -> Option<f64> {
        self.changes
            .as_ref()
            .map(|changes| changes.iter().copied().fold(0.0, f64::max))
    }
}

impl Row for SystemRow {
    type Answer = Vec<f64>;

    /// `x_i` followed by its change, for every coordinate.
    fn columns(&self) -> Vec<String> {
        (0..self.values.len())
            .flat_map(|i| [format!("x_{i}"), format!("|x_{i}^k - x_{i}^(k-1)|")])
            .collect()
    }

    fn cells(&self) -> Vec<Option<f64>> {
        self.values
            .iter()
            .enumerate()
            .flat_map(|(i, &value)| {
                let change = self.changes.as_ref().map(|changes| changes[i]);
                [Some(value), change]
            })
            .collect()
    }

    fn answer(&self) -> Vec<f64> {
        self.values.clone()
    }
}
