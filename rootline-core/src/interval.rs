use thiserror::Error;

/// The largest number of points a sampling grid may hold.
pub const MAX_GRID_POINTS: usize = 10_000_000;

/// Errors that can occur when creating an [`Interval`] or sampling it.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum IntervalError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,

    /// The right endpoint does not exceed the left one.
    #[error("right endpoint {right} must be greater than left endpoint {left}")]
    Empty { left: f64, right: f64 },

    /// The sampling step is too coarse to trust a check over the interval.
    #[error("sampling step {step} exceeds the limit {limit}")]
    TooCoarse { step: f64, limit: f64 },

    /// Sampling at the requested step would produce too many points.
    #[error("sampling would produce {points} points, more than the limit {limit}")]
    GridTooLarge { points: f64, limit: usize },
}

/// A closed, finite range `[left, right]` with `left < right`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Bounds", into = "Bounds")
)]
pub struct Interval {
    left: f64,
    right: f64,
}

impl Interval {
    /// Creates a validated interval.
    ///
    /// Unlike a search bracket, the endpoints are not reordered: a reversed
    /// pair is rejected.
    ///
    /// # Errors
    ///
    /// Returns `IntervalError::NonFinite` for non-finite endpoints and
    /// `IntervalError::Empty` if `right <= left`.
    pub fn new(left: f64, right: f64) -> Result<Self, IntervalError> {
        if !left.is_finite() || !right.is_finite() {
            return Err(IntervalError::NonFinite);
        }

        if right <= left {
            return Err(IntervalError::Empty { left, right });
        }

        Ok(Self { left, right })
    }

    /// Returns the left endpoint.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Returns the right endpoint.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Returns the endpoints as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the interval width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns the midpoint of the interval.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    /// Returns true if `x` lies in the closed interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.left <= x && x <= self.right
    }

    /// Returns evenly spaced points from `left` to `right`, both included.
    ///
    /// Consecutive points are at most `step` apart.
    /// A non-positive or non-finite `step` yields just the two endpoints.
    ///
    /// # Errors
    ///
    /// Returns `IntervalError::GridTooLarge` if the grid would hold more than
    /// [`MAX_GRID_POINTS`] points.
    pub fn grid(&self, step: f64) -> Result<Vec<f64>, IntervalError> {
        let segments = if step.is_finite() && step > 0.0 {
            let n = (self.width() / step).ceil();
            #[allow(clippy::cast_precision_loss)]
            let limit = MAX_GRID_POINTS as f64;
            if !n.is_finite() || n + 1.0 > limit {
                return Err(IntervalError::GridTooLarge {
                    points: n + 1.0,
                    limit: MAX_GRID_POINTS,
                });
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let n = n as usize;
            n.max(1)
        } else {
            1
        };

        #[allow(clippy::cast_precision_loss)]
        let spacing = self.width() / segments as f64;
        Ok((0..=segments)
            .map(|i| {
                if i == segments {
                    self.right
                } else {
                    #[allow(clippy::cast_precision_loss)]
                    let offset = spacing * i as f64;
                    self.left + offset
                }
            })
            .collect())
    }
}

impl TryFrom<[f64; 2]> for Interval {
    type Error = IntervalError;

    fn try_from(bounds: [f64; 2]) -> Result<Self, Self::Error> {
        let [left, right] = bounds;
        Self::new(left, right)
    }
}

/// Serialized shape of an [`Interval`], validated on the way in.
#[cfg(feature = "serde-derive")]
#[derive(serde::Serialize, serde::Deserialize)]
struct Bounds {
    left: f64,
    right: f64,
}

#[cfg(feature = "serde-derive")]
impl TryFrom<Bounds> for Interval {
    type Error = IntervalError;

    fn try_from(bounds: Bounds) -> Result<Self, Self::Error> {
        Self::new(bounds.left, bounds.right)
    }
}

#[cfg(feature = "serde-derive")]
impl From<Interval> for Bounds {
    fn from(interval: Interval) -> Self {
        Self {
            left: interval.left,
            right: interval.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn accepts_ordered_bounds() {
        let interval = Interval::new(-1.0, 3.0).expect("valid interval");
        assert_relative_eq!(interval.left(), -1.0);
        assert_relative_eq!(interval.right(), 3.0);
        assert_relative_eq!(interval.width(), 4.0);
        assert_relative_eq!(interval.midpoint(), 1.0);
    }

    #[test]
    fn rejects_reversed_and_zero_width() {
        assert!(matches!(
            Interval::new(3.0, 1.0),
            Err(IntervalError::Empty { .. })
        ));
        assert!(matches!(
            Interval::new(2.0, 2.0),
            Err(IntervalError::Empty { .. })
        ));
    }

    #[test]
    fn rejects_non_finite() {
        assert!(matches!(
            Interval::new(f64::NAN, 1.0),
            Err(IntervalError::NonFinite)
        ));
        assert!(matches!(
            Interval::try_from([0.0, f64::INFINITY]),
            Err(IntervalError::NonFinite)
        ));
    }

    #[test]
    fn contains_is_closed() {
        let interval = Interval::new(0.0, 1.0).expect("valid interval");
        assert!(interval.contains(0.0));
        assert!(interval.contains(1.0));
        assert!(!interval.contains(1.0 + 1e-12));
    }

    #[test]
    fn grid_includes_endpoints() {
        let interval = Interval::new(0.0, 1.0).expect("valid interval");
        let grid = interval.grid(0.3).expect("small grid");

        assert_eq!(grid.len(), 5);
        assert_relative_eq!(grid[0], 0.0);
        assert_relative_eq!(grid[4], 1.0);
        for pair in grid.windows(2) {
            assert!(pair[1] - pair[0] <= 0.3);
        }
    }

    #[test]
    fn grid_with_bad_step_is_endpoints() {
        let interval = Interval::new(2.0, 5.0).expect("valid interval");
        assert_eq!(interval.grid(0.0), Ok(vec![2.0, 5.0]));
    }

    #[test]
    fn grid_refuses_too_many_points() {
        let wide = Interval::new(0.0, 1e6).expect("valid interval");
        assert!(matches!(
            wide.grid(0.01),
            Err(IntervalError::GridTooLarge { .. })
        ));

        // The width overflows to infinity.
        let huge = Interval::new(-1e308, 1e308).expect("valid interval");
        assert!(matches!(
            huge.grid(0.01),
            Err(IntervalError::GridTooLarge { .. })
        ));
    }
}
