use serde::{Deserialize, Serialize};

/// One survival-curve sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurvivalPoint {
    pub time: f64,
    pub probability: f64,
}

/// How a curve is evaluated at a query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    /// Step-function lookup: the last sample at or before the query time.
    AsOf,
    /// Linear interpolation between bracketing samples, clamped to the
    /// nearest endpoint outside the sampled range.
    Interpolated,
}

/// A time-ordered sequence of survival samples for one subject. The store
/// trusts its input: times must be non-decreasing, probabilities are
/// expected (not enforced) to decay monotonically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SurvivalCurve {
    pub points: Vec<SurvivalPoint>,
}

impl SurvivalCurve {
    pub fn new(points: Vec<SurvivalPoint>) -> Self {
        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn probability_at(&self, time: f64, mode: QueryMode) -> f64 {
        match mode {
            QueryMode::AsOf => self.as_of(time),
            QueryMode::Interpolated => self.interpolated(time),
        }
    }

    /// Evaluate the curve at each query time, preserving query order.
    pub fn sample(&self, times: &[f64], mode: QueryMode) -> Vec<SurvivalPoint> {
        times
            .iter()
            .map(|&time| SurvivalPoint {
                time,
                probability: self.probability_at(time, mode),
            })
            .collect()
    }

    /// Last-observation-carried-forward lookup. A query before the first
    /// sample returns the first sample's probability; an empty curve is full
    /// survival, vacuously.
    fn as_of(&self, time: f64) -> f64 {
        for point in self.points.iter().rev() {
            if point.time <= time {
                return point.probability;
            }
        }
        self.points.first().map_or(1.0, |point| point.probability)
    }

    fn interpolated(&self, time: f64) -> f64 {
        let (Some(first), Some(last)) = (self.points.first(), self.points.last()) else {
            return 1.0;
        };
        if time <= first.time {
            return first.probability;
        }
        if time >= last.time {
            return last.probability;
        }
        for window in self.points.windows(2) {
            let [left, right] = window else { continue };
            if left.time <= time && time <= right.time {
                let span = right.time - left.time;
                if span <= 0.0 {
                    return right.probability;
                }
                let fraction = (time - left.time) / span;
                return left.probability + (right.probability - left.probability) * fraction;
            }
        }
        last.probability
    }
}
