//! Capability trajectories.
//!
//! The primary curve is a quadratic ease from the epoch to the singularity
//! year: `y = start + (end - start) · t²`, with `t` the elapsed fraction of
//! that span. Growth is slow early and fast late.
//!
//! [`compute_segmented_trajectory`] is the older four-phase curve
//! (pre-AGI, AGI→Super, Super→ASI, post-ASI asymptote). It is kept for
//! consumers that want per-milestone plateaus.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::ModelConfig;
use crate::timeline::Timeline;

/// Upper bound on the samples in one trajectory. Longer spans are sampled
/// with a proportionally wider step.
pub const MAX_TRAJECTORY_POINTS: u32 = 10_000;

/// One sample of the capability curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPoint {
    /// Fractional year
    pub x: f64,
    /// Capability in `[0, 1)`
    pub y: f64,
}

/// Ordered samples, strictly increasing in `x`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trajectory {
    points: Vec<TrajectoryPoint>,
}

impl Trajectory {
    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&TrajectoryPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&TrajectoryPoint> {
        self.points.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrajectoryPoint> {
        self.points.iter()
    }

    /// Capability of the sample nearest to `year`; earliest sample wins ties.
    pub fn capability_at(&self, year: f64) -> Option<f64> {
        if !year.is_finite() {
            return None;
        }
        let mut nearest = self.points.first()?;
        for point in &self.points[1..] {
            if (point.x - year).abs() < (nearest.x - year).abs() {
                nearest = point;
            }
        }
        Some(nearest.y)
    }

    /// `x` strictly increasing and `y` non-decreasing throughout.
    pub fn is_monotonic(&self) -> bool {
        self.points
            .windows(2)
            .all(|w| w[1].x > w[0].x && w[1].y >= w[0].y)
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectoryPoint;
    type IntoIter = std::slice::Iter<'a, TrajectoryPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Quadratic trajectory with the default calibration.
pub fn compute_trajectory(timeline: &Timeline) -> Trajectory {
    compute_trajectory_with(&ModelConfig::default(), timeline)
}

/// Quadratic trajectory under `config`.
///
/// Samples every `trajectory.step_years` from the epoch through the
/// singularity year inclusive. Empty when the singularity is not after the
/// epoch.
pub fn compute_trajectory_with(config: &ModelConfig, timeline: &Timeline) -> Trajectory {
    let shape = &config.trajectory;
    let epoch = config.current_year;
    let singularity = timeline.singularity_year(config);
    let span = singularity - epoch;

    if !(span.is_finite() && span > 0.0 && shape.step_years > 0.0) {
        warn!(
            epoch,
            singularity, "singularity not after epoch, empty trajectory"
        );
        return Trajectory::default();
    }

    // Sample positions are computed from the index, not accumulated, so the
    // grid does not drift over long spans.
    let step = bounded_step(shape.step_years, span);
    let points = (0..MAX_TRAJECTORY_POINTS)
        .map(|i| epoch + f64::from(i) * step)
        .take_while(|year| *year <= singularity)
        .map(|year| {
            let t = ((year - epoch) / span).clamp(0.0, 1.0);
            let y = shape.start_capability + (shape.end_capability - shape.start_capability) * t * t;
            TrajectoryPoint {
                x: year,
                y: y.min(shape.capability_cap),
            }
        })
        .collect();

    Trajectory { points }
}

// Segmented curve calibration
const SEGMENT_STEP_YEARS: f64 = 0.25;
const SEGMENT_MIN_END_YEAR: f64 = 2060.0;
const SEGMENT_TAIL_YEARS: f64 = 10.0;
const CURRENT_CAPABILITY: f64 = 0.22;
const AGI_CAPABILITY: f64 = 0.45;
const SUPER_CAPABILITY: f64 = 0.65;
const ASI_CAPABILITY: f64 = 0.85;
const POST_ASI_DECAY_YEARS: f64 = 2.0;

/// Four-phase trajectory with the default epoch.
pub fn compute_segmented_trajectory(agi_year: f64, super_year: f64, asi_year: f64) -> Trajectory {
    compute_segmented_trajectory_with(&ModelConfig::default(), agi_year, super_year, asi_year)
}

/// Four-phase trajectory.
///
/// | Phase          | Capability                         |
/// |----------------|------------------------------------|
/// | epoch → AGI    | 0.22 → 0.45, ease-in-out           |
/// | AGI → Super    | 0.45 → 0.65, ease-in-out           |
/// | Super → ASI    | 0.65 → 0.85, ease-in-out           |
/// | after ASI      | 0.85 + 0.15 · (1 − e^(−Δ/2))       |
///
/// Runs to `max(2060, asi + 10)` in quarter-year steps. Expects the years
/// in milestone order, as produced by the timeline calculator. Any
/// non-finite input yields an empty trajectory.
pub fn compute_segmented_trajectory_with(
    config: &ModelConfig,
    agi_year: f64,
    super_year: f64,
    asi_year: f64,
) -> Trajectory {
    if ![agi_year, super_year, asi_year].iter().all(|y| y.is_finite()) {
        warn!("non-finite milestone years, empty segmented trajectory");
        return Trajectory::default();
    }

    let epoch = config.current_year;
    let end_year = SEGMENT_MIN_END_YEAR.max(asi_year + SEGMENT_TAIL_YEARS);

    let step = bounded_step(SEGMENT_STEP_YEARS, end_year - epoch);
    let points = (0..MAX_TRAJECTORY_POINTS)
        .map(|i| epoch + f64::from(i) * step)
        .take_while(|year| *year <= end_year)
        .map(|year| {
            let y = if year <= epoch {
                CURRENT_CAPABILITY
            } else if year < agi_year {
                let progress = (year - epoch) / (agi_year - epoch);
                lerp(CURRENT_CAPABILITY, AGI_CAPABILITY, ease_in_out(progress))
            } else if year < super_year {
                let progress = (year - agi_year) / (super_year - agi_year);
                lerp(AGI_CAPABILITY, SUPER_CAPABILITY, ease_in_out(progress))
            } else if year < asi_year {
                let progress = (year - super_year) / (asi_year - super_year);
                lerp(SUPER_CAPABILITY, ASI_CAPABILITY, ease_in_out(progress))
            } else {
                let after = year - asi_year;
                ASI_CAPABILITY + (1.0 - ASI_CAPABILITY) * (1.0 - (-after / POST_ASI_DECAY_YEARS).exp())
            };
            TrajectoryPoint { x: year, y }
        })
        .collect();

    Trajectory { points }
}

/// Widen `step` when `span` would need more than [`MAX_TRAJECTORY_POINTS`]
/// samples.
fn bounded_step(step: f64, span: f64) -> f64 {
    let min_step = span / f64::from(MAX_TRAJECTORY_POINTS - 1);
    if step < min_step {
        debug!(step, widened = min_step, span, "trajectory step widened");
        min_step
    } else {
        step
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Quadratic ease-in-out on `[0, 1]`.
fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> Timeline {
        Timeline {
            agi_year: 2027.0,
            super_year: 2035.0,
            asi_year: 2043.0,
        }
    }

    #[test]
    fn quadratic_spans_epoch_to_singularity() {
        let trajectory = compute_trajectory(&baseline());
        // 2025.95 .. 2046.0 at 0.3-year steps
        assert_eq!(trajectory.len(), 67);

        let first = trajectory.first().unwrap();
        assert_eq!(first.x, 2025.95);
        assert!((first.y - 0.12).abs() < 1e-12);

        let last = trajectory.last().unwrap();
        assert!(last.x <= 2046.0);
        assert!(last.x > 2046.0 - 0.3);
        assert!(last.y < 1.0);
    }

    #[test]
    fn quadratic_is_monotonic_and_convex() {
        let trajectory = compute_trajectory(&baseline());
        assert!(trajectory.is_monotonic());

        let pts = trajectory.points();
        let early = pts[1].y - pts[0].y;
        let late = pts[pts.len() - 1].y - pts[pts.len() - 2].y;
        assert!(late > early);
    }

    #[test]
    fn cap_keeps_curve_below_one() {
        let mut config = ModelConfig::default();
        config.trajectory.end_capability = 1.5;
        let trajectory = compute_trajectory_with(&config, &baseline());
        assert!(trajectory.iter().all(|p| p.y <= 0.99));
        assert_eq!(trajectory.last().unwrap().y, 0.99);
    }

    #[test]
    fn degenerate_span_is_empty() {
        let config = ModelConfig {
            current_year: 2100.0,
            ..Default::default()
        };
        assert!(compute_trajectory_with(&config, &baseline()).is_empty());

        let nan = Timeline {
            agi_year: f64::NAN,
            super_year: f64::NAN,
            asi_year: f64::NAN,
        };
        assert!(compute_trajectory(&nan).is_empty());
    }

    #[test]
    fn capability_at_picks_nearest_sample() {
        let trajectory = compute_trajectory(&baseline());
        let first = trajectory.first().unwrap().y;
        assert_eq!(trajectory.capability_at(1990.0), Some(first));
        assert_eq!(
            trajectory.capability_at(2100.0),
            Some(trajectory.last().unwrap().y)
        );
        assert_eq!(trajectory.capability_at(f64::NAN), None);
        assert_eq!(Trajectory::default().capability_at(2030.0), None);

        let mid = trajectory.capability_at(2036.0).unwrap();
        assert!(mid > first && mid < trajectory.last().unwrap().y);
    }

    #[test]
    fn segmented_phases_hit_milestone_levels() {
        let tl = baseline();
        let trajectory = compute_segmented_trajectory(tl.agi_year, tl.super_year, tl.asi_year);
        assert!(trajectory.is_monotonic());

        // Runs to 2060 in quarter steps from the epoch.
        let last = trajectory.last().unwrap();
        assert!(last.x <= 2060.0 && last.x > 2059.7);

        let at = |year: f64| trajectory.capability_at(year).unwrap();
        assert!((at(2025.95) - 0.22).abs() < 1e-9);
        assert!((at(2027.2) - 0.45).abs() < 0.01);
        assert!((at(2035.2) - 0.65).abs() < 0.01);
        assert!((at(2042.95) - 0.85).abs() < 0.01);
        assert!(last.y < 1.0 && last.y > 0.99);
    }

    #[test]
    fn segmented_extends_past_late_asi() {
        let trajectory = compute_segmented_trajectory(2040.0, 2055.0, 2070.0);
        let last = trajectory.last().unwrap();
        assert!(last.x <= 2080.0 && last.x > 2079.7);
        assert!(trajectory.is_monotonic());
    }

    #[test]
    fn segmented_rejects_non_finite() {
        assert!(compute_segmented_trajectory(f64::NAN, 2035.0, 2043.0).is_empty());
        assert!(compute_segmented_trajectory(2027.0, 2035.0, f64::INFINITY).is_empty());
    }

    #[test]
    fn far_timelines_are_sampled_within_bounds() {
        let far = Timeline {
            agi_year: 2027.0,
            super_year: 4.5e8,
            asi_year: 9.0e8,
        };
        let config = ModelConfig::default();

        let quadratic = compute_trajectory(&far);
        let max = MAX_TRAJECTORY_POINTS as usize;
        assert!((max - 1..=max).contains(&quadratic.len()));
        assert!(quadratic.is_monotonic());
        let last = quadratic.last().unwrap();
        assert!(last.x <= far.singularity_year(&config));
        assert!(last.x > far.singularity_year(&config) * 0.999);

        let segmented = compute_segmented_trajectory(far.agi_year, far.super_year, far.asi_year);
        assert!(segmented.len() <= MAX_TRAJECTORY_POINTS as usize);
        assert!(segmented.len() > 1);
        assert!(segmented.is_monotonic());
    }

    #[test]
    fn smallest_step_over_long_span_is_bounded() {
        let mut config = ModelConfig::default();
        config.trajectory.step_years = crate::config::MIN_STEP_YEARS;
        let timeline = Timeline {
            agi_year: 2027.0,
            super_year: 3000.0,
            asi_year: 5000.0,
        };
        let trajectory = compute_trajectory_with(&config, &timeline);
        assert!(trajectory.len() <= MAX_TRAJECTORY_POINTS as usize);
        assert!(trajectory.is_monotonic());
    }

    #[test]
    fn ease_in_out_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(0.5), 0.5);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!(ease_in_out(0.25) < 0.25);
        assert!(ease_in_out(0.75) > 0.75);
    }

    #[test]
    fn serializes_as_point_list() {
        let trajectory = compute_trajectory(&baseline());
        let json = serde_json::to_value(&trajectory).unwrap();
        let arr = json.as_array().unwrap();
        assert_eq!(arr.len(), trajectory.len());
        assert_eq!(arr[0]["x"], 2025.95);
    }
}
