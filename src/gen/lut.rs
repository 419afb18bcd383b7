//! Cumulative-distance lookup table for distance-to-parameter inversion

use super::curve::Curve;

/// Monotonic table of (parameter, cumulative distance) pairs along one
/// segment, built by injecting densely spaced samples and accumulating
/// chord lengths
#[derive(Debug, Clone)]
pub struct CumulativeDistanceLut {
    entries: Vec<(f64, f64)>,
}

impl CumulativeDistanceLut {
    /// Build a table with `samples` chords along the curve
    pub fn from_curve(curve: &dyn Curve, samples: usize) -> Self {
        let samples = samples.max(2);
        let mut entries = Vec::with_capacity(samples + 1);
        entries.push((0.0, 0.0));

        let mut cumulative = 0.0;
        let mut previous = curve.position(0.0);
        for i in 1..=samples {
            let t = i as f64 / samples as f64;
            let point = curve.position(t);
            cumulative += previous.distance(point);
            entries.push((t, cumulative));
            previous = point;
        }

        CumulativeDistanceLut { entries }
    }

    /// Total chord-accumulated distance of the table
    pub fn total_distance(&self) -> f64 {
        self.entries[self.entries.len() - 1].1
    }

    /// The raw (parameter, cumulative distance) entries
    pub fn entries(&self) -> &[(f64, f64)] {
        &self.entries
    }

    /// Invert distance to parameter by linear interpolation between the two
    /// bracketing entries. Distances outside the table clamp to 0 or 1.
    pub fn param_at_distance(&self, distance: f64) -> f64 {
        if distance <= 0.0 {
            return 0.0;
        }

        for window in self.entries.windows(2) {
            let (t0, d0) = window[0];
            let (t1, d1) = window[1];
            if distance <= d1 {
                if d1 == d0 {
                    // Zero-length chord: any parameter in the bracket works
                    return t1;
                }
                let fraction = (distance - d0) / (d1 - d0);
                return t0 + fraction * (t1 - t0);
            }
        }

        1.0
    }
}
