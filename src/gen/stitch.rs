//! Joining independently profiled sub-paths at reversal cuts

use super::GeneratedPoint;

/// Concatenate sub-path profiles into one globally timed sequence.
///
/// Travel direction alternates starting from the logical opposite of the
/// first waypoint's reverse flag and toggles at every cut, so the first
/// sub-path is reversed exactly when that flag is set. Speeds of reversed
/// sub-paths are negated. The first sample of every sub-path after the
/// first duplicates the previous boundary sample and is dropped. Each
/// sub-path's times are offset by the running total accumulated by all
/// prior sub-paths, keeping global time monotonically non-decreasing.
pub fn stitch(sub_paths: Vec<Vec<GeneratedPoint>>, first_reversed: bool) -> Vec<GeneratedPoint> {
    let mut output: Vec<GeneratedPoint> = Vec::new();
    let mut reversed = !first_reversed;
    let mut time_offset = 0.0;

    for (index, mut sub_path) in sub_paths.into_iter().enumerate() {
        reversed = !reversed;
        if sub_path.is_empty() {
            continue;
        }

        if reversed {
            for point in &mut sub_path {
                point.speed = -point.speed;
            }
        }

        let skip = if index == 0 { 0 } else { 1 };
        for mut point in sub_path.into_iter().skip(skip) {
            point.time += time_offset;
            output.push(point);
        }

        if let Some(last) = output.last() {
            time_offset = last.time;
        }
    }

    output
}
