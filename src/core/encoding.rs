use crate::domain::model::VisualEncoding;
use crate::utils::error::{PlannerError, Result};

/// Linearly map `num` from `[in_min, in_max]` onto `[out_min, out_max]`.
fn map_range(num: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    out_min + (num - in_min) / (in_max - in_min) * (out_max - out_min)
}

/// Styling for the route at `rank` within a set of `total` ranked neighbors.
///
/// Policy: nearer is thicker and more opaque. Rank 0 renders at weight 8.0
/// with the highest opacity and a green-leaning color; the farthest rank is
/// the thinnest and faintest, with the color shifted towards red. The
/// ranges are fixed: weight in [2, 8], opacity in [0.4, 1.0].
pub fn encode(rank: usize, total: usize) -> Result<VisualEncoding> {
    if total < 1 {
        return Err(PlannerError::invalid_argument(
            "encoding total must be at least 1",
        ));
    }
    if rank >= total {
        return Err(PlannerError::invalid_argument(format!(
            "rank {} out of range for total {}",
            rank, total
        )));
    }

    let total_f = total as f64;
    let factor = (rank as f64 + 1.0) / total_f;

    let r = (200.0 * factor).round() as u8;
    let g = 255 - (200.0 * factor).round() as u8;
    let color = format!("#{:02x}{:02x}{:02x}", r, g, 0);

    let remaining = (total - rank) as f64;
    let weight = map_range(remaining, 0.0, total_f, 2.0, 8.0);
    let opacity = map_range(remaining, 1.0, total_f + 1.0, 0.4, 1.0);

    Ok(VisualEncoding { color, weight, opacity })
}
