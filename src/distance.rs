/// Euclidean distance between two points.
///
/// Differences are scaled by the largest one before squaring, so the result
/// only overflows when the distance itself exceeds `f64::MAX`.
pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    let mut scale: f64 = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        scale = scale.max((x - y).abs());
    }
    if scale == 0.0 || scale.is_infinite() {
        return scale;
    }

    let mut sum = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        sum += ((x - y) / scale).powi(2);
    }
    scale * sum.sqrt()
}
