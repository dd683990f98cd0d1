//! Aggregate statistics used by the market analytics.

/// Geometric mean of the strictly positive values, computed as `exp(mean(ln v))`.
///
/// Zero, negative and NaN entries are skipped and do not count towards `n`.
/// Returns 0.0 when no positive value remains.
pub fn geometric_mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (log_sum, count) = values
        .into_iter()
        .filter(|v| *v > 0.0)
        .fold((0.0_f64, 0_usize), |(sum, n), v| (sum + v.ln(), n + 1));

    if count == 0 {
        0.0
    } else {
        (log_sum / count as f64).exp()
    }
}
