use crate::types::*;

/// Returns the Pearson correlation coefficient between the two provided
/// vectors, computed over their common prefix (the first `min(a.len(),
/// b.len())` entries of each). A first pass accumulates the means, then a
/// second pass accumulates covariance and variances against them.
///
/// Returns `None` when either vector is empty or when the denominator (the
/// product of the two standard deviations) is zero, leaving the caller free
/// to substitute whatever floor value its contract requires.
pub fn pearson_correlation<F: ThreadFloat>(a: &[F], b: &[F]) -> Option<F> {
    let len = a.len().min(b.len());
    if len == 0 {
        return None;
    }
    let a = &a[..len];
    let b = &b[..len];

    let n = F::from(len).unwrap();
    let mean_a = a.iter().copied().fold(F::zero(), |acc, v| acc + v) / n;
    let mean_b = b.iter().copied().fold(F::zero(), |acc, v| acc + v) / n;

    let (covariance, var_a, var_b) = a.iter().zip(b.iter()).fold(
        (F::zero(), F::zero(), F::zero()),
        |(cov, va, vb), (&x, &y)| {
            let dx = x - mean_a;
            let dy = y - mean_b;
            (cov + dx * dy, va + dx * dx, vb + dy * dy)
        },
    );

    let denominator = (var_a.sqrt()) * (var_b.sqrt());
    if denominator <= F::zero() {
        return None;
    }
    Some(covariance / denominator)
}
