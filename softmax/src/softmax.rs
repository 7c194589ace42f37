/// Computes the softmax of `values`: `exp(values[i]) / sum_j exp(values[j])`.
///
/// The exponentials are taken as-is, with no max-subtraction. Inputs of large
/// magnitude overflow `exp` to infinity and the output becomes NaN
/// (`[1000.0, 1000.0]` gives `[NaN, NaN]`). Use [`softmax_stable`] when that
/// matters, or [`crate::SoftmaxConfig::try_apply`] to get an error instead.
///
/// An empty slice gives an empty `Vec`.
pub fn softmax(values: &[f64]) -> Vec<f64> {
    let exps = exponentials(values, 0.0);
    let sum_exps: f64 = exps.iter().sum();
    normalize(exps, sum_exps)
}

/// Same as [`softmax`], but every value is shifted down by the max before
/// exponentiating so `exp` never overflows for finite inputs.
pub fn softmax_stable(values: &[f64]) -> Vec<f64> {
    let exps = exponentials(values, max_value(values));
    let sum_exps: f64 = exps.iter().sum();
    normalize(exps, sum_exps)
}

pub(crate) fn max_value(values: &[f64]) -> f64 {
    values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b))
}

pub(crate) fn exponentials(values: &[f64], shift: f64) -> Vec<f64> {
    values.iter().map(|&x| (x - shift).exp()).collect()
}

pub(crate) fn normalize(mut exps: Vec<f64>, sum_exps: f64) -> Vec<f64> {
    exps.iter_mut().for_each(|x| *x /= sum_exps);
    exps
}
