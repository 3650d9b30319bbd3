//! Pearson correlation over co-occurring numeric samples.

use causal_core::models::Observation;

/// Paired numeric readings of two variables.
#[derive(Debug, Clone, Default)]
pub struct PairedSamples {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl PairedSamples {
    /// Collect every observation where both variables read as finite numbers.
    pub fn collect(observations: &[Observation], a: &str, b: &str) -> Self {
        let mut samples = Self::default();
        for obs in observations {
            let (Some(x), Some(y)) = (
                obs.get(a).and_then(|v| v.as_f64()),
                obs.get(b).and_then(|v| v.as_f64()),
            ) else {
                continue;
            };
            samples.xs.push(x);
            samples.ys.push(y);
        }
        samples
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// Pearson's r. `None` for fewer than two samples or zero variance on either side.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return None;
    }
    let mean_x = xs[..n].iter().sum::<f64>() / n as f64;
    let mean_y = ys[..n].iter().sum::<f64>() / n as f64;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in xs[..n].iter().zip(&ys[..n]) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x <= f64::EPSILON || var_y <= f64::EPSILON {
        return None;
    }
    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}
