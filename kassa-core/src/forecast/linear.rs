/// A fitted line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearTrend {
    /// Change in value per step.
    pub slope: f64,
    /// Fitted value at `x = 0`.
    pub intercept: f64,
}

impl LinearTrend {
    /// Ordinary least-squares fit of `values[i]` against `x = i`.
    ///
    /// Returns `None` for fewer than two points. With `x = 0..n-1` and
    /// `n >= 2` the denominator `n*Σx² - (Σx)²` is strictly positive, so the
    /// fit always exists otherwise. Sums are accumulated in `f64`, which
    /// holds `Σx²` exactly for series far longer than any order history.
    ///
    /// ```
    /// use kassa_core::forecast::linear::LinearTrend;
    ///
    /// let t = LinearTrend::fit(&[1.0, 3.0, 5.0]).unwrap();
    /// assert!((t.slope - 2.0).abs() < 1e-12);
    /// assert!((t.intercept - 1.0).abs() < 1e-12);
    /// assert!(LinearTrend::fit(&[7.0]).is_none());
    /// ```
    #[must_use]
    pub fn fit(values: &[f64]) -> Option<Self> {
        if values.len() < 2 {
            return None;
        }
        #[allow(clippy::cast_precision_loss)]
        let n = values.len() as f64;
        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        let mut sum_xy = 0.0;
        let mut sum_x2 = 0.0;
        for (i, &y) in values.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let x = i as f64;
            sum_x += x;
            sum_y += y;
            sum_xy += x * y;
            sum_x2 += x * x;
        }
        let slope = (n * sum_xy - sum_x * sum_y) / (n * sum_x2 - sum_x * sum_x);
        let intercept = (sum_y - slope * sum_x) / n;
        Some(Self { slope, intercept })
    }

    /// Value of the line at `x`.
    #[must_use]
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}
