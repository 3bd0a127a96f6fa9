use crate::math::curve::curve::Curve;

// ─────────────────────────────────────────────────────────────────────────────
// LogisticGradation - log-logistic S-curve
// ─────────────────────────────────────────────────────────────────────────────
//
//   P(d) = 100 / (1 + exp(-(ln d - ln D50) / s))
//
// Inverse:
//   ln d = ln D50 + s * ln(P / (100 - P))
//
// so that
//   ln D60 - ln D10 = s * (ln(60/40) + ln(90/10)) = s * ln 13.5
//
// and the spread that reproduces a given coefficient of uniformity is
//   s = ln Cu / ln 13.5

const CU_SPREAD_DENOMINATOR: f64 = 13.5;

pub struct LogisticGradation {
    d50: f64,
    spread: f64
}

impl LogisticGradation {
    /// `None` unless `d50 > 0` and `spread > 0`.
    pub fn new(d50: f64, spread: f64) -> Option<LogisticGradation> {
        if d50 > 0.0 && spread > 0.0 && d50.is_finite() && spread.is_finite() {
            Some(LogisticGradation { d50, spread })
        } else {
            None
        }
    }

    /// Curve whose own D50 and D60/D10 equal the given values. `cu` must exceed 1.
    pub fn from_d50_and_cu(d50: f64, cu: f64) -> Option<LogisticGradation> {
        if !(cu > 1.0) {
            return None;
        }
        Self::new(d50, cu.ln() / CU_SPREAD_DENOMINATOR.ln())
    }

    pub fn d50(&self) -> f64 {
        self.d50
    }

    pub fn spread(&self) -> f64 {
        self.spread
    }

    pub fn cu(&self) -> f64 {
        (self.spread * CU_SPREAD_DENOMINATOR.ln()).exp()
    }
}

impl Curve for LogisticGradation {
    fn value(&self, sieve_size: f64) -> f64 {
        if sieve_size <= 0.0 {
            return 0.0;
        }
        let z = (sieve_size.ln() - self.d50.ln()) / self.spread;
        100.0 / (1.0 + (-z).exp())
    }

    fn inverse(&self, percent: f64) -> Option<f64> {
        if percent <= 0.0 || percent >= 100.0 {
            return None;
        }
        let log_odds = (percent / (100.0 - percent)).ln();
        Some((self.d50.ln() + self.spread * log_odds).exp())
    }
}
