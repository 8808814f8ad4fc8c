//! Per-vital sub-risk functions
//!
//! Each function maps one vital sign onto a sub-risk in `[0, 100]` by linear
//! interpolation between clinical breakpoints. Values outside the breakpoint
//! range take the risk of the nearest end point, so the highest-risk end
//! saturates at 100. A missing or non-finite value carries no risk.

use crate::models::reading::finite;

/// Piecewise-linear curve through breakpoints ordered by increasing input value
#[derive(Debug, Clone, Copy)]
pub struct RiskCurve {
    points: &'static [(f64, f64)],
}

impl RiskCurve {
    /// Create a curve from `(value, risk)` breakpoints sorted by value
    #[must_use]
    pub const fn new(points: &'static [(f64, f64)]) -> Self {
        Self { points }
    }

    /// Evaluate the curve, clamping to the end points outside its range
    #[must_use]
    pub fn eval(&self, value: f64) -> f64 {
        let Some(&(first_x, first_y)) = self.points.first() else {
            return 0.0;
        };
        if value <= first_x {
            return first_y;
        }

        for pair in self.points.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            if value <= x1 {
                return y0 + (y1 - y0) * (value - x0) / (x1 - x0);
            }
        }

        self.points.last().map_or(0.0, |&(_, y)| y)
    }

    /// Evaluate an optional value; missing input is risk-neutral
    #[must_use]
    pub fn eval_opt(&self, value: Option<f64>) -> f64 {
        finite(value).map_or(0.0, |v| self.eval(v))
    }
}

/// Heart rate: higher is worse, saturating at 190 bpm
pub const HEART_RATE_CURVE: RiskCurve = RiskCurve::new(&[
    (100.0, 0.0),
    (110.0, 10.0),
    (125.0, 30.0),
    (140.0, 55.0),
    (160.0, 85.0),
    (190.0, 100.0),
]);

/// Systolic pressure: lower is worse, saturating at 50 mmHg
pub const SYSTOLIC_CURVE: RiskCurve = RiskCurve::new(&[
    (50.0, 100.0),
    (70.0, 85.0),
    (80.0, 60.0),
    (90.0, 34.0),
    (100.0, 12.0),
    (110.0, 0.0),
]);

/// Mean arterial pressure: lower is worse, saturating at 30 mmHg
pub const MAP_CURVE: RiskCurve = RiskCurve::new(&[
    (30.0, 100.0),
    (45.0, 90.0),
    (55.0, 70.0),
    (65.0, 42.0),
    (75.0, 18.0),
    (85.0, 0.0),
]);

/// Respiratory rate: higher is worse, saturating at 60 breaths per minute
pub const RESP_RATE_CURVE: RiskCurve = RiskCurve::new(&[
    (20.0, 0.0),
    (28.0, 15.0),
    (36.0, 40.0),
    (45.0, 70.0),
    (60.0, 100.0),
]);

/// Oxygen saturation: lower is worse, saturating at 65 %
pub const SPO2_CURVE: RiskCurve = RiskCurve::new(&[
    (65.0, 100.0),
    (80.0, 80.0),
    (85.0, 56.0),
    (90.0, 32.0),
    (93.0, 12.0),
    (96.0, 0.0),
]);

/// Shock index: higher is worse, saturating at 2.0
pub const SHOCK_INDEX_CURVE: RiskCurve = RiskCurve::new(&[
    (0.8, 0.0),
    (1.0, 28.0),
    (1.2, 60.0),
    (1.5, 85.0),
    (2.0, 100.0),
]);

/// Heart-rate sub-risk
#[must_use]
pub fn heart_rate_risk(pulse_bpm: Option<f64>) -> f64 {
    HEART_RATE_CURVE.eval_opt(pulse_bpm)
}

/// Systolic-pressure sub-risk
#[must_use]
pub fn systolic_risk(systolic_mmhg: Option<f64>) -> f64 {
    SYSTOLIC_CURVE.eval_opt(systolic_mmhg)
}

/// Mean-arterial-pressure sub-risk
#[must_use]
pub fn map_risk(map_mmhg: Option<f64>) -> f64 {
    MAP_CURVE.eval_opt(map_mmhg)
}

/// Respiratory-rate sub-risk
#[must_use]
pub fn resp_rate_risk(resp_rate_bpm: Option<f64>) -> f64 {
    RESP_RATE_CURVE.eval_opt(resp_rate_bpm)
}

/// Oxygen-saturation sub-risk
#[must_use]
pub fn spo2_risk(spo2_percent: Option<f64>) -> f64 {
    SPO2_CURVE.eval_opt(spo2_percent)
}

/// Shock-index sub-risk; an undefined ratio carries no risk
#[must_use]
pub fn shock_index_risk(shock_index: Option<f64>) -> f64 {
    SHOCK_INDEX_CURVE.eval_opt(shock_index)
}
