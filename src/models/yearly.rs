use serde::{Deserialize, Serialize};

/// One year re-aggregated from its monthly statistics.
///
/// Yearly means are means of the monthly means, not of the daily values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlySummary {
    pub year: i32,

    pub tmax_min: Option<f64>,
    pub tmax_max: Option<f64>,
    pub tmax_mean: Option<f64>,
    pub tmin_min: Option<f64>,
    pub tmin_max: Option<f64>,
    pub tmin_mean: Option<f64>,
    pub tavg_min: Option<f64>,
    pub tavg_max: Option<f64>,
    pub tavg_mean: Option<f64>,

    pub tmax_days_35: u32,
    pub tmax_days_30: u32,
    pub tmax_days_25: u32,
    pub tmax_days_below_0: u32,
    pub tmax_days_below_minus_10: u32,

    pub precip_total: f64,
    pub snow_days: u32,
}
