use serde::{Deserialize, Serialize};

/// Aggregated statistics for one (year, month) of a single station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStat {
    pub year: i32,
    pub month: u32,

    pub tmax_min: Option<f64>,
    pub tmax_max: Option<f64>,
    pub tmax_mean: Option<f64>,
    pub tmin_min: Option<f64>,
    pub tmin_max: Option<f64>,
    pub tmin_mean: Option<f64>,
    pub tavg_min: Option<f64>,
    pub tavg_max: Option<f64>,
    pub tavg_mean: Option<f64>,

    pub precip_max: Option<f64>,
    /// Number of days with a precipitation measurement
    pub precip_count: u32,
    pub precip_sum: f64,

    /// 0 when no snow was recorded in the month
    pub snow_max: i32,
    /// Number of days with a snow-depth measurement
    pub snow_count: u32,
    pub snow_sum: i64,

    pub tmax_days_35: u32,
    pub tmax_days_30: u32,
    pub tmax_days_25: u32,
    pub tmax_days_below_0: u32,
    pub tmax_days_below_minus_10: u32,
}

/// Numeric columns of [`MonthlyStat`] that can be compared across years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonthlyAttribute {
    TmaxMin,
    TmaxMax,
    TmaxMean,
    TminMin,
    TminMax,
    TminMean,
    TavgMin,
    TavgMax,
    TavgMean,
    PrecipMax,
    PrecipCount,
    PrecipSum,
    SnowMax,
    SnowCount,
    SnowSum,
}

impl MonthlyAttribute {
    /// Snow columns where 0 means "no snow" and is left out of comparisons.
    pub fn excludes_zero(&self) -> bool {
        matches!(self, MonthlyAttribute::SnowMax | MonthlyAttribute::SnowCount)
    }
}

impl MonthlyStat {
    pub fn value(&self, attribute: MonthlyAttribute) -> Option<f64> {
        match attribute {
            MonthlyAttribute::TmaxMin => self.tmax_min,
            MonthlyAttribute::TmaxMax => self.tmax_max,
            MonthlyAttribute::TmaxMean => self.tmax_mean,
            MonthlyAttribute::TminMin => self.tmin_min,
            MonthlyAttribute::TminMax => self.tmin_max,
            MonthlyAttribute::TminMean => self.tmin_mean,
            MonthlyAttribute::TavgMin => self.tavg_min,
            MonthlyAttribute::TavgMax => self.tavg_max,
            MonthlyAttribute::TavgMean => self.tavg_mean,
            MonthlyAttribute::PrecipMax => self.precip_max,
            MonthlyAttribute::PrecipCount => Some(f64::from(self.precip_count)),
            MonthlyAttribute::PrecipSum => Some(self.precip_sum),
            MonthlyAttribute::SnowMax => Some(f64::from(self.snow_max)),
            MonthlyAttribute::SnowCount => Some(f64::from(self.snow_count)),
            MonthlyAttribute::SnowSum => Some(self.snow_sum as f64),
        }
    }
}

/// How one calendar month compares across all years for an attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthComparison {
    pub month: u32,
    pub minimum: i64,
    pub year_of_minimum: i32,
    pub average: i64,
    pub maximum: i64,
    pub year_of_maximum: i32,
}
