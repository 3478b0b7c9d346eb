/// Input column names
pub const COL_STATION: &str = "IND";
pub const COL_DATE: &str = "Datum";
pub const COL_TMAX: &str = "Tmax";
pub const COL_TMIN: &str = "Tmin";
pub const COL_TAVG: &str = "Tavg";
pub const COL_PRECIPITATION: &str = "R";
pub const COL_SNOW: &str = "CSP";

/// Snow-depth codes that mean "no measurement"
pub const SNOW_SENTINELS: [f64; 3] = [995.0, 999.0, 0.0];

/// Date format used for input and rendered dates
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Tmax day-count thresholds (°C)
pub const TROPICAL_DAY_35: f64 = 35.0;
pub const TROPICAL_DAY_30: f64 = 30.0;
pub const SUMMER_DAY_25: f64 = 25.0;
pub const ICE_DAY_0: f64 = 0.0;
pub const ARCTIC_DAY_MINUS_10: f64 = -10.0;

/// Default snow-cover-present threshold (cm)
pub const DEFAULT_SNOW_THRESHOLD: i32 = 1;

/// Day-count bands: (lower, upper) inclusive, `None` upper is open-ended
pub const DAY_COUNT_BANDS: [(i64, Option<i64>); 6] = [
    (0, Some(0)),
    (1, Some(5)),
    (6, Some(13)),
    (14, Some(21)),
    (22, Some(27)),
    (28, None),
];

/// Snow-depth bands in cm
pub const DEPTH_BANDS: [(i64, Option<i64>); 7] = [
    (0, Some(0)),
    (1, Some(10)),
    (11, Some(20)),
    (21, Some(40)),
    (41, Some(60)),
    (61, Some(80)),
    (81, None),
];

/// Environment prefix for configuration overrides
pub const ENV_PREFIX: &str = "SNOWSTATS";
