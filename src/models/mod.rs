pub mod catalog;
pub mod daily;
pub mod extremes;
pub mod frequency;
pub mod monthly;
pub mod report;
pub mod season;
pub mod table;
pub mod yearly;

pub use catalog::{Catalog, Language};
pub use daily::{DailyRecord, RawObservation};
pub use extremes::{
    ExtremeEntry, ExtremeValue, HistoricalExtremes, Occurrence, SnowExtremeKind, SnowExtremes,
};
pub use frequency::{Band, FrequencyTable, SeasonSelector};
pub use monthly::{MonthComparison, MonthlyAttribute, MonthlyStat};
pub use report::StationReport;
pub use season::{SeasonMode, SeasonPeriod, SeasonStat};
pub use table::{Cell, Column, ColumnKind, Table, Tabular};
pub use yearly::YearlySummary;
