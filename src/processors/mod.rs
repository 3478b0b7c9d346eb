pub mod month_comparison;
pub mod monthly_aggregator;
pub mod parallel_validator;
pub mod record_normalizer;
pub mod station_pipeline;
pub mod yearly_aggregator;

pub use month_comparison::compare_months;
pub use monthly_aggregator::MonthlyAggregator;
pub use parallel_validator::{ParallelValidator, StationCoverage};
pub use record_normalizer::{station_records, NormalizationReport, RangeViolation, RecordNormalizer};
pub use station_pipeline::StationPipeline;
pub use yearly_aggregator::YearlyAggregator;
