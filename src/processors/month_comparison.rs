use crate::models::{MonthComparison, MonthlyAttribute, MonthlyStat};
use crate::utils::numeric::round_to;

/// Compare each calendar month across all years for one attribute.
///
/// Months without a value are omitted. For the snow maximum and snow-day
/// count, months where the attribute is 0 are left out first. The first
/// year in chronological order wins ties for the minimum and maximum.
pub fn compare_months(monthly: &[MonthlyStat], attribute: MonthlyAttribute) -> Vec<MonthComparison> {
    let mut rows: Vec<&MonthlyStat> = monthly.iter().collect();
    rows.sort_by_key(|stat| (stat.year, stat.month));

    (1..=12)
        .filter_map(|month| {
            let values: Vec<(i32, f64)> = rows
                .iter()
                .filter(|stat| stat.month == month)
                .filter_map(|stat| stat.value(attribute).map(|v| (stat.year, v)))
                .filter(|(_, v)| !(attribute.excludes_zero() && *v == 0.0))
                .collect();

            let (first_year, first_value) = *values.first()?;
            let mut minimum = (first_year, first_value);
            let mut maximum = (first_year, first_value);
            for &(year, value) in &values[1..] {
                if value < minimum.1 {
                    minimum = (year, value);
                }
                if value > maximum.1 {
                    maximum = (year, value);
                }
            }
            let mean = values.iter().map(|(_, v)| v).sum::<f64>() / values.len() as f64;

            Some(MonthComparison {
                month,
                minimum: round_to(minimum.1, 0) as i64,
                year_of_minimum: minimum.0,
                average: round_to(mean, 0) as i64,
                maximum: round_to(maximum.1, 0) as i64,
                year_of_maximum: maximum.0,
            })
        })
        .collect()
}
