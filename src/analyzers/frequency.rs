use crate::models::{Band, Catalog, FrequencyTable, MonthlyStat, SeasonSelector};
use crate::utils::constants::{DAY_COUNT_BANDS, DEPTH_BANDS};

/// Tallies monthly snow statistics into fixed value bands for the months
/// of a [`SeasonSelector`].
pub struct FrequencyBuilder {
    selector: SeasonSelector,
    months: Vec<u32>,
}

impl FrequencyBuilder {
    /// The selector's months are looked up in `catalog`.
    pub fn new(catalog: &Catalog, selector: SeasonSelector) -> Self {
        Self {
            selector,
            months: catalog.selector_months(selector).to_vec(),
        }
    }

    /// Months by number of days with snow cover.
    pub fn snow_days(&self, monthly: &[MonthlyStat]) -> FrequencyTable {
        self.tally(monthly, Band::from_bounds(&DAY_COUNT_BANDS), |m| {
            i64::from(m.snow_count)
        })
    }

    /// Months by their maximum snow depth.
    pub fn max_depths(&self, monthly: &[MonthlyStat]) -> FrequencyTable {
        self.tally(monthly, Band::from_bounds(&DEPTH_BANDS), |m| {
            i64::from(m.snow_max)
        })
    }

    fn tally<F>(&self, monthly: &[MonthlyStat], bands: Vec<Band>, value: F) -> FrequencyTable
    where
        F: Fn(&MonthlyStat) -> i64,
    {
        let mut table = FrequencyTable::empty(self.selector, self.months.clone(), bands);

        for stat in monthly {
            let Some(column) = table.months.iter().position(|m| *m == stat.month) else {
                continue;
            };
            let v = value(stat);
            if let Some(row) = table.bands.iter().position(|band| band.contains(v)) {
                table.counts[row][column] += 1;
            }
        }

        table
    }
}
