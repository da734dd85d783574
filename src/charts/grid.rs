// Calendar grid for one year of the heatmap
// 7 rows (Saturday..Friday) by up to 53 weekly columns, anchored on the Saturday on/before Jan 1

use chrono::{Datelike, NaiveDate};

use crate::models::{Contribution, DatasetIndex, IndexedYear};
use crate::utils::calendar::{next_week, saturday_on_or_before, shift_within_week};

pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell<'a> {
    pub date: NaiveDate,
    pub contribution: Option<&'a Contribution>,
}

/// Month label position: emitted above `column`, naming the month of `date`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthLabel {
    pub column: usize,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid<'a> {
    first_day: NaiveDate,
    cutoff: NaiveDate,
    rows: Vec<Vec<GridCell<'a>>>,
}

impl<'a> CalendarGrid<'a> {
    /// Build the grid for `year`, keeping weeks whose Saturday is on or before `cutoff`
    pub fn build(year: &IndexedYear<'_>, cutoff: NaiveDate, index: &DatasetIndex<'a>) -> Self {
        let mut week_starts = Vec::new();
        let mut next = saturday_on_or_before(year.first_day);
        while next <= cutoff {
            week_starts.push(next);
            next = next_week(next);
        }

        let rows = (0..DAYS_PER_WEEK)
            .map(|row| {
                week_starts
                    .iter()
                    .map(|&start| {
                        let date = shift_within_week(start, row);
                        GridCell {
                            date,
                            contribution: index.contribution_on(date),
                        }
                    })
                    .collect()
            })
            .collect();

        Self {
            first_day: year.first_day,
            cutoff,
            rows,
        }
    }

    pub fn cutoff(&self) -> NaiveDate {
        self.cutoff
    }

    pub fn columns(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn rows(&self) -> &[Vec<GridCell<'a>>] {
        &self.rows
    }

    /// Cells that get a square: on or before the cutoff and backed by data.
    /// Yields `(row, column, contribution)`.
    pub fn drawable_cells(&self) -> impl Iterator<Item = (usize, usize, &'a Contribution)> + '_ {
        self.rows.iter().enumerate().flat_map(move |(row, cells)| {
            cells.iter().enumerate().filter_map(move |(column, cell)| {
                if cell.date > self.cutoff {
                    return None;
                }
                cell.contribution.map(|c| (row, column, c))
            })
        })
    }

    /// Sum of counts for the year's own days up to the cutoff.
    /// Days of the previous December that share the first week are not counted.
    pub fn total(&self) -> u64 {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| cell.date >= self.first_day && cell.date <= self.cutoff)
            .filter_map(|cell| cell.contribution)
            .map(|c| c.count)
            .sum()
    }

    /// One label per month change along the first row.
    /// A December in column 0 belongs to the previous year and is skipped.
    pub fn month_labels(&self) -> Vec<MonthLabel> {
        let mut labels = Vec::new();
        let mut last_month = 0;
        let Some(first_row) = self.rows.first() else {
            return labels;
        };

        for (column, cell) in first_row.iter().enumerate() {
            let month = cell.date.month();
            let wrapped_december = column == 0 && month == 12;
            if month != last_month && !wrapped_december {
                labels.push(MonthLabel {
                    column,
                    date: cell.date,
                });
                last_month = month;
            }
        }
        labels
    }
}
