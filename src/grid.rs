use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{DAY_NUMBER_WIDTH, DEFAULT_CELL_WIDTH, DEFAULT_GRID_WIDTH};
use crate::epoch::EpochReference;
use crate::types::{Month, Weekday, days_in_month};
use crate::{CalendarError, CivilDate};

/// Column widths for a rendered month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGridLayout", into = "RawGridLayout")]
pub struct GridLayout {
    grid_width: usize,
    cell_width: usize,
}

#[derive(Serialize, Deserialize)]
struct RawGridLayout {
    grid_width: usize,
    cell_width: usize,
}

impl GridLayout {
    /// # Errors
    /// Returns `CalendarError::InvalidLayout` if `grid_width` is zero or
    /// `cell_width` cannot hold a day number.
    pub fn new(grid_width: usize, cell_width: usize) -> Result<Self, CalendarError> {
        if grid_width == 0 || cell_width < DAY_NUMBER_WIDTH {
            tracing::debug!(grid_width, cell_width, "rejected grid layout");
            return Err(CalendarError::InvalidLayout {
                grid_width,
                cell_width,
            });
        }
        Ok(Self {
            grid_width,
            cell_width,
        })
    }

    #[inline]
    pub const fn grid_width(&self) -> usize {
        self.grid_width
    }

    #[inline]
    pub const fn cell_width(&self) -> usize {
        self.cell_width
    }

    fn blank_cell(&self) -> String {
        " ".repeat(self.cell_width)
    }

    fn day_cell(&self, day: u8) -> String {
        format!(
            "{:>width$}{}",
            day,
            " ".repeat(self.cell_width - DAY_NUMBER_WIDTH),
            width = DAY_NUMBER_WIDTH
        )
    }
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            cell_width: DEFAULT_CELL_WIDTH,
        }
    }
}

impl TryFrom<RawGridLayout> for GridLayout {
    type Error = CalendarError;

    fn try_from(raw: RawGridLayout) -> Result<Self, Self::Error> {
        Self::new(raw.grid_width, raw.cell_width)
    }
}

impl From<GridLayout> for RawGridLayout {
    fn from(layout: GridLayout) -> Self {
        Self {
            grid_width: layout.grid_width,
            cell_width: layout.cell_width,
        }
    }
}

/// A printable month: centered title, dashed rule, weekday header, then one
/// row per week. Rows are right-trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    title:         String,
    rule:          String,
    header:        String,
    weeks:         Vec<String>,
    start_weekday: Weekday,
    days:          u8,
}

impl MonthGrid {
    /// Lays out `month` of `year`, placing day 1 by `epoch`'s weekday.
    pub fn render(year: i32, month: Month, layout: &GridLayout, epoch: EpochReference) -> Self {
        let start_weekday = epoch.weekday_of(CivilDate::first_of_month(year, month));
        let days = days_in_month(year, month);

        let title_text = format!("{} {}", month.name(), year);
        let padding = layout.grid_width.saturating_sub(title_text.len()) / 2;
        let title = format!("{}{}", " ".repeat(padding), title_text);
        let rule = "-".repeat(layout.grid_width);
        let header = Weekday::ALL
            .iter()
            .map(|weekday| format!("{:<width$}", weekday.label(), width = layout.cell_width))
            .collect::<String>()
            .trim_end()
            .to_owned();

        let mut weeks = Vec::new();
        let mut line = layout.blank_cell().repeat(usize::from(start_weekday.index()));
        let mut weekday = start_weekday;
        for day in 1..=days {
            line.push_str(&layout.day_cell(day));
            if weekday == Weekday::Saturday {
                weeks.push(line.trim_end().to_owned());
                line.clear();
            }
            weekday = weekday.add_days(1);
        }
        if !line.trim().is_empty() {
            weeks.push(line.trim_end().to_owned());
        }

        tracing::trace!(
            year,
            month = month.number(),
            start_weekday = %start_weekday,
            rows = weeks.len(),
            "rendered month grid"
        );

        Self {
            title,
            rule,
            header,
            weeks,
            start_weekday,
            days,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rule(&self) -> &str {
        &self.rule
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// Day rows only, one per week
    pub fn weeks(&self) -> &[String] {
        &self.weeks
    }

    /// Weekday of the 1st of the month
    pub const fn start_weekday(&self) -> Weekday {
        self.start_weekday
    }

    /// Number of days in the month
    pub const fn days(&self) -> u8 {
        self.days
    }

    /// Every printable line, title first
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        [self.title.as_str(), self.rule.as_str(), self.header.as_str()]
            .into_iter()
            .chain(self.weeks.iter().map(String::as_str))
    }

    pub fn into_lines(self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.weeks.len() + 3);
        lines.push(self.title);
        lines.push(self.rule);
        lines.push(self.header);
        lines.extend(self.weeks);
        lines
    }
}

impl fmt::Display for MonthGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

/// Renders a month with the default 33/5 layout, anchored on Jan 1, 1800.
pub fn render_month_grid(year: i32, month: Month) -> MonthGrid {
    MonthGrid::render(year, month, &GridLayout::default(), EpochReference::CALENDAR)
}
