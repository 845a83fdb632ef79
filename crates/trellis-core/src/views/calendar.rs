//! Month grids for the calendar view.

use std::str::FromStr;

use jiff::{civil::Date, ToSpan};

use crate::{
    error::{Result, TrellisError},
    models::Task,
};

/// A calendar month, identified by its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarMonth {
    first: Date,
}

impl CalendarMonth {
    /// The month with the given year and month number (1-12).
    ///
    /// # Errors
    ///
    /// Returns `TrellisError::InvalidInput` when the month is out of range.
    pub fn new(year: i16, month: i8) -> Result<Self> {
        let first = Date::new(year, month, 1).map_err(|e| {
            TrellisError::invalid_input("month").with_reason(e.to_string())
        })?;
        Ok(Self { first })
    }

    /// The month containing `date`.
    pub fn containing(date: Date) -> Self {
        Self {
            first: date.first_of_month(),
        }
    }

    pub fn year(&self) -> i16 {
        self.first.year()
    }

    pub fn month(&self) -> i8 {
        self.first.month()
    }

    pub fn first_day(&self) -> Date {
        self.first
    }

    /// Heading such as `December 2024`.
    pub fn title(&self) -> String {
        self.first.strftime("%B %Y").to_string()
    }

    /// Grid cells for the month, weeks starting on Sunday.
    ///
    /// Leading `None` cells pad the grid up to the weekday of the 1st, followed
    /// by one `Some(date)` per day of the month.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use trellis_core::views::CalendarMonth;
    ///
    /// // 1 November 2024 was a Friday
    /// let november = CalendarMonth::new(2024, 11)?;
    /// let cells = november.days();
    /// assert_eq!(cells.iter().take_while(|cell| cell.is_none()).count(), 5);
    /// assert_eq!(cells.len(), 5 + 30);
    /// # Ok::<(), trellis_core::TrellisError>(())
    /// ```
    pub fn days(&self) -> Vec<Option<Date>> {
        let offset = usize::from(self.first.weekday().to_sunday_zero_offset().unsigned_abs());
        let length = usize::from(self.first.days_in_month().unsigned_abs());

        std::iter::repeat(None)
            .take(offset)
            .chain(self.first.series(1.day()).take(length).map(Some))
            .collect()
    }

    /// The month before this one. Stays put at the start of the supported
    /// date range.
    pub fn previous(&self) -> Self {
        Self {
            first: self.first.checked_sub(1.month()).unwrap_or(self.first),
        }
    }

    /// The month after this one. Stays put at the end of the supported date
    /// range.
    pub fn next(&self) -> Self {
        Self {
            first: self.first.checked_add(1.month()).unwrap_or(self.first),
        }
    }

    pub fn contains(&self, date: Date) -> bool {
        date.first_of_month() == self.first
    }
}

impl FromStr for CalendarMonth {
    type Err = TrellisError;

    /// Parse `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || {
            TrellisError::invalid_input("month")
                .with_reason(format!("expected YYYY-MM, got '{s}'"))
        };
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i16>().map_err(|_| invalid())?;
        let month = month.parse::<i8>().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

/// Tasks due on `date`, in their given order.
pub fn tasks_due_on(tasks: &[Task], date: Date) -> Vec<&Task> {
    tasks.iter().filter(|task| task.due_date == date).collect()
}
