use time::{Date, Duration, Month, OffsetDateTime, format_description};

/// Cells in the fixed 6x7 month grid.
pub const GRID_CELLS: i64 = 42;

/// Today's date in the local timezone, falling back to UTC when the
/// local offset cannot be determined.
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .map(|now| now.date())
        .unwrap_or_else(|_| OffsetDateTime::now_utc().date())
}

pub fn first_of_month(date: Date) -> Date {
    date.replace_day(1).unwrap_or(date)
}

pub fn last_of_month(date: Date) -> Date {
    let days = time::util::days_in_year_month(date.year(), date.month());
    date.replace_day(days).unwrap_or(date)
}

/// First day of the month `delta` months away from `anchor`'s month.
pub fn shift_month(anchor: Date, delta: i32) -> Date {
    let mut year = anchor.year();
    let mut month = anchor.month();
    for _ in 0..delta.abs() {
        if delta > 0 {
            if month == Month::December {
                year += 1;
            }
            month = month.next();
        } else {
            if month == Month::January {
                year -= 1;
            }
            month = month.previous();
        }
    }
    Date::from_calendar_date(year, month, 1).unwrap_or(anchor)
}

fn format_short(date: Date) -> String {
    // e.g. "03 Jun '25"
    let parsed = format_description::parse("[day] [month repr:short] '[year repr:last_two]");
    parsed
        .ok()
        .and_then(|format| date.format(&format).ok())
        .unwrap_or_else(|| date.to_string())
}

/// The two-click range selection state machine.
///
/// Explicit variants instead of two nullable fields: `Full` always
/// holds `start <= end`, and every click transition is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSelection {
    Empty,
    Partial { start: Date },
    Full { start: Date, end: Date },
}

impl RangeSelection {
    pub fn from_bounds(start: Option<Date>, end: Option<Date>) -> Self {
        match (start, end) {
            (Some(start), Some(end)) if end < start => Self::Full {
                start: end,
                end: start,
            },
            (Some(start), Some(end)) => Self::Full { start, end },
            (Some(start), None) | (None, Some(start)) => Self::Partial { start },
            (None, None) => Self::Empty,
        }
    }

    /// Applies one day-click, in order:
    /// 1. empty or full selection: restart with the clicked day;
    /// 2. clicked before the pending start: the click picks a new,
    ///    earlier start and the old start becomes the end;
    /// 3. otherwise: the click closes the range.
    ///
    /// Any calendar date is accepted; after any click `start <= end`
    /// holds whenever both ends are present.
    #[must_use]
    pub fn click(self, day: Date) -> Self {
        match self {
            Self::Empty | Self::Full { .. } => Self::Partial { start: day },
            Self::Partial { start } if day < start => Self::Full {
                start: day,
                end: start,
            },
            Self::Partial { start } => Self::Full { start, end: day },
        }
    }

    pub fn start(&self) -> Option<Date> {
        match self {
            Self::Empty => None,
            Self::Partial { start } | Self::Full { start, .. } => Some(*start),
        }
    }

    pub fn end(&self) -> Option<Date> {
        match self {
            Self::Full { end, .. } => Some(*end),
            _ => None,
        }
    }

    pub fn is_endpoint(&self, day: Date) -> bool {
        self.start() == Some(day) || self.end() == Some(day)
    }

    /// Whether `day` falls inside the selection, endpoints included.
    pub fn contains(&self, day: Date) -> bool {
        match self {
            Self::Empty => false,
            Self::Partial { start } => *start == day,
            Self::Full { start, end } => (*start..=*end).contains(&day),
        }
    }

    /// Header label: full range, lone start date, or a placeholder.
    pub fn label(&self) -> String {
        match self {
            Self::Empty => "Select date range".to_string(),
            Self::Partial { start } => format_short(*start),
            Self::Full { start, end } => {
                format!("{} - {}", format_short(*start), format_short(*end))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetMode {
    CurrentMonth,
    Next30Days,
    Next60Days,
    Next90Days,
    CustomRange,
}

impl PresetMode {
    pub const ALL: [PresetMode; 5] = [
        PresetMode::CurrentMonth,
        PresetMode::Next30Days,
        PresetMode::Next60Days,
        PresetMode::Next90Days,
        PresetMode::CustomRange,
    ];

    /// Deterministic mapping from the preset and "today" to a range.
    /// `NextNDays` spans N days inclusive of today; `CustomRange`
    /// clears the selection and awaits manual picks.
    pub fn range(self, today: Date) -> RangeSelection {
        let span = |days: i64| RangeSelection::Full {
            start: today,
            end: today
                .checked_add(Duration::days(days - 1))
                .unwrap_or(today),
        };
        match self {
            Self::CurrentMonth => RangeSelection::Full {
                start: first_of_month(today),
                end: last_of_month(today),
            },
            Self::Next30Days => span(30),
            Self::Next60Days => span(60),
            Self::Next90Days => span(90),
            Self::CustomRange => RangeSelection::Empty,
        }
    }
}

impl std::fmt::Display for PresetMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::CurrentMonth => "Current month",
            Self::Next30Days => "Next 30 days",
            Self::Next60Days => "Next 60 days",
            Self::Next90Days => "Next 90 days",
            Self::CustomRange => "Custom range",
        };
        f.write_str(label)
    }
}

/// One cell of the 42-cell month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: Date,
    /// Belongs to the anchor month (padding cells render dimmed).
    pub in_month: bool,
    /// Equals the selection start or end.
    pub selected: bool,
    /// Falls inside the selection, endpoints included.
    pub in_range: bool,
    pub today: bool,
}

/// Fixed 42-cell (6x7) grid for the month containing `anchor`,
/// Monday-first: the previous month's tail pads the front, the next
/// month's head pads the rest.
pub fn month_grid(anchor: Date, selection: &RangeSelection, today: Date) -> Vec<DayCell> {
    let first = first_of_month(anchor);
    let padding_before = i64::from(first.weekday().number_days_from_monday());
    let grid_start = first
        .checked_sub(Duration::days(padding_before))
        .unwrap_or(first);

    (0..GRID_CELLS)
        .map(|offset| {
            let date = grid_start
                .checked_add(Duration::days(offset))
                .unwrap_or(grid_start);
            DayCell {
                date,
                in_month: date.month() == first.month() && date.year() == first.year(),
                selected: selection.is_endpoint(date),
                in_range: selection.contains(date),
                today: date == today,
            }
        })
        .collect()
}

/// State of the date-range picker popover.
///
/// Edits are pending until `apply` commits them; `cancel` reverts to
/// the last committed pair. The left grid shows `visible_month`, the
/// right grid always shows the month after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangePicker {
    selection: RangeSelection,
    committed: RangeSelection,
    mode: PresetMode,
    committed_mode: PresetMode,
    visible_month: Date,
    today: Date,
    is_open: bool,
}

impl DateRangePicker {
    pub fn new(initial_start: Option<Date>, initial_end: Option<Date>, today: Date) -> Self {
        let committed = RangeSelection::from_bounds(initial_start, initial_end);
        Self {
            selection: committed,
            committed,
            mode: PresetMode::CustomRange,
            committed_mode: PresetMode::CustomRange,
            visible_month: first_of_month(committed.start().unwrap_or(today)),
            today,
            is_open: false,
        }
    }

    /// Picker that starts out committed to a preset.
    pub fn with_preset(mode: PresetMode, today: Date) -> Self {
        let committed = mode.range(today);
        Self {
            selection: committed,
            committed,
            mode,
            committed_mode: mode,
            visible_month: first_of_month(committed.start().unwrap_or(today)),
            today,
            is_open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn mode(&self) -> PresetMode {
        self.mode
    }

    pub fn selection(&self) -> RangeSelection {
        self.selection
    }

    pub fn committed(&self) -> RangeSelection {
        self.committed
    }

    pub fn visible_month(&self) -> Date {
        self.visible_month
    }

    pub fn today(&self) -> Date {
        self.today
    }

    pub fn select_day(&mut self, day: Date) {
        self.selection = self.selection.click(day);
    }

    /// Applies a preset and jumps the visible month to the new start
    /// (the anchor stays put when the preset clears the selection).
    pub fn select_preset(&mut self, mode: PresetMode) {
        self.mode = mode;
        self.selection = mode.range(self.today);
        if let Some(start) = self.selection.start() {
            self.visible_month = first_of_month(start);
        }
    }

    pub fn next_month(&mut self) {
        self.visible_month = shift_month(self.visible_month, 1);
    }

    pub fn prev_month(&mut self) {
        self.visible_month = shift_month(self.visible_month, -1);
    }

    /// Commits pending edits and closes the popover, returning the
    /// committed selection for the owner. No-op when already closed.
    pub fn apply(&mut self) -> Option<RangeSelection> {
        if !self.is_open {
            return None;
        }
        self.committed = self.selection;
        self.committed_mode = self.mode;
        self.is_open = false;
        Some(self.committed)
    }

    /// Discards pending edits, re-anchors the visible month to the
    /// committed start (or today) and closes. No-op when already closed.
    pub fn cancel(&mut self) {
        if !self.is_open {
            return;
        }
        self.selection = self.committed;
        self.mode = self.committed_mode;
        self.visible_month = first_of_month(self.committed.start().unwrap_or(self.today));
        self.is_open = false;
    }

    pub fn display_label(&self) -> String {
        self.selection.label()
    }
}
