pub mod date_range;
pub mod scroll_gate;
pub mod session;

pub use date_range::{
    DateRangePicker, DayCell, PresetMode, RangeSelection, first_of_month, month_grid,
    shift_month, today,
};
pub use scroll_gate::{GateConfig, ScrollGate, ScrollMetrics, SUPPRESSION_KEY};
pub use session::{MemoryStore, SessionStore};
