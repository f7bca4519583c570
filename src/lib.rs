pub mod core;
pub mod data;
pub mod models;

pub use crate::core::date_range::{DateRangePicker, DayCell, PresetMode, RangeSelection};
pub use crate::core::scroll_gate::{GateConfig, ScrollGate, ScrollMetrics};
pub use crate::core::session::{MemoryStore, SessionStore};
pub use models::{Channel, DemandDay, DemandLevel, KpiSummary, OtaRanking, ParityRecord};

#[cfg(feature = "gui")]
pub mod gui;
