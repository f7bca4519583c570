use time::Date;

use crate::core::date_range::PresetMode;
use crate::gui::screens::{
    ScreenMessage, dashboard::DashboardScreen, demand::DemandScreen, rankings::RankingsScreen,
};
use crate::models::Channel;

#[derive(Debug, Clone)]
pub enum Message {
    Dashboard(ScreenMessage<DashboardScreen>),
    Demand(ScreenMessage<DemandScreen>),
    Rankings(ScreenMessage<RankingsScreen>),
    Navigate(Nav),
    Picker(PickerMessage),
    PropertySelected(String),
    ChannelToggled(Channel, bool),
    ThemeToggled(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    Dashboard,
    Demand,
    Rankings,
}

impl Nav {
    pub const ALL: [Nav; 3] = [Nav::Dashboard, Nav::Demand, Nav::Rankings];

    pub fn label(self) -> &'static str {
        match self {
            Nav::Dashboard => "Overview",
            Nav::Demand => "Demand forecast",
            Nav::Rankings => "OTA rankings",
        }
    }
}

/// Messages of the header date-range picker popover.
#[derive(Debug, Clone, Copy)]
pub enum PickerMessage {
    Toggle,
    DaySelected(Date),
    PresetSelected(PresetMode),
    NextMonth,
    PrevMonth,
    Apply,
    Cancel,
}
