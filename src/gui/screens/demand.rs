use std::convert::Infallible;

use iced::{
    Element, Length, Task,
    widget::{button, column, container, pick_list, row, scrollable, text},
};

use crate::data;
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
    widgets::{self, ChartPoint},
};
use crate::models::{self, DemandLevel};

#[derive(Debug, Clone, Default)]
pub struct DemandScreen {
    level_filter: Option<DemandLevel>,
}

#[derive(Debug, Clone)]
pub enum DemandMessage {
    LevelSelected(DemandLevel),
    LevelCleared,
}

impl DemandScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level_filter(&self) -> Option<DemandLevel> {
        self.level_filter
    }
}

impl Screen for DemandScreen {
    type Message = DemandMessage;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let days: Vec<_> = models::demand_in_range(&data::demand_days(), &state.filters.range)
            .into_iter()
            .filter(|day| self.level_filter.is_none_or(|level| day.level == level))
            .collect();

        let mut filter_bar = row![
            text("Demand level").size(13),
            pick_list(DemandLevel::ALL, self.level_filter, |level| {
                ScreenMessage::ScreenMessage(DemandMessage::LevelSelected(level))
            })
            .placeholder("All levels")
            .text_size(13),
        ]
        .spacing(12)
        .align_y(iced::Alignment::Center);

        if self.level_filter.is_some() {
            filter_bar = filter_bar.push(
                button(text("Clear").size(12))
                    .on_press(ScreenMessage::ScreenMessage(DemandMessage::LevelCleared)),
            );
        }

        let bars: Vec<ChartPoint> = days
            .iter()
            .map(|day| ChartPoint {
                label: format!("{:02}", day.date.day()),
                value: day.occupancy_pct,
                accent: day.level >= DemandLevel::High,
            })
            .collect();

        let summary: Element<'_, ScreenMessage<Self>> = if days.is_empty() {
            container(text("No forecast days in the selected range").size(14))
                .padding(20)
                .into()
        } else {
            let total_pickup: u32 = days.iter().map(|day| u32::from(day.pickup_rooms)).sum();
            let avg_occupancy =
                days.iter().map(|day| day.occupancy_pct).sum::<f32>() / days.len() as f32;
            row![
                widgets::kpi_card(
                    "Avg occupancy",
                    format!("{avg_occupancy:.1}%"),
                    format!("{} days", days.len()),
                ),
                widgets::kpi_card(
                    "Pickup",
                    format!("{total_pickup} rooms"),
                    "last 24h, summed".to_string(),
                ),
            ]
            .spacing(12)
            .into()
        };

        let content = column![
            text("Demand forecast").size(24),
            filter_bar,
            summary,
            widgets::section_title("Occupancy by night"),
            widgets::bar_chart(bars, 180.0),
        ]
        .spacing(16)
        .padding(20);

        scrollable(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            DemandMessage::LevelSelected(level) => self.level_filter = Some(level),
            DemandMessage::LevelCleared => self.level_filter = None,
        }
        Task::none()
    }
}
