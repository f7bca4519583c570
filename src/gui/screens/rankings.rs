use std::cmp::Ordering;
use std::convert::Infallible;

use iced::{
    Element, Length, Task,
    widget::{column, pick_list, row, scrollable, text, toggler},
};

use crate::data;
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
    widgets,
};
use crate::models::OtaRanking;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Rank,
    Visibility,
    PriceDelta,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Rank, SortKey::Visibility, SortKey::PriceDelta];
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SortKey::Rank => "By rank",
            SortKey::Visibility => "By visibility",
            SortKey::PriceDelta => "By price delta",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone)]
pub struct RankingsScreen {
    loss_only: bool,
    sort: SortKey,
}

#[derive(Debug, Clone)]
pub enum RankingsMessage {
    LossOnlyToggled(bool),
    SortSelected(SortKey),
}

impl RankingsScreen {
    pub fn new() -> Self {
        Self {
            loss_only: false,
            sort: SortKey::Rank,
        }
    }

    /// Applies the sidebar channel filter, the loss-only toggle and
    /// the selected ordering to the ranking rows.
    fn visible_rows(&self, state: &AppState) -> Vec<OtaRanking> {
        let mut rows: Vec<_> = data::ota_rankings()
            .into_iter()
            .filter(|ranking| state.filters.channels.contains(&ranking.channel))
            .filter(|ranking| !self.loss_only || ranking.in_loss)
            .collect();
        rows.sort_by(|a, b| match self.sort {
            SortKey::Rank => a.rank.cmp(&b.rank),
            SortKey::Visibility => b
                .visibility
                .partial_cmp(&a.visibility)
                .unwrap_or(Ordering::Equal),
            SortKey::PriceDelta => a
                .price_delta_pct
                .partial_cmp(&b.price_delta_pct)
                .unwrap_or(Ordering::Equal),
        });
        rows
    }
}

impl Default for RankingsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for RankingsScreen {
    type Message = RankingsMessage;
    type ParentMessage = Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let filter_bar = row![
            pick_list(SortKey::ALL, Some(self.sort), |key| {
                ScreenMessage::ScreenMessage(RankingsMessage::SortSelected(key))
            })
            .text_size(13),
            toggler(self.loss_only)
                .label("Loss-making only")
                .on_toggle(|on| ScreenMessage::ScreenMessage(RankingsMessage::LossOnlyToggled(on)))
                .size(16.0),
        ]
        .spacing(16)
        .align_y(iced::Alignment::Center);

        let rows = self.visible_rows(state);
        let count = text(format!("{} channels", rows.len())).size(12);

        let content = column![
            text("OTA visibility rankings").size(24),
            filter_bar,
            count,
            widgets::ranking_table(rows),
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
            RankingsMessage::LossOnlyToggled(on) => self.loss_only = on,
            RankingsMessage::SortSelected(key) => self.sort = key,
        }
        Task::none()
    }
}
