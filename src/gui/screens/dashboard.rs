use std::sync::Arc;

use iced::{
    Element, Length, Task,
    widget::{button, column, container, row, scrollable, text},
};

use crate::core::scroll_gate::{GateConfig, ScrollGate, ScrollMetrics};
use crate::core::session::SessionStore;
use crate::data;
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
    widgets::{self, ChartPoint},
};
use crate::models::{self, KpiSummary};

/// The overview page: KPI cards, the parity trend and a ranking
/// preview, with a feedback prompt gated behind the scroll detector.
#[derive(Debug, Clone)]
pub struct DashboardScreen {
    gate: ScrollGate,
    pending: Option<ScrollMetrics>,
    generation: u64,
    prompt_visible: bool,
}

#[derive(Debug, Clone)]
pub enum DashboardMessage {
    Scrolled(ScrollMetrics),
    /// The trailing debounce timer for the tagged generation elapsed.
    ScrollSettled(u64),
    FeedbackShared,
    FeedbackDismissed,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    ShowRankings,
}

impl DashboardScreen {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        let mut gate = ScrollGate::new(GateConfig::default(), store);
        // Capture the starting position once at setup. Before the
        // first layout nothing is scrollable, so this cannot fire.
        gate.evaluate(ScrollMetrics::default());
        Self {
            gate,
            pending: None,
            generation: 0,
            prompt_visible: false,
        }
    }

    pub fn gate(&self) -> &ScrollGate {
        &self.gate
    }

    pub fn prompt_visible(&self) -> bool {
        self.prompt_visible
    }
}

impl Screen for DashboardScreen {
    type Message = DashboardMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let records = models::records_in_range(&data::parity_records(), &state.filters.range);

        let cards: Element<'_, ScreenMessage<Self>> = match KpiSummary::over(&records) {
            Some(kpis) => row![
                widgets::kpi_card(
                    "Parity score",
                    format!("{:.1}%", kpis.parity_score),
                    format!("avg over {} days", kpis.days),
                ),
                widgets::kpi_card(
                    "Loss",
                    format!("{:.1}%", kpis.loss_pct),
                    "of shopped rates".to_string(),
                ),
                widgets::kpi_card(
                    "Meet",
                    format!("{:.1}%", kpis.meet_pct),
                    "of shopped rates".to_string(),
                ),
                widgets::kpi_card(
                    "Revenue loss",
                    format!("${:.0}", kpis.revenue_loss),
                    "estimated".to_string(),
                ),
            ]
            .spacing(12)
            .into(),
            None => container(text("No shopped data in the selected range").size(14))
                .padding(20)
                .into(),
        };

        let trend: Vec<ChartPoint> = records
            .iter()
            .map(|record| ChartPoint {
                label: format!("{:02}", record.date.day()),
                value: record.parity_score,
                accent: record.loss_pct > 15.0,
            })
            .collect();

        let rankings: Vec<_> = data::ota_rankings()
            .into_iter()
            .filter(|ranking| state.filters.channels.contains(&ranking.channel))
            .take(3)
            .collect();

        let mut content = column![
            text(state.filters.property.as_str()).size(24),
            cards,
            widgets::section_title("Parity trend"),
            widgets::bar_chart(trend, 160.0),
            widgets::section_title("Top channels"),
            widgets::ranking_table(rankings),
            button(text("View full rankings").size(13))
                .on_press(ScreenMessage::ParentMessage(ParentMessage::ShowRankings)),
        ]
        .spacing(16)
        .padding(20);

        if self.prompt_visible {
            content = content.push(widgets::feedback_prompt(
                ScreenMessage::ScreenMessage(DashboardMessage::FeedbackShared),
                ScreenMessage::ScreenMessage(DashboardMessage::FeedbackDismissed),
            ));
        }

        scrollable(content)
            .on_scroll(|viewport| {
                ScreenMessage::ScreenMessage(DashboardMessage::Scrolled(ScrollMetrics::new(
                    viewport.absolute_offset().y,
                    viewport.bounds().height,
                    viewport.content_bounds().height,
                )))
            })
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
            DashboardMessage::Scrolled(metrics) => {
                // Trailing debounce: remember the sample, invalidate
                // any timer already in flight.
                self.pending = Some(metrics);
                self.generation = self.generation.wrapping_add(1);
                let generation = self.generation;
                let delay = self.gate.config().debounce;
                Task::perform(
                    async move {
                        tokio::time::sleep(delay).await;
                        generation
                    },
                    |generation| {
                        ScreenMessage::ScreenMessage(DashboardMessage::ScrollSettled(generation))
                    },
                )
            }
            DashboardMessage::ScrollSettled(generation) => {
                if generation == self.generation {
                    if let Some(metrics) = self.pending.take() {
                        if self.gate.evaluate(metrics) {
                            self.prompt_visible = true;
                        }
                    }
                }
                Task::none()
            }
            DashboardMessage::FeedbackShared => {
                // Leaves the session suppression in place.
                self.prompt_visible = false;
                Task::none()
            }
            DashboardMessage::FeedbackDismissed => {
                self.prompt_visible = false;
                self.gate.reset_trigger();
                Task::none()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::MemoryStore;

    fn screen() -> (DashboardScreen, AppState) {
        (
            DashboardScreen::new(Arc::new(MemoryStore::new())),
            AppState::new(),
        )
    }

    fn near_bottom() -> ScrollMetrics {
        ScrollMetrics::new(4960.0, 1000.0, 6000.0)
    }

    #[test]
    fn settled_evaluation_mounts_the_prompt() {
        let (mut screen, mut state) = screen();
        let _ = screen.update(DashboardMessage::Scrolled(near_bottom()), &mut state);
        let _ = screen.update(DashboardMessage::ScrollSettled(1), &mut state);
        assert!(screen.prompt_visible());
        assert!(screen.gate().has_triggered());
    }

    #[test]
    fn stale_debounce_generations_are_ignored() {
        let (mut screen, mut state) = screen();
        let _ = screen.update(DashboardMessage::Scrolled(near_bottom()), &mut state);
        let _ = screen.update(
            DashboardMessage::Scrolled(ScrollMetrics::new(100.0, 1000.0, 6000.0)),
            &mut state,
        );

        // The first timer comes back carrying generation 1; only the
        // second (generation 2) sample may be evaluated.
        let _ = screen.update(DashboardMessage::ScrollSettled(1), &mut state);
        assert!(!screen.prompt_visible());

        let _ = screen.update(DashboardMessage::ScrollSettled(2), &mut state);
        assert!(!screen.prompt_visible());
        assert!(!screen.gate().has_triggered());
    }

    #[test]
    fn dismissing_the_prompt_rearms_the_gate() {
        let (mut screen, mut state) = screen();
        let _ = screen.update(DashboardMessage::Scrolled(near_bottom()), &mut state);
        let _ = screen.update(DashboardMessage::ScrollSettled(1), &mut state);
        assert!(screen.prompt_visible());

        let _ = screen.update(DashboardMessage::FeedbackDismissed, &mut state);
        assert!(!screen.prompt_visible());
        assert!(!screen.gate().has_triggered());

        let _ = screen.update(DashboardMessage::Scrolled(near_bottom()), &mut state);
        let _ = screen.update(DashboardMessage::ScrollSettled(2), &mut state);
        assert!(screen.prompt_visible());
    }

    #[test]
    fn sharing_keeps_the_gate_latched() {
        let (mut screen, mut state) = screen();
        let _ = screen.update(DashboardMessage::Scrolled(near_bottom()), &mut state);
        let _ = screen.update(DashboardMessage::ScrollSettled(1), &mut state);

        let _ = screen.update(DashboardMessage::FeedbackShared, &mut state);
        assert!(!screen.prompt_visible());
        assert!(screen.gate().has_triggered());

        let _ = screen.update(DashboardMessage::Scrolled(near_bottom()), &mut state);
        let _ = screen.update(DashboardMessage::ScrollSettled(2), &mut state);
        assert!(!screen.prompt_visible());
    }

    #[test]
    fn fresh_screen_in_the_same_session_stays_quiet() {
        let store = Arc::new(MemoryStore::new());
        let mut state = AppState::new();
        let mut first = DashboardScreen::new(store.clone());
        let _ = first.update(DashboardMessage::Scrolled(near_bottom()), &mut state);
        let _ = first.update(DashboardMessage::ScrollSettled(1), &mut state);
        assert!(first.prompt_visible());

        let mut second = DashboardScreen::new(store);
        assert!(second.gate().has_triggered());
        assert!(!second.prompt_visible());

        let _ = second.update(DashboardMessage::Scrolled(near_bottom()), &mut state);
        let _ = second.update(DashboardMessage::ScrollSettled(1), &mut state);
        assert!(!second.prompt_visible());
    }
}
