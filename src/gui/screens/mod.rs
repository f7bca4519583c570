pub mod dashboard;
pub mod demand;
pub mod rankings;

use iced::{Element, Task};

use crate::gui::{
    AppState, Message,
    message::Nav,
};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    Dashboard(dashboard::DashboardScreen),
    Demand(demand::DemandScreen),
    Rankings(rankings::RankingsScreen),
}

impl ScreenData {
    pub fn for_nav(nav: Nav, state: &AppState) -> Self {
        match nav {
            Nav::Dashboard => {
                ScreenData::Dashboard(dashboard::DashboardScreen::new(state.session.clone()))
            }
            Nav::Demand => ScreenData::Demand(demand::DemandScreen::new()),
            Nav::Rankings => ScreenData::Rankings(rankings::RankingsScreen::new()),
        }
    }

    pub fn nav(&self) -> Nav {
        match self {
            ScreenData::Dashboard(_) => Nav::Dashboard,
            ScreenData::Demand(_) => Nav::Demand,
            ScreenData::Rankings(_) => Nav::Rankings,
        }
    }
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        match self {
            ScreenData::Dashboard(screen) => screen.view(state).map(Message::Dashboard),
            ScreenData::Demand(screen) => screen.view(state).map(Message::Demand),
            ScreenData::Rankings(screen) => screen.view(state).map(Message::Rankings),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (this, Message::Navigate(nav)) => {
                *this = ScreenData::for_nav(nav, state);
                Task::none()
            }
            (ScreenData::Dashboard(page), Message::Dashboard(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Dashboard)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent) => match parent {
                    dashboard::ParentMessage::ShowRankings => Task::done(
                        ScreenMessage::ScreenMessage(Message::Navigate(Nav::Rankings)),
                    ),
                },
            },
            (ScreenData::Demand(page), Message::Demand(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Demand)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent) => match parent {},
            },
            (ScreenData::Rankings(page), Message::Rankings(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Rankings)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent) => match parent {},
            },
            _ => Task::none(),
        }
    }
}
