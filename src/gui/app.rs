use iced::{
    Element, Length, Task, Theme,
    widget::{button, column, container, pick_list, row, space::horizontal as horizontal_space, text, toggler},
};

use crate::core::date_range::{DateRangePicker, PresetMode, today};
use crate::data;
use crate::gui::{
    message::{Message, Nav, PickerMessage},
    screens::{Screen, ScreenData, ScreenMessage},
    state::AppState,
    widgets::{self, date_picker},
};
use crate::models::Channel;

pub fn run() -> iced::Result {
    iced::application(ParityDeckApp::new, ParityDeckApp::update, ParityDeckApp::view)
        .title(ParityDeckApp::title)
        .theme(ParityDeckApp::theme)
        .run()
}

pub struct ParityDeckApp {
    state: AppState,
    screen: ScreenData,
    picker: DateRangePicker,
}

impl ParityDeckApp {
    pub fn new() -> Self {
        let state = AppState::new();
        let screen = ScreenData::for_nav(Nav::Dashboard, &state);
        let picker = DateRangePicker::with_preset(PresetMode::Next30Days, today());
        Self {
            state,
            screen,
            picker,
        }
    }

    fn title(&self) -> String {
        "Paritydeck - Rate Parity Analytics".to_string()
    }

    fn theme(&self) -> Theme {
        if self.state.dark_theme {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Picker(msg) => {
                self.handle_picker(msg);
                Task::none()
            }
            Message::PropertySelected(property) => {
                self.state.filters.property = property;
                Task::none()
            }
            Message::ChannelToggled(channel, enabled) => {
                if enabled {
                    self.state.filters.channels.insert(channel);
                } else {
                    self.state.filters.channels.remove(&channel);
                }
                Task::none()
            }
            Message::ThemeToggled(dark) => {
                self.state.dark_theme = dark;
                Task::none()
            }
            other => self
                .screen
                .update(other, &mut self.state)
                .map(|msg| match msg {
                    ScreenMessage::ScreenMessage(msg) => msg,
                    ScreenMessage::ParentMessage(parent) => match parent {},
                }),
        }
    }

    /// The picker owns pending edits; only an applied range reaches
    /// the shared filters.
    fn handle_picker(&mut self, message: PickerMessage) {
        match message {
            PickerMessage::Toggle => self.picker.toggle(),
            PickerMessage::DaySelected(day) => self.picker.select_day(day),
            PickerMessage::PresetSelected(mode) => self.picker.select_preset(mode),
            PickerMessage::NextMonth => self.picker.next_month(),
            PickerMessage::PrevMonth => self.picker.prev_month(),
            PickerMessage::Apply => {
                if let Some(range) = self.picker.apply() {
                    self.state.filters.range = range;
                }
            }
            PickerMessage::Cancel => self.picker.cancel(),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let header = row![
            text("PARITYDECK").size(20),
            horizontal_space(),
            button(text(self.picker.display_label()).size(14))
                .on_press(Message::Picker(PickerMessage::Toggle)),
        ]
        .spacing(12)
        .padding(16)
        .align_y(iced::Alignment::Center);

        let mut page = column![header];
        if self.picker.is_open() {
            page = page.push(container(date_picker(&self.picker).map(Message::Picker)).padding(8));
        }

        let main = self.screen.view(&self.state).map(|msg| match msg {
            ScreenMessage::ScreenMessage(msg) => msg,
            ScreenMessage::ParentMessage(parent) => match parent {},
        });

        page.push(widgets::layout(self.sidebar(), main)).into()
    }

    fn sidebar(&self) -> Element<'_, Message> {
        let mut nav = column![].spacing(6);
        for target in Nav::ALL {
            nav = nav.push(widgets::nav_button(
                target.label(),
                self.screen.nav() == target,
                Message::Navigate(target),
            ));
        }

        let property_pick = pick_list(
            data::properties(),
            Some(self.state.filters.property.clone()),
            Message::PropertySelected,
        )
        .text_size(13)
        .width(Length::Fill);

        let mut channels = column![text("Channels").size(12)].spacing(6);
        for channel in Channel::ALL {
            let enabled = self.state.filters.channels.contains(&channel);
            channels = channels.push(
                toggler(enabled)
                    .label(channel.to_string())
                    .on_toggle(move |on| Message::ChannelToggled(channel, on))
                    .size(16.0),
            );
        }

        column![
            nav,
            text("Property").size(12),
            property_pick,
            channels,
            toggler(self.state.dark_theme)
                .label("Dark mode")
                .on_toggle(Message::ThemeToggled)
                .size(16.0),
        ]
        .spacing(16)
        .into()
    }
}

impl Default for ParityDeckApp {
    fn default() -> Self {
        Self::new()
    }
}
