use iced::{
    Element, Length, Theme,
    widget::{button, column, container, row, space::horizontal as horizontal_space, text},
};
use iced_widget::container::bordered_box;
use time::Date;

use crate::core::date_range::{DateRangePicker, DayCell, PresetMode, month_grid, shift_month};
use crate::gui::message::PickerMessage;

/// The open date-range popover: preset column, dual month grid and
/// Apply/Cancel footer. The header button that toggles it lives with
/// the app chrome.
pub fn date_picker(picker: &DateRangePicker) -> Element<'_, PickerMessage> {
    let presets = column(
        PresetMode::ALL.map(|mode| preset_button(mode, picker.mode())),
    )
    .spacing(6)
    .width(Length::Fixed(150.0));

    let month_nav = row![
        button(text("<").size(13)).on_press(PickerMessage::PrevMonth),
        horizontal_space(),
        button(text(">").size(13)).on_press(PickerMessage::NextMonth),
    ];

    let left = picker.visible_month();
    let right = shift_month(left, 1);
    let grids = row![grid(picker, left), grid(picker, right)].spacing(24);

    let footer = row![
        text(picker.display_label()).size(13),
        horizontal_space(),
        button(text("Cancel").size(13))
            .style(button::secondary)
            .on_press(PickerMessage::Cancel),
        button(text("Apply").size(13))
            .style(button::primary)
            .on_press(PickerMessage::Apply),
    ]
    .spacing(8)
    .align_y(iced::Alignment::Center);

    container(
        row![
            presets,
            column![month_nav, grids, footer].spacing(12),
        ]
        .spacing(24),
    )
    .padding(16)
    .style(bordered_box)
    .into()
}

fn preset_button(mode: PresetMode, current: PresetMode) -> Element<'static, PickerMessage> {
    let active = mode == current;
    button(text(mode.to_string()).size(13))
        .width(Length::Fill)
        .style(move |theme: &Theme, status| {
            if active {
                button::primary(theme, status)
            } else {
                button::text(theme, status)
            }
        })
        .on_press(PickerMessage::PresetSelected(mode))
        .into()
}

fn grid(picker: &DateRangePicker, anchor: Date) -> Element<'static, PickerMessage> {
    let selection = picker.selection();
    let cells = month_grid(anchor, &selection, picker.today());
    // Preset grids are informational only; in custom mode the padding
    // cells stay disabled.
    let interactive = picker.mode() == PresetMode::CustomRange;

    let mut weeks = column![weekday_header()].spacing(2);
    for week in cells.chunks(7) {
        let mut days = row![].spacing(2);
        for cell in week {
            days = days.push(day_button(*cell, interactive));
        }
        weeks = weeks.push(days);
    }

    column![
        text(format!("{} {}", anchor.month(), anchor.year())).size(14),
        weeks,
    ]
    .spacing(8)
    .align_x(iced::Alignment::Center)
    .into()
}

fn weekday_header() -> Element<'static, PickerMessage> {
    let mut header = row![].spacing(2);
    for name in ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"] {
        header = header.push(
            container(text(name).size(11)).center_x(Length::Fixed(34.0)),
        );
    }
    header.into()
}

fn day_button(cell: DayCell, interactive: bool) -> Element<'static, PickerMessage> {
    let label = container(text(format!("{:>2}", cell.date.day())).size(12))
        .center_x(Length::Fill);
    let mut day = button(label)
        .width(Length::Fixed(34.0))
        .padding(4)
        .style(move |theme: &Theme, _status| day_style(theme, cell));
    if interactive && cell.in_month {
        day = day.on_press(PickerMessage::DaySelected(cell.date));
    }
    day.into()
}

fn day_style(theme: &Theme, cell: DayCell) -> button::Style {
    let palette = theme.extended_palette();
    let mut style = button::Style {
        text_color: palette.background.base.text,
        ..button::Style::default()
    };
    if cell.in_range {
        style.background = Some(palette.primary.weak.color.into());
        style.text_color = palette.primary.weak.text;
    }
    if cell.selected {
        style.background = Some(palette.primary.strong.color.into());
        style.text_color = palette.primary.strong.text;
    }
    if !cell.in_month {
        // Padding days render dimmed.
        style.background = None;
        style.text_color = palette.background.strong.color;
    }
    if cell.today {
        style.border = iced::Border {
            color: palette.primary.base.color,
            width: 1.0,
            radius: 4.0.into(),
        };
    }
    style
}
