mod date_picker;

pub use date_picker::date_picker;

use iced::{
    Element, Length, Theme,
    widget::{Space, button, column, container, row, text},
};
use iced_widget::container::bordered_box;

use crate::models::OtaRanking;

/// One bar of a widget-built chart. The screens derive these from the
/// datasets; the renderer only scales heights.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f32,
    /// Drawn in the danger color (loss days, peak demand).
    pub accent: bool,
}

/// Sidebar + main content split shared by every screen.
pub fn layout<'a, Message>(
    sidebar: impl Into<Element<'a, Message>>,
    main_content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    row![
        container(sidebar.into())
            .padding(16)
            .height(Length::Fill)
            .style(bordered_box)
            .width(Length::FillPortion(1)),
        container(main_content.into())
            .height(Length::Fill)
            .width(Length::FillPortion(4)),
    ]
    .into()
}

pub fn nav_button<'a, Message>(
    label: &'a str,
    active: bool,
    message: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    button(text(label).size(14))
        .width(Length::Fill)
        .style(move |theme: &Theme, status| {
            if active {
                button::primary(theme, status)
            } else {
                button::text(theme, status)
            }
        })
        .on_press(message)
        .into()
}

pub fn section_title<'a, Message>(title: &'a str) -> Element<'a, Message>
where
    Message: 'a,
{
    text(title).size(16).into()
}

pub fn kpi_card<'a, Message>(label: &'a str, value: String, hint: String) -> Element<'a, Message>
where
    Message: 'a,
{
    container(
        column![
            text(label).size(12),
            text(value).size(26),
            text(hint).size(11),
        ]
        .spacing(4),
    )
    .padding(16)
    .width(Length::FillPortion(1))
    .style(bordered_box)
    .into()
}

/// Vertical bar chart built from plain containers; bars share the row
/// width evenly and are bottom-aligned.
pub fn bar_chart<'a, Message>(points: Vec<ChartPoint>, height: f32) -> Element<'a, Message>
where
    Message: 'a,
{
    if points.is_empty() {
        return container(text("No data").size(12)).padding(12).into();
    }

    let max = points.iter().map(|p| p.value).fold(f32::EPSILON, f32::max);
    let mut bars = row![]
        .spacing(3)
        .align_y(iced::Alignment::End)
        .height(Length::Fixed(height + 28.0));

    for point in points {
        let bar_height = (point.value / max * height).max(2.0);
        let accent = point.accent;
        let bar = container(Space::new())
            .width(Length::Fill)
            .height(Length::Fixed(bar_height))
            .style(move |theme: &Theme| {
                let palette = theme.extended_palette();
                let color = if accent {
                    palette.danger.base.color
                } else {
                    palette.primary.base.color
                };
                iced::widget::container::Style {
                    background: Some(color.into()),
                    ..iced::widget::container::Style::default()
                }
            });
        bars = bars.push(
            column![bar, text(point.label).size(9)]
                .spacing(2)
                .align_x(iced::Alignment::Center)
                .width(Length::Fill),
        );
    }

    container(bars).padding(12).style(bordered_box).into()
}

pub fn ranking_table<'a, Message>(rows: Vec<OtaRanking>) -> Element<'a, Message>
where
    Message: 'a,
{
    let header = row![
        container(text("#").size(12)).width(Length::FillPortion(1)),
        container(text("Channel").size(12)).width(Length::FillPortion(4)),
        container(text("Visibility").size(12)).width(Length::FillPortion(2)),
        container(text("Price delta").size(12)).width(Length::FillPortion(2)),
        container(text("Status").size(12)).width(Length::FillPortion(2)),
    ]
    .spacing(8);

    let mut body = column![header].spacing(8);
    for ranking in rows {
        let status = if ranking.in_loss {
            text("Loss").size(13).style(|theme: &Theme| text::Style {
                color: Some(theme.extended_palette().danger.base.color),
            })
        } else {
            text("In parity")
                .size(13)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.extended_palette().success.base.color),
                })
        };
        body = body.push(
            row![
                container(text(ranking.rank.to_string()).size(13)).width(Length::FillPortion(1)),
                container(text(ranking.channel.to_string()).size(13))
                    .width(Length::FillPortion(4)),
                container(text(format!("{:.1}", ranking.visibility)).size(13))
                    .width(Length::FillPortion(2)),
                container(text(format!("{:+.1}%", ranking.price_delta_pct)).size(13))
                    .width(Length::FillPortion(2)),
                container(status).width(Length::FillPortion(2)),
            ]
            .spacing(8),
        );
    }

    container(body).padding(12).style(bordered_box).into()
}

/// The scroll-gated prompt mounted at the bottom of the overview.
pub fn feedback_prompt<'a, Message>(on_share: Message, on_dismiss: Message) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    container(
        column![
            text("How is the parity dashboard working for you?").size(16),
            text("You reached the end of the report. A 30-second rating helps us tune it.")
                .size(12),
            row![
                button(text("Share feedback").size(13))
                    .style(button::primary)
                    .on_press(on_share),
                button(text("Not now").size(13))
                    .style(button::text)
                    .on_press(on_dismiss),
            ]
            .spacing(8),
        ]
        .spacing(8),
    )
    .padding(16)
    .style(bordered_box)
    .into()
}
