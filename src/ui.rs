use iced::alignment::Vertical;
use iced::widget::{button, container, row, text, Button, Container, Row};
use iced::{Color, Length, Theme};

use passwidget::notification::NotificationKind;
use passwidget::strength::{Rgb, StrengthMeter};

pub fn rgb(color: Rgb) -> Color {
    Color::from_rgb8(color.r, color.g, color.b)
}

pub fn padded_button<Message: Clone>(label: &str) -> Button<'_, Message> {
    button(text(label)).padding([10, 20])
}

pub fn control_button<Message: Clone, S: Into<String>>(label: S) -> Button<'static, Message> {
    button(text(label.into())).padding([5, 10])
}

/// Checkbox drawn as a text button so the whole row is clickable.
pub fn check_button<Message: Clone + 'static>(
    label: &'static str,
    checked: bool,
) -> Button<'static, Message> {
    let mark = if checked { "☑" } else { "☐" };
    let content = row![text(mark).size(18), text(label)]
        .spacing(8)
        .align_y(Vertical::Center);
    Button::new(content).style(button::text).padding([2, 4])
}

/// Primary button that looks disabled while still receiving presses.
pub fn dimmed_primary(theme: &Theme, status: button::Status) -> button::Style {
    disabled(button::primary(theme, status))
}

/// Filled part of the strength bar followed by the empty track.
pub fn strength_bar<'a, Message: 'a>(meter: &StrengthMeter) -> Row<'a, Message> {
    let fill = rgb(meter.fill_color);
    let percent = meter.fill_percent.min(100);

    let mut bar = row![].height(8).width(Length::Fill);
    if percent > 0 {
        bar = bar.push(segment(percent, fill));
    }
    if percent < 100 {
        bar = bar.push(segment(100 - percent, rgb(passwidget::strength::TRACK_GRAY)));
    }
    bar
}

fn segment<'a, Message: 'a>(portion: u16, color: Color) -> Container<'a, Message> {
    container(text(""))
        .width(Length::FillPortion(portion))
        .height(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: Some(color.into()),
            ..Default::default()
        })
}

pub fn notification_style(kind: NotificationKind) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let background = match kind {
            NotificationKind::Success => palette.success.base.color,
            NotificationKind::Warning => rgb(passwidget::strength::ORANGE),
            NotificationKind::Error => palette.danger.base.color,
        };
        container::Style {
            border: iced::Border {
                color: background,
                width: 1.0,
                radius: 5.0.into(),
            },
            background: Some(background.into()),
            text_color: Some(Color::WHITE),
            ..Default::default()
        }
    }
}

pub fn container_border_r5(theme: &Theme) -> container::Style {
    container::Style {
        border: iced::Border {
            color: theme.palette().text,
            width: 1.0,
            radius: 5.0.into(),
        },
        background: Some(theme.palette().background.into()),
        ..Default::default()
    }
}

fn disabled(style: button::Style) -> button::Style {
    button::Style {
        background: style
            .background
            .map(|background| background.scale_alpha(0.5)),
        text_color: style.text_color.scale_alpha(0.5),
        ..style
    }
}
