#![windows_subsystem = "windows"]

mod ui;

use std::sync::Arc;

use iced::alignment::{self, Vertical};
use iced::widget::{button, column, container, row, slider, text, Column};
use iced::{task, Element, Fill, Font, Task, Theme};
use log::{error, info, warn};
use passwidget::strength::MUTED_GRAY;
use passwidget::{
    CharacterClass, ClipboardWriter, NotificationTicket, PasswordWidget, SystemClipboard,
    WidgetError, WidgetSettings,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::ui::{
    check_button, container_border_r5, control_button, dimmed_primary, notification_style,
    padded_button, rgb, strength_bar,
};

pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = WidgetSettings::load();
    info!(
        "Starting with length {} and classes {:?}",
        settings.length, settings.selection
    );

    let result = iced::application(
        move || PasswordApp::new(settings.clone()),
        PasswordApp::update,
        PasswordApp::view,
    )
    .title(PasswordApp::title)
    .centered()
    .window_size((460.0, 640.0))
    .theme(Theme::Light)
    .run();

    if let Err(e) = result {
        error!("Application error: {}", e);
    }
}

pub struct PasswordApp {
    widget: PasswordWidget<StdRng>,
    clipboard: Arc<dyn ClipboardWriter>,
    // Hide timer of the notification currently on screen
    hide_timer: Option<task::Handle>,
}

#[derive(Debug, Clone)]
pub enum Message {
    ClassToggled(CharacterClass),
    LengthDragged(u8),
    LengthReleased,
    Generate,
    CopyPassword,
    CopyFinished(Result<(), WidgetError>),
    NotificationExpired(u64),
}

impl PasswordApp {
    fn new(settings: WidgetSettings) -> Self {
        Self {
            widget: PasswordWidget::new(&settings, StdRng::from_os_rng()),
            clipboard: Arc::new(SystemClipboard),
            hide_timer: None,
        }
    }

    fn title(&self) -> String {
        String::from("Password Generator - 0.1.0")
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ClassToggled(class) => {
                let enabled = !self.widget.selection().is_enabled(class);
                self.widget.toggle_class(class, enabled);
                self.save_settings();
                Task::none()
            }
            Message::LengthDragged(value) => {
                self.widget.length_input(value as usize);
                Task::none()
            }
            Message::LengthReleased => {
                let length = self.widget.length_label();
                self.widget.length_committed(length);
                self.save_settings();
                Task::none()
            }
            Message::Generate => match self.widget.generate_clicked() {
                Some(ticket) => self.schedule_hide(ticket),
                None => Task::none(),
            },
            Message::CopyPassword => match self.widget.copy_requested() {
                Some(password) => {
                    let clipboard = Arc::clone(&self.clipboard);
                    Task::perform(
                        async move { clipboard.write(&password) },
                        Message::CopyFinished,
                    )
                }
                None => Task::none(),
            },
            Message::CopyFinished(result) => {
                let ticket = self.widget.copy_finished(result);
                self.schedule_hide(ticket)
            }
            Message::NotificationExpired(id) => {
                self.widget.notification_expired(id);
                Task::none()
            }
        }
    }

    /// Starts the hide timer for `ticket`, cancelling the one already running.
    fn schedule_hide(&mut self, ticket: NotificationTicket) -> Task<Message> {
        let delay = ticket.delay;
        let (timer, handle) = Task::perform(
            async move { tokio::time::sleep(delay).await },
            move |_| Message::NotificationExpired(ticket.id),
        )
        .abortable();

        if let Some(previous) = self.hide_timer.replace(handle) {
            previous.abort();
        }
        timer
    }

    fn save_settings(&self) {
        if let Err(e) = self.widget.settings().save() {
            warn!("Failed to save settings: {}", e);
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let mut content = column![text("Password Generator").size(32).font(bold())]
            .spacing(20)
            .padding(30)
            .max_width(460.0)
            .align_x(alignment::Horizontal::Center);

        content = content
            .push(self.password_row())
            .push(self.strength())
            .push(self.options());

        let generate = padded_button("Generate Password").on_press(Message::Generate);
        let generate = if self.widget.generate_dimmed() {
            generate.style(dimmed_primary)
        } else {
            generate
        };
        content = content.push(generate);

        if let Some(notification) = self.widget.notification() {
            content = content.push(
                container(text(&notification.message).font(bold()))
                    .padding([8, 16])
                    .style(notification_style(notification.kind)),
            );
        }

        container(content).center_x(Fill).center_y(Fill).into()
    }

    fn password_row(&self) -> Element<'_, Message> {
        // A pressable label rather than a text input: inputs capture clicks
        let shown = if self.widget.password().is_empty() {
            text(self.widget.placeholder()).color(rgb(MUTED_GRAY))
        } else {
            text(self.widget.password()).size(16).font(Font::MONOSPACE)
        };
        let field = button(
            container(shown)
                .padding(10)
                .width(Fill)
                .style(container_border_r5),
        )
        .style(button::text)
        .padding(0)
        .width(Fill)
        .on_press(Message::CopyPassword);

        let copy = control_button("📋Copy");
        let copy = if self.widget.copy_enabled() {
            copy.on_press(Message::CopyPassword)
        } else {
            copy
        };

        row![field, copy]
            .spacing(10)
            .align_y(Vertical::Center)
            .into()
    }

    fn strength(&self) -> Column<'_, Message> {
        let meter = self.widget.meter();
        column![
            strength_bar(meter),
            text(&meter.label).size(14).color(rgb(meter.label_color)),
        ]
        .spacing(5)
    }

    fn options(&self) -> Element<'_, Message> {
        let range = self.widget.length_range();
        let length = row![
            text("Length:"),
            text(self.widget.length_label().to_string()).font(bold()),
        ]
        .spacing(5);
        let length_slider = slider(
            range.min as u8..=range.max as u8,
            self.widget.length_label() as u8,
            Message::LengthDragged,
        )
        .on_release(Message::LengthReleased);

        let mut options = column![length, length_slider].spacing(10);
        let selection = self.widget.selection();
        for class in CharacterClass::ALL {
            options = options.push(
                check_button(class.label(), selection.is_enabled(class))
                    .on_press(Message::ClassToggled(class)),
            );
        }

        container(options)
            .padding(15)
            .style(container_border_r5)
            .into()
    }
}

fn bold() -> Font {
    Font {
        weight: iced::font::Weight::Bold,
        ..Default::default()
    }
}
