//! The password widget state machine.
//!
//! [`PasswordWidget`] owns every piece of mutable state the form has: the
//! control values, the displayed password, the strength meter and the
//! notification. UI events come in as method calls; the view reads the
//! result back through the accessors. Side effects the widget cannot perform
//! itself (clipboard writes, hide timers) are returned to the caller.

use log::{debug, error, info, warn};
use rand::Rng;

use crate::error::{Result, WidgetError};
use crate::notification::{
    Notification, NotificationKind, NotificationPresenter, NotificationTicket, MSG_CHOOSE_CLASS,
    MSG_COPIED, MSG_COPY_FAILED,
};
use crate::passgen::{
    generate_password, CharacterClass, CharacterClassSelection, GeneratedPassword, LengthRange,
};
use crate::settings::WidgetSettings;
use crate::strength::StrengthMeter;

pub const PLACEHOLDER_DISABLED: &str = "Select at least one character type";
pub const PLACEHOLDER_IDLE: &str = "Press the button to generate";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    /// No character class selected.
    Disabled,
    Idle,
    /// A clipboard write has been issued and not yet reported back.
    PendingCopy,
}

pub struct PasswordWidget<R> {
    selection: CharacterClassSelection,
    range: LengthRange,
    length: usize,
    length_label: usize,
    password: Option<GeneratedPassword>,
    meter: StrengthMeter,
    notifications: NotificationPresenter,
    pending_copies: usize,
    rng: R,
}

impl<R: Rng> PasswordWidget<R> {
    /// Builds the widget from stored settings and generates the first
    /// password when a class is preselected.
    pub fn new(settings: &WidgetSettings, rng: R) -> Self {
        let range = LengthRange::default();
        let length = range.clamp(settings.length);
        let mut widget = Self {
            selection: settings.selection,
            range,
            length,
            length_label: length,
            password: None,
            meter: StrengthMeter::unset(),
            notifications: NotificationPresenter::default(),
            pending_copies: 0,
            rng,
        };

        if widget.selection.has_valid_options() {
            widget.regenerate();
        }
        info!("Password widget ready in state {:?}", widget.state());

        widget
    }

    pub fn state(&self) -> WidgetState {
        if !self.selection.has_valid_options() {
            WidgetState::Disabled
        } else if self.pending_copies > 0 {
            WidgetState::PendingCopy
        } else {
            WidgetState::Idle
        }
    }

    /// Current checkbox and committed slider values.
    pub fn read_config(&self) -> (CharacterClassSelection, usize) {
        (self.selection, self.length)
    }

    pub fn settings(&self) -> WidgetSettings {
        WidgetSettings {
            length: self.length,
            selection: self.selection,
        }
    }

    pub fn toggle_class(&mut self, class: CharacterClass, enabled: bool) {
        self.selection.set(class, enabled);
        debug!("{:?} set to {}", class, enabled);

        if self.selection.has_valid_options() {
            self.regenerate();
        } else {
            self.clear();
        }
    }

    /// Slider is being dragged: only the label follows.
    pub fn length_input(&mut self, length: usize) {
        self.length_label = self.range.clamp(length);
    }

    /// Slider value committed.
    pub fn length_committed(&mut self, length: usize) {
        self.length = self.range.clamp(length);
        self.length_label = self.length;

        if self.selection.has_valid_options() {
            self.regenerate();
        }
    }

    /// Generate button. A warning notification is returned when disabled.
    pub fn generate_clicked(&mut self) -> Option<NotificationTicket> {
        if self.state() == WidgetState::Disabled {
            warn!("Generate requested with no character class selected");
            return Some(self.notifications.show(NotificationKind::Warning, MSG_CHOOSE_CLASS));
        }
        self.regenerate();
        None
    }

    /// Copy button or a click on the password field. Returns the text the
    /// caller should write to the clipboard, if any.
    pub fn copy_requested(&mut self) -> Option<String> {
        if self.state() == WidgetState::Disabled {
            return None;
        }
        let text = self.password.as_ref().filter(|p| !p.is_empty())?.to_string();
        self.pending_copies += 1;
        Some(text)
    }

    /// Reports the outcome of a write issued after [`copy_requested`](Self::copy_requested).
    pub fn copy_finished(&mut self, result: Result<()>) -> NotificationTicket {
        self.pending_copies = self.pending_copies.saturating_sub(1);
        match result {
            Ok(()) => {
                info!("Password copied to clipboard");
                self.notifications.show(NotificationKind::Success, MSG_COPIED)
            }
            Err(e) => {
                error!("Failed to copy password: {}", e);
                self.notifications.show(NotificationKind::Error, MSG_COPY_FAILED)
            }
        }
    }

    pub fn notification_expired(&mut self, id: u64) {
        if !self.notifications.expire(id) {
            debug!("Ignoring stale notification timer {}", id);
        }
    }

    fn regenerate(&mut self) {
        match generate_password(&self.selection, self.length, &mut self.rng) {
            Ok(password) => {
                self.meter = StrengthMeter::for_password(password.as_str());
                debug!(
                    "Generated {} character password, {}",
                    password.len(),
                    self.meter.label
                );
                self.password = Some(password);
            }
            Err(WidgetError::NoCharacterClassSelected) => self.clear(),
            Err(e) => {
                error!("Password generation failed: {}", e);
                self.clear();
            }
        }
    }

    fn clear(&mut self) {
        self.password = None;
        self.meter = StrengthMeter::unset();
    }

    pub fn selection(&self) -> &CharacterClassSelection {
        &self.selection
    }

    pub fn length_range(&self) -> LengthRange {
        self.range
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn length_label(&self) -> usize {
        self.length_label
    }

    /// Text of the password field, empty when none is displayed.
    pub fn password(&self) -> &str {
        self.password.as_ref().map(|p| p.as_str()).unwrap_or("")
    }

    pub fn placeholder(&self) -> &'static str {
        if self.state() == WidgetState::Disabled {
            PLACEHOLDER_DISABLED
        } else {
            PLACEHOLDER_IDLE
        }
    }

    pub fn meter(&self) -> &StrengthMeter {
        &self.meter
    }

    pub fn copy_enabled(&self) -> bool {
        self.state() != WidgetState::Disabled && !self.password().is_empty()
    }

    /// The generate button stays clickable when disabled so it can warn.
    pub fn generate_dimmed(&self) -> bool {
        self.state() == WidgetState::Disabled
    }

    pub fn notification(&self) -> Option<&Notification> {
        self.notifications.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardWriter;
    use crate::passgen::tests::ZeroRng;
    use crate::passgen::{LOWERCASE, NUMBERS, SYMBOLS, UPPERCASE};
    use crate::strength::StrengthTier;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingClipboard {
        written: Mutex<Vec<String>>,
    }

    impl ClipboardWriter for RecordingClipboard {
        fn write(&self, text: &str) -> Result<()> {
            self.written.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    struct BrokenClipboard;

    impl ClipboardWriter for BrokenClipboard {
        fn write(&self, _text: &str) -> Result<()> {
            Err(WidgetError::ClipboardWriteFailed("no display".into()))
        }
    }

    fn widget_with(selection: CharacterClassSelection, length: usize) -> PasswordWidget<StdRng> {
        let settings = WidgetSettings { length, selection };
        PasswordWidget::new(&settings, StdRng::seed_from_u64(2024))
    }

    fn disabled_widget() -> PasswordWidget<StdRng> {
        widget_with(CharacterClassSelection::none(), 16)
    }

    #[test]
    fn test_initial_state_with_selection() {
        let widget = widget_with(CharacterClassSelection::default(), 16);
        assert_eq!(widget.state(), WidgetState::Idle);
        assert_eq!(widget.password().chars().count(), 16);
        assert_eq!(widget.placeholder(), PLACEHOLDER_IDLE);
        assert!(widget.copy_enabled());
        assert!(!widget.generate_dimmed());
        assert!(widget.meter().tier.is_some());
    }

    #[test]
    fn test_initial_state_without_selection() {
        let widget = disabled_widget();
        assert_eq!(widget.state(), WidgetState::Disabled);
        assert_eq!(widget.password(), "");
        assert_eq!(widget.placeholder(), PLACEHOLDER_DISABLED);
        assert_eq!(widget.meter(), &StrengthMeter::unset());
        assert!(!widget.copy_enabled());
        assert!(widget.generate_dimmed());
    }

    #[test]
    fn test_stored_length_is_clamped() {
        let widget = widget_with(CharacterClassSelection::default(), 500);
        assert_eq!(widget.length(), LengthRange::MAX_LENGTH);
        assert_eq!(widget.password().chars().count(), LengthRange::MAX_LENGTH);
    }

    #[test]
    fn test_read_config() {
        let mut selection = CharacterClassSelection::none();
        selection.numbers = true;
        let widget = widget_with(selection, 9);
        assert_eq!(widget.read_config(), (selection, 9));
    }

    #[test]
    fn test_lowercase_only_length_ten_is_weak() {
        let mut selection = CharacterClassSelection::none();
        selection.lowercase = true;
        let widget = widget_with(selection, 10);

        assert_eq!(widget.password().chars().count(), 10);
        assert!(widget.password().chars().all(|c| LOWERCASE.contains(c)));
        assert_eq!(widget.meter().tier, Some(StrengthTier::Weak));
    }

    #[test]
    fn test_all_classes_length_sixteen() {
        let has_every_class = |password: &str| {
            [UPPERCASE, LOWERCASE, NUMBERS, SYMBOLS]
                .iter()
                .all(|set| password.chars().any(|c| set.contains(c)))
        };

        // Most seeds cover all four classes in 16 draws; take the first one that does.
        let widget = (0..200)
            .map(|seed| {
                let settings = WidgetSettings {
                    length: 16,
                    selection: CharacterClassSelection::default(),
                };
                PasswordWidget::new(&settings, StdRng::seed_from_u64(seed))
            })
            .find(|widget| has_every_class(widget.password()))
            .expect("no seed produced every character class");

        assert_eq!(widget.password().chars().count(), 16);
        assert_eq!(crate::strength::score(widget.password()), 7);
        assert_eq!(widget.meter().tier, Some(StrengthTier::Strong));
        assert_eq!(widget.meter(), &StrengthMeter::for_password(widget.password()));
    }

    #[test]
    fn test_unchecking_every_class_disables() {
        let mut widget = widget_with(CharacterClassSelection::default(), 12);
        for class in CharacterClass::ALL {
            widget.toggle_class(class, false);
        }
        assert_eq!(widget.state(), WidgetState::Disabled);
        assert_eq!(widget.password(), "");
        assert_eq!(widget.meter().tier, None);
    }

    #[test]
    fn test_checking_a_class_regenerates() {
        let mut widget = disabled_widget();
        widget.toggle_class(CharacterClass::Numbers, true);
        assert_eq!(widget.state(), WidgetState::Idle);
        assert_eq!(widget.password().chars().count(), 16);
        assert!(widget.password().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_toggle_produces_new_password() {
        let settings = WidgetSettings {
            length: 8,
            selection: CharacterClassSelection::default(),
        };
        let mut widget = PasswordWidget::new(&settings, ZeroRng);
        assert_eq!(widget.password(), "AAAAAAAA");

        widget.toggle_class(CharacterClass::Uppercase, false);
        assert_eq!(widget.password(), "aaaaaaaa");
    }

    #[test]
    fn test_length_input_updates_label_only() {
        let mut widget = widget_with(CharacterClassSelection::default(), 16);
        let before = widget.password().to_string();

        widget.length_input(24);
        assert_eq!(widget.length_label(), 24);
        assert_eq!(widget.length(), 16);
        assert_eq!(widget.password(), before);
    }

    #[test]
    fn test_length_commit_regenerates() {
        let mut widget = widget_with(CharacterClassSelection::default(), 16);
        widget.length_input(24);
        widget.length_committed(24);
        assert_eq!(widget.length(), 24);
        assert_eq!(widget.length_label(), 24);
        assert_eq!(widget.password().chars().count(), 24);
    }

    #[test]
    fn test_length_commit_while_disabled_keeps_field_empty() {
        let mut widget = disabled_widget();
        widget.length_committed(8);
        assert_eq!(widget.length(), 8);
        assert_eq!(widget.password(), "");
    }

    #[test]
    fn test_generate_when_disabled_warns() {
        let mut widget = disabled_widget();
        let ticket = widget.generate_clicked().expect("warning expected");
        assert_eq!(widget.password(), "");
        assert_eq!(widget.state(), WidgetState::Disabled);

        let notification = widget.notification().unwrap();
        assert_eq!(notification.id, ticket.id);
        assert_eq!(notification.kind, NotificationKind::Warning);
        assert_eq!(notification.message, MSG_CHOOSE_CLASS);
    }

    #[test]
    fn test_generate_replaces_password() {
        let mut widget = widget_with(CharacterClassSelection::default(), 32);
        let before = widget.password().to_string();
        assert!(widget.generate_clicked().is_none());
        assert_eq!(widget.password().chars().count(), 32);
        assert_ne!(widget.password(), before);
        assert!(widget.notification().is_none());
    }

    #[test]
    fn test_copy_is_noop_when_disabled() {
        let mut widget = disabled_widget();
        assert_eq!(widget.copy_requested(), None);
        assert_eq!(widget.state(), WidgetState::Disabled);
        assert!(widget.notification().is_none());
    }

    #[test]
    fn test_copy_success() {
        let clipboard = RecordingClipboard::default();
        let mut widget = widget_with(CharacterClassSelection::default(), 12);
        let password = widget.password().to_string();

        let text = widget.copy_requested().unwrap();
        assert_eq!(text, password);
        assert_eq!(widget.state(), WidgetState::PendingCopy);

        widget.copy_finished(clipboard.write(&text));
        assert_eq!(widget.state(), WidgetState::Idle);
        assert_eq!(clipboard.written.lock().unwrap().as_slice(), &[password]);
        let notification = widget.notification().unwrap();
        assert_eq!(notification.kind, NotificationKind::Success);
        assert_eq!(notification.message, MSG_COPIED);
    }

    #[test]
    fn test_copy_failure_keeps_password() {
        let mut widget = widget_with(CharacterClassSelection::default(), 12);
        let password = widget.password().to_string();

        let text = widget.copy_requested().unwrap();
        let ticket = widget.copy_finished(BrokenClipboard.write(&text));

        assert_eq!(widget.password(), password);
        assert_eq!(widget.state(), WidgetState::Idle);
        let notification = widget.notification().unwrap();
        assert_eq!(notification.id, ticket.id);
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.message, MSG_COPY_FAILED);
    }

    #[test]
    fn test_copy_outcome_after_disabling() {
        let mut widget = widget_with(CharacterClassSelection::default(), 12);
        let text = widget.copy_requested().unwrap();
        for class in CharacterClass::ALL {
            widget.toggle_class(class, false);
        }
        widget.copy_finished(BrokenClipboard.write(&text));
        assert_eq!(widget.state(), WidgetState::Disabled);
        assert_eq!(widget.password(), "");
    }

    #[test]
    fn test_notification_expiry() {
        let mut widget = disabled_widget();
        let first = widget.generate_clicked().unwrap();
        let second = widget.generate_clicked().unwrap();

        widget.notification_expired(first.id);
        assert!(widget.notification().is_some());

        widget.notification_expired(second.id);
        assert!(widget.notification().is_none());
    }

    #[test]
    fn test_settings_reflect_controls() {
        let mut widget = widget_with(CharacterClassSelection::default(), 16);
        widget.toggle_class(CharacterClass::Symbols, false);
        widget.length_committed(20);

        let settings = widget.settings();
        assert_eq!(settings.length, 20);
        assert!(!settings.selection.symbols);
        assert!(settings.selection.uppercase);
    }
}
