//! # Passwidget - Password Generator Widget
//!
//! Passwidget is the model behind a small password generator form: a length
//! slider, four character-class checkboxes, a generate button, a strength bar
//! and a copy button.
//!
//! ## Overview
//!
//! - [`passgen`] builds the alphabet from the selected classes and samples it
//!   uniformly with any [`rand::Rng`]
//! - [`strength`] scores a password from 0 to 7 and maps it to a tier
//! - [`controller::PasswordWidget`] is the state machine the UI drives
//!
//! The library has no GUI dependency; the `passwidget` binary renders it with
//! iced.
//!
//! ## Quick Start Example
//!
//! ```
//! use passwidget::{PasswordWidget, WidgetSettings, WidgetState};
//! use passwidget::passgen::CharacterClass;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut widget = PasswordWidget::new(&WidgetSettings::default(), StdRng::seed_from_u64(1));
//! assert_eq!(widget.state(), WidgetState::Idle);
//! assert_eq!(widget.password().len(), 16);
//!
//! // Everything off: the field empties and generate only warns
//! for class in CharacterClass::ALL {
//!     widget.toggle_class(class, false);
//! }
//! assert_eq!(widget.state(), WidgetState::Disabled);
//! assert!(widget.generate_clicked().is_some());
//! assert_eq!(widget.password(), "");
//! ```

pub mod clipboard;
pub mod controller;
pub mod error;
pub mod notification;
pub mod passgen;
pub mod settings;
pub mod strength;

pub use clipboard::{ClipboardWriter, SystemClipboard};
pub use controller::{PasswordWidget, WidgetState};
pub use error::{Result, WidgetError};
pub use notification::{Notification, NotificationKind, NotificationTicket};
pub use passgen::{generate_password, CharacterClass, CharacterClassSelection, GeneratedPassword};
pub use settings::WidgetSettings;
pub use strength::{score, StrengthMeter, StrengthTier};
