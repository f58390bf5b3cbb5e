// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with severity-colored accents, an expiry progress indicator,
//! and optional action/dismiss buttons.

use crate::config::Position;
use crate::notification::{Notification, NotificationId, Severity};
use crate::store::NotificationStore;
use iced::widget::{button, container, progress_bar, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Severity accent colors.
mod palette {
    use iced::Color;

    pub const SUCCESS: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const ERROR: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const INFO: Color = Color::from_rgb(0.392, 0.588, 1.0);
    pub const GRAY: Color = Color::from_rgb(0.4, 0.4, 0.4);
}

const TOAST_WIDTH: f32 = 340.0;
const TITLE_SIZE: f32 = 15.0;
const BODY_SIZE: f32 = 14.0;
const GLYPH_SIZE: f32 = 16.0;
const SPACING: f32 = 8.0;
const PADDING: f32 = 10.0;
const OVERLAY_PADDING: f32 = 16.0;

/// Messages emitted by the toast widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// User clicked the close affordance of a notification.
    Dismiss(NotificationId),
    /// User clicked a notification's action button.
    InvokeAction(NotificationId),
}

/// Routes a toast widget message into the store.
///
/// Invoking an action also dismisses its notification — the conventional
/// invoke-then-dismiss flow. Hosts that want the toast to survive its action
/// can match on [`Message`] themselves instead of calling this.
pub fn handle_message(store: &NotificationStore, message: &Message) {
    match message {
        Message::Dismiss(id) => {
            store.remove(*id);
        }
        Message::InvokeAction(id) => {
            store.invoke_action(*id);
            store.remove(*id);
        }
    }
}

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view(notification: &Notification) -> Element<'static, Message> {
        let severity = notification.severity();
        let accent_color = severity_color(severity);
        let id = notification.id();

        // Severity glyph with the accent color
        let glyph = Text::new(severity_glyph(severity))
            .size(GLYPH_SIZE)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        // Optional title and body
        let mut text_column = Column::new().spacing(SPACING / 4.0);
        if let Some(title) = notification.title() {
            text_column = text_column.push(
                Text::new(title.to_string())
                    .size(TITLE_SIZE)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.palette().text),
                    }),
            );
        }
        if let Some(message) = notification.message() {
            text_column = text_column.push(
                Text::new(message.to_string())
                    .size(BODY_SIZE)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.palette().text),
                    }),
            );
        }

        // Layout: [glyph] [title/message] [action?] [dismiss?]
        let mut content = Row::new()
            .spacing(SPACING)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(SPACING / 2.0))
            .push(
                Container::new(text_column)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        if let Some(action) = notification.action() {
            content = content.push(
                button(text(action.label().to_string()).size(BODY_SIZE))
                    .on_press(Message::InvokeAction(id))
                    .padding(SPACING / 2.0),
            );
        }

        if notification.dismissible() {
            content = content.push(
                button(text("×").size(GLYPH_SIZE))
                    .on_press(Message::Dismiss(id))
                    .padding(SPACING / 2.0)
                    .style(dismiss_button_style),
            );
        }

        // Persistent toasts have no expiry, so no progress indicator
        let mut card = Column::new().spacing(SPACING / 2.0).push(content);
        if !notification.is_persistent() {
            card = card.push(progress_bar(
                0.0..=100.0,
                notification.remaining_percent(),
            ));
        }

        Container::new(card)
            .width(Length::Fixed(TOAST_WIDTH))
            .padding(PADDING)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the toast overlay with every active notification.
    ///
    /// Stacks the store's queue (oldest first, top to bottom) at the given
    /// screen anchor.
    pub fn view_overlay(store: &NotificationStore, position: Position) -> Element<'static, Message> {
        let toasts: Vec<Element<'static, Message>> = store
            .list()
            .iter()
            .map(Self::view)
            .collect();

        let (align_x, align_y) = anchor(position);

        if toasts.is_empty() {
            // Return an empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(SPACING)
                .align_x(align_x);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(align_x)
                .align_y(align_y)
                .padding(OVERLAY_PADDING)
                .into()
        }
    }
}

/// Returns the accent color for the severity level.
fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => palette::SUCCESS,
        Severity::Error => palette::ERROR,
        Severity::Warning => palette::WARNING,
        Severity::Info => palette::INFO,
    }
}

/// Returns the glyph shown next to the message for the severity level.
fn severity_glyph(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "✓",
        Severity::Error => "✕",
        Severity::Warning => "!",
        Severity::Info => "i",
    }
}

/// Maps a screen anchor to container alignments.
fn anchor(position: Position) -> (alignment::Horizontal, alignment::Vertical) {
    match position {
        Position::TopLeft => (alignment::Horizontal::Left, alignment::Vertical::Top),
        Position::TopCenter => (alignment::Horizontal::Center, alignment::Vertical::Top),
        Position::TopRight => (alignment::Horizontal::Right, alignment::Vertical::Top),
        Position::BottomLeft => (alignment::Horizontal::Left, alignment::Vertical::Bottom),
        Position::BottomCenter => (alignment::Horizontal::Center, alignment::Vertical::Bottom),
        Position::BottomRight => (alignment::Horizontal::Right, alignment::Vertical::Bottom),
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: 2.0,
            radius: 6.0.into(),
        },
        shadow: iced::Shadow {
            color: Color {
                a: 0.25,
                ..Color::BLACK
            },
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: iced::Shadow::default(),
            snap: true,
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: 0.2,
                ..palette::GRAY
            })),
            text_color: base.text,
            border: iced::Border {
                radius: 4.0.into(),
                ..Default::default()
            },
            shadow: iced::Shadow::default(),
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::ToastSpec;
    use crate::scheduler::ManualScheduler;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS;
        let style = toast_container_style(&theme, accent);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            severity_color(Severity::Success),
            severity_color(Severity::Error),
            severity_color(Severity::Warning),
            severity_color(Severity::Info),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn severity_glyphs_are_defined() {
        assert_eq!(severity_glyph(Severity::Success), "✓");
        assert_eq!(severity_glyph(Severity::Error), "✕");
        assert_eq!(severity_glyph(Severity::Warning), "!");
        assert_eq!(severity_glyph(Severity::Info), "i");
    }

    #[test]
    fn anchors_cover_all_six_positions() {
        assert_eq!(
            anchor(Position::BottomRight),
            (alignment::Horizontal::Right, alignment::Vertical::Bottom)
        );
        assert_eq!(
            anchor(Position::TopCenter),
            (alignment::Horizontal::Center, alignment::Vertical::Top)
        );
        assert_eq!(
            anchor(Position::TopLeft),
            (alignment::Horizontal::Left, alignment::Vertical::Top)
        );
        assert_eq!(
            anchor(Position::BottomLeft),
            (alignment::Horizontal::Left, alignment::Vertical::Bottom)
        );
    }

    #[test]
    fn handle_message_dismisses() {
        let store = NotificationStore::new(5, Arc::new(ManualScheduler::new()));
        let id = store.add(ToastSpec {
            message: Some("bye".to_string()),
            duration: Some(Duration::ZERO),
            ..ToastSpec::default()
        });

        handle_message(&store, &Message::Dismiss(id));
        assert!(store.is_empty());
    }

    #[test]
    fn handle_message_invokes_action_then_dismisses() {
        use crate::notification::Action;
        use std::sync::atomic::{AtomicBool, Ordering};

        let store = NotificationStore::new(5, Arc::new(ManualScheduler::new()));
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);
        let id = store.add(ToastSpec {
            message: Some("undo?".to_string()),
            duration: Some(Duration::ZERO),
            action: Some(Action::new("Undo", move || {
                flag.store(true, Ordering::SeqCst);
            })),
            ..ToastSpec::default()
        });

        handle_message(&store, &Message::InvokeAction(id));
        assert!(fired.load(Ordering::SeqCst));
        assert!(store.is_empty());
    }
}
