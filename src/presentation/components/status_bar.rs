//! Status bar component
//!
//! Displays the current route, the transient status message and key hints on
//! the last line of the screen.

use ratatui::{prelude::*, widgets::*};

use crate::{core::state::AppState, presentation::config::Mode};

/// Status bar component
#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    /// Key hints for the given mode
    pub fn hints(mode: Mode) -> &'static str {
        match mode {
            Mode::Menu => "↑/↓ select · Enter open · 1-7 jump · q quit",
            Mode::Calculator => "Tab next field · Ctrl-U clear · Esc back · Ctrl-C quit",
        }
    }

    /// Left-hand text: `[route]` followed by the status message, if any
    pub fn message(state: &AppState) -> String {
        let route = state.route();
        match &state.system.status_message {
            Some(message) => format!("[{route}] {message}"),
            None => format!("[{route}]"),
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let mode = state.mode();
        let hint_style = state.config.config.styles.get_or_default(mode, "hint");
        let message = Span::raw(Self::message(state));
        let hints = Span::styled(Self::hints(mode), hint_style);

        frame.render_widget(Clear, area);

        // hints give way to the message on narrow terminals
        let hints_width = hints.width() as u16;
        if message.width() as u16 + 1 + hints_width > area.width {
            frame.render_widget(Paragraph::new(message), area);
            return;
        }

        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(hints_width)]).areas(area);
        frame.render_widget(Paragraph::new(message), left);
        frame.render_widget(Paragraph::new(hints), right);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        core::state::{calculator::CalculatorState, Screen},
        domain::calculator::CalculatorKind,
    };

    #[test]
    fn test_message_on_menu() {
        assert_eq!(StatusBarComponent::message(&AppState::default()), "[main]");
    }

    #[test]
    fn test_message_with_status() {
        let mut state = AppState {
            screen: Screen::Calculator(CalculatorState::new(CalculatorKind::Tip)),
            ..Default::default()
        };
        state.system.status_message = Some("Opened Tip Calculator".into());

        assert_eq!(
            StatusBarComponent::message(&state),
            "[tip] Opened Tip Calculator"
        );
    }

    #[test]
    fn test_hints_differ_per_mode() {
        assert!(StatusBarComponent::hints(Mode::Menu).contains("q quit"));
        assert!(StatusBarComponent::hints(Mode::Calculator).contains("Esc back"));
    }
}
