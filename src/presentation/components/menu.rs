//! Main menu component

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState, domain::calculator::CalculatorKind, presentation::config::Mode,
};

const TITLE: &str = "Percentage Calculator";

/// Numbered list of calculators with the current selection highlighted
#[derive(Debug, Clone, Default)]
pub struct MenuComponent;

impl MenuComponent {
    pub fn new() -> Self {
        Self
    }

    /// Menu lines in display order, e.g. `"4. Tip Calculator"`
    pub fn items() -> Vec<String> {
        CalculatorKind::all()
            .map(|kind| format!("{}. {}", kind.index() + 1, kind.labels().menu))
            .collect()
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let style = |key: &str| styles.get_or_default(Mode::Menu, key);

        let block = Block::bordered()
            .title(Span::styled(TITLE, style("title")))
            .padding(Padding::horizontal(1));

        let list = List::new(Self::items())
            .block(block)
            .style(style("item"))
            .highlight_style(style("selected"))
            .highlight_symbol("> ");

        let mut list_state = ListState::default().with_selected(Some(state.menu.selected));
        frame.render_stateful_widget(list, area, &mut list_state);
    }
}
