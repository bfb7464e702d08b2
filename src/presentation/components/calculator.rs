//! Calculator screen component
//!
//! Renders the title, both operand fields and the result line of the open
//! calculator. The result is recomputed from the inputs on every frame and the
//! line is left blank while it is absent.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{calculator::CalculatorState, AppState},
    domain::input::Focus,
    presentation::{config::Mode, widgets::InputFieldWidget},
};

#[derive(Debug, Clone, Default)]
pub struct CalculatorComponent;

impl CalculatorComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(
        &self,
        state: &AppState,
        calculator: &CalculatorState,
        frame: &mut Frame,
        area: Rect,
    ) {
        let styles = &state.config.config.styles;
        let style = |key: &str| styles.get_or_default(Mode::Calculator, key);
        let labels = calculator.kind.labels();

        let block = Block::bordered()
            .title(Span::styled(labels.title, style("title")))
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [first_area, second_area, _, result_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        let inputs = &calculator.inputs;
        let fields = [
            (labels.first, &inputs.first, Focus::First, first_area),
            (labels.second, &inputs.second, Focus::Second, second_area),
        ];
        for (label, field, focus, field_area) in fields {
            let widget = InputFieldWidget::new(label, field)
                .focused(inputs.focus == focus)
                .label_style(style("label"))
                .text_style(style("field"))
                .focus_style(style("focused"));
            if let Some(position) = widget.cursor_position(field_area) {
                frame.set_cursor_position(position);
            }
            frame.render_widget(widget, field_area);
        }

        if let Some(line) = calculator.result_line() {
            let result = Paragraph::new(line).style(style("result"));
            frame.render_widget(result, result_area);
        }
    }
}
