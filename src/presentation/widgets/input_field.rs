use ratatui::{prelude::*, widgets::*};
use unicode_width::UnicodeWidthStr;

use crate::domain::input::InputField;

/// Labelled, bordered single-line text field.
/// The text scrolls horizontally so the cursor always stays visible.
pub struct InputFieldWidget<'a> {
    label: &'a str,
    field: &'a InputField,
    focused: bool,
    label_style: Style,
    text_style: Style,
    focus_style: Style,
}

impl<'a> InputFieldWidget<'a> {
    pub fn new(label: &'a str, field: &'a InputField) -> Self {
        Self {
            label,
            field,
            focused: false,
            label_style: Style::default(),
            text_style: Style::default(),
            focus_style: Style::default().add_modifier(Modifier::BOLD),
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }

    pub fn text_style(mut self, style: Style) -> Self {
        self.text_style = style;
        self
    }

    pub fn focus_style(mut self, style: Style) -> Self {
        self.focus_style = style;
        self
    }

    /// Display column of the cursor, measured from the start of the text
    fn cursor_column(&self) -> u16 {
        let before = &self.field.text()[..self.field.cursor()];
        u16::try_from(before.width()).unwrap_or(u16::MAX)
    }

    /// Columns hidden on the left so the cursor fits in `width`
    fn scroll_offset(&self, width: u16) -> u16 {
        self.cursor_column()
            .saturating_sub(width.saturating_sub(1))
    }

    /// Terminal position of the cursor when the field is focused and `area`
    /// can hold at least one column of text
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.focused {
            return None;
        }
        let inner = Block::bordered().inner(area);
        if inner.width == 0 || inner.height == 0 {
            return None;
        }
        let column = self.cursor_column() - self.scroll_offset(inner.width);
        Some(Position::new(inner.x + column, inner.y))
    }
}

impl<'a> Widget for InputFieldWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let border_style = if self.focused {
            self.focus_style
        } else {
            self.text_style
        };
        let block = Block::bordered()
            .border_style(border_style)
            .title(Span::styled(self.label, self.label_style));
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.field.text())
            .style(self.text_style)
            .scroll((0, self.scroll_offset(inner.width)))
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn render(widget: InputFieldWidget<'_>, width: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, 3);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_renders_label_and_text() {
        let field = InputField::with_text("123.5");
        let lines = render(InputFieldWidget::new("Amount", &field), 16);

        assert!(lines[0].contains("Amount"));
        assert_eq!(lines[1], "│123.5         │");
    }

    #[test]
    fn test_long_text_scrolls_to_cursor() {
        let field = InputField::with_text("1234567890");
        let lines = render(InputFieldWidget::new("Total", &field).focused(true), 8);

        // six visible columns, the last one reserved for the cursor
        assert_eq!(lines[1], "│67890 │");
    }

    #[test]
    fn test_cursor_position_only_when_focused() {
        let mut field = InputField::with_text("42");
        let area = Rect::new(2, 5, 20, 3);

        assert_eq!(InputFieldWidget::new("Part", &field).cursor_position(area), None);
        assert_eq!(
            InputFieldWidget::new("Part", &field)
                .focused(true)
                .cursor_position(area),
            Some(Position::new(5, 6))
        );

        field.move_home();
        assert_eq!(
            InputFieldWidget::new("Part", &field)
                .focused(true)
                .cursor_position(area),
            Some(Position::new(3, 6))
        );
    }

    #[test]
    fn test_cursor_position_stays_inside_narrow_field() {
        let field = InputField::with_text("1234567890");
        let area = Rect::new(0, 0, 8, 3);
        assert_eq!(
            InputFieldWidget::new("Total", &field)
                .focused(true)
                .cursor_position(area),
            Some(Position::new(6, 1))
        );
    }
}
