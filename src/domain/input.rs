use serde::{Deserialize, Serialize};

use super::calculator::CalculatorKind;

/// Whether `c` can appear in a number typed into a field
pub fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}

/// Single-line text buffer holding raw operand text.
///
/// Only numeric characters are accepted, so the content is always ASCII and
/// the cursor is both a byte and a character offset.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputField {
    text: String,
    cursor: usize,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field pre-filled with the numeric characters of `text`, cursor at the end
    pub fn with_text(text: &str) -> Self {
        let mut field = Self::new();
        field.insert_str(text);
        field
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Inserts `c` at the cursor. Returns `false` if the character was rejected.
    pub fn insert_char(&mut self, c: char) -> bool {
        if !is_numeric_char(c) {
            return false;
        }
        self.text.insert(self.cursor, c);
        self.cursor += 1;
        true
    }

    /// Inserts the numeric characters of `s`, dropping the rest
    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars() {
            self.insert_char(c);
        }
    }

    pub fn delete_backward(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.text.remove(self.cursor);
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

/// Which field of an [`InputPair`] receives edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Focus {
    #[default]
    First,
    Second,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::First => Focus::Second,
            Focus::Second => Focus::First,
        }
    }
}

/// The two operands of a calculator screen
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InputPair {
    pub first: InputField,
    pub second: InputField,
    pub focus: Focus,
}

impl InputPair {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_texts(first: &str, second: &str) -> Self {
        Self {
            first: InputField::with_text(first),
            second: InputField::with_text(second),
            focus: Focus::First,
        }
    }

    pub fn focused_mut(&mut self) -> &mut InputField {
        match self.focus {
            Focus::First => &mut self.first,
            Focus::Second => &mut self.second,
        }
    }

    pub fn clear(&mut self) {
        self.first.clear();
        self.second.clear();
        self.focus = Focus::First;
    }

    /// Result of `kind` for the current texts; recomputed on every call
    pub fn result(&self, kind: CalculatorKind) -> Option<f64> {
        kind.evaluate(self.first.text(), self.second.text())
    }
}
