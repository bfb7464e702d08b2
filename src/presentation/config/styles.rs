use std::collections::HashMap;

use derive_deref::{Deref, DerefMut};
use ratatui::style::{Color, Modifier, Style};
use serde::{de::Deserializer, Deserialize};

use super::keybindings::Mode;

#[derive(Clone, Debug, Default, Deref, DerefMut)]
pub struct Styles(pub HashMap<Mode, HashMap<String, Style>>);

impl Styles {
    /// Style registered under `key` for `mode`, or the default style
    pub fn get_or_default(&self, mode: Mode, key: &str) -> Style {
        self.0
            .get(&mode)
            .and_then(|styles| styles.get(key))
            .copied()
            .unwrap_or_default()
    }
}

impl<'de> Deserialize<'de> for Styles {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<Mode, HashMap<String, String>>::deserialize(deserializer)?;

        let styles = parsed_map
            .into_iter()
            .map(|(mode, inner_map)| {
                let converted_inner_map = inner_map
                    .into_iter()
                    .map(|(str, style)| (str, parse_style(&style)))
                    .collect();
                (mode, converted_inner_map)
            })
            .collect();

        Ok(Styles(styles))
    }
}

/// Parses strings like `"bold yellow on black"`. Unknown words are ignored.
pub fn parse_style(line: &str) -> Style {
    let words: Vec<&str> = line.split_whitespace().collect();
    let split = words
        .iter()
        .position(|word| word.eq_ignore_ascii_case("on"))
        .unwrap_or(words.len());
    let (foreground, background) = words.split_at(split);

    let mut style = Style::default();
    for word in foreground {
        if let Some(modifier) = parse_modifier(word) {
            style = style.add_modifier(modifier);
        } else if let Ok(color) = word.parse::<Color>() {
            style = style.fg(color);
        }
    }
    if let Some(color) = background
        .get(1)
        .and_then(|word| word.parse::<Color>().ok())
    {
        style = style.bg(color);
    }
    style
}

fn parse_modifier(word: &str) -> Option<Modifier> {
    match word.to_lowercase().as_str() {
        "bold" => Some(Modifier::BOLD),
        "dim" => Some(Modifier::DIM),
        "italic" => Some(Modifier::ITALIC),
        "underline" | "underlined" => Some(Modifier::UNDERLINED),
        "reversed" => Some(Modifier::REVERSED),
        "blink" => Some(Modifier::SLOW_BLINK),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_style_default() {
        assert_eq!(parse_style(""), Style::default());
    }

    #[test]
    fn test_parse_style_foreground() {
        assert_eq!(parse_style("red"), Style::default().fg(Color::Red));
    }

    #[test]
    fn test_parse_style_background() {
        assert_eq!(
            parse_style("on blue"),
            Style::default().bg(Color::Blue)
        );
    }

    #[test]
    fn test_parse_style_modifiers() {
        assert_eq!(
            parse_style("bold underline black on yellow"),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        );
    }

    #[test]
    fn test_parse_style_hex() {
        assert_eq!(
            parse_style("#ff9800"),
            Style::default().fg(Color::Rgb(0xff, 0x98, 0x00))
        );
    }

    #[test]
    fn test_parse_style_on_inside_word() {
        assert_eq!(
            parse_style("bold #ff0000 lemon yellow"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        );
    }

    #[test]
    fn test_parse_style_on_is_case_insensitive() {
        assert_eq!(
            parse_style("white ON red"),
            Style::default().fg(Color::White).bg(Color::Red)
        );
    }

    #[test]
    fn test_parse_style_non_ascii_words() {
        assert_eq!(parse_style("İİİİ on é"), Style::default());
        assert_eq!(
            parse_style("İstanbul green on blue"),
            Style::default().fg(Color::Green).bg(Color::Blue)
        );
    }

    #[test]
    fn test_get_or_default() {
        let mut styles = Styles::default();
        styles
            .entry(Mode::Menu)
            .or_default()
            .insert("title".to_string(), parse_style("bold"));

        assert_eq!(
            styles.get_or_default(Mode::Menu, "title"),
            Style::default().add_modifier(Modifier::BOLD)
        );
        assert_eq!(
            styles.get_or_default(Mode::Calculator, "title"),
            Style::default()
        );
    }
}
