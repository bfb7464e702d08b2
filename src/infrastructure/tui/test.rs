use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;

use color_eyre::eyre::Result;
use futures::future;
use ratatui::backend::TestBackend;
use ratatui::prelude::*;

use crate::infrastructure::tui::{Event, Frame, TuiLike};

/// Test-oriented TUI implementation backed by ratatui::backend::TestBackend.
/// - enter/exit/suspend/resume only count calls (no raw mode / alternate screen).
/// - next() returns events from an internal queue, then `None` once drained.
/// - draw() renders into the test buffer and increments a counter.
pub struct TestTui {
    term: Terminal<TestBackend>,
    events: VecDeque<Event>,
    draws: usize,
    suspends: usize,
    resumes: usize,
    entered: bool,
}

impl TestTui {
    pub fn new(width: u16, height: u16) -> Result<Self> {
        let backend = TestBackend::new(width, height);
        let term = Terminal::new(backend)?;
        Ok(Self {
            term,
            events: VecDeque::new(),
            draws: 0,
            suspends: 0,
            resumes: 0,
            entered: false,
        })
    }

    pub fn with_events(
        width: u16,
        height: u16,
        events: impl IntoIterator<Item = Event>,
    ) -> Result<Self> {
        let mut this = Self::new(width, height)?;
        this.events.extend(events);
        Ok(this)
    }

    pub fn draw_count(&self) -> usize {
        self.draws
    }

    pub fn suspend_count(&self) -> usize {
        self.suspends
    }

    pub fn resume_count(&self) -> usize {
        self.resumes
    }

    pub fn is_entered(&self) -> bool {
        self.entered
    }

    /// Rendered screen, one trimmed string per row
    pub fn lines(&self) -> Vec<String> {
        let buffer = self.term.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width.max(1))
            .map(|row| {
                row.iter()
                    .map(|cell| cell.symbol())
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    /// Whether any rendered row contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }
}

impl TuiLike for TestTui {
    fn enter(&mut self) -> Result<()> {
        self.entered = true;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.entered = false;
        Ok(())
    }

    fn suspend(&mut self) -> Result<()> {
        self.suspends += 1;
        self.entered = false;
        Ok(())
    }

    fn resume(&mut self) -> Result<()> {
        self.resumes += 1;
        self.entered = true;
        Ok(())
    }

    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()> {
        self.term.draw(|frame| f(frame))?;
        self.draws += 1;
        Ok(())
    }

    fn resize(&mut self, area: Rect) -> Result<()> {
        self.term.backend_mut().resize(area.width, area.height);
        self.term.resize(area)?;
        Ok(())
    }

    fn next(&mut self) -> Pin<Box<dyn Future<Output = Option<Event>> + Send + '_>> {
        let ev = self.events.pop_front();
        Box::pin(future::ready(ev))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use ratatui::widgets::Paragraph;

    use super::*;

    #[tokio::test]
    async fn test_events_are_replayed_in_order() -> Result<()> {
        let mut tui = TestTui::with_events(10, 2, [Event::Tick, Event::Resize(20, 4)])?;
        assert_eq!(tui.next().await, Some(Event::Tick));
        assert_eq!(tui.next().await, Some(Event::Resize(20, 4)));
        assert_eq!(tui.next().await, None);
        Ok(())
    }

    #[test]
    fn test_draw_renders_into_buffer() -> Result<()> {
        let mut tui = TestTui::new(12, 2)?;
        tui.draw(&mut |frame| frame.render_widget(Paragraph::new("Result: 30"), frame.area()))?;

        assert_eq!(tui.draw_count(), 1);
        assert_eq!(tui.lines(), vec!["Result: 30".to_string(), String::new()]);
        assert!(tui.contains("30"));
        Ok(())
    }

    #[test]
    fn test_resize_changes_buffer() -> Result<()> {
        let mut tui = TestTui::new(10, 2)?;
        tui.resize(Rect::new(0, 0, 30, 5))?;
        tui.draw(&mut |_| {})?;
        assert_eq!(tui.lines().len(), 5);
        Ok(())
    }
}
