use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{
        cmd::TuiCommand,
        msg::{nav::NavMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::route::Route,
    infrastructure::{config::Config, tui},
    integration::{renderer::Renderer, runtime::ElmRuntime},
};

/// Drives the Elm runtime against a terminal: poll an event, translate and
/// update, execute the resulting terminal commands, redraw. Stops once the
/// state asks to quit or the event source is exhausted.
pub struct AppRunner {
    runtime: ElmRuntime,
    tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    renderer: Renderer,
}

impl AppRunner {
    pub fn runtime(&self) -> &ElmRuntime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut ElmRuntime {
        &mut self.runtime
    }

    /// Create a runner over any terminal, starting on `route`
    pub fn new(
        config: Config,
        route: Route,
        tui: Arc<Mutex<dyn tui::TuiLike + Send>>,
    ) -> Result<Self> {
        let initial_state = AppState::new_with_config(config);
        let mut runtime = ElmRuntime::new_with_executor(initial_state);
        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel();
        runtime.add_tui_sender(tui_cmd_tx)?;

        if route != Route::Menu {
            runtime.send_msg(Msg::Nav(NavMsg::Navigate(route)));
            runtime.process_all_messages();
        }

        Ok(Self {
            runtime,
            tui,
            tui_cmd_rx,
            renderer: Renderer::new(),
        })
    }

    /// Run the main loop until quit
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        log::info!("runner started on {}", self.runtime.state().route());
        self.render().await?;

        loop {
            let event = {
                let mut guard = self.tui.lock().await;
                guard.next().await
            };

            let should_render = match event {
                Some(tui::Event::Tick) => {
                    self.runtime.send_raw_msg(RawMsg::Tick);
                    false
                }
                Some(event) => {
                    if let Some(raw_msg) = Self::translate_event(event) {
                        self.runtime.send_raw_msg(raw_msg);
                    }
                    true
                }
                None => {
                    log::info!("event source closed");
                    self.runtime.send_raw_msg(RawMsg::Quit);
                    false
                }
            };

            self.update_cycle();
            self.apply_tui_commands().await?;

            if self.runtime.state().system.should_quit {
                break;
            }

            if should_render {
                self.render().await?;
            }
        }

        self.tui.lock().await.exit()?;
        log::info!("runner stopped on {}", self.runtime.state().route());
        Ok(())
    }

    /// Terminal events the core cares about; focus and mouse are dropped
    fn translate_event(event: tui::Event) -> Option<RawMsg> {
        match event {
            tui::Event::Quit | tui::Event::Closed => Some(RawMsg::Quit),
            tui::Event::Error => Some(RawMsg::Error("terminal event error".to_string())),
            tui::Event::Tick => Some(RawMsg::Tick),
            tui::Event::Render => Some(RawMsg::Render),
            tui::Event::Resize(w, h) => Some(RawMsg::Resize(w, h)),
            tui::Event::Key(key) => Some(RawMsg::Key(key)),
            tui::Event::Paste(text) => Some(RawMsg::Paste(text)),
            tui::Event::Init
            | tui::Event::FocusGained
            | tui::Event::FocusLost
            | tui::Event::Mouse(_) => None,
        }
    }

    fn update_cycle(&mut self) {
        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("ElmRuntime error: {e}");
            self.runtime
                .send_raw_msg(RawMsg::Error(format!("ElmRuntime error: {e}")));
        }
    }

    /// Execute terminal commands requested by the last update cycle
    async fn apply_tui_commands(&mut self) -> Result<()> {
        let tui = Arc::clone(&self.tui);
        while let Ok(cmd) = self.tui_cmd_rx.try_recv() {
            log::debug!("executing {cmd:?}");
            match cmd {
                TuiCommand::Resize { width, height } => {
                    tui.lock().await.resize(Rect::new(0, 0, width, height))?;
                }
                TuiCommand::Suspend => {
                    // returns once the process is continued
                    tui.lock().await.suspend()?;
                    self.runtime.send_raw_msg(RawMsg::Resume);
                    self.update_cycle();
                }
                TuiCommand::Resume => {
                    tui.lock().await.resume()?;
                }
            }
        }
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        self.renderer.render(&self.tui, self.runtime.state()).await
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{domain::calculator::CalculatorKind, infrastructure::tui::test::TestTui};

    fn key(code: KeyCode) -> tui::Event {
        tui::Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> tui::Event {
        tui::Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn runner_with(
        route: Route,
        events: Vec<tui::Event>,
    ) -> Result<(AppRunner, Arc<Mutex<TestTui>>)> {
        let test_tui = Arc::new(Mutex::new(TestTui::with_events(60, 20, events)?));
        let tui: Arc<Mutex<dyn tui::TuiLike + Send>> =
            Arc::<Mutex<TestTui>>::clone(&test_tui);
        let runner = AppRunner::new(Config::embedded()?, route, tui)?;
        Ok((runner, test_tui))
    }

    #[tokio::test]
    async fn test_starts_on_requested_route() -> Result<()> {
        let (runner, _) = runner_with(Route::Calculator(CalculatorKind::Margin), vec![])?;
        assert_eq!(
            runner.runtime().state().route(),
            Route::Calculator(CalculatorKind::Margin)
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_quit_key_stops_runner() -> Result<()> {
        let (mut runner, test_tui) =
            runner_with(Route::Menu, vec![key(KeyCode::Char('q')), key(KeyCode::Down)])?;
        runner.run().await?;

        assert!(runner.runtime().state().system.should_quit);
        // Down after quit is never processed
        assert_eq!(runner.runtime().state().menu.selected, 0);
        assert!(!test_tui.lock().await.is_entered());
        Ok(())
    }

    #[tokio::test]
    async fn test_exhausted_events_stop_runner() -> Result<()> {
        let (mut runner, test_tui) = runner_with(Route::Menu, vec![tui::Event::Init])?;
        runner.run().await?;

        assert!(runner.runtime().state().system.should_quit);
        // initial frame plus the Init event
        assert_eq!(test_tui.lock().await.draw_count(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_typed_inputs_render_result() -> Result<()> {
        let events = vec![
            key(KeyCode::Char('1')),
            key(KeyCode::Char('2')),
            key(KeyCode::Char('0')),
            key(KeyCode::Char('0')),
            key(KeyCode::Tab),
            key(KeyCode::Char('1')),
            key(KeyCode::Char('5')),
        ];
        let (mut runner, test_tui) = runner_with(Route::Menu, events)?;
        runner.run().await?;

        let guard = test_tui.lock().await;
        assert!(guard.contains("Percent Calculator"));
        assert!(guard.contains("Result: 30"));
        assert!(guard.contains("[percent]"));
        Ok(())
    }

    #[tokio::test]
    async fn test_suspend_resumes_terminal() -> Result<()> {
        let (mut runner, test_tui) = runner_with(Route::Menu, vec![ctrl('z')])?;
        runner.run().await?;

        let guard = test_tui.lock().await;
        assert_eq!(guard.suspend_count(), 1);
        assert_eq!(guard.resume_count(), 1);
        assert!(!runner.runtime().state().system.should_suspend);
        Ok(())
    }

    #[tokio::test]
    async fn test_resize_reaches_terminal() -> Result<()> {
        let (mut runner, test_tui) =
            runner_with(Route::Menu, vec![tui::Event::Resize(100, 30)])?;
        runner.run().await?;

        assert_eq!(test_tui.lock().await.lines().len(), 30);
        Ok(())
    }

    #[test]
    fn test_translate_event() {
        assert_eq!(AppRunner::translate_event(tui::Event::Closed), Some(RawMsg::Quit));
        assert_eq!(
            AppRunner::translate_event(tui::Event::Paste("5".into())),
            Some(RawMsg::Paste("5".into()))
        );
        assert_eq!(AppRunner::translate_event(tui::Event::FocusLost), None);
    }
}
