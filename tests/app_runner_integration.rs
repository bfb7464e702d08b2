use std::sync::Arc;

use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use tokio::sync::Mutex;

use pctui::{
    domain::{calculator::CalculatorKind, route::Route},
    infrastructure::{
        config::Config,
        tui::{test::TestTui, Event, TuiLike},
    },
    integration::app_runner::AppRunner,
};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn typed(text: &str) -> Vec<Event> {
    text.chars().map(|c| key(KeyCode::Char(c))).collect()
}

async fn run_script(
    route: Route,
    events: Vec<Event>,
) -> Result<(AppRunner, Arc<Mutex<TestTui>>)> {
    let test_tui = Arc::new(Mutex::new(TestTui::with_events(80, 24, events)?));
    let tui: Arc<Mutex<dyn TuiLike + Send>> = Arc::<Mutex<TestTui>>::clone(&test_tui);
    let mut runner = AppRunner::new(Config::embedded()?, route, tui)?;
    runner.run().await?;
    Ok((runner, test_tui))
}

#[tokio::test]
async fn test_tip_flow_from_menu() -> Result<()> {
    let mut events = vec![
        key(KeyCode::Down),
        key(KeyCode::Down),
        key(KeyCode::Down),
        key(KeyCode::Enter),
    ];
    events.extend(typed("50"));
    events.push(key(KeyCode::Tab));
    events.extend(typed("20"));

    let (runner, tui) = run_script(Route::Menu, events).await?;

    let state = runner.runtime().state();
    assert_eq!(state.route(), Route::Calculator(CalculatorKind::Tip));
    let tui = tui.lock().await;
    assert!(tui.contains("Tip Calculator"));
    assert!(tui.contains("Amount"));
    assert!(tui.contains("Tip %"));
    assert!(tui.contains("Total with Tip: 60"));
    Ok(())
}

#[tokio::test]
async fn test_escape_discards_inputs() -> Result<()> {
    let mut events = typed("4");
    events.extend(typed("50"));
    events.push(key(KeyCode::Tab));
    events.extend(typed("20"));
    events.push(key(KeyCode::Esc));
    events.push(key(KeyCode::Enter));

    let (runner, tui) = run_script(Route::Menu, events).await?;

    let calculator = runner.runtime().state().calculator().cloned();
    assert_eq!(calculator.map(|c| c.inputs.first.is_empty()), Some(true));
    assert!(!tui.lock().await.contains("Total with Tip"));
    Ok(())
}

#[tokio::test]
async fn test_absent_result_renders_nothing() -> Result<()> {
    let mut events = typed("5");
    events.push(key(KeyCode::Tab));
    events.extend(typed("100"));

    let (_, tui) = run_script(Route::Calculator(CalculatorKind::Margin), events).await?;

    let tui = tui.lock().await;
    assert!(tui.contains("Percentage Margin"));
    assert!(!tui.contains("Selling Price"));
    assert!(!tui.contains("Error"));
    Ok(())
}

#[tokio::test]
async fn test_paste_fills_focused_field() -> Result<()> {
    let events = vec![
        Event::Paste(" 25 ".to_string()),
        key(KeyCode::Tab),
        Event::Paste("200".to_string()),
    ];

    let (_, tui) = run_script(Route::Calculator(CalculatorKind::WhatPercentOf), events).await?;

    assert!(tui.lock().await.contains("Percentage: 12.5 %"));
    Ok(())
}

#[tokio::test]
async fn test_ctrl_c_quits_from_calculator() -> Result<()> {
    let events = vec![
        Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        key(KeyCode::Char('9')),
    ];

    let (runner, tui) = run_script(Route::Calculator(CalculatorKind::Increase), events).await?;

    let state = runner.runtime().state();
    assert!(state.system.should_quit);
    assert_eq!(state.calculator().map(|c| c.inputs.first.text().to_string()), Some(String::new()));
    assert!(!tui.lock().await.is_entered());
    Ok(())
}
