use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{input::InputMsg, menu::MenuMsg, nav::NavMsg, system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::route::Route,
    presentation::config::{keybindings::key_event_to_string, Action, Mode},
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on screen and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Paste(text) => match state.mode() {
            Mode::Calculator => vec![Msg::Input(InputMsg::Paste(text))],
            Mode::Menu => vec![],
        },

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Ctrl-C always quits, even with a config that unbinds it
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![Msg::System(SystemMsg::Quit)];
    }

    let mode = state.mode();
    if let Some(action) = state.config.config.keybindings.action_for(mode, &key) {
        return translate_action_to_msg(action);
    }

    match mode {
        Mode::Calculator => translate_text_input(key),
        Mode::Menu => {
            log::debug!("no binding for <{}> in {mode:?}", key_event_to_string(&key));
            vec![]
        }
    }
}

/// Unbound printable keys are typed into the focused field
fn translate_text_input(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            vec![Msg::Input(InputMsg::Insert(c))]
        }
        _ => vec![],
    }
}

fn translate_action_to_msg(action: &Action) -> Vec<Msg> {
    let msg = match action {
        Action::Quit => Msg::System(SystemMsg::Quit),
        Action::Suspend => Msg::System(SystemMsg::Suspend),
        Action::Up => Msg::Menu(MenuMsg::SelectPrevious),
        Action::Down => Msg::Menu(MenuMsg::SelectNext),
        Action::Select => Msg::Menu(MenuMsg::Confirm),
        Action::Open(kind) => Msg::Nav(NavMsg::Navigate(Route::Calculator(*kind))),
        Action::Back => Msg::Nav(NavMsg::Back),
        Action::NextField => Msg::Input(InputMsg::NextField),
        Action::PrevField => Msg::Input(InputMsg::PrevField),
        Action::ClearField => Msg::Input(InputMsg::ClearField),
        Action::ClearAll => Msg::Input(InputMsg::ClearAll),
        Action::CursorLeft => Msg::Input(InputMsg::CursorLeft),
        Action::CursorRight => Msg::Input(InputMsg::CursorRight),
        Action::CursorHome => Msg::Input(InputMsg::CursorHome),
        Action::CursorEnd => Msg::Input(InputMsg::CursorEnd),
        Action::DeleteBackward => Msg::Input(InputMsg::DeleteBackward),
        Action::DeleteForward => Msg::Input(InputMsg::DeleteForward),
    };
    vec![msg]
}
