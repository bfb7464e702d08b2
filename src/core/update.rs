use crate::{
    core::cmd::Cmd,
    core::msg::{menu::MenuMsg, nav::NavMsg, system::SystemMsg, Msg},
    core::state::{calculator::CalculatorState, AppState, Screen},
    domain::route::Route,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        Msg::Nav(NavMsg::Navigate(route)) => {
            let commands = navigate(&mut state, route);
            (state, commands)
        }

        Msg::Nav(NavMsg::Back) => {
            let commands = navigate(&mut state, Route::Menu);
            (state, commands)
        }

        // Menu messages only apply while the menu is shown
        Msg::Menu(menu_msg) => {
            if state.screen != Screen::Menu {
                return (state, vec![]);
            }
            if menu_msg == MenuMsg::Confirm {
                let kind = state.menu.selected_kind();
                let commands = navigate(&mut state, Route::Calculator(kind));
                (state, commands)
            } else {
                let commands = state.menu.update(menu_msg);
                (state, commands)
            }
        }

        // Input messages (delegated to the open calculator)
        Msg::Input(input_msg) => {
            let commands = match state.calculator_mut() {
                Some(calculator) => {
                    let edits = input_msg.edits_text();
                    let commands = calculator.update(input_msg);
                    if edits {
                        log::debug!(
                            "{} inputs changed, result: {:?}",
                            calculator.kind.route(),
                            calculator.result()
                        );
                    }
                    commands
                }
                None => vec![],
            };
            (state, commands)
        }
    }
}

/// Switches screens. Re-entering the current route keeps its inputs; any
/// other switch starts from a fresh screen.
fn navigate(state: &mut AppState, route: Route) -> Vec<Cmd> {
    if state.route() == route {
        return vec![];
    }

    let status = match route {
        Route::Menu => {
            state.screen = Screen::Menu;
            SystemMsg::ClearStatusMessage
        }
        Route::Calculator(kind) => {
            state.menu.selected = kind.index();
            state.screen = Screen::Calculator(CalculatorState::new(kind));
            SystemMsg::UpdateStatusMessage(format!("Opened {kind}"))
        }
    };
    log::info!("navigated to {route}");
    state.system.update(status)
}
