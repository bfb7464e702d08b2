use strum::EnumCount;

use crate::{
    core::{cmd::Cmd, msg::menu::MenuMsg},
    domain::calculator::CalculatorKind,
};

/// Main menu selection. Survives navigation so returning keeps the cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    pub selected: usize,
}

impl MenuState {
    pub fn selected_kind(&self) -> CalculatorKind {
        CalculatorKind::nth(self.selected).unwrap_or(CalculatorKind::PercentOf)
    }

    /// Menu-specific update function. `Confirm` is routed by the top-level
    /// update since it changes the screen.
    pub fn update(&mut self, msg: MenuMsg) -> Vec<Cmd> {
        let len = CalculatorKind::COUNT;
        match msg {
            MenuMsg::SelectPrevious => {
                self.selected = (self.selected + len - 1) % len;
            }
            MenuMsg::SelectNext => {
                self.selected = (self.selected + 1) % len;
            }
            MenuMsg::Select(index) => {
                if index < len {
                    self.selected = index;
                }
            }
            MenuMsg::Confirm => {}
        }
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_selection_wraps() {
        let mut menu = MenuState::default();
        assert_eq!(menu.selected_kind(), CalculatorKind::PercentOf);

        menu.update(MenuMsg::SelectPrevious);
        assert_eq!(menu.selected_kind(), CalculatorKind::WhatPercentOf);

        menu.update(MenuMsg::SelectNext);
        assert_eq!(menu.selected_kind(), CalculatorKind::PercentOf);

        menu.update(MenuMsg::SelectNext);
        assert_eq!(menu.selected_kind(), CalculatorKind::Increase);
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut menu = MenuState::default();
        menu.update(MenuMsg::Select(3));
        assert_eq!(menu.selected_kind(), CalculatorKind::Tip);
        menu.update(MenuMsg::Select(7));
        assert_eq!(menu.selected, 3);
    }
}
