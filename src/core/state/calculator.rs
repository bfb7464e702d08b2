use crate::{
    core::{cmd::Cmd, msg::input::InputMsg},
    domain::{calculator::CalculatorKind, input::InputPair},
};

/// An open calculator screen: its kind and the inputs typed so far.
/// The result is derived on read and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    pub kind: CalculatorKind,
    pub inputs: InputPair,
}

impl CalculatorState {
    pub fn new(kind: CalculatorKind) -> Self {
        Self {
            kind,
            inputs: InputPair::new(),
        }
    }

    pub fn result(&self) -> Option<f64> {
        self.inputs.result(self.kind)
    }

    /// Labelled result line, absent while either input is unparseable
    pub fn result_line(&self) -> Option<String> {
        self.result().map(|value| self.kind.result_line(value))
    }

    pub fn update(&mut self, msg: InputMsg) -> Vec<Cmd> {
        match msg {
            InputMsg::Insert(c) => {
                self.inputs.focused_mut().insert_char(c);
            }
            InputMsg::Paste(text) => self.inputs.focused_mut().insert_str(&text),
            InputMsg::DeleteBackward => self.inputs.focused_mut().delete_backward(),
            InputMsg::DeleteForward => self.inputs.focused_mut().delete_forward(),
            InputMsg::CursorLeft => self.inputs.focused_mut().move_left(),
            InputMsg::CursorRight => self.inputs.focused_mut().move_right(),
            InputMsg::CursorHome => self.inputs.focused_mut().move_home(),
            InputMsg::CursorEnd => self.inputs.focused_mut().move_end(),
            InputMsg::NextField | InputMsg::PrevField => {
                self.inputs.focus = self.inputs.focus.toggle();
            }
            InputMsg::ClearField => self.inputs.focused_mut().clear(),
            InputMsg::ClearAll => self.inputs.clear(),
        }
        vec![]
    }
}
