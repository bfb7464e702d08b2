//! Non-interactive entry points used by the `eval` and `list` subcommands

use color_eyre::eyre::{eyre, Result};
use serde::Serialize;

use crate::domain::{calculator::CalculatorKind, number::format_result, route::Route};

/// Outcome of a single evaluation, serialized for `eval --json`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalReport {
    pub route: CalculatorKind,
    pub a: String,
    pub b: String,
    pub result: Option<f64>,
    pub formatted: Option<String>,
}

impl EvalReport {
    pub fn is_present(&self) -> bool {
        self.result.is_some()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Evaluates `route` on the raw texts `a` and `b`. Fails only when `route`
/// does not name a calculator; unparseable inputs give an absent result.
pub fn evaluate(route: Route, a: &str, b: &str) -> Result<EvalReport> {
    let Route::Calculator(kind) = route else {
        return Err(eyre!("`{route}` is not a calculator"));
    };
    let result = kind.evaluate(a, b);
    log::debug!("eval {kind:?}({a:?}, {b:?}) = {result:?}");

    Ok(EvalReport {
        route: kind,
        a: a.to_string(),
        b: b.to_string(),
        result,
        formatted: result.map(format_result),
    })
}

/// One line per calculator: route name padded, then title
pub fn list_lines() -> Vec<String> {
    CalculatorKind::all()
        .map(|kind| format!("{:<12} {}", kind.route(), kind.labels().title))
        .collect()
}
