use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use super::number::{format_result, parse_operand};

/// Route name of the main menu
pub const MENU_ROUTE: &str = "main";

/// The seven percentage calculators, in menu order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumCount,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum CalculatorKind {
    #[strum(serialize = "percent")]
    #[serde(rename = "percent")]
    PercentOf,
    #[strum(serialize = "increase")]
    #[serde(rename = "increase")]
    Increase,
    #[strum(serialize = "decrease")]
    #[serde(rename = "decrease")]
    Decrease,
    #[strum(serialize = "tip")]
    #[serde(rename = "tip")]
    Tip,
    #[strum(serialize = "margin")]
    #[serde(rename = "margin")]
    Margin,
    #[strum(serialize = "discount")]
    #[serde(rename = "discount")]
    Discount,
    #[strum(serialize = "whatpercent")]
    #[serde(rename = "whatpercent")]
    WhatPercentOf,
}

/// Static texts shown for a calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub menu: &'static str,
    pub title: &'static str,
    pub first: &'static str,
    pub second: &'static str,
    pub result: &'static str,
    pub suffix: Option<&'static str>,
}

impl CalculatorKind {
    /// All kinds in menu order
    pub fn all() -> impl Iterator<Item = CalculatorKind> {
        Self::iter()
    }

    /// Kind at `index` in menu order
    pub fn nth(index: usize) -> Option<CalculatorKind> {
        Self::iter().nth(index)
    }

    /// Position in menu order
    pub fn index(self) -> usize {
        Self::iter().position(|kind| kind == self).unwrap_or_default()
    }

    pub fn route(self) -> &'static str {
        self.into()
    }

    /// Resolves a route name (case-insensitive). The menu route is not a kind.
    pub fn from_route(route: &str) -> Option<CalculatorKind> {
        route.trim().parse().ok()
    }

    pub fn labels(self) -> Labels {
        match self {
            CalculatorKind::PercentOf => Labels {
                menu: "Percent Calculator",
                title: "Percent Calculator",
                first: "Base Value",
                second: "Percentage %",
                result: "Result",
                suffix: None,
            },
            CalculatorKind::Increase => Labels {
                menu: "Percentage Increase",
                title: "Percentage Increase",
                first: "Original Value",
                second: "Increase %",
                result: "Result",
                suffix: None,
            },
            CalculatorKind::Decrease => Labels {
                menu: "Percentage Decrease",
                title: "Percentage Decrease",
                first: "Original Value",
                second: "Decrease %",
                result: "Result",
                suffix: None,
            },
            CalculatorKind::Tip => Labels {
                menu: "Tip Calculator",
                title: "Tip Calculator",
                first: "Amount",
                second: "Tip %",
                result: "Total with Tip",
                suffix: None,
            },
            CalculatorKind::Margin => Labels {
                menu: "Percentage Margin",
                title: "Percentage Margin",
                first: "Cost",
                second: "Margin %",
                result: "Selling Price",
                suffix: None,
            },
            CalculatorKind::Discount => Labels {
                menu: "Discount",
                title: "Discount Calculator",
                first: "Price",
                second: "Discount %",
                result: "Discounted Price",
                suffix: None,
            },
            CalculatorKind::WhatPercentOf => Labels {
                menu: "Percentage (What % of)",
                title: "What % of",
                first: "Part",
                second: "Total",
                result: "Percentage",
                suffix: Some("%"),
            },
        }
    }

    /// Applies the formula. Non-finite outcomes (division by zero, overflow)
    /// are reported as no result.
    pub fn apply(self, a: f64, b: f64) -> Option<f64> {
        let value = match self {
            CalculatorKind::PercentOf => a * b / 100.0,
            CalculatorKind::Increase | CalculatorKind::Tip => a + (a * b / 100.0),
            CalculatorKind::Decrease | CalculatorKind::Discount => a - (a * b / 100.0),
            CalculatorKind::Margin => a / (1.0 - b / 100.0),
            CalculatorKind::WhatPercentOf => (a / b) * 100.0,
        };

        value.is_finite().then_some(value)
    }

    pub fn compute(self, a: Option<f64>, b: Option<f64>) -> Option<f64> {
        self.apply(a?, b?)
    }

    /// Parses both raw inputs and computes the result
    pub fn evaluate(self, a: &str, b: &str) -> Option<f64> {
        self.compute(parse_operand(a), parse_operand(b))
    }

    /// Formatted result line, e.g. `Total with Tip: 60` or `Percentage: 12.5 %`
    pub fn display(self, a: &str, b: &str) -> Option<String> {
        self.evaluate(a, b).map(|value| self.result_line(value))
    }

    pub fn result_line(self, value: f64) -> String {
        let labels = self.labels();
        let formatted = format_result(value);
        match labels.suffix {
            Some(suffix) => format!("{}: {formatted} {suffix}", labels.result),
            None => format!("{}: {formatted}", labels.result),
        }
    }
}

impl std::fmt::Display for CalculatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.labels().title)
    }
}
