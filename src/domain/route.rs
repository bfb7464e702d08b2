use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::calculator::{CalculatorKind, MENU_ROUTE};

/// Screen selected by the router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Route {
    #[default]
    Menu,
    Calculator(CalculatorKind),
}

impl Route {
    pub fn name(self) -> &'static str {
        match self {
            Route::Menu => MENU_ROUTE,
            Route::Calculator(kind) => kind.route(),
        }
    }

    /// Every route: the menu first, then each calculator in menu order
    pub fn all() -> impl Iterator<Item = Route> {
        std::iter::once(Route::Menu).chain(CalculatorKind::all().map(Route::Calculator))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRoute(pub String);

impl fmt::Display for UnknownRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = Route::all().map(Route::name).collect();
        write!(
            f,
            "unknown route '{}' (expected one of: {})",
            self.0,
            known.join(", ")
        )
    }
}

impl std::error::Error for UnknownRoute {}

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(MENU_ROUTE) {
            return Ok(Route::Menu);
        }
        CalculatorKind::from_route(s)
            .map(Route::Calculator)
            .ok_or_else(|| UnknownRoute(s.to_string()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!("main".parse::<Route>(), Ok(Route::Menu));
        assert_eq!("MAIN".parse::<Route>(), Ok(Route::Menu));
        assert_eq!(
            "tip".parse::<Route>(),
            Ok(Route::Calculator(CalculatorKind::Tip))
        );
        assert!("nope".parse::<Route>().is_err());
    }

    #[test]
    fn test_all_routes_round_trip() {
        let routes: Vec<Route> = Route::all().collect();
        assert_eq!(routes.len(), 8);
        for route in routes {
            assert_eq!(route.name().parse::<Route>(), Ok(route));
        }
    }

    #[test]
    fn test_unknown_route_message() {
        let err = "nope".parse::<Route>().unwrap_err();
        assert!(err.to_string().contains("main, percent, increase"));
    }
}
