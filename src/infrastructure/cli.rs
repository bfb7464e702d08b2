use clap::{Parser, Subcommand};

use crate::domain::route::Route;
use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second",
        default_value_t = 4.0
    )]
    pub tick_rate: f64,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second",
        default_value_t = 60.0
    )]
    pub frame_rate: f64,

    #[arg(
        short,
        long,
        value_name = "ROUTE",
        help = "Screen to start on (main, percent, increase, decrease, tip, margin, discount, whatpercent)",
        default_value_t = Route::Menu
    )]
    pub route: Route,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Evaluate one calculator without starting the terminal UI
    Eval {
        /// Calculator route, e.g. `tip`
        route: Route,
        /// First input (base, original value, amount, cost, price or part)
        #[arg(allow_hyphen_values = true)]
        a: String,
        /// Second input (percentage or total)
        #[arg(allow_hyphen_values = true)]
        b: String,
        /// Print a JSON object instead of the formatted result
        #[arg(long)]
        json: bool,
    },
    /// List the available calculators
    List,
}
