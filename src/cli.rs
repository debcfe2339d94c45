//! CLI domain: parse, route, and output only.
//! No annotation logic; the route context dispatches to the protocol layer.

mod output;
mod parse;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use route::RunContext;
