//! Console front-end: the numbered menu, its sub-flows and the loop that
//! drives them.

mod app;
mod helpers;
mod prompt;
mod search;
mod terminal;

pub use app::{App, MenuChoice};
pub use prompt::InputClosed;
pub use search::{match_score, search};
pub use terminal::run_app;
