//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here stores an
//! outcome; callers recompute it from the board whenever they need it.

mod draw;
mod outcome;
mod win;

pub use draw::is_full;
pub use outcome::{Outcome, evaluate};
pub use win::{WIN_LINES, check_winner};
