//! Reusable UI components.
//!
//! Styling comes from the global stylesheet; components only pick classes.

mod button;
mod card;
mod progress;

pub use button::*;
pub use card::*;
pub use progress::*;
