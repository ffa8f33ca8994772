//! Input traits for the terminal front end
//!
//! Components declare their own capabilities instead of the App knowing how
//! to scroll each of them.
//!
//! - [`Scrollable`] - components with scrollable content
//! - [`Interactive`] - components that handle keyboard input

mod interactive;
mod scrollable;

pub use interactive::{Handled, Interactive, ScrollableInteractive};
pub use scrollable::Scrollable;
