//! Game controller and session state
//!
//! The state machine that mediates all user input and reconciles
//! asynchronous authority responses.

mod controller;
mod session;

pub use controller::{AuthorityEvent, Controller, Message, MessageStyle};
pub use session::{GameSession, Phase};
