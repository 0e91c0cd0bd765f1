//! Match simulation
//!
//! All gameplay logic lives here. Nothing in this module touches the
//! platform; drawing goes through the `Surface` trait only.

pub mod ball;
pub mod collision;
pub mod paddle;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use collision::{bounce_off_walls, deflect_off_paddle};
pub use paddle::{KeyState, Paddle};
pub use state::{Control, GamePhase, Match, Side};
pub use tick::{GameEvent, TickInput, tick};
