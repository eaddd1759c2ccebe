//! Game sessions on top of the engine: moves in coordinate notation, a ply
//! counter and repetition tracking.

mod error;
mod notation;
mod session;

pub use error::{GameError, NotationError};
pub use notation::parse_move;
pub use session::{Game, Status};
