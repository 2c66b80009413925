pub mod draw;
pub mod events;

pub use draw::*;
pub use events::EventHandler;
