pub mod keyboard;
pub mod pointer;
pub mod shortcuts;

pub use keyboard::*;
pub use pointer::*;
