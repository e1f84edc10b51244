mod board;
mod cell;
mod lines;
mod moves;
mod win;

#[cfg(test)]
mod tests;

pub use board::*;
pub use cell::*;
pub use lines::*;
pub use moves::*;
pub use win::*;
