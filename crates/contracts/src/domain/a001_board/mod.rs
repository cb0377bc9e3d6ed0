pub mod aggregate;

pub use aggregate::{Board, BoardDto};
