pub mod aggregate;

pub use aggregate::{School, SchoolDto};
