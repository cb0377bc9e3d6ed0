pub mod aggregate;

pub use aggregate::{Class, ClassDto};
