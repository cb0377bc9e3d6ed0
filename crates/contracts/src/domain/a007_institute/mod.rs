pub mod aggregate;

pub use aggregate::{Institute, InstituteDto};
