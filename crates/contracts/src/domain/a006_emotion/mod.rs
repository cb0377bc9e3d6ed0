pub mod aggregate;

pub use aggregate::{Emotion, EmotionDto};
