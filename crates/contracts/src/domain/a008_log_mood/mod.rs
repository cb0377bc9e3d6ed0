pub mod aggregate;

pub use aggregate::{LogMood, LogMoodDto, LogMoodPayload};
