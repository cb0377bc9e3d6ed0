pub mod badge;
pub mod button;

pub use badge::{Badge, BadgeTone, StatusBadge};
pub use button::{Button, ButtonKind};
