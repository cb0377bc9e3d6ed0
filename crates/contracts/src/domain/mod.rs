pub mod common;

pub mod a001_board;
pub mod a002_branch;
pub mod a003_city;
pub mod a004_class;
pub mod a005_division;
pub mod a006_emotion;
pub mod a007_institute;
pub mod a008_log_mood;
pub mod a009_school;
pub mod a010_zone;
