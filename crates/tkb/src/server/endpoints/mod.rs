pub mod info;
pub mod schedule;
pub mod status;
