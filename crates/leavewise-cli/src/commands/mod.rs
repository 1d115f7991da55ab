pub mod plan;
pub mod weekends;
pub mod windows;
