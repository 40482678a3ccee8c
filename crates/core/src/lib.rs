#![forbid(unsafe_code)]

pub mod filter;
pub mod model;
pub mod quiz;
pub mod review;
pub mod schedule;
pub mod time;

pub use time::Clock;
