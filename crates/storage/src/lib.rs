#![forbid(unsafe_code)]

pub mod catalog;
mod fixtures;
pub mod repository;
pub mod sqlite;
