use std::sync::LazyLock;
use std::time::Instant;

pub mod capacity;
pub mod config;
pub mod io;
pub mod planner;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
