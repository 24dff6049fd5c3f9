//! Traits at the seams of the evaluation engine

pub mod clock;
pub mod repository;

pub use clock::{Clock, FixedClock, SystemClock};
pub use repository::GrowthStandardRepository;
