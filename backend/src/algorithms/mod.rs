//! Numeric building blocks shared by the statistics services.

pub mod summation;

pub use summation::ExactSum;
