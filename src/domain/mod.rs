//! Domain layer - the TOPSIS pipeline and its shared table substrate.

pub mod foundation;
pub mod ranking;
