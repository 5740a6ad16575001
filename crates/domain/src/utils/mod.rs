//! Pure helper utilities shared by the core and infra crates

pub mod format;
pub mod numeric;
pub mod period;
