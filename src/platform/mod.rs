//! Platform backends. The simulation itself is platform independent.

#[cfg(feature = "desktop")]
pub mod desktop;
