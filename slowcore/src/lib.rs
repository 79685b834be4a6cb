//! slowcore — shared library for slow computer applications

pub mod logging;
pub mod safety;
pub mod storage;
pub mod theme;

pub use theme::SlowTheme;
