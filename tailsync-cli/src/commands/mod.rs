pub mod diff;
pub mod sync;
