//! src/routes/waitlist/mod.rs
mod download;
mod stats;
mod submit;

pub use download::download_waitlist;
pub use stats::waitlist_stats;
pub use submit::subscribe;
