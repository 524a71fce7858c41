//! src/routes/mod.rs
mod health_check;
mod home;
mod waitlist;

pub use health_check::health_check;
pub use home::home;
pub use waitlist::{download_waitlist, subscribe, waitlist_stats};

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
