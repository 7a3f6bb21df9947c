//! # vmsense CLI support
//!
//! Shared setup for the `vmsense` binary. The binary itself lives in
//! `src/bin/vmsense.rs`; this crate only carries the logging bootstrap so
//! that additional binaries can reuse it.

pub fn init_logging() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init()?;
    Ok(())
}
