//! Log output for the command line front end
//!
//! The core library logs through the `log` facade; installing the subscriber
//! also installs the `log` bridge so those records end up here too.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default filter for a `-v` count
fn verbosity_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber writing to stderr
///
/// An explicit `log_level` filter wins over `RUST_LOG`, which wins over the
/// verbosity count.
pub fn init_tracing(
    verbose: u8,
    log_level: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = match log_level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(verbosity_level(verbose))),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(verbosity_level(0), "warn");
        assert_eq!(verbosity_level(1), "info");
        assert_eq!(verbosity_level(2), "debug");
        assert_eq!(verbosity_level(7), "trace");
    }
}
