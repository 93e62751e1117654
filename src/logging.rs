use tracing_subscriber::{fmt, EnvFilter};

/// Initialize diagnostic logging on stderr.
///
/// User-facing output goes through [crate::ui]; this only carries debug detail.
/// `RUST_LOG` is honored unless `verbose` forces debug output.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("autoversion=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("autoversion=warn"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok();
}
