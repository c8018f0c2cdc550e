//! Log subscriber setup.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "storefront=info";

/// Install a stderr subscriber filtered by `RUST_LOG`, or `default_filter`
/// when unset. `verbose` raises the default to debug.
pub fn init_tracing(default_filter: &str, verbose: bool) -> anyhow::Result<()> {
    let fallback = if verbose { "storefront=debug" } else { default_filter };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {}", e))
}
