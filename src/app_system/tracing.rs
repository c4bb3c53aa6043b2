/// Configure tracing once at application startup for the entire process.
///
/// Verbosity is controlled with `RUST_LOG` and defaults to `info`:
/// ```bash
/// RUST_LOG=debug storefront
/// RUST_LOG=storefront::gateway=debug,info storefront
/// ```
pub fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
