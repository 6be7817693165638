use env_logger::Env;

/// Logs to stderr at `warn` unless `RUST_LOG` says otherwise.
/// Stdout belongs to Waybar.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .try_init();
}
