use env_logger::Env;

/// Send `log` output to stderr, quiet unless `RUST_LOG` asks for more.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .format_target(false)
        .try_init();
}
