use env_logger::{Builder, Env};

/// Logger bootstrap for the binary. `RUST_LOG` overrides the `info` default.
pub fn init_logging() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .format_module_path(false)
        .init();
}
