use log::LevelFilter;

/// Initialize the logger at `level`; a `RUST_LOG` setting overrides it.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
