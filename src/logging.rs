use env_logger::Builder;

/// Installs the logger, filtered by `RUST_LOG`. Later calls are no-ops.
pub fn init() {
    let _ = Builder::from_default_env()
        .format_timestamp(None)
        .try_init();
}
