use tracing_subscriber::EnvFilter;

/// Subscribes to tracing events that will output to the console.
///
/// By default, it enables:
///
/// * `warn` level (and higher) on all modules,
/// * `debug` level (and higher) on the `sui_events_rs` module,
/// * all levels on the current module.
///
/// You can override these defaults by setting the `RUST_LOG` env variable, e.g.:
///
/// ```sh
/// $ RUST_LOG=sui_events_rs=trace cargo run --example events_by_transaction
/// ```
pub fn init_tracing() {
    let default_env_filter = format!("warn,sui_events_rs=debug,{}", current_exe());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_env_filter))
        .expect("invalid tracing filter");

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

fn current_exe() -> String {
    std::env::current_exe()
        .expect("Failed to get current executable")
        .file_stem()
        .expect("Failed to get file stem")
        .to_str()
        .expect("Failed to convert file stem to &str")
        .to_string()
}
