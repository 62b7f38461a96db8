/// Installs `env_logger`, defaulting to `info` when `RUST_LOG` is unset.
///
/// wgpu is chatty at `info`, so it is capped at `warn` unless `RUST_LOG` says otherwise.
pub fn init() {
    let env = env_logger::Env::default().default_filter_or("info,wgpu_core=warn,wgpu_hal=warn");
    env_logger::Builder::from_env(env)
        .format_timestamp_millis()
        .init();
}
