use std::sync::Once;

/// Logger configuration.
///
/// `filter` follows the `env_logger` syntax (e.g. "info",
/// "tiamat_sync=debug,wgpu=warn"). When unset, `RUST_LOG` applies, then an
/// info-level default.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub timestamps: bool,
}

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
///
/// Intended usage is early in `main` of whatever binary embeds the engine.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.filter {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => match std::env::var("RUST_LOG") {
                Ok(filter) => {
                    builder.parse_filters(&filter);
                }
                // Frame-loop diagnostics are debug-level; keep the default
                // quiet enough for per-frame work.
                Err(_) => {
                    builder.filter_level(log::LevelFilter::Info);
                }
            },
        }

        if !config.timestamps {
            builder.format_timestamp(None);
        }

        builder.init();

        log::debug!("logging initialized");
    });
}
