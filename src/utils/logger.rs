use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `level` is a filter directive from the configuration file, used when
/// neither `RUST_LOG` nor `--verbose` is set.
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let fallback = if verbose {
        "venue_table=debug,info".to_string()
    } else {
        level.map(str::to_string).unwrap_or_else(|| "venue_table=info".to_string())
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
