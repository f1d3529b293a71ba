use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn fallback_directives(verbose: bool, level: Option<&str>) -> String {
    match (verbose, level) {
        (true, _) => "shipment_pairs=debug,info".to_string(),
        (false, Some(level)) => format!("shipment_pairs={}", level),
        (false, None) => "shipment_pairs=info".to_string(),
    }
}

fn default_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback_directives(verbose, level)))
}

fn cli_subscriber(verbose: bool, level: Option<&str>) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::registry()
        .with(default_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
}

fn json_subscriber(verbose: bool, level: Option<&str>) -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::registry()
        .with(default_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .json(),
        )
}

/// 初始化 CLI 日誌；`level` 來自設定檔的 `[monitoring] log_level`
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    cli_subscriber(verbose, level).init();
}

pub fn init_json_logger(verbose: bool, level: Option<&str>) {
    json_subscriber(verbose, level).init();
}
