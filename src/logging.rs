use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Workspace crate targets that log at the `-v` level.
const CRATE_TARGETS: &[&str] = &[
    "shiftcal",
    "shiftcal_calendar",
    "shiftcal_roster",
    "shiftcal_settings",
];

/// Level for a `-v` count: none is warn, then info, debug and trace.
fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// `target=level` directives for every workspace crate.
fn directives(level: LevelFilter) -> String {
    let level = level.to_string().to_lowercase();
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Installs the stderr subscriber. `RUST_LOG` replaces the `-v` level.
///
/// Events carry no timestamp; the calendar itself goes to stdout.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(directives(level_for(verbosity))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
