use tracing_subscriber::EnvFilter;

const CRATE_TARGETS: &[&str] = &["cfp_core", "mfcfp"];

/// Maps `-v` occurrences to a level (none: warn, `-v`: info, `-vv`: debug,
/// more: trace). `RUST_LOG` overrides the flag when set.
pub(super) fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let default_filter: String = CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
