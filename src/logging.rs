//! Debug logging to stderr.

use log::LevelFilter;

/// Enables debug output when `DEBUG` mentions this tool (e.g. `DEBUG=gh-open`).
const DEBUG_ENV: &str = "DEBUG";
const DEBUG_TOKEN: &str = "gh-open";

fn debug_from_env(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.contains(DEBUG_TOKEN))
}

pub fn level(debug: bool) -> LevelFilter {
    let env = std::env::var(DEBUG_ENV).ok();
    if debug || debug_from_env(env.as_deref()) {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Install the global logger. `RUST_LOG` still overrides the level; calling
/// this more than once is a no-op.
pub fn init(debug: bool) {
    env_logger::Builder::new()
        .filter_level(level(debug))
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .try_init()
        .ok();
}
