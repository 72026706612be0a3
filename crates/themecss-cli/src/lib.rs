//! Command-line front end for [`themecss`].
//!
//! ```text
//! themecss generate theme.json --format hsl --tailwind 3
//! themecss generate --font-vars --shadow-vars -o app/theme.css
//! themecss preset --yaml > theme.yaml
//! themecss inspect app/theme.css
//! ```
//!
//! Logging goes to stderr and is controlled by `THEMECSS_LOG` (an
//! `EnvFilter` directive such as `debug` or `themecss=trace`); `--verbose`
//! raises the default from `warn` to `debug`.

pub mod cli;
pub mod commands;

use tracing_subscriber::EnvFilter;

pub use cli::Cli;
pub use commands::run;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "THEMECSS_LOG";

/// Installs the stderr log subscriber. Safe to call more than once.
pub fn install_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
