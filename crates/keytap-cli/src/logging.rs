//! Tracing setup for the taptool binary.

use std::path::Path;
use std::sync::Once;

use tracing_appender::non_blocking::WorkerGuard;

static INIT: Once = Once::new();

/// Initialize the fmt subscriber once.
///
/// Logs go to stderr by default; with `log_file` the writer is a
/// non-blocking file appender. The returned guard must stay alive until
/// process exit or buffered lines are lost. `RUST_LOG` overrides the
/// default filter.
pub fn init_tracing(log_file: Option<&Path>) -> Option<WorkerGuard> {
    let mut guard = None;
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new("keytap_core=info,keytap_cli=info")
        });

        match log_file {
            Some(path) => {
                let dir = match path.parent() {
                    Some(p) if !p.as_os_str().is_empty() => p,
                    _ => Path::new("."),
                };
                let name = path
                    .file_name()
                    .map(ToOwned::to_owned)
                    .unwrap_or_else(|| "taptool.log".into());
                let appender = tracing_appender::rolling::never(dir, name);
                let (non_blocking, worker_guard) = tracing_appender::non_blocking(appender);
                guard = Some(worker_guard);

                tracing_subscriber::fmt()
                    .with_writer(non_blocking)
                    .with_ansi(false)
                    .with_env_filter(filter)
                    .init();
            }
            None => {
                tracing_subscriber::fmt()
                    .with_writer(std::io::stderr)
                    .with_env_filter(filter)
                    .init();
            }
        }
    });
    guard
}
