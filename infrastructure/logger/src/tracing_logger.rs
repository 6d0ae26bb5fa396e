use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` port backed by `tracing`; every event lands under the
/// `glyphscript` target so `RUST_LOG=glyphscript=debug` isolates domain logs.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "glyphscript", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "glyphscript", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "glyphscript", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "glyphscript", "{}", message);
    }
}
