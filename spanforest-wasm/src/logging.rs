use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::prelude::*;

// Routes `log` records from the core to the browser console.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[{}] {}: {}", record.level(), record.target(), record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

pub(crate) fn parse_level(level: &str) -> Option<LevelFilter> {
    level.trim().parse().ok()
}

/// Installs the console logger. `level` is one of off, error, warn, info,
/// debug, trace. Returns false for an unknown level; installing twice only
/// updates the level.
#[wasm_bindgen]
pub fn init_logging(level: &str) -> bool {
    let Some(filter) = parse_level(level) else { return false };
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(filter);
    true
}
