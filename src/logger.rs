// src/logger.rs
//! `log` クレートの出力先をブラウザのコンソールにつなぐロガーだよ！📝
//!
//! wasm で動いてる時は `console.log` / `console.warn` / `console.error` に、
//! ネイティブ (テストとか) の時は標準エラー出力に書く。

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

pub struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl ConsoleLogger {
    fn format(record: &Record) -> String {
        format!("[{}] {}: {}", record.level(), record.target(), record.args())
    }
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = Self::format(record);
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        _ => console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// ロガーを登録する。2回目以降はエラーになるけど、レベルだけは更新するよ。
pub fn try_init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_max_level(level);
    log::set_logger(&LOGGER)
}

/// `try_init` のエラーを無視する版。`start` から呼ぶのはこっち。
pub fn init(level: LevelFilter) {
    if try_init(level).is_err() {
        log::debug!("Logger already initialized, level set to {}", level);
    }
}
