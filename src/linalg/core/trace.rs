//! Trace hook for the exponential engine.
//!
//! The engine logs through an [`slog::Logger`] carried by
//! [`ExpmOptions`](crate::linalg::core::options::ExpmOptions). By default
//! records are discarded; [`terminal_logger`] builds a non-blocking terminal
//! drain for interactive debugging.
use slog::{Drain, Level, Logger, o};

/// Logger that drops every record.
pub fn discard_logger() -> Logger {
    Logger::root(slog::Discard, o!())
}

/// Non-blocking terminal logger emitting records at `level` or more severe.
///
/// Parameters
/// ----------
/// - `level`: `slog::Level`
///   Minimum severity kept, e.g. `Level::Debug` to see path selection,
///   trace shift, balancing bounds, and squaring counts.
///
/// Notes
/// -----
/// - Records are formatted by `slog_term::FullFormat` and shipped through a
///   `slog_async` worker thread; pending records are flushed when the last
///   clone of the returned logger is dropped.
pub fn terminal_logger(level: Level) -> Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    let drain = drain.filter_level(level).fuse();
    Logger::root(drain, o!("engine" => "matexp"))
}
