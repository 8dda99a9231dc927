// src/logging.rs
// =============================================================================
// Logger setup for the binary. The library only talks to the `log` facade.
// =============================================================================

use log::LevelFilter;

/// Initialises env_logger: RUST_LOG is read first, `level` then overrides it.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger(level: LevelFilter) {
    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    // html5ever and friends are chatty about malformed markup.
    builder.filter_module("html5ever", LevelFilter::Error);
    builder.filter_module("selectors", LevelFilter::Warn);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hyper_util", LevelFilter::Info);
    builder.filter_module("reqwest", LevelFilter::Info);
    builder.filter_module("htmlinspect", level);

    let _ = builder.try_init();
}
