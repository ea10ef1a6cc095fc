use crate::config::Config;
use anyhow::anyhow;
use ringlog::*;

/// Registers a ringlog backend writing to stderr and returns its drain, which
/// must be flushed before the process exits.
pub fn start(config: &Config) -> anyhow::Result<Box<dyn Drain>> {
    let debug = config.debug();
    let level = debug.log_level()?;

    // the short format is enough unless we are debugging
    let builder = if level <= Level::Info {
        LogBuilder::new().format(klog_format)
    } else {
        LogBuilder::new()
    };

    let log = builder
        .output(Box::new(Stderr::new()))
        .log_queue_depth(debug.log_queue_depth())
        .single_message_size(debug.log_single_message_size())
        .build()
        .map_err(|e| anyhow!("failed to initialize log: {e}"))?;

    Ok(MultiLogBuilder::new()
        .level_filter(level.to_level_filter())
        .default(log)
        .build()
        .start())
}
