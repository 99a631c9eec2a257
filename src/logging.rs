use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{format_description, Config, ConfigBuilder, SimpleLogger};
use time::format_description::FormatItem;
use time::UtcOffset;

/// Install the global logger. Diagnostics only; probe output is written directly.
pub fn init(debug: bool) -> Result<()> {
    SimpleLogger::init(level_filter(debug), get_config())
        .context("Failed to initialize logger")?;

    Ok(())
}

fn level_filter(debug: bool) -> LevelFilter {
    if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn get_config() -> Config {
    ConfigBuilder::new()
        .set_time_offset(get_local_offset())
        .set_time_format_custom(get_time_format())
        .set_level_padding(simplelog::LevelPadding::Right)
        .set_thread_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Debug)
        .set_write_log_enable_colors(true)
        .build()
}

fn get_local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC) // UTC if unknown.
}

fn get_time_format() -> &'static [FormatItem<'static>] {
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_selects_level() {
        assert_eq!(level_filter(true), LevelFilter::Debug);
        assert_eq!(level_filter(false), LevelFilter::Info);
    }
}
