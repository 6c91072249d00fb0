//! # Logging Setup
//!
//! Shared `fern` initialization used by every lab binary: one timestamped
//! format, level Info, dual output to the console and a dated log file.

use anyhow::Result;

/// Initializes the logging system using `fern`.
///
/// # Arguments
/// * `app_name` - Prefix of the dated log file, normally the binary name.
pub fn setup_logging(app_name: &str) -> Result<()> {
    let log_filename = format!("{}_{}.log", app_name, chrono::Local::now().format("%Y-%m-%d"));

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d %H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(std::io::stdout())
        .chain(fern::log_file(log_filename)?)
        .apply()?;
    Ok(())
}
