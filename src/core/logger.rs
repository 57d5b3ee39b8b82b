use flexi_logger::{
    filter::{self, LogLineFilter},
    Age, Cleanup, Criterion, Duplicate, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming,
    WriteMode,
};
use log::Level;

use super::configuration::Configuration;

const LOG_BASENAME: &str = "tsunjo";
const NOISY_MODULES: [&str; 3] = ["reqwest", "hyper", "h2"];

/// Drops HTTP stack chatter below `Warn`.
pub struct IgnoreTransportNoise;

impl LogLineFilter for IgnoreTransportNoise {
    fn write(
        &self,
        now: &mut flexi_logger::DeferredNow,
        record: &log::Record,
        log_line_writer: &dyn filter::LogLineWriter,
    ) -> std::io::Result<()> {
        if is_transport_noise(record.module_path().unwrap_or_default(), record.level()) {
            return Ok(());
        }

        log_line_writer.write(now, record)
    }
}

fn is_transport_noise(module_path: &str, level: Level) -> bool {
    level > Level::Warn
        && NOISY_MODULES
            .iter()
            .any(|m| module_path == *m || module_path.starts_with(&format!("{m}::")))
}

/// Starts the file logger in the data directory, warnings are mirrored on stderr.
/// `verbosity` wins over the configured level.
pub fn start_logger(
    conf: &Configuration,
    verbosity: Option<log::LevelFilter>,
) -> Result<LoggerHandle, FlexiLoggerError> {
    let level = match verbosity {
        Some(v) => v.to_string().to_lowercase(),
        None => conf.log_level().to_string(),
    };

    Logger::try_with_str(level)?
        .filter(Box::new(IgnoreTransportNoise))
        .log_to_file(
            FileSpec::default()
                .directory(conf.data_directory())
                .basename(LOG_BASENAME),
        )
        .duplicate_to_stderr(Duplicate::Warn)
        .format_for_stderr(flexi_logger::colored_default_format)
        .format_for_files(flexi_logger::detailed_format)
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepCompressedFiles(conf.log_retention()),
        )
        .write_mode(WriteMode::Async)
        .start()
}
