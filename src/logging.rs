use std::error::Error;
use std::path::PathBuf;
use chrono::Utc;
use log::{info, error, debug};
use env_logger::{Builder, Target};

/// Environment variable selecting the log level.
pub const LOG_LEVEL_VAR: &str = "DNAFLIP_LOG_LEVEL";

/// Directory holding the log files, `~/.dnaflip/logs`
pub fn log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".dnaflip")
        .join("logs")
}

/// Initialize file logging. The terminal is owned by the UI, so nothing goes to stderr.
pub fn init_logging() -> Result<PathBuf, Box<dyn Error>> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let log_file = log_dir.join(format!("dnaflip_{}.log", Utc::now().format("%Y%m%d_%H%M%S")));

    Builder::from_default_env()
        .target(Target::Pipe(Box::new(std::fs::File::create(&log_file)?)))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(buf,
                "{} [{}] [{}:{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init()?;

    info!("Logging system initialized");
    info!("Log file: {log_file:?}");
    debug!("Log directory: {log_dir:?}");

    Ok(log_file)
}

/// Map a `DNAFLIP_LOG_LEVEL` value onto a level filter, defaulting to info.
pub fn parse_log_level(level: &str) -> &'static str {
    match level.to_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" => "warn",
        "error" => "error",
        _ => "info",
    }
}

/// Translate `DNAFLIP_LOG_LEVEL` into `RUST_LOG` unless `RUST_LOG` is already set.
pub fn set_log_level() {
    if std::env::var_os("RUST_LOG").is_some() {
        return;
    }

    let level = std::env::var(LOG_LEVEL_VAR).unwrap_or_else(|_| "info".to_string());
    let env_filter = parse_log_level(&level);
    if !level.eq_ignore_ascii_case(env_filter) {
        eprintln!("Invalid log level '{level}', defaulting to 'info'");
    }

    std::env::set_var("RUST_LOG", format!("dnaflip={env_filter}"));
}

pub fn log_system_info() {
    info!("=== dnaflip starting ===");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Build target: {}", std::env::consts::ARCH);
    info!("Operating system: {}", std::env::consts::OS);
    info!("Available CPU cores: {}", num_cpus::get());

    debug!("Environment variables:");
    for (key, value) in std::env::vars() {
        if key.starts_with("DNAFLIP_") || key == "RUST_LOG" {
            debug!("  {key}: {value}");
        }
    }
}

pub fn log_shutdown() {
    info!("=== dnaflip shutting down ===");
    info!("Application terminated at {}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
}

/// Log a fatal error to the log file and to stderr once the terminal is restored.
pub fn log_critical_error(error: &str, context: Option<&str>) {
    match context {
        Some(ctx) => {
            error!("CRITICAL ERROR [{ctx}]: {error}");
            eprintln!("[{}] CRITICAL ERROR [{ctx}]: {error}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
        }
        None => {
            error!("CRITICAL ERROR: {error}");
            eprintln!("[{}] CRITICAL ERROR: {error}", Utc::now().format("%Y-%m-%d %H:%M:%S UTC"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_logging_initialization() {
        let temp_dir = tempdir().unwrap();
        std::env::set_var("HOME", temp_dir.path());

        let result = init_logging();
        assert!(result.is_ok());

        let log_file = result.unwrap();
        assert!(log_file.exists());
        assert!(log_file.starts_with(temp_dir.path().join(".dnaflip").join("logs")));
    }

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("DEBUG"), "debug");
        assert_eq!(parse_log_level("warn"), "warn");
        assert_eq!(parse_log_level("loud"), "info");
    }
}
