use crate::config::LogConfig;
use log::{Level, LevelFilter, Metadata, Record};
use std::fs::File;
use std::io::{stderr, BufWriter, Write};
use std::sync::Mutex;
use std::time::Instant;

/// A logger that logs to stderr and, if configured, to a file.
/// Stdout is left to the program's actual output.
pub struct RegionLog {
    start: Instant,
    max_level: LevelFilter,
    log_file: Option<Mutex<BufWriter<File>>>,
}

impl RegionLog {
    fn new(config: &LogConfig) -> Self {
        let log_file = config.file.as_ref().and_then(|path| {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            File::create(path)
                .map_err(|e| eprintln!("could not create log file {}: {}", path.display(), e))
                .ok()
                .map(|f| Mutex::new(BufWriter::new(f)))
        });

        Self {
            start: Instant::now(),
            max_level: config.level_filter(),
            log_file,
        }
    }

    /// Installs the logger once, later calls are ignored
    pub fn init(config: &LogConfig) {
        let logger = RegionLog::new(config);
        let max_level = logger.max_level;
        let leaked = Box::leak(Box::new(logger));
        crate::unwrap_orr!(log::set_logger(leaked), return);
        log::set_max_level(max_level);
        log_panics::init();

        if config.exceeds(log::STATIC_MAX_LEVEL) {
            log::warn!(
                "log level {} is above the compiled in maximum {}, those records are dropped",
                config.level,
                log::STATIC_MAX_LEVEL
            );
        }
    }

    fn format(&self, r: &Record<'_>) -> String {
        let time = self.start.elapsed().as_micros();
        if r.level() > Level::Warn {
            let module_path = r.module_path_static().unwrap_or_else(|| r.target());
            format!(
                "[{:9} {:5} {:12}] {}",
                time,
                r.level(),
                module_path,
                r.args()
            )
        } else {
            format!(
                "[{:9} {:5} {}:{}] {}",
                time,
                r.level(),
                r.file().unwrap_or_default(),
                r.line().unwrap_or_default(),
                r.args()
            )
        }
    }

    fn write_line(&self, line: &str) {
        eprintln!("{}", line);

        if let Some(ref m) = self.log_file {
            if let Ok(mut bw) = m.lock() {
                let _ = writeln!(bw, "{}", line);
                let _ = bw.flush();
            }
        }
    }
}

impl log::Log for RegionLog {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.max_level
    }

    fn log(&self, r: &Record<'_>) {
        if r.target() == "panic" {
            self.write_line(&r.args().to_string());
            self.flush();
            return;
        }

        if !self.enabled(r.metadata()) {
            return;
        }

        self.write_line(&self.format(r));
    }

    fn flush(&self) {
        let _ = stderr().flush();
        if let Some(ref x) = self.log_file {
            if let Ok(mut bw) = x.lock() {
                let _ = bw.flush();
            }
        }
    }
}
