use log::{
    Level,
    LevelFilter,
    Log,
    Metadata,
    Record,
};
use std::io::Write;
use yansi::{Color, Paint};

pub fn init() {
    struct Logger;

    impl Log for Logger {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            let (name, color) = match record.metadata().level() {
                Level::Error => ("error", Color::Red),
                Level::Warn => ("warn", Color::Magenta),
                Level::Info => ("info", Color::Yellow),
                Level::Debug => ("debug", Color::Cyan),
                Level::Trace => ("trace", Color::Blue),
            };

            let stderr = std::io::stderr();
            let mut out = stderr.lock();

            writeln!(
                out,
                "{}: {}",
                Paint::new(name).fg(color).bold(),
                record.args(),
            )
            .ok();
        }

        fn flush(&self) {}
    }

    if !atty::is(atty::Stream::Stderr) {
        Paint::disable();
    }

    log::set_boxed_logger(Box::new(Logger)).unwrap();
    log::set_max_level(LevelFilter::Warn);
}

pub fn verbose(verbosity: usize) {
    log::set_max_level(match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    });
}

pub fn quiet() {
    log::set_max_level(LevelFilter::Off);
}
