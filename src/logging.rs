use std::io::Write;

use chrono::Local;
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Installs the global logger. `RUST_LOG` takes precedence over `verbose`.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    Builder::new()
        .filter_level(level)
        .parse_env(Env::default())
        .format(|buf, record| {
            let level = record.level().as_str().chars().next().unwrap_or('?');
            writeln!(
                buf,
                "[{}] {}:{} [{level}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.file().unwrap_or("?"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
