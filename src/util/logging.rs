use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

pub fn log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|p| p.join("sbtrack").join("sbtrack.log"))
}

/// Route `log` records to an append-only file; the terminal belongs to the
/// TUI. Level comes from `RUST_LOG`, defaulting to `info`. When the log
/// file cannot be opened, logging stays disabled.
pub fn init() {
    let Some(path) = log_path() else { return };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(f)  => f,
        Err(_) => return,
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
