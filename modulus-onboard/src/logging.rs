use std::path::{Path, PathBuf};

/// Default log location; the TUI owns stdout, so logs go to a file.
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("modulus-onboard.log")
}

pub fn init(path: Option<&Path>) {
    use env_logger::Target;
    use std::fs;
    use std::io;

    let path = path.map(Path::to_path_buf).unwrap_or_else(default_log_path);

    // If we cannot open the log file (permissions, readonly FS, etc.), fall back to stderr.
    let target = (|| -> io::Result<Target> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        Ok(Target::Pipe(Box::new(file)))
    })()
    .unwrap_or(Target::Stderr);

    env_logger::Builder::new()
        .target(target)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
