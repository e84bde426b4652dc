use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
    sync::{Mutex, OnceLock},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DesktopLogCategory {
    Startup,
    Runtime,
    Dialog,
    Shutdown,
}

impl DesktopLogCategory {
    fn as_str(self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Runtime => "runtime",
            Self::Dialog => "dialog",
            Self::Shutdown => "shutdown",
        }
    }
}

pub(crate) fn resolve_desktop_log_path(root_dir: Option<PathBuf>, file_name: &str) -> PathBuf {
    match root_dir {
        Some(root) => root.join("logs").join(file_name),
        None => std::env::temp_dir()
            .join("container-desktop")
            .join("logs")
            .join(file_name),
    }
}

fn format_log_line(category: DesktopLogCategory, message: &str) -> String {
    format!(
        "[{}] [{}] {}\n",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        category.as_str(),
        message
    )
}

fn backup_path(log_path: &Path, index: usize) -> PathBuf {
    let mut raw = log_path.as_os_str().to_os_string();
    raw.push(format!(".{index}"));
    PathBuf::from(raw)
}

/// Shifts `desktop.log` to `desktop.log.1`, `.1` to `.2` and so on, dropping
/// whatever falls past `backup_count`.
pub(crate) fn rotate_log_if_needed(
    log_path: &Path,
    max_bytes: u64,
    backup_count: usize,
) -> Result<(), String> {
    let size = match fs::metadata(log_path) {
        Ok(metadata) => metadata.len(),
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(error) => {
            return Err(format!(
                "Failed to stat log file {}: {}",
                log_path.display(),
                error
            ))
        }
    };
    if size < max_bytes {
        return Ok(());
    }

    if backup_count == 0 {
        return fs::remove_file(log_path).map_err(|error| {
            format!(
                "Failed to truncate log file {}: {}",
                log_path.display(),
                error
            )
        });
    }

    let oldest = backup_path(log_path, backup_count);
    if oldest.exists() {
        fs::remove_file(&oldest).map_err(|error| {
            format!(
                "Failed to remove old log backup {}: {}",
                oldest.display(),
                error
            )
        })?;
    }

    for index in (1..backup_count).rev() {
        let source = backup_path(log_path, index);
        if source.exists() {
            let target = backup_path(log_path, index + 1);
            fs::rename(&source, &target).map_err(|error| {
                format!(
                    "Failed to rotate log backup {} -> {}: {}",
                    source.display(),
                    target.display(),
                    error
                )
            })?;
        }
    }

    let first = backup_path(log_path, 1);
    fs::rename(log_path, &first).map_err(|error| {
        format!(
            "Failed to rotate log file {} -> {}: {}",
            log_path.display(),
            first.display(),
            error
        )
    })
}

fn write_log_line(
    log_path: &Path,
    line: &str,
    max_bytes: u64,
    backup_count: usize,
) -> Result<(), String> {
    if let Some(parent_dir) = log_path.parent() {
        fs::create_dir_all(parent_dir).map_err(|error| {
            format!(
                "Failed to create log directory {}: {}",
                parent_dir.display(),
                error
            )
        })?;
    }

    rotate_log_if_needed(log_path, max_bytes, backup_count)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .map_err(|error| format!("Failed to open log file {}: {}", log_path.display(), error))?;
    file.write_all(line.as_bytes())
        .map_err(|error| format!("Failed to write log file {}: {}", log_path.display(), error))
}

pub(crate) fn append_desktop_log(
    category: DesktopLogCategory,
    message: &str,
    root_dir: Option<PathBuf>,
    file_name: &str,
    max_bytes: u64,
    backup_count: usize,
    write_lock: &OnceLock<Mutex<()>>,
) {
    let line = format_log_line(category, message);
    let log_path = resolve_desktop_log_path(root_dir, file_name);

    let lock = write_lock.get_or_init(|| Mutex::new(()));
    let _guard = match lock.lock() {
        Ok(guard) => guard,
        Err(error) => error.into_inner(),
    };

    if cfg!(debug_assertions) {
        eprint!("{line}");
    }
    if let Err(error) = write_log_line(&log_path, &line, max_bytes, backup_count) {
        eprintln!("{error}");
    }
}
