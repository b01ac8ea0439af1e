use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};

const APP_DIR: &str = "focal";

/// Flags that can be saved as defaults in a config file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub no_save: bool,
    pub perf: bool,
    pub width: Option<usize>,
    pub content_dir: Option<PathBuf>,
    pub progress_file: Option<PathBuf>,
    pub render_debug_log: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge two flag sets; booleans combine, `other` wins for options.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            no_save: self.no_save || other.no_save,
            perf: self.perf || other.perf,
            width: other.width.or(self.width),
            content_dir: other.content_dir.clone().or_else(|| self.content_dir.clone()),
            progress_file: other
                .progress_file
                .clone()
                .or_else(|| self.progress_file.clone()),
            render_debug_log: other
                .render_debug_log
                .clone()
                .or_else(|| self.render_debug_log.clone()),
        }
    }
}

/// Durations of the timed screen transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    /// Splash auto-advance; `None` waits for a key
    pub splash: Option<Duration>,
    pub chapter_intro: Duration,
    pub exit: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            splash: Some(Duration::from_millis(4000)),
            chapter_intro: Duration::from_millis(2500),
            exit: Duration::from_millis(1500),
        }
    }
}

/// Per-user configuration directory for focal.
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return Some(PathBuf::from(appdata).join(APP_DIR));
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return Some(
                PathBuf::from(home)
                    .join("Library")
                    .join("Application Support")
                    .join(APP_DIR),
            );
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return Some(PathBuf::from(xdg).join(APP_DIR));
        }
        if let Some(home) = std::env::var_os("HOME") {
            return Some(PathBuf::from(home).join(".config").join(APP_DIR));
        }
    }

    None
}

pub fn global_config_path() -> PathBuf {
    config_dir().map_or_else(local_override_path, |dir| dir.join("config"))
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".focalrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

/// Load flags, falling back to defaults when the file cannot be read.
///
/// The failure is pushed onto `warnings` so it can be reported once
/// logging is set up.
pub fn load_config_flags_or_default(path: &Path, warnings: &mut Vec<String>) -> ConfigFlags {
    load_config_flags(path).unwrap_or_else(|err| {
        warnings.push(format!("{err:#}; using defaults"));
        ConfigFlags::default()
    })
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = vec!["# focal defaults (saved with --save)".to_string()];
    if flags.no_save {
        lines.push("--no-save".to_string());
    }
    if flags.perf {
        lines.push("--perf".to_string());
    }
    if let Some(width) = flags.width {
        lines.push(format!("--width {width}"));
    }
    if let Some(dir) = &flags.content_dir {
        lines.push(format!("--content-dir {}", dir.display()));
    }
    if let Some(file) = &flags.progress_file {
        lines.push(format!("--progress-file {}", file.display()));
    }
    if let Some(log) = &flags.render_debug_log {
        lines.push(format!("--render-debug-log {}", log.display()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Extract saveable flags from raw arguments, ignoring everything else.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        let (name, inline_value) = match token.split_once('=') {
            Some((name, value)) if name.starts_with("--") => (name, Some(value)),
            _ => (token, None),
        };
        let mut value = || {
            inline_value.map(ToOwned::to_owned).or_else(|| {
                let next = tokens.get(i + 1).cloned();
                if next.is_some() {
                    i += 1;
                }
                next
            })
        };
        match name {
            "--no-save" => flags.no_save = true,
            "--perf" => flags.perf = true,
            "--width" => flags.width = value().and_then(|v| v.parse().ok()),
            "--content-dir" => flags.content_dir = value().map(PathBuf::from),
            "--progress-file" => flags.progress_file = value().map(PathBuf::from),
            "--render-debug-log" => flags.render_debug_log = value().map(PathBuf::from),
            _ => {}
        }
        i += 1;
    }
    flags
}
