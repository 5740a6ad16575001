//! Configuration loader
//!
//! Builds the effective [`Config`] from defaults, an optional file and
//! environment variables.
//!
//! ## Loading Strategy
//! 1. Start from [`Config::default`]
//! 2. Merge a config file over it (explicit path, or the first probed one)
//! 3. If the file is missing but a `<file>.example` sibling exists, use that
//!    and log a warning
//! 4. Overlay environment variables
//! 5. Validate the result
//!
//! ## Environment Variables
//! - `DASHLENS_API_URL`: Base URL of the backend API
//! - `DASHLENS_SQL_ENDPOINT`: Path of the SQL endpoint
//! - `DASHLENS_DEBUG`: Verbose diagnostics (true/false)
//! - `DASHLENS_TIMEOUT_SECS`: Request timeout in seconds
//! - `DASHLENS_RETRY_COUNT`: Attempts per backend request
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./dashlens.json` or `./dashlens.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. `./config/dashlens.json` or `./config/dashlens.toml`
//! 4. Relative to executable location

use std::path::{Path, PathBuf};

use dashlens_domain::{Config, DashLensError, Result};

const FILE_NAMES: &[&str] =
    &["dashlens.json", "dashlens.toml", "config.json", "config.toml"];

const EXAMPLE_SUFFIX: &str = "example";

/// Load configuration with automatic fallback strategy
///
/// A missing file is not an error: defaults are used. An explicitly
/// requested file must exist (or have an `.example` sibling).
///
/// # Errors
/// Returns `DashLensError::Config` if:
/// - The explicit file does not exist
/// - File format is invalid
/// - An environment variable has an invalid value
/// - The merged configuration fails validation
pub fn load(path: Option<PathBuf>) -> Result<Config> {
    let config = match path {
        Some(path) => load_from_file(Some(path))?,
        None => match probe_config_paths() {
            Some(found) => load_from_file(Some(found))?,
            None => {
                tracing::info!("No config file found, using defaults");
                Config::default()
            }
        },
    };

    let config = apply_env_overrides(config)?;
    config.validate()?;

    tracing::info!(api_url = %config.api_url, debug = config.debug, "Configuration loaded");
    Ok(config)
}

/// Overlay `DASHLENS_*` environment variables on `config`
///
/// Unset variables leave the corresponding field untouched.
///
/// # Errors
/// Returns `DashLensError::Config` if a numeric variable does not parse.
pub fn apply_env_overrides(mut config: Config) -> Result<Config> {
    if let Some(url) = env_var("DASHLENS_API_URL") {
        config.api_url = url;
    }
    if let Some(endpoint) = env_var("DASHLENS_SQL_ENDPOINT") {
        config.sql_endpoint = endpoint;
    }
    config.debug = env_bool("DASHLENS_DEBUG", config.debug);

    if let Some(raw) = env_var("DASHLENS_TIMEOUT_SECS") {
        config.timeout_secs = raw
            .parse::<u64>()
            .map_err(|e| DashLensError::Config(format!("Invalid timeout: {}", e)))?;
    }
    if let Some(raw) = env_var("DASHLENS_RETRY_COUNT") {
        config.retry_count = raw
            .parse::<usize>()
            .map_err(|e| DashLensError::Config(format!("Invalid retry count: {}", e)))?;
    }

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
/// Keys missing from the file keep their default values.
///
/// # Errors
/// Returns `DashLensError::Config` if:
/// - Neither the file nor its `.example` sibling exists
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let requested = match path {
        Some(p) => p,
        None => probe_config_paths().ok_or_else(|| {
            DashLensError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    let config_path = if requested.exists() {
        requested
    } else {
        let example = example_path(&requested);
        if !example.exists() {
            return Err(DashLensError::Config(format!(
                "Config file not found: {}",
                requested.display()
            )));
        }
        tracing::warn!(
            path = %example.display(),
            "Config file missing, using example configuration"
        );
        example
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DashLensError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`); for
/// `name.json.example` the extension before `.example` counts.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = config_format(path);

    match extension.as_str() {
        "toml" => toml::from_str(contents)
            .map_err(|e| DashLensError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| DashLensError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(DashLensError::Config(format!("Unsupported config format: {}", extension))),
    }
}

fn config_format(path: &Path) -> String {
    let extension = |p: &Path| p.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);

    match extension(path) {
        Some(ext) if ext == EXAMPLE_SUFFIX => path
            .file_stem()
            .map(Path::new)
            .and_then(extension)
            .unwrap_or_else(|| "json".to_string()),
        Some(ext) => ext,
        None => "json".to_string(),
    }
}

fn example_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(EXAMPLE_SUFFIX);
    PathBuf::from(name)
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory, its `config/` subdirectory and
/// the executable's directory. A `.example` file also counts as found so
/// that [`load_from_file`] can fall back to it.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.clone());
        dirs.push(cwd.join("config"));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    probe_in(&dirs)
}

fn probe_in(dirs: &[PathBuf]) -> Option<PathBuf> {
    let candidates: Vec<PathBuf> =
        dirs.iter().flat_map(|dir| FILE_NAMES.iter().map(move |name| dir.join(name))).collect();

    candidates
        .iter()
        .find(|path| path.exists())
        .or_else(|| candidates.iter().find(|path| example_path(path).exists()))
        .cloned()
}

/// Read an environment variable, treating empty values as unset
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
///
/// # Returns
/// The parsed boolean value, or `default` if not set.
fn env_bool(key: &str, default: bool) -> bool {
    env_var(key)
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
