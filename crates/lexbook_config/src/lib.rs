use config::{Config, ConfigError, Environment, File, FileFormat};
use once_cell::sync::OnceCell;
use std::env;
use std::path::PathBuf;
use tracing::debug;
pub mod models;
pub use models::*;

/// Environment variable prefix, e.g. `LEXBOOK__BOOKING__CONFIRMATION_DELAY_MS=0`.
pub const ENV_PREFIX: &str = "LEXBOOK";

/// Loads the layered configuration.
///
/// Sources, later ones win:
/// 1. `<config dir>/default.*` (optional)
/// 2. `<config dir>/<RUN_ENV>.*` (optional, `RUN_ENV` defaults to `debug`)
/// 3. `LEXBOOK__*` environment variables, `__` separating nested keys
///
/// The config dir is `LEXBOOK_CONFIG_DIR` or `./config`.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let config_dir = env::var("LEXBOOK_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));

    let default_path = config_dir.join("default");
    let env_path = config_dir.join(&run_env);
    debug!(
        "Loading config from {} and {}",
        default_path.display(),
        env_path.display()
    );

    let builder = Config::builder()
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

    builder.build()?.try_deserialize()
}

/// Builds the configuration from an in-memory TOML document only.
///
/// Missing keys take their defaults; no files or environment are consulted.
pub fn load_config_from_str(toml: &str) -> Result<AppConfig, ConfigError> {
    Config::builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()?
        .try_deserialize()
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file is `DOTENV_OVERRIDE` if set, otherwise `.env`. Loading happens
/// once per process; the path that was used is returned.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = std::env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
