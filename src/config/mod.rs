//! Configuration: runtime settings and startup loading.
//!
//! [`Settings`] is the session-scoped pair of bounded values (decimal
//! precision, operand limit) the ledger and validator consult;
//! [`loader`] resolves their initial values from the TOML config file,
//! environment, and CLI flags.

pub mod loader;
pub mod settings;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig,
};
pub use settings::{Settings, OPERAND_LIMIT_RANGE, PRECISION_RANGE};
