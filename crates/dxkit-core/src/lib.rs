pub mod clock;
pub mod config;
pub mod context;
pub mod error;
pub mod path;

pub use clock::{Clock, SystemClock};
pub use config::{ApiConfig, Config};
pub use context::{ApiServer, Context, ContextOverrides};
pub use error::{Error, Result};
pub use path::{
    Layout, ensure_dir, expand_tilde, make_unix_filename, resolve_config_dir, resolve_home,
};
