pub mod app_config;
pub mod loader;

pub use app_config::{AppConfig, FileConfig, KEY_QUERY_SUFFIX, normalize_base_url};
pub use loader::{load_config, load_config_file, load_dotenv, parse_config_content, resolve_config};
