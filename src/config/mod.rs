mod settings;

pub use settings::{ResolverConfig, ServerConfig, Settings, load_settings, load_settings_from};
