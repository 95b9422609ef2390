use std::sync::LazyLock;

use ping_utils::config_util;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AppConfig {
    /// port the http server listens on
    #[serde(alias = "HTTP_PORT", default = "default_http_port")]
    pub http_port: u16,
}

fn default_http_port() -> u16 {
    8080
}

static CONFIG: LazyLock<AppConfig> = LazyLock::new(|| {
    config_util::get_config::<AppConfig>("HTTP_").expect("ping-http failed reading config")
});

/// get configs of ping-http
pub(crate) fn config() -> &'static AppConfig {
    &CONFIG
}
