use std::net::SocketAddr;
use thiserror::Error;

/// ログフィルタの既定値（`RUST_LOG`が未設定のとき）
pub const DEFAULT_LOG_FILTER: &str = "library_catalog=debug,tower_http=debug";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// 設定読み込みのエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got '{0}'")]
    InvalidPort(String),

    #[error("Invalid listen address '{0}'")]
    InvalidAddress(String),
}

/// サーバー設定
///
/// 環境変数から読み込む：
/// - `LIBRARY_HOST`: 待ち受けホスト（既定 `0.0.0.0`）
/// - `PORT`: 待ち受けポート（既定 `3000`）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意の参照関数から読み込む（テストでプロセス環境を汚さないため）
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("LIBRARY_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { host, port })
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddress(addr))
    }
}
