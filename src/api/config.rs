//! # API 连接配置
//!
//! 由命令行参数构造后显式传入，核心逻辑不直接读取环境变量。
//!
//! ## 依赖关系
//! - 被 `api/client.rs`, `commands/upload.rs` 使用

use clap::ValueEnum;
use std::time::Duration;

/// 默认单次请求超时（秒）
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// 上传请求的编码方式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum RequestEncoding {
    /// Form fields with base64-encoded content and a token field
    #[default]
    Base64,
    /// Multipart body with a raw file part and a bearer token header
    Multipart,
}

/// 资源服务器连接配置
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// 域名，或包含 scheme 的完整 API 地址
    pub domain: String,
    pub token: String,
    /// 使用 http 而非 https
    pub insecure: bool,
    pub timeout: Duration,
    pub encoding: RequestEncoding,
}

impl ApiConfig {
    pub fn new(domain: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            token: token.into(),
            insecure: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            encoding: RequestEncoding::default(),
        }
    }

    /// API 基础地址，例如 `https://assets.ubuntu.com/v1`
    pub fn api_url(&self) -> String {
        let domain = self.domain.trim_end_matches('/');
        if domain.contains("://") {
            return domain.to_string();
        }

        let scheme = if self.insecure { "http" } else { "https" };
        format!("{}://{}/v1", scheme, domain)
    }
}
