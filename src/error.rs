//! # 统一错误处理模块
//!
//! 定义 upload-assets 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// upload-assets 统一错误类型
#[derive(Error, Debug)]
pub enum AssetError {
    // ─────────────────────────────────────────────────────────────
    // 参数错误（在任何网络请求之前检测）
    // ─────────────────────────────────────────────────────────────
    #[error("No files specified")]
    NoFilesSpecified,

    #[error("The \"--url-path\" option can only be used when uploading a single file")]
    UrlPathRequiresSingleFile,

    #[error("The \"--url-path\"'s extension should match the file type")]
    UrlPathExtensionMismatch,

    // ─────────────────────────────────────────────────────────────
    // 服务端响应错误
    // ─────────────────────────────────────────────────────────────
    #[error("URL path already exists: {url}")]
    UrlPathExists { url: String },

    #[error("Permission denied. Did you provide a valid API token?")]
    PermissionDenied,

    #[error("Bad gateway. Check the API endpoint, e.g. 'https://assets.ubuntu.com/v1'")]
    BadGateway,

    #[error("Unexpected response from server: HTTP {status}")]
    UnexpectedResponse { status: u16, body: String },

    #[error("Failed to decode server response")]
    InvalidResponse {
        body: String,
        #[source]
        source: serde_json::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 传输 / I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Request failed")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output")]
    OutputError(#[from] std::io::Error),
}

impl AssetError {
    /// 进程退出码：用户可见的致命错误为 1，未分类的传输/解码错误为 2
    pub fn exit_code(&self) -> i32 {
        match self {
            AssetError::UnexpectedResponse { .. }
            | AssetError::InvalidResponse { .. }
            | AssetError::Transport(_) => 2,
            _ => 1,
        }
    }

    /// 服务端原始响应体（仅未分类错误携带）
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            AssetError::UnexpectedResponse { body, .. } | AssetError::InvalidResponse { body, .. } => {
                Some(body)
            }
            _ => None,
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, AssetError>;
