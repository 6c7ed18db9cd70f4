//! # 资源服务器 API 模块
//!
//! 封装与资源服务器的 HTTP 交互。编排器只依赖 `AssetStore` trait，
//! 测试时可替换为内存实现。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs`, `commands/upload.rs` 使用
//! - 子模块: client, config, response

pub mod client;
pub mod config;
pub mod response;

pub use client::AssetClient;
pub use config::{ApiConfig, RequestEncoding};
pub use response::UploadOutcome;

use crate::error::Result;
use crate::models::UploadRequest;

/// 上传单个文件并返回分类后的结果
pub trait AssetStore {
    /// API 基础地址，用于拼接远程 URL
    fn api_url(&self) -> &str;

    fn upload(&self, request: &UploadRequest) -> Result<UploadOutcome>;
}

/// 拼接 API 基础地址与服务端返回的相对路径
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
