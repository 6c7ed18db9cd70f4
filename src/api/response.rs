//! # 响应分类
//!
//! 将服务端的 (状态码, 响应体) 归类为有限的几种结果，由编排器统一 `match`。
//!
//! ## 依赖关系
//! - 被 `api/client.rs`, `batch/runner.rs` 使用
//! - 使用 `serde_json` 解析响应体

use crate::error::{AssetError, Result};

use serde::Deserialize;

/// 服务端返回的资源描述
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetInfo {
    /// 相对于 API 基础地址的路径
    pub file_path: String,
}

/// 单次上传的结果分类
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// 2xx：资源已创建
    Created(AssetInfo),
    /// 409：目标已存在；响应体能解析时附带已有资源信息
    Conflict(Option<AssetInfo>),
    /// 403：凭据无效
    Forbidden,
    /// 502：API 地址配置有误
    BadGateway,
    /// 其他非 2xx 状态
    Unexpected { status: u16, body: String },
}

impl UploadOutcome {
    /// 按状态码分类；2xx 响应体不是合法 JSON 时返回错误
    pub fn classify(status: u16, body: String) -> Result<Self> {
        match status {
            200..=299 => serde_json::from_str(&body)
                .map(UploadOutcome::Created)
                .map_err(|source| AssetError::InvalidResponse { body, source }),
            409 => Ok(UploadOutcome::Conflict(serde_json::from_str(&body).ok())),
            403 => Ok(UploadOutcome::Forbidden),
            502 => Ok(UploadOutcome::BadGateway),
            _ => Ok(UploadOutcome::Unexpected { status, body }),
        }
    }
}
