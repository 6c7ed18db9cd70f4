//! # 数据模型模块
//!
//! 定义上传流程中的文件、请求与结果数据模型。
//!
//! ## 依赖关系
//! - 被 `batch/` 和 `api/` 使用
//! - 子模块: asset

pub mod asset;

pub use asset::{extension_of, AssetMetadata, UploadRequest, UploadResult, UploadTarget};
