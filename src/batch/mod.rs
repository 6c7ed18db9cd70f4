//! # 批量处理模块
//!
//! 路径解析与批量上传编排。
//!
//! ## 功能
//! - 将文件/目录/通配符输入解析为有序文件列表
//! - 顺序上传并增量输出 JSON 结果
//!
//! ## 依赖关系
//! - 被 `commands/upload.rs` 使用
//! - 使用 `api/` 发送请求
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::gather_files;
pub use runner::BatchRunner;
