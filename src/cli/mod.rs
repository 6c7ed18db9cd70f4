//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。工具只有一个动作（上传），
//! 因此参数直接展开在顶层而不是子命令。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: upload

pub mod upload;

use clap::Parser;

/// upload-assets - 上传本地文件到资源服务器
#[derive(Parser)]
#[command(name = "upload-assets")]
#[command(version)]
#[command(about = "A command-line tool for uploading assets to an assets server", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub upload: upload::UploadArgs,
}
