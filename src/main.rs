//! # upload-assets - 资源上传工具
//!
//! 将本地文件（或目录下的全部文件）上传到资源服务器，
//! 并以 JSON 数组输出每个文件对应的远程 URL。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (路径解析与批量编排)
//!   │     ├── api/       (HTTP 客户端与响应分类)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod api;
mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod utils;

use clap::Parser;
use cli::Cli;
use std::error::Error as _;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        if let Some(body) = e.raw_body() {
            eprintln!("{}", body);
        }
        utils::output::print_error(&e.to_string());

        let mut source = e.source();
        while let Some(cause) = source {
            utils::output::print_detail("Caused by", &cause.to_string());
            source = cause.source();
        }

        std::process::exit(e.exit_code());
    }
}
