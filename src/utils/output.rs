//! # 美化输出工具
//!
//! 提供统一的终端输出样式。所有诊断信息都写到 stderr，
//! stdout 只保留上传结果 JSON。
//!
//! ## 依赖关系
//! - 被 `main.rs`, `commands/`, `batch/` 使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    eprintln!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    eprintln!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印缩进的附加信息（原始响应体、错误链）
pub fn print_detail(label: &str, detail: &str) {
    eprintln!("  {} {}", format!("{}:", label).dimmed(), detail);
}
