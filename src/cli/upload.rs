//! # 上传参数 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/upload.rs`

use crate::api::config::DEFAULT_TIMEOUT_SECS;
use crate::api::RequestEncoding;

use clap::Args;

/// 上传参数
#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Paths to files or directories to upload (directories are searched recursively)
    #[arg(required = true)]
    pub paths: Vec<String>,

    // ─────────────────────────────────────────────────────────────
    // API options
    // ─────────────────────────────────────────────────────────────
    /// Domain of the assets server, or a full API base URL
    #[arg(
        short = 'd',
        long,
        env = "UPLOAD_ASSETS_API_DOMAIN",
        default_value = "assets.ubuntu.com"
    )]
    pub api_domain: String,

    /// Secret authentication token for the API
    #[arg(short = 's', long, env = "UPLOAD_ASSETS_API_TOKEN", hide_env_values = true)]
    pub api_token: String,

    /// Use plain HTTP instead of HTTPS
    #[arg(long, default_value_t = false)]
    pub insecure: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// How the file is encoded in the upload request
    #[arg(long, value_enum, default_value = "base64")]
    pub encoding: RequestEncoding,

    // ─────────────────────────────────────────────────────────────
    // Upload options
    // ─────────────────────────────────────────────────────────────
    /// URL path to upload the file to (single file only)
    #[arg(short = 'p', long)]
    pub url_path: Option<String>,

    /// Tags for uploaded assets
    #[arg(short = 't', long, default_value = "auto-upload")]
    pub tags: Option<String>,

    // ─────────────────────────────────────────────────────────────
    // Asset metadata
    // ─────────────────────────────────────────────────────────────
    /// Asset type (e.g. 'image', 'document')
    #[arg(long = "type")]
    pub asset_type: Option<String>,

    /// Author of the assets
    #[arg(long)]
    pub author: Option<String>,

    /// Products the assets relate to (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub products: Vec<String>,

    /// Language of the assets
    #[arg(long)]
    pub language: Option<String>,

    /// Salesforce campaign ID
    #[arg(long)]
    pub campaign: Option<String>,

    /// Mark the assets as deprecated
    #[arg(long, default_value_t = false)]
    pub deprecated: bool,

    /// External reference link (repeatable)
    #[arg(long = "reference")]
    pub references: Vec<String>,
}
