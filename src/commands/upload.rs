//! # upload 命令实现
//!
//! 将命令行参数转换为显式配置，解析文件列表，交给编排器上传。
//! 结果 JSON 写到 stdout，其余信息写到 stderr。
//!
//! ## 依赖关系
//! - 使用 `cli/upload.rs` 定义的参数
//! - 使用 `batch/`, `api/`
//! - 使用 `utils/output.rs`

use crate::api::{ApiConfig, AssetClient};
use crate::batch::{gather_files, BatchRunner};
use crate::cli::upload::UploadArgs;
use crate::error::Result;
use crate::models::AssetMetadata;
use crate::utils::output;

use std::io;
use std::time::Duration;

/// 执行 upload 命令
pub fn execute(args: UploadArgs) -> Result<()> {
    let files = gather_files(&args.paths);

    let config = api_config(&args);
    let metadata = asset_metadata(&args);
    let client = AssetClient::new(config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let results = BatchRunner::new(&client, &metadata).run(&files, args.url_path.as_deref(), &mut out)?;

    let existing = results.iter().filter(|r| r.existing).count();
    if existing > 0 {
        output::print_info(&format!("{} assets already existed on the server", existing));
    }
    output::print_done(&format!("Uploaded {} assets", results.len() - existing));

    Ok(())
}

fn api_config(args: &UploadArgs) -> ApiConfig {
    ApiConfig {
        insecure: args.insecure,
        timeout: Duration::from_secs(args.timeout),
        encoding: args.encoding,
        ..ApiConfig::new(args.api_domain.clone(), args.api_token.clone())
    }
}

fn asset_metadata(args: &UploadArgs) -> AssetMetadata {
    AssetMetadata {
        tags: args.tags.clone(),
        asset_type: args.asset_type.clone(),
        author: args.author.clone(),
        products: args.products.clone(),
        language: args.language.clone(),
        campaign: args.campaign.clone(),
        deprecated: args.deprecated,
        references: args.references.clone(),
    }
}
