//! # 批量上传编排器
//!
//! 决定上传模式，逐个顺序上传文件，并将结果以 JSON 数组形式增量写出。
//!
//! ## 功能
//! - 模式选择：空列表 / 指定 URL 路径（单文件）/ 单文件 / 多文件
//! - 对每个文件的响应分类结果做统一处理
//! - 每完成一个上传立即写出并 flush 对应的数组元素
//!
//! ## 依赖关系
//! - 被 `commands/upload.rs` 调用
//! - 使用 `api::AssetStore` 发送请求
//! - 使用 `utils/progress.rs` 显示进度

use crate::api::{join_url, AssetStore, UploadOutcome};
use crate::error::{AssetError, Result};
use crate::models::{extension_of, AssetMetadata, UploadRequest, UploadResult, UploadTarget};
use crate::utils::{output, progress};

use indicatif::ProgressBar;
use std::io::Write;
use std::path::Path;

/// 批量上传执行器
pub struct BatchRunner<'a, S: AssetStore> {
    store: &'a S,
    metadata: &'a AssetMetadata,
}

impl<'a, S: AssetStore> BatchRunner<'a, S> {
    pub fn new(store: &'a S, metadata: &'a AssetMetadata) -> Self {
        Self { store, metadata }
    }

    /// 上传文件列表，结果写入 `out`
    ///
    /// 参数错误在任何网络请求之前返回，此时 `out` 中没有任何输出。
    /// 中途失败时 `out` 中保留已写出的部分数组。
    pub fn run<W: Write>(
        &self,
        files: &[UploadTarget],
        url_path: Option<&str>,
        out: &mut W,
    ) -> Result<Vec<UploadResult>> {
        if files.is_empty() {
            return Err(AssetError::NoFilesSpecified);
        }

        match url_path {
            Some(url_path) => self.run_at_path(files, url_path, out),
            None => self.run_all(files, out),
        }
    }

    /// 指定 URL 路径：仅允许单文件，扩展名必须一致，409 视为致命错误
    fn run_at_path<W: Write>(
        &self,
        files: &[UploadTarget],
        url_path: &str,
        out: &mut W,
    ) -> Result<Vec<UploadResult>> {
        let target = match files {
            [target] if target.path().is_file() => target,
            _ => return Err(AssetError::UrlPathRequiresSingleFile),
        };

        if extension_of(Path::new(url_path)).as_deref() != target.extension() {
            return Err(AssetError::UrlPathExtensionMismatch);
        }

        let request = UploadRequest {
            target,
            url_path: Some(url_path),
            error_on_conflict: true,
            metadata: self.metadata,
        };
        let result = self.upload(&request, &ProgressBar::hidden())?;

        let mut stream = JsonArrayStream::new(out);
        stream.push(&result)?;
        stream.finish()?;

        Ok(vec![result])
    }

    /// 顺序上传全部文件，409 视为已上传
    fn run_all<W: Write>(&self, files: &[UploadTarget], out: &mut W) -> Result<Vec<UploadResult>> {
        let pb = progress::create_progress_bar(files.len() as u64, "Uploading");
        let mut stream = JsonArrayStream::new(out);
        let mut results = Vec::with_capacity(files.len());

        for target in files {
            let request = UploadRequest {
                target,
                url_path: None,
                error_on_conflict: false,
                metadata: self.metadata,
            };

            let result = match self.upload(&request, &pb) {
                Ok(result) => result,
                Err(e) => {
                    pb.abandon();
                    return Err(e);
                }
            };

            pb.suspend(|| stream.push(&result))?;
            pb.inc(1);
            results.push(result);
        }

        pb.finish_and_clear();
        stream.finish()?;

        Ok(results)
    }

    /// 上传单个文件并处理分类结果
    fn upload(&self, request: &UploadRequest, pb: &ProgressBar) -> Result<UploadResult> {
        let api_url = self.store.api_url();
        pb.set_message(request.target.filename().to_string());

        match self.store.upload(request)? {
            UploadOutcome::Created(info) => Ok(UploadResult::created(
                request.target,
                join_url(api_url, &info.file_path),
            )),
            UploadOutcome::Conflict(_) if request.error_on_conflict => {
                Err(AssetError::UrlPathExists {
                    url: join_url(api_url, request.url_path.unwrap_or_default()),
                })
            }
            UploadOutcome::Conflict(info) => {
                pb.suspend(|| {
                    output::print_warning(&format!(
                        "'{}' already exists on the server",
                        request.target.path().display()
                    ));
                });
                Ok(UploadResult::existing(
                    request.target,
                    info.map(|info| join_url(api_url, &info.file_path)),
                ))
            }
            UploadOutcome::Forbidden => Err(AssetError::PermissionDenied),
            UploadOutcome::BadGateway => Err(AssetError::BadGateway),
            UploadOutcome::Unexpected { status, body } => {
                Err(AssetError::UnexpectedResponse { status, body })
            }
        }
    }
}

/// 增量写出的 JSON 数组；每个元素写出后立即 flush
struct JsonArrayStream<'w, W: Write> {
    out: &'w mut W,
    count: usize,
}

impl<'w, W: Write> JsonArrayStream<'w, W> {
    fn new(out: &'w mut W) -> Self {
        Self { out, count: 0 }
    }

    fn push(&mut self, result: &UploadResult) -> Result<()> {
        let element = serde_json::to_string(result).map_err(std::io::Error::from)?;
        let separator = if self.count == 0 { "[\n" } else { ",\n" };

        write!(self.out, "{}  {}", separator, element)?;
        self.out.flush()?;
        self.count += 1;
        Ok(())
    }

    fn finish(self) -> Result<()> {
        if self.count == 0 {
            writeln!(self.out, "[]")?;
        } else {
            writeln!(self.out, "\n]")?;
        }
        self.out.flush()?;
        Ok(())
    }
}
