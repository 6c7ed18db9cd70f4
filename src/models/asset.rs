//! # 资源数据模型
//!
//! 定义上传流程中流转的数据结构：待上传文件、单次上传请求、上传结果以及
//! 附加的资源元数据。所有字段在构造时确定，之后不再修改。
//!
//! ## 依赖关系
//! - 被 `batch/`, `api/` 使用
//! - 使用 `serde` 序列化输出结果

use serde::Serialize;
use std::path::{Path, PathBuf};

/// 单个已解析的本地文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadTarget {
    /// 绝对路径
    path: PathBuf,
    /// 展示用文件名（空格替换为 `+`）
    filename: String,
    /// 扩展名（不含 `.`）
    extension: Option<String>,
}

impl UploadTarget {
    pub fn new(path: PathBuf) -> Self {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().replace(' ', "+"))
            .unwrap_or_default();
        let extension = extension_of(&path);

        Self {
            path,
            filename,
            extension,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }
}

/// 取路径最后一段的扩展名
pub fn extension_of(path: &Path) -> Option<String> {
    path.extension().map(|e| e.to_string_lossy().into_owned())
}

/// 随每个文件一起提交的元数据
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetMetadata {
    pub tags: Option<String>,
    pub asset_type: Option<String>,
    pub author: Option<String>,
    pub products: Vec<String>,
    pub language: Option<String>,
    pub campaign: Option<String>,
    pub deprecated: bool,
    pub references: Vec<String>,
}

impl AssetMetadata {
    /// 转换为表单字段；未设置的字段不发送
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::new();

        push_opt(&mut fields, "tags", &self.tags);
        push_opt(&mut fields, "asset_type", &self.asset_type);
        push_opt(&mut fields, "author", &self.author);
        if !self.products.is_empty() {
            fields.push(("products", json_list(&self.products)));
        }
        push_opt(&mut fields, "language", &self.language);
        push_opt(&mut fields, "salesforce_campaign_id", &self.campaign);
        if self.deprecated {
            fields.push(("deprecated", "true".to_string()));
        }
        if !self.references.is_empty() {
            fields.push(("external_references", json_list(&self.references)));
        }

        fields
    }
}

fn push_opt(fields: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    if let Some(v) = value {
        fields.push((key, v.clone()));
    }
}

fn json_list(items: &[String]) -> String {
    serde_json::Value::from(items.to_vec()).to_string()
}

/// 单次上传请求参数
#[derive(Debug, Clone, Copy)]
pub struct UploadRequest<'a> {
    pub target: &'a UploadTarget,
    /// 目标 URL 路径，仅单文件上传时有效
    pub url_path: Option<&'a str>,
    /// 为 true 时 409 视为致命错误
    pub error_on_conflict: bool,
    pub metadata: &'a AssetMetadata,
}

impl<'a> UploadRequest<'a> {
    /// 除文件内容与凭据外的全部表单字段
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![("friendly-name", self.target.filename().to_string())];
        if let Some(url_path) = self.url_path {
            fields.push(("url-path", url_path.to_string()));
        }
        fields.extend(self.metadata.form_fields());
        fields
    }
}

/// 单个文件的上传结果（输出 JSON 数组中的一项）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadResult {
    pub local_filepath: String,
    /// 远程 URL；服务端报告已存在但未给出路径时为 null
    pub url: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub existing: bool,
}

impl UploadResult {
    pub fn created(target: &UploadTarget, url: String) -> Self {
        Self {
            local_filepath: target.path().display().to_string(),
            url: Some(url),
            existing: false,
        }
    }

    pub fn existing(target: &UploadTarget, url: Option<String>) -> Self {
        Self {
            local_filepath: target.path().display().to_string(),
            url,
            existing: true,
        }
    }
}
