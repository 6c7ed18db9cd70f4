//! # HTTP 客户端
//!
//! 基于 `reqwest` 阻塞客户端向资源服务器提交单个文件。每个请求都有固定超时，
//! 超时与连接失败直接作为 `AssetError::Transport` 返回，不做重试。
//!
//! ## 依赖关系
//! - 实现 `api::AssetStore`
//! - 使用 `api/config.rs`, `api/response.rs`, `models/asset.rs`

use super::config::{ApiConfig, RequestEncoding};
use super::response::UploadOutcome;
use super::AssetStore;
use crate::error::{AssetError, Result};
use crate::models::UploadRequest;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::blocking::{multipart, Client, RequestBuilder};

/// 资源服务器客户端
pub struct AssetClient {
    client: Client,
    config: ApiConfig,
    api_url: String,
}

impl AssetClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        let api_url = config.api_url();

        Ok(Self {
            client,
            config,
            api_url,
        })
    }

    /// 表单编码：内容以 base64 放入 `asset` 字段，凭据放入 `token` 字段
    fn base64_request(&self, request: &UploadRequest, content: &[u8]) -> RequestBuilder {
        let mut fields = request.form_fields();
        fields.push(("asset", STANDARD.encode(content)));
        fields.push(("type", "base64".to_string()));
        fields.push(("token", self.config.token.clone()));

        self.client.post(&self.api_url).form(&fields)
    }

    /// multipart 编码：原始文件作为 `asset` 部分，凭据走 Bearer 头
    fn multipart_request(&self, request: &UploadRequest, content: Vec<u8>) -> RequestBuilder {
        let part = multipart::Part::bytes(content).file_name(request.target.filename().to_string());
        let form = request
            .form_fields()
            .into_iter()
            .fold(multipart::Form::new(), |form, (key, value)| form.text(key, value))
            .part("asset", part);

        self.client
            .post(&self.api_url)
            .bearer_auth(&self.config.token)
            .multipart(form)
    }
}

impl AssetStore for AssetClient {
    fn api_url(&self) -> &str {
        &self.api_url
    }

    fn upload(&self, request: &UploadRequest) -> Result<UploadOutcome> {
        let path = request.target.path();
        let content = std::fs::read(path).map_err(|e| AssetError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

        let builder = match self.config.encoding {
            RequestEncoding::Base64 => self.base64_request(request, &content),
            RequestEncoding::Multipart => self.multipart_request(request, content),
        };

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        UploadOutcome::classify(status, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_uses_config_api_url() {
        let config = ApiConfig {
            insecure: true,
            ..ApiConfig::new("localhost:8080", "secret")
        };
        let client = AssetClient::new(config).unwrap();
        assert_eq!(client.api_url(), "http://localhost:8080/v1");
    }

    #[test]
    fn test_missing_file_is_read_error() {
        use crate::models::{AssetMetadata, UploadTarget};
        use std::path::PathBuf;

        let client = AssetClient::new(ApiConfig::new("localhost:1", "secret")).unwrap();
        let target = UploadTarget::new(PathBuf::from("/nonexistent/upload-assets/a.png"));
        let metadata = AssetMetadata::default();
        let request = UploadRequest {
            target: &target,
            url_path: None,
            error_on_conflict: false,
            metadata: &metadata,
        };

        let err = client.upload(&request).unwrap_err();
        assert!(matches!(err, AssetError::FileReadError { .. }));
    }

    #[test]
    fn test_stalled_server_times_out() {
        use crate::models::{AssetMetadata, UploadTarget};
        use std::net::TcpListener;
        use std::time::{Duration, Instant};

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("logo.png");
        std::fs::write(&path, b"png").unwrap();

        // 只监听，从不响应
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let config = ApiConfig {
            insecure: true,
            timeout: Duration::from_millis(200),
            ..ApiConfig::new(addr.to_string(), "secret")
        };
        let client = AssetClient::new(config).unwrap();

        let target = UploadTarget::new(path);
        let metadata = AssetMetadata::default();
        let request = UploadRequest {
            target: &target,
            url_path: None,
            error_on_conflict: false,
            metadata: &metadata,
        };

        let started = Instant::now();
        let err = client.upload(&request).unwrap_err();
        assert!(started.elapsed() < Duration::from_secs(10));
        assert!(matches!(err, AssetError::Transport(_)));
        assert_eq!(err.exit_code(), 2);
        drop(listener);
    }
}
