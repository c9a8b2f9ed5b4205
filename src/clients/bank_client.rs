//! 题库 API 客户端
//!
//! 封装所有与题库后端（`/api/v1/questions`）的 HTTP 调用逻辑。
//! 每次调用单次发出，不重试；超时交给底层传输层的缺省值

use crate::clients::QuestionApi;
use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::models::{Question, QuestionId, QuestionSubmission};
use serde::de::DeserializeOwned;
use tracing::debug;

/// 题库 API 客户端
#[derive(Clone)]
pub struct BankClient {
    http: reqwest::Client,
    base_url: String,
}

impl BankClient {
    /// 创建新的题库客户端
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// 集合地址
    fn collection_url(&self) -> String {
        format!("{}/api/v1/questions", self.base_url)
    }

    /// 单个资源地址
    fn resource_url(&self, id: QuestionId) -> String {
        format!("{}/api/v1/questions/{}", self.base_url, id)
    }

    /// 检查状态码并解码响应体
    ///
    /// 非 2xx 时不读取响应体（错误路径下不假设响应体可解析）
    async fn decode_response<T: DeserializeOwned>(
        endpoint: &str,
        response: reqwest::Response,
    ) -> ApiResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::bad_status(endpoint, status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::transport(endpoint, e))?;

        serde_json::from_str(&body).map_err(|e| ApiError::decode(endpoint, e))
    }
}

impl QuestionApi for BankClient {
    async fn list(&self) -> ApiResult<Vec<Question>> {
        let endpoint = self.collection_url();
        debug!("拉取题目列表: {}", endpoint);

        let response = self
            .http
            .get(&endpoint)
            .send()
            .await
            .map_err(|e| ApiError::transport(&endpoint, e))?;

        // 后端对空集合返回 null 而非 []
        let questions: Option<Vec<Question>> =
            Self::decode_response(&endpoint, response).await?;
        Ok(questions.unwrap_or_default())
    }

    async fn create(&self, submission: &QuestionSubmission) -> ApiResult<Question> {
        let endpoint = self.collection_url();
        debug!("创建题目: {}", endpoint);

        let response = self
            .http
            .post(&endpoint)
            .json(submission)
            .send()
            .await
            .map_err(|e| ApiError::transport(&endpoint, e))?;

        Self::decode_response(&endpoint, response).await
    }

    async fn update(
        &self,
        id: QuestionId,
        submission: &QuestionSubmission,
    ) -> ApiResult<Question> {
        let endpoint = self.resource_url(id);
        debug!("更新题目: {}", endpoint);

        let response = self
            .http
            .put(&endpoint)
            .json(submission)
            .send()
            .await
            .map_err(|e| ApiError::transport(&endpoint, e))?;

        Self::decode_response(&endpoint, response).await
    }

    async fn delete(&self, id: QuestionId) -> ApiResult<()> {
        let endpoint = self.resource_url(id);
        debug!("删除题目: {}", endpoint);

        let response = self
            .http
            .delete(&endpoint)
            .send()
            .await
            .map_err(|e| ApiError::transport(&endpoint, e))?;

        // 成功与否只看状态码，响应体不解析
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::bad_status(&endpoint, status.as_u16()))
        }
    }
}
