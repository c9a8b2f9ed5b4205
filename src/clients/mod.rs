//! 客户端层
//!
//! 草稿/实体与后端 JSON 契约之间的无状态传输层。
//! `QuestionApi` 是工作流和编排层依赖的接口；`BankClient` 是
//! 基于 reqwest 的真实实现，测试用 `testing::RecordingApi` 替身。

pub mod bank_client;

pub use bank_client::BankClient;

use crate::error::ApiResult;
use crate::models::{Question, QuestionId, QuestionSubmission};

/// 题库 API 接口
///
/// 每个操作都是单次请求：不重试、不退避、不取消。
/// 失败以 `ApiError` 返回，由调用方决定是否保留现有状态
#[allow(async_fn_in_trait)]
pub trait QuestionApi {
    /// 拉取题目集合
    async fn list(&self) -> ApiResult<Vec<Question>>;

    /// 创建题目，返回后端分配了 id 的实体
    async fn create(&self, submission: &QuestionSubmission) -> ApiResult<Question>;

    /// 更新指定题目，返回更新后的实体（不存在时为 HTTP 404）
    async fn update(&self, id: QuestionId, submission: &QuestionSubmission)
        -> ApiResult<Question>;

    /// 删除指定题目，成功与否只看响应状态码，不解析响应体
    async fn delete(&self, id: QuestionId) -> ApiResult<()>;
}
