//! # Question Bank Editor
//!
//! 多选题题库的编辑核心：题目草稿状态机及其与后端的同步协议
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 富文本控件句柄抽象
//! - `EditorWidget` - 内容读写契约；每个字段独占一个句柄
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个字段
//! - `ContentField` - 占位符语义（focus/blur/内容变更的布尔状态机）
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一道题"的完整编辑流程
//! - `QuestionDraft` - 题干 + 四个选项 + 正确标志的工作副本
//! - `EditorFlow` - 状态机编排（Closed / Creating / Editing）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/list_controller` - 持有展示中的题目集合
//! - `orchestrator/app` - 应用入口，初始化资源
//!
//! 客户端层（`clients/`）与四层正交：`QuestionApi` 是流程层和编排层
//! 依赖的传输接口，`BankClient` 基于 reqwest 实现后端 JSON 契约

pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{BankClient, QuestionApi};
pub use config::{Config, ConfigError, CorrectnessMode};
pub use error::{ApiError, ApiResult, SubmitError};
pub use infrastructure::{EditorWidget, InMemoryWidget};
pub use models::{
    option_label, Question, QuestionId, QuestionOption, QuestionSubmission, OPTION_COUNT,
    OPTION_LABELS,
};
pub use orchestrator::{App, QuestionListController};
pub use services::ContentField;
pub use workflow::{EditorField, EditorFlow, EditorState, QuestionDraft, SubmitOutcome};
