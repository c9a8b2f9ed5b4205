//! 流程层（Workflow Layer）
//!
//! ## 职责
//!
//! 定义"一道题从打开编辑到提交"的完整状态流转。
//!
//! ### `draft` - 题目草稿
//! - 一个题干字段 + 四个选项字段（A–D 按位置对应）+ 四个正确标志
//! - 占位符语义由 ContentField 负责
//! - `to_submission()` 生成提交载荷，不做任何校验
//!
//! ### `editor_flow` - 编辑器状态机
//! - 状态：Closed / Creating / Editing(id)
//! - 同一时刻最多存在一份草稿（结构上保证，而非靠锁）
//! - 提交失败时草稿原样保留，由用户手动重试

pub mod draft;
pub mod editor_flow;

pub use draft::{EditorField, QuestionDraft};
pub use editor_flow::{EditorFlow, EditorState, SubmitOutcome};
