use serde::{Deserialize, Serialize};

/// 题目 ID（由后端分配，创建成功前不存在）
pub type QuestionId = i64;

/// 每道题固定四个选项
pub const OPTION_COUNT: usize = 4;

/// 选项字母标签，按位置对应 A–D
pub const OPTION_LABELS: [char; OPTION_COUNT] = ['A', 'B', 'C', 'D'];

/// 根据选项位置取字母标签
///
/// 超出范围时返回 '?'（正常流程中不会出现）
pub fn option_label(index: usize) -> char {
    OPTION_LABELS.get(index).copied().unwrap_or('?')
}

/// 单个选项
///
/// `text` 为富文本 HTML 内容，`is_correct` 表示是否为正确选项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub text: String,
    pub is_correct: bool,
}

impl QuestionOption {
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            text: text.into(),
            is_correct,
        }
    }
}

/// 后端持久化的题目实体
///
/// 选项顺序是有语义的：A–D 标签由位置决定，不单独存储
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    /// 题干（HTML）
    pub question_text: String,
    /// 创建时间（后端返回的 RFC3339 字符串，提交时不携带）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    pub options: Vec<QuestionOption>,
}

/// 创建/更新题目的提交载荷
///
/// 由草稿的 `to_submission()` 生成，不包含 id（id 由后端分配）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionSubmission {
    pub question_text: String,
    pub options: Vec<QuestionOption>,
}
