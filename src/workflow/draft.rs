//! 题目草稿 - 流程层
//!
//! 一道题在编辑过程中的工作副本：未持久化，随编辑会话创建和销毁

use crate::config::CorrectnessMode;
use crate::infrastructure::InMemoryWidget;
use crate::models::{option_label, Question, QuestionOption, QuestionSubmission, OPTION_COUNT};
use crate::services::ContentField;
use tracing::warn;

/// 题干字段的占位文案
pub const STEM_PLACEHOLDER: &str = "<p>Type your question here...</p>";

/// 选项字段的占位文案
pub fn option_placeholder(index: usize) -> String {
    format!("<p>Type option {} here...</p>", option_label(index))
}

/// 事件路由目标：题干或某个选项字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorField {
    Stem,
    Option(usize),
}

/// 单个选项的草稿：内容字段 + 正确标志
struct OptionDraft {
    field: ContentField,
    is_correct: bool,
}

/// 题目草稿
///
/// 正确标志的行为由 `CorrectnessMode` 决定：
/// - `Exclusive`：最多一个为真，勾选新选项会清掉其他选项
/// - `Multi`：各选项独立翻转
pub struct QuestionDraft {
    stem: ContentField,
    options: Vec<OptionDraft>,
    mode: CorrectnessMode,
}

impl QuestionDraft {
    /// 创建空草稿（新建题目用）
    ///
    /// 所有字段进入占位符状态，所有正确标志为假
    pub fn empty(mode: CorrectnessMode) -> Self {
        Self::build(mode, "", &[])
    }

    /// 从已有实体构建草稿（编辑用）
    ///
    /// 选项按位置映射到 A–D；实体选项不足四个时，剩余字段为空
    pub fn from_question(question: &Question, mode: CorrectnessMode) -> Self {
        Self::build(mode, &question.question_text, &question.options)
    }

    fn build(mode: CorrectnessMode, stem_seed: &str, option_seeds: &[QuestionOption]) -> Self {
        let mut stem = ContentField::new(Box::new(InMemoryWidget::new()), STEM_PLACEHOLDER);
        stem.initialize(stem_seed);

        let options = (0..OPTION_COUNT)
            .map(|i| {
                let mut field =
                    ContentField::new(Box::new(InMemoryWidget::new()), option_placeholder(i));
                let seed = option_seeds.get(i);
                field.initialize(seed.map(|o| o.text.as_str()).unwrap_or(""));
                OptionDraft {
                    field,
                    is_correct: seed.map(|o| o.is_correct).unwrap_or(false),
                }
            })
            .collect();

        Self {
            stem,
            options,
            mode,
        }
    }

    // ========== 纯变更操作 ==========

    /// 设置题干内容
    pub fn set_stem(&mut self, value: &str) {
        self.stem.on_content_changed(value);
    }

    /// 设置某个选项的内容
    pub fn set_option_text(&mut self, index: usize, value: &str) {
        match self.options.get_mut(index) {
            Some(option) => option.field.on_content_changed(value),
            None => warn!("⚠️ 选项序号 {} 超出范围，忽略", index),
        }
    }

    /// 翻转某个选项的正确标志（行为依赖正确选项模式）
    pub fn toggle_correct(&mut self, index: usize) {
        if index >= self.options.len() {
            warn!("⚠️ 选项序号 {} 超出范围，忽略", index);
            return;
        }
        match self.mode {
            CorrectnessMode::Multi => {
                let option = &mut self.options[index];
                option.is_correct = !option.is_correct;
            }
            CorrectnessMode::Exclusive => {
                let was_correct = self.options[index].is_correct;
                for option in &mut self.options {
                    option.is_correct = false;
                }
                // 再次点击同一选项表示取消勾选，保持"零个或一个"
                self.options[index].is_correct = !was_correct;
            }
        }
    }

    // ========== 控件事件路由 ==========

    pub fn on_focus(&mut self, target: EditorField) {
        if let Some(field) = self.field_mut(target) {
            field.on_focus();
        }
    }

    pub fn on_blur(&mut self, target: EditorField) {
        if let Some(field) = self.field_mut(target) {
            field.on_blur();
        }
    }

    pub fn on_content_changed(&mut self, target: EditorField, value: &str) {
        if let Some(field) = self.field_mut(target) {
            field.on_content_changed(value);
        }
    }

    fn field_mut(&mut self, target: EditorField) -> Option<&mut ContentField> {
        match target {
            EditorField::Stem => Some(&mut self.stem),
            EditorField::Option(i) => {
                let field = self.options.get_mut(i).map(|o| &mut o.field);
                if field.is_none() {
                    warn!("⚠️ 选项序号 {} 超出范围，忽略", i);
                }
                field
            }
        }
    }

    // ========== 读取 ==========

    /// 题干字段
    pub fn stem(&self) -> &ContentField {
        &self.stem
    }

    /// 某个选项的内容字段
    pub fn option_field(&self, index: usize) -> Option<&ContentField> {
        self.options.get(index).map(|o| &o.field)
    }

    /// 某个选项当前的正确标志
    pub fn is_correct(&self, index: usize) -> bool {
        self.options.get(index).map(|o| o.is_correct).unwrap_or(false)
    }

    /// 生成提交载荷
    ///
    /// 占位符状态的字段提交为空字符串。这里不做校验：
    /// 空题干、全假的正确标志都原样放行
    pub fn to_submission(&self) -> QuestionSubmission {
        QuestionSubmission {
            question_text: self.stem.submittable_value(),
            options: self
                .options
                .iter()
                .map(|o| QuestionOption {
                    text: o.field.submittable_value(),
                    is_correct: o.is_correct,
                })
                .collect(),
        }
    }
}
