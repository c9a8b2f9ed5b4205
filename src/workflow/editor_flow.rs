//! 编辑器状态机 - 流程层
//!
//! 核心职责：管理"新建/编辑弹窗"的生命周期。
//!
//! 状态流转：
//! - Closed → Creating（新建题目，空草稿）
//! - Closed → Editing(id)（编辑列表中的题目，草稿从实体播种）
//! - Creating/Editing → Closed（取消：无条件丢弃草稿；提交成功：丢弃草稿并上报结果）
//! - 提交失败：停留在原状态，草稿原样保留，由用户手动重试

use crate::clients::QuestionApi;
use crate::config::{Config, CorrectnessMode};
use crate::error::SubmitError;
use crate::models::{Question, QuestionId};
use crate::workflow::draft::{EditorField, QuestionDraft};
use tracing::{info, warn};

/// 编辑器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// 没有打开的编辑会话
    Closed,
    /// 正在新建题目
    Creating,
    /// 正在编辑指定题目
    Editing(QuestionId),
}

/// 提交成功的结果，供列表控制器决定如何刷新
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// 新建成功，携带后端分配了 id 的实体
    Created(Question),
    /// 更新成功，携带更新后的实体
    Updated(Question),
}

/// 编辑器状态机
///
/// 同一时刻最多持有一份草稿（`state != Closed` 时草稿必然存在）
pub struct EditorFlow<C: QuestionApi> {
    client: C,
    mode: CorrectnessMode,
    state: EditorState,
    draft: Option<QuestionDraft>,
}

impl<C: QuestionApi> EditorFlow<C> {
    /// 创建新的编辑器状态机
    pub fn new(client: C, config: &Config) -> Self {
        Self {
            client,
            mode: config.correctness_mode,
            state: EditorState::Closed,
            draft: None,
        }
    }

    /// 当前状态
    pub fn state(&self) -> EditorState {
        self.state
    }

    /// 当前草稿（编辑器关闭时为 None）
    pub fn draft(&self) -> Option<&QuestionDraft> {
        self.draft.as_ref()
    }

    // ========== 生命周期 ==========

    /// 打开新建弹窗
    pub fn open_create(&mut self) {
        if self.state != EditorState::Closed {
            warn!("⚠️ 编辑器已打开，忽略新建请求");
            return;
        }
        self.draft = Some(QuestionDraft::empty(self.mode));
        self.state = EditorState::Creating;
        info!("📝 打开新建题目编辑器");
    }

    /// 打开编辑弹窗，草稿从当前列表中的实体播种（不重新拉取）
    pub fn open_edit(&mut self, question: &Question) {
        if self.state != EditorState::Closed {
            warn!("⚠️ 编辑器已打开，忽略编辑请求 (id: {})", question.id);
            return;
        }
        self.draft = Some(QuestionDraft::from_question(question, self.mode));
        self.state = EditorState::Editing(question.id);
        info!("📝 打开编辑器，编辑题目 {}", question.id);
    }

    /// 取消编辑：无条件丢弃草稿，不做确认
    pub fn cancel(&mut self) {
        if self.state == EditorState::Closed {
            return;
        }
        self.draft = None;
        self.state = EditorState::Closed;
        info!("已取消编辑，丢弃草稿");
    }

    /// 提交草稿
    ///
    /// Creating 走 create，Editing 走 update。成功后回到 Closed 并返回
    /// 提交结果；失败时状态与草稿都保持不变，错误向上传播
    pub async fn submit(&mut self) -> Result<SubmitOutcome, SubmitError> {
        let outcome = match self.state {
            EditorState::Closed => {
                warn!("⚠️ 编辑器未打开，忽略提交");
                return Err(SubmitError::NotOpen);
            }
            EditorState::Creating => {
                let draft = self.draft.as_ref().ok_or(SubmitError::NotOpen)?;
                info!("📤 提交新题目...");
                let created = self.client.create(&draft.to_submission()).await?;
                SubmitOutcome::Created(created)
            }
            EditorState::Editing(id) => {
                let draft = self.draft.as_ref().ok_or(SubmitError::NotOpen)?;
                info!("📤 提交题目修改 (id: {})...", id);
                let updated = self.client.update(id, &draft.to_submission()).await?;
                SubmitOutcome::Updated(updated)
            }
        };

        // 只有提交成功才会走到这里
        self.draft = None;
        self.state = EditorState::Closed;
        info!("✓ 提交成功");
        Ok(outcome)
    }

    // ========== 草稿变更（仅编辑器打开时有效） ==========

    pub fn set_stem(&mut self, value: &str) {
        match &mut self.draft {
            Some(draft) => draft.set_stem(value),
            None => warn!("⚠️ 编辑器未打开，忽略题干修改"),
        }
    }

    pub fn set_option_text(&mut self, index: usize, value: &str) {
        match &mut self.draft {
            Some(draft) => draft.set_option_text(index, value),
            None => warn!("⚠️ 编辑器未打开，忽略选项修改"),
        }
    }

    pub fn toggle_correct(&mut self, index: usize) {
        match &mut self.draft {
            Some(draft) => draft.toggle_correct(index),
            None => warn!("⚠️ 编辑器未打开，忽略正确标志翻转"),
        }
    }

    pub fn on_focus(&mut self, target: EditorField) {
        if let Some(draft) = &mut self.draft {
            draft.on_focus(target);
        }
    }

    pub fn on_blur(&mut self, target: EditorField) {
        if let Some(draft) = &mut self.draft {
            draft.on_blur(target);
        }
    }

    pub fn on_content_changed(&mut self, target: EditorField, value: &str) {
        if let Some(draft) = &mut self.draft {
            draft.on_content_changed(target, value);
        }
    }
}
