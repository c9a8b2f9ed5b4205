//! 题目列表控制器 - 编排层
//!
//! 持有展示中的题目集合，驱动增删改查：
//! - 刷新成功时整体替换集合，失败时保留上一份并记录日志
//! - 删除成功时只做本地移除，不重新拉取
//! - 提交成功后无条件刷新一次（新建和更新都是）
//!
//! 没有请求取消机制，改用单调递增的序号令牌做过期保护：
//! 每个影响列表的操作发出时取一个令牌，响应落地时令牌已过期则丢弃

use crate::clients::QuestionApi;
use crate::config::Config;
use crate::error::{ApiResult, SubmitError};
use crate::models::{Question, QuestionId};
use crate::workflow::{EditorFlow, SubmitOutcome};
use tracing::{debug, error, info, warn};

/// 题目列表控制器
pub struct QuestionListController<C: QuestionApi + Clone> {
    client: C,
    editor: EditorFlow<C>,
    questions: Vec<Question>,
    /// 列表操作的最新序号令牌
    list_seq: u64,
}

impl<C: QuestionApi + Clone> QuestionListController<C> {
    /// 创建新的列表控制器
    pub fn new(client: C, config: &Config) -> Self {
        Self {
            editor: EditorFlow::new(client.clone(), config),
            client,
            questions: Vec::new(),
            list_seq: 0,
        }
    }

    /// 展示中的题目集合
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// 编辑器状态机（只读）
    pub fn editor(&self) -> &EditorFlow<C> {
        &self.editor
    }

    /// 编辑器状态机（供 UI 路由草稿变更和控件事件）
    pub fn editor_mut(&mut self) -> &mut EditorFlow<C> {
        &mut self.editor
    }

    fn next_token(&mut self) -> u64 {
        self.list_seq += 1;
        self.list_seq
    }

    // ========== 列表操作 ==========

    /// 刷新题目集合
    pub async fn refresh(&mut self) {
        let token = self.next_token();
        let result = self.client.list().await;
        self.apply_refresh(token, result);
    }

    /// 落地刷新结果
    ///
    /// 拆成独立步骤是为了让乱序到达的响应可以被验证和丢弃
    pub(crate) fn apply_refresh(&mut self, token: u64, result: ApiResult<Vec<Question>>) {
        if token != self.list_seq {
            debug!("忽略过期的列表响应 (令牌 {} < {})", token, self.list_seq);
            return;
        }
        match result {
            Ok(questions) => {
                info!("✓ 已加载 {} 道题目", questions.len());
                self.questions = questions;
            }
            // 保留上一份已知良好的集合
            Err(e) => error!("❌ 拉取题目列表失败: {}", e),
        }
    }

    /// 删除题目
    pub async fn request_delete(&mut self, id: QuestionId) {
        let token = self.next_token();
        let result = self.client.delete(id).await;
        self.apply_delete(token, id, result);
    }

    pub(crate) fn apply_delete(&mut self, token: u64, id: QuestionId, result: ApiResult<()>) {
        if token != self.list_seq {
            debug!("忽略过期的删除响应 (令牌 {} < {})", token, self.list_seq);
            return;
        }
        match result {
            Ok(()) => {
                // 本地移除，不重新拉取
                self.questions.retain(|q| q.id != id);
                info!("✓ 已删除题目 {}", id);
            }
            Err(e) => error!("❌ 删除题目 {} 失败: {}", id, e),
        }
    }

    // ========== 编辑器委托 ==========

    /// 打开新建弹窗
    pub fn request_create(&mut self) {
        self.editor.open_create();
    }

    /// 打开编辑弹窗（从当前展示的集合中查找，不重新拉取）
    pub fn request_edit(&mut self, id: QuestionId) {
        let question = self.questions.iter().find(|q| q.id == id).cloned();
        match question {
            Some(q) => self.editor.open_edit(&q),
            None => warn!("⚠️ 题目 {} 不在当前列表中，无法编辑", id),
        }
    }

    /// 取消编辑
    pub fn cancel_edit(&mut self) {
        self.editor.cancel();
    }

    /// 提交当前草稿；成功后无条件刷新一次
    pub async fn submit(&mut self) -> Result<(), SubmitError> {
        match self.editor.submit().await {
            Ok(SubmitOutcome::Created(q)) => {
                info!("✓ 新建题目成功 (id: {})", q.id);
                self.refresh().await;
                Ok(())
            }
            Ok(SubmitOutcome::Updated(q)) => {
                info!("✓ 更新题目成功 (id: {})", q.id);
                self.refresh().await;
                Ok(())
            }
            // 草稿由 EditorFlow 原样保留，用户可手动重试
            Err(e) => {
                error!("❌ {}", e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::testing::{ApiCall, RecordingApi};
    use crate::models::QuestionOption;
    use crate::workflow::EditorState;

    fn sample_question(id: QuestionId) -> Question {
        Question {
            id,
            question_text: format!("<p>题目 {}</p>", id),
            created_at: None,
            options: vec![
                QuestionOption::new("<p>甲</p>", true),
                QuestionOption::new("<p>乙</p>", false),
                QuestionOption::new("<p>丙</p>", false),
                QuestionOption::new("<p>丁</p>", false),
            ],
        }
    }

    fn controller(api: &RecordingApi) -> QuestionListController<RecordingApi> {
        QuestionListController::new(api.clone(), &Config::default())
    }

    #[tokio::test]
    async fn test_refresh_replaces_collection() {
        let api = RecordingApi::default();
        api.push_question(sample_question(1));
        api.push_question(sample_question(2));

        let mut controller = controller(&api);
        controller.refresh().await;

        assert_eq!(controller.questions().len(), 2);
    }

    #[tokio::test]
    async fn test_refresh_failure_keeps_last_known_good() {
        let api = RecordingApi::default();
        api.push_question(sample_question(1));

        let mut controller = controller(&api);
        controller.refresh().await;
        assert_eq!(controller.questions().len(), 1);

        api.set_fail(true);
        controller.refresh().await;
        // 失败时保留上一份集合
        assert_eq!(controller.questions().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_removes_locally_without_refetch() {
        let api = RecordingApi::default();
        for id in [1, 3, 5] {
            api.push_question(sample_question(id));
        }

        let mut controller = controller(&api);
        controller.refresh().await;
        assert_eq!(api.list_calls(), 1);

        controller.request_delete(3).await;

        let remaining: Vec<_> = controller.questions().iter().map(|q| q.id).collect();
        assert_eq!(remaining, vec![1, 5]);
        // 删除路径不触发 list
        assert_eq!(api.list_calls(), 1);
        assert!(api.calls().contains(&ApiCall::Delete(3)));
    }

    #[tokio::test]
    async fn test_delete_failure_leaves_collection_unchanged() {
        let api = RecordingApi::default();
        api.push_question(sample_question(1));

        let mut controller = controller(&api);
        controller.refresh().await;

        api.set_fail(true);
        controller.request_delete(1).await;

        assert_eq!(controller.questions().len(), 1);
    }

    #[tokio::test]
    async fn test_edit_then_cancel_preserves_entity() {
        let api = RecordingApi::default();
        api.push_question(sample_question(7));

        let mut controller = controller(&api);
        controller.refresh().await;
        let before = controller.questions()[0].clone();

        controller.request_edit(7);
        assert_eq!(controller.editor().state(), EditorState::Editing(7));
        controller.editor_mut().set_stem("<p>改了但没提交</p>");
        controller.cancel_edit();

        assert_eq!(controller.questions()[0], before);
        // 取消路径不触发任何写操作
        assert_eq!(api.list_calls(), 1);
        assert_eq!(api.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_edit_unknown_id_is_noop() {
        let api = RecordingApi::default();
        let mut controller = controller(&api);
        controller.request_edit(42);
        assert_eq!(controller.editor().state(), EditorState::Closed);
    }

    #[tokio::test]
    async fn test_create_submit_refreshes_exactly_once() {
        let api = RecordingApi::default();
        let mut controller = controller(&api);

        controller.request_create();
        controller.editor_mut().set_stem("What is 2+2?");
        controller.editor_mut().set_option_text(1, "4");
        controller.editor_mut().toggle_correct(1);
        controller.submit().await.expect("提交应成功");

        assert_eq!(controller.editor().state(), EditorState::Closed);
        assert_eq!(api.list_calls(), 1);
        // 新建的题目出现在刷新后的集合里
        assert_eq!(controller.questions().len(), 1);
        assert_eq!(controller.questions()[0].question_text, "What is 2+2?");
    }

    #[tokio::test]
    async fn test_update_submit_refreshes_full_collection() {
        let api = RecordingApi::default();
        api.push_question(sample_question(7));

        let mut controller = controller(&api);
        controller.refresh().await;

        controller.request_edit(7);
        controller.editor_mut().set_stem("<p>新题干</p>");
        controller.submit().await.expect("提交应成功");

        assert_eq!(api.list_calls(), 2);
        assert_eq!(controller.questions()[0].question_text, "<p>新题干</p>");
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_editor_open_and_skips_refresh() {
        let api = RecordingApi::default();
        api.push_question(sample_question(7));

        let mut controller = controller(&api);
        controller.refresh().await;
        controller.request_edit(7);

        api.set_fail(true);
        let result = controller.submit().await;

        assert!(result.is_err());
        assert_eq!(controller.editor().state(), EditorState::Editing(7));
        // 失败路径不刷新
        assert_eq!(api.list_calls(), 1);
    }

    #[tokio::test]
    async fn test_stale_list_response_is_discarded() {
        let api = RecordingApi::default();
        api.push_question(sample_question(1));
        api.push_question(sample_question(2));

        let mut controller = controller(&api);
        controller.refresh().await;
        assert_eq!(controller.questions().len(), 2);

        // 模拟乱序：更早发出的请求此刻才返回，令牌已过期
        controller.apply_refresh(0, Ok(vec![sample_question(99)]));
        assert_eq!(controller.questions().len(), 2);

        controller.apply_delete(0, 1, Ok(()));
        assert_eq!(controller.questions().len(), 2);
    }
}
