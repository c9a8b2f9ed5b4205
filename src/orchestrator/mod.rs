//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层持有展示中的题目集合，是列表与编辑器之间的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `list_controller` - 题目列表控制器
//! - 持有展示中的 `Vec<Question>`
//! - 刷新：整体替换集合；失败时保留上一份已知良好的集合
//! - 删除：成功后本地移除，不重新拉取
//! - 新建/编辑请求委托给 `EditorFlow`
//! - 提交成功后无条件刷新一次
//! - 列表相关操作携带单调递增的序号令牌，过期响应直接丢弃
//!
//! ### `app` - 应用入口
//! - 初始化配置、客户端、控制器
//! - 拉取题目并输出纯文本预览
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App
//!     ↓
//! orchestrator::QuestionListController (持有集合)
//!     ↓
//! workflow::EditorFlow (持有草稿)
//!     ↓
//! services::ContentField (占位符语义)
//!     ↓
//! infrastructure::EditorWidget (控件句柄)
//! ```

pub mod app;
pub mod list_controller;

pub use app::App;
pub use list_controller::QuestionListController;
