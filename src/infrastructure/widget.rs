//! 富文本控件句柄 - 基础设施层
//!
//! 对外部富文本控件（setData/getData 契约）的最小抽象，
//! 核心层只通过内容读写接触控件，不接触其内部文档模型

/// 富文本控件句柄
///
/// 职责：
/// - 暴露内容读写能力
/// - 不认识 Question / Draft
/// - 不处理占位符逻辑（由 ContentField 负责）
///
/// 每个 ContentField 独占一个控件句柄，随编辑会话一起销毁，
/// 不允许把控件实例放进共享可变单元
pub trait EditorWidget {
    /// 写入控件显示内容（HTML）
    fn set_content(&mut self, html: &str);

    /// 读取控件当前内容（HTML）
    fn content(&self) -> String;
}

/// 内存控件
///
/// 缺省的宿主实现：一个纯字符串缓冲区。二进制入口和测试都用它；
/// 真实的浏览器控件由嵌入方实现同一 trait 接入
#[derive(Debug, Default)]
pub struct InMemoryWidget {
    content: String,
}

impl InMemoryWidget {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EditorWidget for InMemoryWidget {
    fn set_content(&mut self, html: &str) {
        self.content = html.to_string();
    }

    fn content(&self) -> String {
        self.content.clone()
    }
}
