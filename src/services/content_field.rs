//! 内容字段 - 业务能力层
//!
//! 给单个富文本字段（题干或一个选项）提供占位符语义：
//! 字段逻辑上为空时显示提示文案，但提示文案永远不会被当作真实内容提交。
//!
//! 占位符状态靠显式布尔标志跟踪，跟随 focus/blur/内容变更事件流转，
//! 不做任何文本匹配（真实内容完全可能包含占位文案的子串）

use crate::infrastructure::EditorWidget;

/// 内容字段
///
/// 持有：
/// - 独占的控件句柄（字段生命周期内唯一）
/// - 当前值与占位符标志
pub struct ContentField {
    widget: Box<dyn EditorWidget>,
    placeholder: String,
    value: String,
    is_placeholder: bool,
}

impl std::fmt::Debug for ContentField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentField")
            .field("value", &self.value)
            .field("is_placeholder", &self.is_placeholder)
            .finish()
    }
}

impl ContentField {
    /// 创建内容字段（尚未初始化，需调用 `initialize`）
    pub fn new(widget: Box<dyn EditorWidget>, placeholder: impl Into<String>) -> Self {
        Self {
            widget,
            placeholder: placeholder.into(),
            value: String::new(),
            is_placeholder: false,
        }
    }

    /// 用种子值初始化字段
    ///
    /// 种子为空或全空白时进入占位符状态，控件显示提示文案；
    /// 否则原样保存种子值
    pub fn initialize(&mut self, seed: &str) {
        if seed.trim().is_empty() {
            self.is_placeholder = true;
            self.value = self.placeholder.clone();
            self.widget.set_content(&self.placeholder);
        } else {
            self.is_placeholder = false;
            self.value = seed.to_string();
            self.widget.set_content(seed);
        }
    }

    /// 获得焦点：清掉占位文案，等待用户输入
    pub fn on_focus(&mut self) {
        if self.is_placeholder {
            self.is_placeholder = false;
            self.value.clear();
            self.widget.set_content("");
        }
    }

    /// 失去焦点：内容为空时重新显示占位文案
    pub fn on_blur(&mut self) {
        if self.value.trim().is_empty() {
            self.is_placeholder = true;
            self.value = self.placeholder.clone();
            self.widget.set_content(&self.placeholder);
        }
    }

    /// 控件内容变更
    pub fn on_content_changed(&mut self, new_value: &str) {
        self.value = new_value.to_string();
        if !new_value.is_empty() && new_value != self.placeholder {
            self.is_placeholder = false;
        }
    }

    /// 取可提交的值
    ///
    /// 占位符状态下返回空字符串，提示文案永远不会进入提交载荷
    pub fn submittable_value(&self) -> String {
        if self.is_placeholder {
            String::new()
        } else {
            self.value.clone()
        }
    }

    /// 当前是否处于占位符状态
    pub fn is_placeholder(&self) -> bool {
        self.is_placeholder
    }

    /// 控件当前显示的内容
    pub fn displayed_content(&self) -> String {
        self.widget.content()
    }
}
