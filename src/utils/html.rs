//! HTML 纯文本预览
//!
//! 题干和选项以 HTML 存储，列表预览和日志只需要纯文本。
//! 这里只做标签剥离，不做任何净化；渲染安全边界在外部协作方

use regex::Regex;

/// 去掉 HTML 标签，提取纯文本预览
pub fn to_plain_text(html: &str) -> String {
    let stripped = if let Ok(re) = Regex::new(r"<[^>]+>") {
        re.replace_all(html, "").into_owned()
    } else {
        html.to_string()
    };

    stripped
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .trim()
        .to_string()
}
