//! 按显示宽度处理文本（中文等宽字符占 2 列）

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 截断到指定显示宽度，超出时以 `…` 结尾
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        // 给省略号留 1 列
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// 截断后右侧补空格到固定显示宽度（用于列对齐）
pub fn pad_to_width(text: &str, width: usize) -> String {
    let truncated = truncate_to_width(text, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{truncated}{}", " ".repeat(padding))
}
