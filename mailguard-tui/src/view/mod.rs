//! src/view/mod.rs
//! View 层：只读 Model，渲染一帧
//!
//!     mod layout;         // 顶栏 + 侧边导航 + 内容区 + 状态栏
//!     mod components;     // 跨页面复用的组件
//!     mod pages;          // 各页面内容
//!     pub mod theme;      // 颜色与常用样式
//!
//! ┌──────────────────────────── top bar ─────────────────────────────┐
//! │ MailGuard Admin                           Welcome, a@b.com       │
//! ├────────────────┬─────────────────────────────────────────────────┤
//! │ Admin Dashboard│ Blacklisted Domains                             │
//! │ ▶ ✓ Valid ...  │  [ Search domains... ]                          │
//! │   ● Blackl...  │  Domain              Created At                 │
//! │   @ Blackl...  │  ...                                            │
//! │   ? Validate   │  Showing 1 to 5 of 12 results                   │
//! │                │  ‹ Previous  [1] 2 3  Next ›                    │
//! ├────────────────┴─────────────────────────────────────────────────┤
//! │ hints                                             latest toast   │
//! └──────────────────────────────────────────────────────────────────┘
//!
//! 弹窗（表单 / 删除确认 / 帮助）最后绘制，覆盖在最上层。

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// 按显示宽度截断，超出时以 `…` 结尾
pub(crate) fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push('…');
    out
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_display_width() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
        // 全角字符宽度为 2
        assert_eq!(truncate("邮箱地址很长", 5), "邮箱…");
    }
}
