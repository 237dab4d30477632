//! 内容面板消息
//!
//! 同一条消息在不同页面上含义不同，例如 `Submit`：
//! 表格页提交搜索，校验页发起校验，登录页提交登录。

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentMessage {
    // ========== 表格光标 ==========
    SelectPrevious,
    SelectNext,

    // ========== 翻页 ==========
    PreviousPage,
    NextPage,
    FirstPage,
    LastPage,

    // ========== 文本输入 ==========
    /// 进入搜索框编辑
    StartSearch,
    Input(char),
    Backspace,
    Submit,
    /// 取消搜索
    Cancel,
    /// 登录页切换输入框
    NextField,

    // ========== 表格操作 ==========
    Add,
    Edit,
    Delete,
    /// 把所选有效邮箱加入黑名单
    Blacklist,
    /// 导出有效邮箱 CSV
    Export,
}
