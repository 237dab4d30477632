//! 弹窗消息类型

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMessage {
    Close,
    /// 提交表单 / 确认删除
    Confirm,
    Input(char),
    /// 批量添加表单换行
    Newline,
    Backspace,
    /// 删除确认弹窗中切换按钮
    ToggleFocus,
}
