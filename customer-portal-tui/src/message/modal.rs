//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone)]
pub enum ModalMessage {
    /// 关闭弹窗
    Close,

    /// 下一个输入字段
    NextField,

    /// 上一个输入字段
    PrevField,

    /// 切换选项（左），用于工单分类 / 优先级
    PrevOption,

    /// 切换选项（右）
    NextOption,

    /// 列表中选择上一项（通知、用户菜单）
    SelectPrevious,

    /// 列表中选择下一项
    SelectNext,

    /// 确认/提交
    Confirm,

    /// 在确认弹窗中切换焦点
    ToggleConfirmFocus,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,
}
