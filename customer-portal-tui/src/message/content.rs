//! 内容面板消息
//!
//! 处理内容面板中的操作，如列表选择、表单输入、开关切换等

/// 内容面板消息
#[derive(Debug, Clone)]
pub enum ContentMessage {
    // ========== 列表导航 ==========
    /// 选择上一项
    SelectPrevious,
    /// 选择下一项
    SelectNext,
    /// 跳转到第一项
    SelectFirst,
    /// 跳转到最后一项
    SelectLast,
    /// 确认选择（进入详情或执行操作）
    Confirm,

    // ========== 页面操作 ==========
    /// 新建（工单页：新建工单）
    Add,
    /// 编辑（资料页：编辑个人资料）
    Edit,

    // ========== 切换项 ==========
    /// 切换到上一个值（服务筛选、偏好设置）
    TogglePrev,
    /// 切换到下一个值
    ToggleNext,

    // ========== 登录表单 ==========
    /// 输入字符
    Input(char),
    /// 删除字符
    Backspace,
    /// 下一个输入字段
    NextField,
    /// 上一个输入字段
    PrevField,
}
