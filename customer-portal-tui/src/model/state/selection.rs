//! 列表选中状态
//!
//! 列表数据本身在 Store 或 Resource 中，这里只记录选中位置，
//! 因此每个操作都要传入当前列表长度。

/// 列表选中位置
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub selected: usize,
}

impl Selection {
    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    /// 选择第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 选择最后一项
    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// 列表变短后把选中位置拉回范围内
    pub fn clamp(&mut self, len: usize) {
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_in_bounds() {
        let mut selection = Selection::default();
        selection.select_previous();
        assert_eq!(selection.selected, 0);

        selection.select_next(2);
        selection.select_next(2);
        assert_eq!(selection.selected, 1);

        selection.clamp(1);
        assert_eq!(selection.selected, 0);

        selection.select_next(0);
        assert_eq!(selection.selected, 0);
    }
}
