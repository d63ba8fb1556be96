//! 偏好设置状态（个人资料页下半部分）

use crate::i18n::Language;
use crate::view::theme::Theme;

/// 偏好设置项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceItem {
    Theme,
    Language,
}

impl PreferenceItem {
    /// 获取所有设置项
    pub fn all() -> &'static [PreferenceItem] {
        &[PreferenceItem::Theme, PreferenceItem::Language]
    }

    /// 从索引获取设置项
    pub fn from_index(index: usize) -> Option<PreferenceItem> {
        Self::all().get(index).copied()
    }
}

/// 偏好设置状态
#[derive(Debug, Default)]
pub struct PreferencesState {
    /// 当前选中的设置项索引
    pub selected_index: usize,
    pub theme: Theme,
    pub language: Language,
}

impl PreferencesState {
    pub fn new(theme: Theme, language: Language) -> Self {
        Self {
            selected_index: 0,
            theme,
            language,
        }
    }

    /// 获取设置项数量
    pub fn item_count(&self) -> usize {
        PreferenceItem::all().len()
    }

    /// 选择上一个设置项（循环）
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.item_count() - 1;
        }
    }

    /// 选择下一个设置项（循环）
    pub fn select_next(&mut self) {
        if self.selected_index < self.item_count() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
    }

    /// 获取当前选中的设置项
    pub fn current_item(&self) -> Option<PreferenceItem> {
        PreferenceItem::from_index(self.selected_index)
    }

    /// 切换当前设置项的值（只有两个选项，左右方向效果相同）
    pub fn toggle(&mut self) -> Option<PreferenceItem> {
        let item = self.current_item()?;
        match item {
            PreferenceItem::Theme => self.theme = self.theme.next(),
            PreferenceItem::Language => self.language = self.language.next(),
        }
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_changes_selected_item_only() {
        let mut prefs = PreferencesState::new(Theme::Dark, Language::EnUs);

        assert_eq!(prefs.toggle(), Some(PreferenceItem::Theme));
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.language, Language::EnUs);

        prefs.select_next();
        assert_eq!(prefs.toggle(), Some(PreferenceItem::Language));
        assert_eq!(prefs.language, Language::ZhCn);

        prefs.select_next();
        assert_eq!(prefs.current_item(), Some(PreferenceItem::Theme));
    }
}
