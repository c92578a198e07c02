//! Множественный выбор строк на текущей странице.

use contracts::shared::list::RowId;

/// Состояние чекбокса "выбрать все" в заголовке таблицы
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderCheckState {
    Unchecked,
    Indeterminate,
    Checked,
}

/// Набор выбранных id.
///
/// Порядок вставки сохраняется: в массовом запросе id идут в том порядке,
/// в котором пользователь их отметил. Флаг "выбраны все" не хранится,
/// а каждый раз выводится из `count()` и размера страницы.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    selected: Vec<RowId>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: RowId) {
        if let Some(pos) = self.selected.iter().position(|s| *s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id);
        }
    }

    /// Заменяет выбор всеми id страницы
    pub fn select_all<I>(&mut self, ids_on_page: I)
    where
        I: IntoIterator<Item = RowId>,
    {
        self.selected.clear();
        for id in ids_on_page {
            if !self.selected.contains(&id) {
                self.selected.push(id);
            }
        }
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    pub fn is_selected(&self, id: &RowId) -> bool {
        self.selected.contains(id)
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn ids(&self) -> &[RowId] {
        &self.selected
    }

    /// Чекбокс отмечен ровно тогда, когда `count() == page_len`
    pub fn all_selected(&self, page_len: usize) -> bool {
        self.count() == page_len
    }

    pub fn header_state(&self, page_len: usize) -> HeaderCheckState {
        let count = self.count();
        if count == page_len {
            HeaderCheckState::Checked
        } else if count == 0 {
            HeaderCheckState::Unchecked
        } else {
            HeaderCheckState::Indeterminate
        }
    }
}
