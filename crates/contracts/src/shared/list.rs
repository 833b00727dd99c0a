//! Универсальный движок списков: фильтрация, постраничный вывод,
//! выделение строк и агрегаты.
//!
//! Один модуль обслуживает все списочные экраны (заказы, заявки, приёмка,
//! пикер SKU) вместо копии логики в каждом из них.

use crate::domain::common::LineItem;
use std::collections::HashSet;

/// Trait для типов данных, поддерживающих поиск.
pub trait Searchable {
    /// Case-insensitive подстрочное совпадение по полям записи.
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Фильтрует список по поисковому запросу.
///
/// Пустой (или состоящий из пробелов) запрос возвращает список как есть,
/// порядок записей сохраняется, вход не мутируется.
pub fn filter_records<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    if filter.trim().is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(filter.trim()))
        .cloned()
        .collect()
}

/// Результат постраничной нарезки.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlice {
    /// Полуинтервал [start, end) в отфильтрованном списке
    pub start: usize,
    pub end: usize,
    pub total_pages: usize,
}

/// Количество страниц: минимум 1 даже для пустого списка.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    len.div_ceil(page_size).max(1)
}

/// Нарезает список на страницы. `page` нумеруется с 1.
///
/// Запрос страницы за пределами списка не является ошибкой: границы
/// просто схлопываются в пустой срез, кнопки навигации блокирует caller.
pub fn paginate(len: usize, page_size: usize, page: usize) -> PageSlice {
    let pages = total_pages(len, page_size);
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    PageSlice {
        start,
        end,
        total_pages: pages,
    }
}

/// Курсор страницы. Инвариант: `1 <= page <= total_pages`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    pub page: usize,
    pub page_size: usize,
}

impl PageCursor {
    pub fn new(page_size: usize) -> Self {
        Self { page: 1, page_size }
    }

    /// Перейти на страницу с зажимом в допустимый диапазон.
    pub fn go_to(&mut self, page: usize, filtered_len: usize) {
        let max = total_pages(filtered_len, self.page_size);
        self.page = page.clamp(1, max);
    }

    /// Смена размера страницы всегда возвращает на первую страницу,
    /// иначе курсор может остаться за новым концом списка.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Смена фильтра также сбрасывает курсор.
    pub fn reset(&mut self) {
        self.page = 1;
    }
}

/// Набор выделенных идентификаторов, привязанный к видимой странице.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &String> {
        self.ids.iter()
    }

    /// Переключить одну строку.
    pub fn toggle_one(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    /// Переключить "выбрать все" для видимой страницы.
    ///
    /// Если вся страница уже выбрана — снимает выделение полностью;
    /// иначе выделение ЗАМЕНЯЕТСЯ ровно видимыми id (не объединяется):
    /// семантика постраничного чекбокса, а не глобального select-all.
    pub fn toggle_all(&mut self, visible_ids: &[String]) {
        if self.is_all_selected(visible_ids) {
            self.ids.clear();
        } else {
            self.ids = visible_ids.iter().cloned().collect();
        }
    }

    /// Состояние шапочного чекбокса: все видимые выбраны и страница не пуста.
    pub fn is_all_selected(&self, visible_ids: &[String]) -> bool {
        !visible_ids.is_empty()
            && self.ids.len() == visible_ids.len()
            && visible_ids.iter().all(|id| self.ids.contains(id))
    }

    /// Оставить только id, присутствующие на видимой странице.
    ///
    /// Вызывается при смене запроса/страницы/размера, чтобы устаревшие id
    /// никогда не вернулись через "выбрать все".
    pub fn prune(&mut self, visible_ids: &[String]) {
        let visible: HashSet<&String> = visible_ids.iter().collect();
        self.ids.retain(|id| visible.contains(id));
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

/// Суммарное количество по всем строкам (пустые значения — нули).
pub fn total_quantity(items: &[LineItem]) -> u32 {
    items.iter().map(|i| i.quantity.unwrap_or(0)).sum()
}

/// Общая сумма по всем строкам (пустые значения — нули).
pub fn grand_total(items: &[LineItem]) -> f64 {
    items.iter().map(|i| i.amount()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Row {
        id: String,
        name: String,
    }

    impl Searchable for Row {
        fn matches_filter(&self, filter: &str) -> bool {
            let f = filter.to_lowercase();
            self.id.to_lowercase().contains(&f) || self.name.to_lowercase().contains(&f)
        }
    }

    fn rows(n: usize) -> Vec<Row> {
        (1..=n)
            .map(|i| Row {
                id: format!("PR-2023{:04}", i),
                name: format!("采购申请 {}", i),
            })
            .collect()
    }

    #[test]
    fn total_pages_formula() {
        for (len, size, expected) in [
            (0, 10, 1),
            (1, 10, 1),
            (10, 10, 1),
            (11, 10, 2),
            (25, 10, 3),
            (100, 7, 15),
        ] {
            assert_eq!(total_pages(len, size), expected, "len={len} size={size}");
        }
    }

    #[test]
    fn filter_empty_query_is_identity() {
        let items = rows(5);
        let filtered = filter_records(&items, "   ");
        assert_eq!(filtered.len(), 5);
        let ids: Vec<&str> = filtered.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            ["PR-20230001", "PR-20230002", "PR-20230003", "PR-20230004", "PR-20230005"]
        );
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let items = rows(12);
        let filtered = filter_records(&items, "pr-20230011");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "PR-20230011");
    }

    #[test]
    fn pagination_scenario_25_requisitions() {
        // 25 заявок, страница 10: стр.1 -> записи 1..=10, всего 3 страницы,
        // стр.3 -> записи 21..=25.
        let items = rows(25);

        let page1 = paginate(items.len(), 10, 1);
        assert_eq!(page1.total_pages, 3);
        assert_eq!((page1.start, page1.end), (0, 10));
        assert_eq!(items[page1.start].id, "PR-20230001");
        assert_eq!(items[page1.end - 1].id, "PR-20230010");

        let page3 = paginate(items.len(), 10, 3);
        assert_eq!(page3.end - page3.start, 5);
        assert_eq!(items[page3.start].id, "PR-20230021");
        assert_eq!(items[page3.end - 1].id, "PR-20230025");
    }

    #[test]
    fn page_beyond_end_is_empty_not_error() {
        let slice = paginate(25, 10, 9);
        assert_eq!(slice.start, slice.end);
        assert_eq!(slice.total_pages, 3);
    }

    #[test]
    fn page_size_change_resets_cursor() {
        let mut cursor = PageCursor::new(10);
        cursor.go_to(3, 25);
        assert_eq!(cursor.page, 3);

        cursor.set_page_size(20);
        assert_eq!(cursor.page, 1);
        assert_eq!(cursor.page_size, 20);
    }

    #[test]
    fn cursor_clamps_into_range() {
        let mut cursor = PageCursor::new(10);
        cursor.go_to(99, 25);
        assert_eq!(cursor.page, 3);
        cursor.go_to(0, 25);
        assert_eq!(cursor.page, 1);
    }

    #[test]
    fn toggle_all_selects_then_clears() {
        let visible: Vec<String> = (1..=10).map(|i| format!("PR-{i}")).collect();
        let mut selection = SelectionSet::new();

        selection.toggle_all(&visible);
        assert_eq!(selection.len(), 10);
        assert!(selection.is_all_selected(&visible));

        // повторный вызов возвращает к пустому состоянию
        selection.toggle_all(&visible);
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_all_replaces_rather_than_unions() {
        let page1: Vec<String> = vec!["a".into(), "b".into()];
        let page2: Vec<String> = vec!["c".into(), "d".into()];
        let mut selection = SelectionSet::new();

        selection.toggle_all(&page1);
        selection.toggle_all(&page2);
        assert_eq!(selection.len(), 2);
        assert!(selection.contains("c") && selection.contains("d"));
        assert!(!selection.contains("a"));
    }

    #[test]
    fn header_checkbox_unchecked_for_empty_page() {
        let selection = SelectionSet::new();
        assert!(!selection.is_all_selected(&[]));
    }

    #[test]
    fn prune_drops_stale_ids() {
        let mut selection = SelectionSet::new();
        selection.toggle_one("a");
        selection.toggle_one("b");

        selection.prune(&["b".to_string(), "c".to_string()]);
        assert_eq!(selection.len(), 1);
        assert!(selection.contains("b"));
    }

    #[test]
    fn modal_scenario_totals() {
        // две строки: 10 шт x ¥15.50 и 5 шт x ¥120.00
        use crate::domain::common::LineItem;
        let items = vec![
            LineItem::with_amounts("打捆绳", "THP1317877406", 10, 15.5),
            LineItem::with_amounts("捆草网", "THP7017351182", 5, 120.0),
        ];
        assert_eq!(total_quantity(&items), 15);
        assert_eq!(grand_total(&items), 755.0);
    }

    #[test]
    fn totals_treat_unset_as_zero() {
        use crate::domain::common::LineItem;
        let mut item = LineItem::new("测试商品", "THP0001");
        item.quantity = Some(7);
        let items = vec![item, LineItem::new("测试商品2", "THP0002")];
        assert_eq!(total_quantity(&items), 7);
        assert_eq!(grand_total(&items), 0.0);
    }
}
