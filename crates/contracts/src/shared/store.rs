//! In-memory хранилище записей одного экрана.

use crate::domain::common::{LineItem, LineItemField};

/// Запись, пригодная для хранения в [`RecordStore`].
pub trait StoredRecord {
    /// Стабильный уникальный идентификатор записи.
    fn record_id(&self) -> &str;

    /// Строки записи, если у типа они есть.
    fn line_items_mut(&mut self) -> Option<&mut Vec<LineItem>> {
        None
    }
}

/// Упорядоченная коллекция записей домена.
///
/// Порядок — порядок вставки, новые записи добавляются в начало
/// (свежесозданный документ виден первым). Удаление записей в текущем
/// объёме не моделируется.
#[derive(Debug, Clone, Default)]
pub struct RecordStore<R: StoredRecord> {
    records: Vec<R>,
}

impl<R: StoredRecord + Clone> RecordStore<R> {
    pub fn new() -> Self {
        Self { records: Vec::new() }
    }

    pub fn seeded(records: Vec<R>) -> Self {
        Self { records }
    }

    pub fn list(&self) -> &[R] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|r| r.record_id() == id)
    }

    /// Добавить новую запись в начало списка.
    pub fn push_front(&mut self, record: R) {
        self.records.insert(0, record);
    }

    /// Мутировать запись по id. Неизвестный id — тихий no-op.
    pub fn update<F: FnOnce(&mut R)>(&mut self, id: &str, mutate: F) {
        if let Some(record) = self.records.iter_mut().find(|r| r.record_id() == id) {
            mutate(record);
        }
    }

    /// Обновить одно поле строки и пересчитать её сумму.
    ///
    /// Локальная правка без удалённой валидации: несуществующая пара
    /// (запись, строка) молча игнорируется.
    pub fn upsert_line_item_field(
        &mut self,
        record_id: &str,
        line_index: usize,
        field: LineItemField,
        raw_value: &str,
    ) {
        self.update(record_id, |record| {
            let Some(items) = record.line_items_mut() else {
                return;
            };
            let Some(item) = items.get_mut(line_index) else {
                return;
            };
            match field {
                LineItemField::Quantity => item.set_quantity(raw_value),
                LineItemField::UnitPrice => item.set_unit_price(raw_value),
                LineItemField::Note => item.note = raw_value.to_string(),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::purchase_order::PurchaseOrder;

    fn order(id: &str) -> PurchaseOrder {
        let mut o = PurchaseOrder::draft(id.to_string(), "2026-01-16".to_string());
        o.items.push(LineItem::with_amounts("测试商品", "THP0001", 2, 10.0));
        o
    }

    #[test]
    fn push_front_keeps_newest_first() {
        let mut store = RecordStore::seeded(vec![order("POC-1"), order("POC-2")]);
        store.push_front(order("POC-3"));

        let ids: Vec<&str> = store.list().iter().map(|o| o.record_id()).collect();
        assert_eq!(ids, ["POC-3", "POC-1", "POC-2"]);
    }

    #[test]
    fn line_item_edit_recomputes_amount() {
        let mut store = RecordStore::seeded(vec![order("POC-1")]);
        store.upsert_line_item_field("POC-1", 0, LineItemField::Quantity, "5");

        let updated = store.get("POC-1").unwrap();
        assert_eq!(updated.items[0].quantity, Some(5));
        assert_eq!(updated.items[0].amount(), 50.0);
    }

    #[test]
    fn unknown_ids_are_silent_noops() {
        let mut store = RecordStore::seeded(vec![order("POC-1")]);
        let before = store.get("POC-1").unwrap().clone();

        store.upsert_line_item_field("POC-404", 0, LineItemField::Quantity, "9");
        store.upsert_line_item_field("POC-1", 7, LineItemField::UnitPrice, "9");

        assert_eq!(store.get("POC-1").unwrap(), &before);
    }
}
