use serde::{Deserialize, Serialize};

/// Одна строка закупки: товар, количество, цена и производная сумма.
///
/// `quantity`/`unit_price` равны `None` пока пользователь не ввёл значение;
/// во всех расчётах пустое значение трактуется как 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Название продукта
    #[serde(rename = "productName")]
    pub product_name: String,
    /// SKU-код
    #[serde(rename = "skuCode")]
    pub sku_code: String,
    /// Спецификация/номер детали
    pub spec: String,
    /// Количество (пусто до ввода)
    pub quantity: Option<u32>,
    /// Цена за единицу (пусто до ввода)
    #[serde(rename = "unitPrice")]
    pub unit_price: Option<f64>,
    /// Примечание
    pub note: String,
    /// Количество фотографий приёмки (заполняется только в партиях)
    #[serde(rename = "photoCount")]
    pub photo_count: u32,
}

impl LineItem {
    pub fn new(product_name: impl Into<String>, sku_code: impl Into<String>) -> Self {
        Self {
            product_name: product_name.into(),
            sku_code: sku_code.into(),
            spec: String::new(),
            quantity: None,
            unit_price: None,
            note: String::new(),
            photo_count: 0,
        }
    }

    pub fn with_amounts(
        product_name: impl Into<String>,
        sku_code: impl Into<String>,
        quantity: u32,
        unit_price: f64,
    ) -> Self {
        let mut item = Self::new(product_name, sku_code);
        item.quantity = Some(quantity);
        item.unit_price = Some(unit_price);
        item
    }

    /// Сумма строки; пустые значения считаются нулями.
    pub fn amount(&self) -> f64 {
        self.quantity.unwrap_or(0) as f64 * self.unit_price.unwrap_or(0.0)
    }

    /// Установить количество из сырого ввода.
    ///
    /// Нечисловой ввод сводится к пустому значению, отрицательные числа
    /// отбрасываются парсером `u32` — поле терпимо к любому вводу.
    pub fn set_quantity(&mut self, raw: &str) {
        self.quantity = parse_quantity(raw);
    }

    /// Установить цену из сырого ввода (та же терпимость, что и у количества).
    pub fn set_unit_price(&mut self, raw: &str) {
        self.unit_price = parse_price(raw);
    }
}

/// Поле строки, редактируемое из таблицы.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineItemField {
    Quantity,
    UnitPrice,
    Note,
}

pub fn parse_quantity(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<u32>().ok().or(Some(0))
}

pub fn parse_price(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v >= 0.0 && v.is_finite() => Some(v),
        _ => Some(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_treats_empty_as_zero() {
        let mut item = LineItem::new("测试商品", "THP0001");
        assert_eq!(item.amount(), 0.0);

        item.set_quantity("12");
        assert_eq!(item.amount(), 0.0);

        item.set_unit_price("89.00");
        assert_eq!(item.amount(), 1068.0);
    }

    #[test]
    fn amount_follows_every_edit() {
        let mut item = LineItem::with_amounts("打捆绳", "THP1317877406", 10, 15.5);
        assert_eq!(item.amount(), 155.0);

        item.set_quantity("5");
        assert_eq!(item.amount(), 77.5);

        item.set_unit_price("120");
        assert_eq!(item.amount(), 600.0);
    }

    #[test]
    fn invalid_numeric_input_coerces_to_zero() {
        let mut item = LineItem::new("捆草网", "THP7017351182");
        item.set_quantity("abc");
        assert_eq!(item.quantity, Some(0));

        item.set_unit_price("-3");
        assert_eq!(item.unit_price, Some(0.0));

        item.set_quantity("   ");
        assert_eq!(item.quantity, None);
    }
}
