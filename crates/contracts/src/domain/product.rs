use crate::shared::list::Searchable;
use serde::{Deserialize, Serialize};

/// Позиция каталога SKU, доступная для выбора в формах.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "skuCode")]
    pub sku_code: String,
    pub spec: String,
    /// Seed для картинки-заглушки
    #[serde(rename = "imageSeed")]
    pub image_seed: String,
}

impl SkuItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        sku_code: impl Into<String>,
        image_seed: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            sku_code: sku_code.into(),
            spec: String::new(),
            image_seed: image_seed.into(),
        }
    }
}

impl Searchable for SkuItem {
    // Оригинальный пикер ищет по названию ИЛИ коду
    fn matches_filter(&self, filter: &str) -> bool {
        let f = filter.to_lowercase();
        self.name.to_lowercase().contains(&f) || self.sku_code.to_lowercase().contains(&f)
    }
}
