use serde::{Deserialize, Serialize};

/// Поставщик.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub contact: String,
    pub email: String,
    /// Рейтинг 0.0..=5.0
    pub rating: f64,
    pub category: String,
    pub active: bool,
}

impl Supplier {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        contact: impl Into<String>,
        email: impl Into<String>,
        rating: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            contact: contact.into(),
            email: email.into(),
            rating,
            category: category.into(),
            active: true,
        }
    }

    /// Количество закрашенных звёзд в карточке.
    pub fn filled_stars(&self) -> u8 {
        self.rating.clamp(0.0, 5.0).floor() as u8
    }
}
