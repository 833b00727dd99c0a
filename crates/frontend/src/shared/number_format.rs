//! Утилиты форматирования денежных значений для таблиц

/// Форматирует сумму в юанях: "¥1,234.56"
pub fn format_yuan(value: f64) -> String {
    let negative = value < 0.0;
    let formatted = format!("{:.2}", value.abs());
    let (int_part, dec_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::new();
    let chars: Vec<char> = int_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    let int_grouped: String = grouped.chars().rev().collect();

    if negative {
        format!("-¥{}.{}", int_grouped, dec_part)
    } else {
        format!("¥{}.{}", int_grouped, dec_part)
    }
}

/// Значение редактируемого числового поля: пусто пока не введено.
pub fn optional_to_input(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

pub fn optional_price_to_input(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_yuan() {
        assert_eq!(format_yuan(1234.56), "¥1,234.56");
        assert_eq!(format_yuan(1234567.891), "¥1,234,567.89");
        assert_eq!(format_yuan(0.0), "¥0.00");
        assert_eq!(format_yuan(-88.5), "-¥88.50");
        assert_eq!(format_yuan(755.0), "¥755.00");
    }

    #[test]
    fn test_optional_inputs() {
        assert_eq!(optional_to_input(None), "");
        assert_eq!(optional_to_input(Some(12)), "12");
        assert_eq!(optional_price_to_input(Some(15.5)), "15.50");
    }
}
