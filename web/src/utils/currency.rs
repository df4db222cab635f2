/// Indian-system digit grouping: the last three digits, then pairs.
fn group_indian(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::new();

    if digits.len() > 3 {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let head_bytes = head.as_bytes();
        let mut start = head_bytes.len() % 2;
        if start == 0 {
            start = 2;
        }
        grouped.push_str(&head[..start]);
        let mut index = start;
        while index < head.len() {
            grouped.push(',');
            grouped.push_str(&head[index..index + 2]);
            index += 2;
        }
        grouped.push(',');
        grouped.push_str(tail);
    } else {
        grouped.push_str(&digits);
    }

    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Whole-rupee display, e.g. `₹2,999`. List prices are always whole.
pub fn inr(amount: f64) -> String {
    format!("\u{20b9}{}", group_indian(amount.round() as i64))
}

/// Rupees with paise, e.g. `₹899.64`, for the tax and total rows.
pub fn inr_exact(amount: f64) -> String {
    let total_paise = (amount * 100.0).round() as i64;
    let rupees = total_paise / 100;
    let paise = (total_paise % 100).abs();
    format!("\u{20b9}{}.{:02}", group_indian(rupees), paise)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_in_the_indian_system() {
        assert_eq!(inr(800.0), "₹800");
        assert_eq!(inr(2999.0), "₹2,999");
        assert_eq!(inr(24999.0), "₹24,999");
        assert_eq!(inr(150000.0), "₹1,50,000");
        assert_eq!(inr(12345678.0), "₹1,23,45,678");
    }

    #[test]
    fn exact_keeps_two_decimal_places() {
        assert_eq!(inr_exact(899.64), "₹899.64");
        assert_eq!(inr_exact(5897.64), "₹5,897.64");
        assert_eq!(inr_exact(4998.0), "₹4,998.00");
    }

    #[test]
    fn rounds_to_the_nearest_paisa() {
        assert_eq!(inr_exact(0.005), "₹0.01");
        assert_eq!(inr(999.6), "₹1,000");
    }
}
