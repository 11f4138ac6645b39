fn format_with_commas(digits: &str) -> String {
    let s = digits.chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in s.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

pub fn format_currency(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}${}.{}", sign, format_with_commas(whole), cents)
}

/// `"fixed_costs"` -> `"Fixed Costs"`.
pub fn format_category_label(category: &str) -> String {
    category
        .replace('_', " ")
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

pub fn duration_label(month_duration: u32) -> String {
    match month_duration {
        1 => "Monthly".to_string(),
        12 => "Yearly".to_string(),
        n => format!("{} months", n),
    }
}

/// Element id suffix for the accordion at `position` on the page.
pub fn category_dom_id(position: usize, category: &str) -> String {
    let slug: String = category
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '-' })
        .collect();
    format!("cat-{}-{}", position, slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_has_grouping_and_two_decimals() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(5.5), "$5.50");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-200.0), "-$200.00");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn category_labels_are_title_cased() {
        assert_eq!(format_category_label("fixed_costs"), "Fixed Costs");
        assert_eq!(format_category_label("food"), "Food");
        assert_eq!(format_category_label("uncategorized"), "Uncategorized");
        assert_eq!(format_category_label(""), "");
    }

    #[test]
    fn durations_have_readable_labels() {
        assert_eq!(duration_label(1), "Monthly");
        assert_eq!(duration_label(12), "Yearly");
        assert_eq!(duration_label(6), "6 months");
    }

    #[test]
    fn dom_ids_are_unique_per_accordion() {
        assert_eq!(category_dom_id(0, "fixed_costs"), "cat-0-fixed_costs");
        assert_eq!(category_dom_id(2, "eating out"), "cat-2-eating-out");
        assert_ne!(category_dom_id(0, "fixed_costs"), category_dom_id(1, "fixed-costs"));
        assert_ne!(category_dom_id(0, "a b"), category_dom_id(1, "a-b"));
    }
}
