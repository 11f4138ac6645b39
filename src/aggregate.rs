//! Category grouping and the budget-level totals derived from it.

use std::collections::HashMap;

use crate::models::BudgetItem;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryBucket {
    pub total: f64,
    pub items: Vec<BudgetItem>,
}

/// Category buckets in first-occurrence order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryGroups {
    buckets: Vec<(String, CategoryBucket)>,
    index: HashMap<String, usize>,
}

impl CategoryGroups {
    #[cfg(test)]
    pub fn get(&self, category: &str) -> Option<&CategoryBucket> {
        self.index.get(category).map(|&i| &self.buckets[i].1)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryBucket)> {
        self.buckets.iter().map(|(cat, bucket)| (cat.as_str(), bucket))
    }

    #[cfg(test)]
    pub fn categories(&self) -> Vec<&str> {
        self.buckets.iter().map(|(cat, _)| cat.as_str()).collect()
    }

    pub fn grand_total(&self) -> f64 {
        self.buckets.iter().map(|(_, bucket)| bucket.total).sum()
    }

    fn bucket_mut(&mut self, category: &str) -> &mut CategoryBucket {
        let i = match self.index.get(category) {
            Some(&i) => i,
            None => {
                self.buckets
                    .push((category.to_string(), CategoryBucket::default()));
                let i = self.buckets.len() - 1;
                self.index.insert(category.to_string(), i);
                i
            }
        };
        &mut self.buckets[i].1
    }
}

pub fn group_items_by_category(items: &[BudgetItem]) -> CategoryGroups {
    let mut groups = CategoryGroups::default();
    for item in items {
        let bucket = groups.bucket_mut(item.category_key());
        bucket.total += item.total;
        bucket.items.push(item.clone());
    }
    groups
}

pub fn total_expenses(items: &[BudgetItem]) -> f64 {
    items.iter().map(|item| item.total).sum()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NetIncome {
    pub net_income: f64,
    pub is_negative: bool,
}

pub fn net_income(gross_income: f64, total_expenses: f64) -> NetIncome {
    let net_income = gross_income - total_expenses;
    NetIncome {
        net_income,
        is_negative: net_income < 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, category: Option<&str>, total: f64) -> BudgetItem {
        BudgetItem {
            id,
            name: format!("item-{}", id),
            category: category.map(str::to_string),
            total,
        }
    }

    #[test]
    fn categories_follow_first_occurrence() {
        let items = vec![
            item(1, Some("rent"), 1000.0),
            item(2, Some("food"), 50.0),
            item(3, Some("rent"), 25.0),
        ];
        let groups = group_items_by_category(&items);

        assert_eq!(groups.categories(), vec!["rent", "food"]);
        let rent = groups.get("rent").unwrap();
        assert_eq!(rent.total, 1025.0);
        assert_eq!(
            rent.items.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[test]
    fn interleaved_items_keep_input_order_per_bucket() {
        let items = vec![
            item(1, Some("a"), 1.0),
            item(2, Some("b"), 2.0),
            item(3, Some("a"), 3.0),
            item(4, Some("c"), 4.0),
            item(5, Some("b"), 5.0),
        ];
        let groups = group_items_by_category(&items);
        let ids = |cat: &str| {
            groups
                .get(cat)
                .unwrap()
                .items
                .iter()
                .map(|i| i.id)
                .collect::<Vec<_>>()
        };

        assert_eq!(groups.categories(), vec!["a", "b", "c"]);
        assert_eq!(ids("a"), vec![1, 3]);
        assert_eq!(ids("b"), vec![2, 5]);
        assert_eq!(ids("c"), vec![4]);
        assert_eq!(groups.get("b").unwrap().total, 7.0);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        let groups = group_items_by_category(&[]);
        assert!(groups.is_empty());
        assert_eq!(groups.len(), 0);
        assert_eq!(groups.grand_total(), 0.0);
    }

    #[test]
    fn bucket_totals_add_up_to_item_totals() {
        let items = vec![
            item(1, Some("food"), 0.1),
            item(2, Some("fun"), 0.2),
            item(3, Some("food"), 0.3),
            item(4, None, 19.99),
            item(5, Some("fun"), 1234.567),
        ];
        let groups = group_items_by_category(&items);
        let expected = total_expenses(&items);

        assert!((groups.grand_total() - expected).abs() < 1e-9);
    }

    #[test]
    fn missing_category_goes_to_uncategorized() {
        let items = vec![item(1, None, 5.0), item(2, Some(""), 7.0)];
        let groups = group_items_by_category(&items);

        assert_eq!(groups.categories(), vec!["uncategorized"]);
        assert_eq!(groups.get("uncategorized").unwrap().total, 12.0);
        assert!(groups.get("undefined").is_none());
    }

    #[test]
    fn net_income_flags_overspending() {
        let ok = net_income(3000.0, 2500.0);
        assert_eq!(ok.net_income, 500.0);
        assert!(!ok.is_negative);

        let over = net_income(1000.0, 1200.0);
        assert_eq!(over.net_income, -200.0);
        assert!(over.is_negative);
    }
}
