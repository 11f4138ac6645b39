use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use crate::config::UNCATEGORIZED;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct BudgetItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(deserialize_with = "amount")]
    pub total: f64,
}

impl BudgetItem {
    /// Grouping key for this item. Absent or blank categories share the
    /// `uncategorized` bucket.
    pub fn category_key(&self) -> &str {
        match self.category.as_deref() {
            Some(cat) if !cat.trim().is_empty() => cat,
            _ => UNCATEGORIZED,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub name: String,
    #[serde(deserialize_with = "amount")]
    pub gross_income: f64,
    pub month_duration: u32,
    #[serde(default)]
    pub items: Vec<BudgetItem>,
}

#[derive(Deserialize)]
pub struct BudgetEnvelope {
    pub budget: Budget,
}

#[derive(Deserialize)]
#[serde(untagged)]
pub enum BudgetList {
    Wrapped { budgets: Vec<Budget> },
    Bare(Vec<Budget>),
}

impl BudgetList {
    pub fn into_vec(self) -> Vec<Budget> {
        match self {
            BudgetList::Wrapped { budgets } => budgets,
            BudgetList::Bare(budgets) => budgets,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
pub enum CategoryList {
    Wrapped { categories: Vec<String> },
    Bare(Vec<String>),
}

impl CategoryList {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            CategoryList::Wrapped { categories } => categories,
            CategoryList::Bare(categories) => categories,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct MessageBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewBudget {
    pub name: String,
    pub gross_income: f64,
    pub month_duration: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BudgetUpdate {
    pub budget_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gross_income: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month_duration: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewBudgetItem {
    pub budget_id: i64,
    pub name: String,
    pub category: String,
    pub total: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BudgetItemUpdate {
    pub budget_id: i64,
    pub item_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BudgetRef {
    pub budget_id: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ItemRef {
    pub budget_id: i64,
    pub item_id: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(f64),
    Text(String),
}

// Decimal columns reach us either as JSON numbers or as strings like "1200.50".
fn amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(n) => Ok(n),
        RawAmount::Text(raw) => raw
            .trim()
            .trim_start_matches('$')
            .replace(',', "")
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid amount: {:?}", raw))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn item_totals_accept_numbers_and_strings() {
        let items: Vec<BudgetItem> = serde_json::from_value(json!([
            { "id": 1, "name": "Rent", "category": "housing", "total": 1200.5 },
            { "id": 2, "name": "Groceries", "category": "food", "total": "310.25" },
            { "id": 3, "name": "Car", "category": "transport", "total": "$1,050.00" },
        ]))
        .unwrap();

        assert_eq!(items[0].total, 1200.5);
        assert_eq!(items[1].total, 310.25);
        assert_eq!(items[2].total, 1050.0);
    }

    #[test]
    fn garbage_amount_is_rejected() {
        let parsed = serde_json::from_value::<BudgetItem>(json!({
            "id": 1, "name": "Rent", "category": "housing", "total": "lots"
        }));
        assert!(parsed.is_err());
    }

    #[test]
    fn missing_null_or_blank_category_is_uncategorized() {
        let items: Vec<BudgetItem> = serde_json::from_value(json!([
            { "id": 1, "name": "a", "total": 1 },
            { "id": 2, "name": "b", "category": null, "total": 1 },
            { "id": 3, "name": "c", "category": "  ", "total": 1 },
            { "id": 4, "name": "d", "category": "food", "total": 1 },
        ]))
        .unwrap();

        let keys: Vec<&str> = items.iter().map(|i| i.category_key()).collect();
        assert_eq!(keys, vec!["uncategorized", "uncategorized", "uncategorized", "food"]);
    }

    #[test]
    fn budget_list_accepts_wrapped_and_bare_shapes() {
        let wrapped: BudgetList = serde_json::from_value(json!({
            "budgets": [{ "id": 1, "name": "Home", "gross_income": "5000.00", "month_duration": 1 }]
        }))
        .unwrap();
        let bare: BudgetList = serde_json::from_value(json!([
            { "id": 2, "name": "Year", "gross_income": 60000, "month_duration": 12, "items": [] }
        ]))
        .unwrap();

        let wrapped = wrapped.into_vec();
        assert_eq!(wrapped[0].gross_income, 5000.0);
        assert!(wrapped[0].items.is_empty());
        assert_eq!(bare.into_vec()[0].month_duration, 12);
    }

    #[test]
    fn partial_updates_only_send_changed_fields() {
        let update = BudgetItemUpdate {
            budget_id: 5,
            item_id: 9,
            total: Some(42.0),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "budget_id": 5, "item_id": 9, "total": 42.0 })
        );
    }
}
