use crate::models::{Credentials, NewBudget, NewBudgetItem};

pub fn parse_month_duration(raw: &str) -> Result<u32, String> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n == 1 || n == 12 => Ok(n),
        Ok(_) => Err("Month duration must be 1 (month) or 12 (year).".to_string()),
        Err(_) => Err("Month duration must be a number (1 or 12).".to_string()),
    }
}

pub fn parse_non_negative(field: &str, raw: &str) -> Result<f64, String> {
    match raw.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(n),
        Ok(_) => Err(format!("{} must be a non negative number.", field)),
        Err(_) => Err(format!("{} must be a valid number.", field)),
    }
}

fn required(field: &str, raw: &str) -> Result<String, String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(format!("{} is required.", field));
    }
    Ok(value.to_string())
}

pub fn new_budget(name: &str, gross_income: &str, month_duration: &str) -> Result<NewBudget, String> {
    Ok(NewBudget {
        name: required("Name", name)?,
        gross_income: parse_non_negative("Gross income", gross_income)?,
        month_duration: parse_month_duration(month_duration)?,
    })
}

pub fn new_item(budget_id: i64, name: &str, category: &str, total: &str) -> Result<NewBudgetItem, String> {
    Ok(NewBudgetItem {
        budget_id,
        name: required("Item name", name)?,
        category: required("Category", category)?,
        total: parse_non_negative("Total", total)?,
    })
}

pub fn credentials(username: &str, password: &str) -> Result<Credentials, String> {
    if username.trim().is_empty() || password.is_empty() {
        return Err("Username and/or password must not be empty.".to_string());
    }
    Ok(Credentials {
        username: username.trim().to_string(),
        password: password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_duration_only_allows_month_or_year() {
        assert_eq!(parse_month_duration("1"), Ok(1));
        assert_eq!(parse_month_duration(" 12 "), Ok(12));
        assert!(parse_month_duration("6").unwrap_err().contains("1 (month) or 12"));
        assert!(parse_month_duration("soon").unwrap_err().contains("must be a number"));
    }

    #[test]
    fn amounts_must_be_non_negative_numbers() {
        assert_eq!(parse_non_negative("Total", "0"), Ok(0.0));
        assert_eq!(parse_non_negative("Total", "12.5"), Ok(12.5));
        assert_eq!(
            parse_non_negative("Total", "-1"),
            Err("Total must be a non negative number.".to_string())
        );
        assert_eq!(
            parse_non_negative("Total", "abc"),
            Err("Total must be a valid number.".to_string())
        );
        assert!(parse_non_negative("Total", "NaN").is_err());
    }

    #[test]
    fn new_budget_reports_first_problem() {
        assert_eq!(new_budget("  ", "100", "1").unwrap_err(), "Name is required.");
        let budget = new_budget(" Household ", "4500.50", "12").unwrap();
        assert_eq!(budget.name, "Household");
        assert_eq!(budget.gross_income, 4500.5);
        assert_eq!(budget.month_duration, 12);
    }

    #[test]
    fn new_item_requires_category() {
        assert_eq!(new_item(3, "Rent", "", "900").unwrap_err(), "Category is required.");
        let item = new_item(3, "Rent", "housing", "900").unwrap();
        assert_eq!(item.budget_id, 3);
        assert_eq!(item.total, 900.0);
    }

    #[test]
    fn credentials_must_be_present() {
        assert!(credentials("", "secret").is_err());
        assert!(credentials("sam", "").is_err());
        assert_eq!(credentials(" sam ", "pw").unwrap().username, "sam");
    }
}
