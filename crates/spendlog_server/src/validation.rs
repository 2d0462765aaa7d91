use jiff::civil::Date;
use spendlog_core::model::YearMonth;

use crate::error::{ApiError, ApiResult};
use crate::models::BillsQuery;

const MAX_NAME_LEN: usize = 200;
const MAX_PAGE_SIZE: usize = 1000;

/// Validate payment mode name
pub fn validate_payment_mode_name(name: &str) -> ApiResult<()> {
    if name.trim().is_empty() {
        return Err(ApiError::validation(
            "name",
            "Payment mode name cannot be empty",
        ));
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ApiError::validation(
            "name",
            "Payment mode name cannot exceed 200 characters",
        ));
    }

    Ok(())
}

/// Validate a `#RGB` or `#RRGGBB` color
pub fn validate_color(color: &str) -> ApiResult<()> {
    let hex = color.strip_prefix('#').unwrap_or_default();
    let well_formed =
        matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit());
    if !well_formed {
        return Err(ApiError::validation(
            "color",
            format!("'{color}' is not a hex color like #FF6B6B"),
        ));
    }
    Ok(())
}

/// Validate budget category
pub fn validate_budget_category(category: &str) -> ApiResult<()> {
    if category.trim().is_empty() {
        return Err(ApiError::validation(
            "category",
            "Budget category cannot be empty",
        ));
    }

    if category.chars().count() > MAX_NAME_LEN {
        return Err(ApiError::validation(
            "category",
            "Budget category cannot exceed 200 characters",
        ));
    }

    Ok(())
}

/// Validate budget amount
pub fn validate_budget_amount(amount: f64) -> ApiResult<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ApiError::validation(
            "amount",
            "Budget amount must be greater than 0",
        ));
    }
    Ok(())
}

/// Validate page size for listings
pub fn validate_limit(limit: usize) -> ApiResult<()> {
    if limit == 0 {
        return Err(ApiError::validation("limit", "Limit must be greater than 0"));
    }

    if limit > MAX_PAGE_SIZE {
        return Err(ApiError::validation(
            "limit",
            "Limit cannot exceed 1,000",
        ));
    }

    Ok(())
}

/// Validate an optional date window
pub fn validate_date_range(start: Option<Date>, end: Option<Date>) -> ApiResult<()> {
    match (start, end) {
        (Some(start), Some(end)) if start > end => Err(ApiError::validation(
            "start_date",
            "Start date must not be after end date",
        )),
        _ => Ok(()),
    }
}

/// Month to restrict bills to. Only a complete month/year pair filters.
pub fn bills_period(query: &BillsQuery) -> ApiResult<Option<YearMonth>> {
    match (query.month, query.year) {
        (Some(month), Some(year)) => Ok(Some(YearMonth::new(year, month)?)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn test_validate_payment_mode_name() {
        assert!(validate_payment_mode_name("HDFC Regalia").is_ok());
        assert!(validate_payment_mode_name("").is_err());
        assert!(validate_payment_mode_name("   ").is_err());
        assert!(validate_payment_mode_name(&"a".repeat(201)).is_err());
    }

    #[test]
    fn test_validate_color() {
        assert!(validate_color("#FF6B6B").is_ok());
        assert!(validate_color("#abc").is_ok());
        assert!(validate_color("FF6B6B").is_err());
        assert!(validate_color("#GG0000").is_err());
        assert!(validate_color("#FF6B6").is_err());
    }

    #[test]
    fn test_validate_budget() {
        assert!(validate_budget_category("Food").is_ok());
        assert!(validate_budget_category(" ").is_err());
        assert!(validate_budget_amount(500.0).is_ok());
        assert!(validate_budget_amount(0.0).is_err());
        assert!(validate_budget_amount(-5.0).is_err());
        assert!(validate_budget_amount(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_limit() {
        assert!(validate_limit(1).is_ok());
        assert!(validate_limit(1000).is_ok());
        assert!(validate_limit(0).is_err());
        assert!(validate_limit(1001).is_err());
    }

    #[test]
    fn test_validate_date_range() {
        let early = Some(date(2025, 1, 1));
        let late = Some(date(2025, 2, 1));
        assert!(validate_date_range(early, late).is_ok());
        assert!(validate_date_range(early, early).is_ok());
        assert!(validate_date_range(None, late).is_ok());
        assert!(validate_date_range(late, early).is_err());
    }

    #[test]
    fn test_bills_period_needs_both_parts() {
        let full = BillsQuery {
            month: Some(3),
            year: Some(2025),
        };
        assert_eq!(bills_period(&full).unwrap(), Some(YearMonth::new(2025, 3).unwrap()));

        let month_only = BillsQuery {
            month: Some(3),
            year: None,
        };
        assert_eq!(bills_period(&month_only).unwrap(), None);
        assert_eq!(bills_period(&BillsQuery::default()).unwrap(), None);

        let bad = BillsQuery {
            month: Some(13),
            year: Some(2025),
        };
        assert!(matches!(
            bills_period(&bad),
            Err(ApiError::ValidationError { ref field, .. }) if field == "month"
        ));
    }
}
