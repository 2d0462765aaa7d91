//! Tests for per payment mode bill summaries

use jiff::civil::date;

use super::{installment, one_time, payment_mode};
use crate::amortization::InstallmentTerms;
use crate::bills::{bill_paid_amount, counts_as_paid, summarize_bills};
use crate::ledger::{PaymentRequest, mark_paid};
use crate::model::{Expense, PaymentModeId, YearMonth};

fn paid(expense: Expense) -> Expense {
    mark_paid(&expense, PaymentRequest::default(), date(2025, 3, 20)).unwrap()
}

fn fixture() -> Vec<Expense> {
    let emi = installment(3, InstallmentTerms::new(1_000.0, 10, 0.0), date(2025, 3, 5), 1);
    vec![
        paid(one_time(1, 120.5, "Food", date(2025, 3, 2), 1)),
        one_time(2, 79.5, "Food", date(2025, 3, 10), 1),
        paid(paid(emi)),
        one_time(4, 40.0, "Transport", date(2025, 3, 11), 2),
        paid(one_time(5, 999.0, "Food", date(2025, 2, 28), 1)),
    ]
}

#[test]
fn test_installment_counts_recorded_payments() {
    let emi = paid(paid(installment(3, InstallmentTerms::new(1_000.0, 10, 0.0), date(2025, 3, 5), 1)));
    assert_eq!(bill_paid_amount(&emi), 200.0);
    assert!(counts_as_paid(&emi));
    assert!(!emi.payment.is_paid);

    let fresh = installment(3, InstallmentTerms::new(1_000.0, 10, 0.0), date(2025, 3, 5), 1);
    assert_eq!(bill_paid_amount(&fresh), 0.0);
    assert!(!counts_as_paid(&fresh));
}

#[test]
fn test_one_time_counts_full_amount_once_paid() {
    let expense = one_time(1, 120.5, "Food", date(2025, 3, 2), 1);
    assert_eq!(bill_paid_amount(&expense), 0.0);

    let expense = paid(expense);
    assert_eq!(bill_paid_amount(&expense), 120.5);
    assert!(counts_as_paid(&expense));
}

#[test]
fn test_summary_for_one_month() {
    let modes = [payment_mode(1, "HDFC Card"), payment_mode(2, "Cash"), payment_mode(3, "Unused")];
    let period = YearMonth::new(2025, 3).unwrap();

    let bills = summarize_bills(&modes, &fixture(), Some(period));
    assert_eq!(bills.len(), 2, "modes without expenses are left out");

    let card = &bills[0];
    assert_eq!(card.payment_mode.id, PaymentModeId(1));
    assert_eq!(card.total_amount, 1_200.0);
    assert_eq!(card.paid_amount, 320.5);
    assert_eq!(card.unpaid_amount, 879.5);
    assert_eq!(card.expense_count, 3);
    assert_eq!(card.paid_count, 2);
    assert_eq!(card.unpaid_count, 1);
    assert!(card.expenses.iter().all(|e| period.contains(e.date)));

    let cash = &bills[1];
    assert_eq!(cash.payment_mode.name, "Cash");
    assert_eq!(cash.total_amount, 40.0);
    assert_eq!(cash.paid_amount, 0.0);
    assert_eq!(cash.unpaid_count, 1);
}

#[test]
fn test_summary_without_period_covers_everything() {
    let modes = [payment_mode(1, "HDFC Card"), payment_mode(2, "Cash")];

    let bills = summarize_bills(&modes, &fixture(), None);
    let card = &bills[0];
    assert_eq!(card.expense_count, 4);
    assert_eq!(card.total_amount, 2_199.0);
    assert_eq!(card.paid_amount, 1_319.5);
    assert_eq!(card.unpaid_amount, 879.5);
}

#[test]
fn test_summary_follows_mode_order() {
    let modes = [payment_mode(2, "Cash"), payment_mode(1, "HDFC Card")];
    let bills = summarize_bills(&modes, &fixture(), None);
    let ids: Vec<_> = bills.iter().map(|b| b.payment_mode.id.0).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn test_empty_month_has_no_bills() {
    let modes = [payment_mode(1, "HDFC Card")];
    let period = YearMonth::new(2024, 12).unwrap();
    assert!(summarize_bills(&modes, &fixture(), Some(period)).is_empty());
}
