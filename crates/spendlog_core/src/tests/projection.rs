//! Tests for the EMI progress projection
//!
//! Ledger-backed cases (payments were recorded) and estimate-based cases
//! (nothing recorded, progress guessed from elapsed months) are kept apart:
//! only the former are payment facts.

use jiff::civil::date;

use super::{installment, one_time};
use crate::amortization::InstallmentTerms;
use crate::ledger::{PaymentRequest, mark_paid, mark_unpaid};
use crate::model::{Expense, ExpenseKind};
use crate::projection::{PaidSource, project_installment_status};

fn plan_12k() -> Expense {
    installment(1, InstallmentTerms::new(12_000.0, 12, 12.0), date(2025, 1, 15), 1)
}

fn pay_times(mut expense: Expense, n: usize) -> Expense {
    for _ in 0..n {
        expense = mark_paid(&expense, PaymentRequest::default(), date(2025, 1, 20)).unwrap();
    }
    expense
}

#[test]
fn test_one_time_expense_is_not_projected() {
    let expense = one_time(1, 50.0, "Food", date(2025, 1, 1), 1);
    assert!(project_installment_status(&expense, date(2025, 6, 1)).is_none());
}

#[test]
fn test_incomplete_installment_is_skipped() {
    let mut expense = one_time(1, 50.0, "Food", date(2025, 1, 1), 1);
    expense.kind = ExpenseKind::IncompleteInstallment;
    assert!(project_installment_status(&expense, date(2025, 6, 1)).is_none());
}

mod ledger_backed {
    use super::*;

    #[test]
    fn test_recorded_payments_win_over_elapsed_time() {
        // Three installments paid, but ten months have passed
        let expense = pay_times(plan_12k(), 3);
        let status = project_installment_status(&expense, date(2025, 11, 2)).unwrap();

        assert_eq!(status.paid_source, PaidSource::Ledger);
        assert_eq!(status.total_paid, 3198.57);
        assert_eq!(status.remaining_amount, 9595.66);
        assert_eq!(status.remaining_count, 9);
        assert_eq!(status.months_elapsed, 10);
    }

    #[test]
    fn test_fully_paid_has_nothing_remaining() {
        let expense = pay_times(plan_12k(), 12);
        assert!(expense.payment.is_paid);

        let status = project_installment_status(&expense, date(2025, 3, 1)).unwrap();
        assert_eq!(status.paid_source, PaidSource::Settled);
        assert_eq!(status.total_paid, 12_794.23);
        assert_eq!(status.remaining_amount, 0.0);
        assert_eq!(status.remaining_count, 0);
    }

    #[test]
    fn test_paid_flag_without_amount_falls_back_to_total() {
        let mut expense = plan_12k();
        expense.payment.is_paid = true;

        let status = project_installment_status(&expense, date(2025, 3, 1)).unwrap();
        assert_eq!(status.total_paid, 12_794.23);
        assert_eq!(status.remaining_count, 0);
    }

    #[test]
    fn test_remaining_plus_paid_is_total() {
        let mut expense = plan_12k();
        let total = expense.plan().unwrap().total_amount();
        for n in 0..=13 {
            let status = project_installment_status(&expense, date(2025, 1, 20)).unwrap();
            assert!(
                (status.remaining_amount + status.total_paid - total).abs() < 1e-6,
                "after {n} payments: {status:?}"
            );
            expense = pay_times(expense, 1);
        }
    }

    #[test]
    fn test_mark_unpaid_returns_to_estimate() {
        let expense = mark_unpaid(&pay_times(plan_12k(), 4));
        let status = project_installment_status(&expense, date(2025, 3, 1)).unwrap();
        assert_eq!(status.paid_source, PaidSource::Estimate);
        assert_eq!(status.total_paid, 2132.38);
    }
}

mod estimate_based {
    use super::*;

    #[test]
    fn test_estimate_from_elapsed_months() {
        let expense = plan_12k();
        // Jan 15 -> Apr 1 is three calendar months regardless of the day
        let status = project_installment_status(&expense, date(2025, 4, 1)).unwrap();

        assert_eq!(status.paid_source, PaidSource::Estimate);
        assert_eq!(status.months_elapsed, 3);
        assert_eq!(status.total_paid, 3198.57);
        assert_eq!(status.remaining_count, 9);
        assert_eq!(status.remaining_amount, 9595.66);
    }

    #[test]
    fn test_estimate_before_start_is_zero() {
        let expense = plan_12k();
        let status = project_installment_status(&expense, date(2024, 12, 31)).unwrap();

        assert_eq!(status.months_elapsed, 0);
        assert_eq!(status.total_paid, 0.0);
        assert_eq!(status.remaining_count, 12);
        assert_eq!(status.remaining_amount, 12_794.23);
    }

    #[test]
    fn test_estimate_clamped_to_total() {
        let expense = plan_12k();
        let status = project_installment_status(&expense, date(2028, 1, 1)).unwrap();

        assert_eq!(status.months_elapsed, 36);
        assert_eq!(status.total_paid, 12_794.23);
        assert_eq!(status.remaining_amount, 0.0);
        assert_eq!(status.remaining_count, 0);
    }

    #[test]
    fn test_zero_installment_counts_down_by_months() {
        // A principal this small rounds to a zero installment
        let expense = installment(1, InstallmentTerms::new(0.01, 12, 0.0).with_fees(5.0, 0.0), date(2025, 1, 1), 1);
        assert_eq!(expense.plan().unwrap().monthly_amount(), 0.0);

        let status = project_installment_status(&expense, date(2025, 5, 1)).unwrap();
        assert_eq!(status.total_paid, 0.0);
        assert_eq!(status.remaining_count, 8);
    }
}
