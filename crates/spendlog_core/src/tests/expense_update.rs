//! Tests for creating expenses and overlaying partial updates

use jiff::civil::date;

use super::{epoch, one_time};
use crate::error::LedgerError;
use crate::ledger::{PaymentRequest, mark_paid};
use crate::model::{ExpenseKind, ExpenseUpdate, NewExpense, PaymentModeId, PaymentState};

fn new_expense(amount: f64) -> NewExpense {
    NewExpense {
        title: "Laptop".to_string(),
        amount,
        category: "Electronics".to_string(),
        date: date(2025, 2, 1),
        description: None,
        payment_mode_id: PaymentModeId(1),
        is_emi: false,
        emi_tenure: None,
        emi_interest_rate: None,
        emi_processing_fees: None,
        emi_gst: None,
    }
}

fn new_installment(principal: f64, tenure: u32, rate: f64) -> NewExpense {
    NewExpense {
        is_emi: true,
        emi_tenure: Some(tenure),
        emi_interest_rate: Some(rate),
        ..new_expense(principal)
    }
}

#[test]
fn test_build_one_time() {
    let expense = new_expense(75_000.0).build(epoch()).unwrap();
    assert_eq!(expense.kind, ExpenseKind::OneTime);
    assert_eq!(expense.amount, 75_000.0);
    assert_eq!(expense.payment, PaymentState::default());
}

/// The amount becomes the total payable; the principal is kept in the plan
#[test]
fn test_build_installment_replaces_amount() {
    let expense = new_installment(12_000.0, 12, 12.0).build(epoch()).unwrap();

    assert_eq!(expense.amount, 12_794.23);
    assert_eq!(expense.payable_amount(), 12_794.23);
    assert_eq!(expense.principal_amount(), 12_000.0);
    let plan = expense.plan().unwrap();
    assert_eq!(plan.monthly_amount(), 1066.19);
    assert_eq!(plan.total_interest(), 794.23);
}

#[test]
fn test_build_installment_requires_tenure() {
    let mut input = new_installment(12_000.0, 12, 12.0);
    input.emi_tenure = None;
    let err = input.build(epoch()).unwrap_err();
    assert_eq!(err.field(), Some("emi_tenure"));
}

#[test]
fn test_build_rejects_zero_tenure() {
    let err = new_installment(12_000.0, 0, 12.0).build(epoch()).unwrap_err();
    assert_eq!(err.field(), Some("tenure"));
}

#[test]
fn test_build_validates_labels_and_amount() {
    let mut input = new_expense(10.0);
    input.title = "   ".to_string();
    assert_eq!(input.build(epoch()).unwrap_err().field(), Some("title"));

    let mut input = new_expense(10.0);
    input.category = "x".repeat(201);
    assert_eq!(input.build(epoch()).unwrap_err().field(), Some("category"));

    assert_eq!(new_expense(0.0).build(epoch()).unwrap_err().field(), Some("amount"));
    assert_eq!(
        new_installment(0.0, 6, 0.0).build(epoch()).unwrap_err().field(),
        Some("amount")
    );
}

#[test]
fn test_update_plain_fields_keeps_plan() {
    let expense = new_installment(12_000.0, 12, 12.0).build(epoch()).unwrap();
    let update = ExpenseUpdate {
        title: Some("Phone".to_string()),
        description: Some("256GB".to_string()),
        ..Default::default()
    };

    let updated = expense.apply_update(&update, epoch()).unwrap();
    assert_eq!(updated.title, "Phone");
    assert_eq!(updated.description.as_deref(), Some("256GB"));
    assert_eq!(updated.kind, expense.kind);
    assert_eq!(updated.amount, 12_794.23);
    assert_eq!(updated.updated_at, Some(epoch()));
}

/// Changing one input recomputes from the stored principal, not the stored total
#[test]
fn test_update_tenure_recomputes_from_stored_principal() {
    let expense = new_installment(12_000.0, 12, 12.0).build(epoch()).unwrap();
    let update = ExpenseUpdate {
        emi_tenure: Some(6),
        ..Default::default()
    };

    let updated = expense.apply_update(&update, epoch()).unwrap();
    let plan = updated.plan().unwrap();
    assert_eq!(plan.principal(), 12_000.0);
    assert_eq!(plan.tenure(), 6);
    assert_eq!(plan.annual_rate_percent(), 12.0);
    assert_eq!(plan.monthly_amount(), 2070.58);
    assert_eq!(updated.amount, plan.total_amount());
}

#[test]
fn test_update_amount_is_new_principal() {
    let expense = new_installment(12_000.0, 12, 12.0).build(epoch()).unwrap();
    let update = ExpenseUpdate {
        amount: Some(1_200.0),
        emi_interest_rate: Some(0.0),
        ..Default::default()
    };

    let updated = expense.apply_update(&update, epoch()).unwrap();
    assert_eq!(updated.plan().unwrap().monthly_amount(), 100.0);
    assert_eq!(updated.amount, 1_200.0);
}

#[test]
fn test_update_enables_installment_mode() {
    let expense = one_time(1, 1_000.0, "Electronics", date(2025, 2, 1), 1);
    let update = ExpenseUpdate {
        is_emi: Some(true),
        emi_tenure: Some(10),
        ..Default::default()
    };

    let updated = expense.apply_update(&update, epoch()).unwrap();
    let plan = updated.plan().unwrap();
    assert_eq!(plan.principal(), 1_000.0);
    assert_eq!(plan.monthly_amount(), 100.0);
    assert_eq!(updated.amount, 1_000.0);
}

#[test]
fn test_enabling_installment_mode_requires_tenure() {
    let expense = one_time(1, 1_000.0, "Electronics", date(2025, 2, 1), 1);
    let update = ExpenseUpdate {
        is_emi: Some(true),
        ..Default::default()
    };

    let err = expense.apply_update(&update, epoch()).unwrap_err();
    assert_eq!(err.field(), Some("emi_tenure"));
}

#[test]
fn test_disabling_installment_mode_restores_principal() {
    let expense = new_installment(12_000.0, 12, 12.0).build(epoch()).unwrap();
    let update = ExpenseUpdate {
        is_emi: Some(false),
        ..Default::default()
    };

    let updated = expense.apply_update(&update, epoch()).unwrap();
    assert_eq!(updated.kind, ExpenseKind::OneTime);
    assert_eq!(updated.amount, 12_000.0);
}

#[test]
fn test_disabling_partially_paid_installments_rejected() {
    let expense = new_installment(12_000.0, 12, 12.0).build(epoch()).unwrap();
    let expense = mark_paid(&expense, PaymentRequest::default(), date(2025, 3, 1)).unwrap();
    let update = ExpenseUpdate {
        is_emi: Some(false),
        ..Default::default()
    };

    let err = expense.apply_update(&update, epoch()).unwrap_err();
    assert_eq!(err.field(), Some("is_emi"));
}

#[test]
fn test_rebuild_below_paid_amount_rejected() {
    let mut expense = new_installment(12_000.0, 12, 12.0).build(epoch()).unwrap();
    for _ in 0..6 {
        expense = mark_paid(&expense, PaymentRequest::default(), date(2025, 3, 1)).unwrap();
    }
    let update = ExpenseUpdate {
        amount: Some(1_000.0),
        ..Default::default()
    };

    let err = expense.apply_update(&update, epoch()).unwrap_err();
    assert!(matches!(err, LedgerError::InvalidInput { field: "amount", .. }));
}

#[test]
fn test_rebuild_of_partially_paid_plan_keeps_payment_state() {
    let mut expense = new_installment(12_000.0, 12, 12.0).build(epoch()).unwrap();
    expense = mark_paid(&expense, PaymentRequest::default(), date(2025, 3, 1)).unwrap();
    let update = ExpenseUpdate {
        emi_processing_fees: Some(199.0),
        ..Default::default()
    };

    let updated = expense.apply_update(&update, epoch()).unwrap();
    assert_eq!(updated.payment, expense.payment);
    assert_eq!(updated.amount, 12_993.23);
}

#[test]
fn test_incomplete_installment_left_alone_until_terms_supplied() {
    let mut expense = one_time(1, 900.0, "Electronics", date(2025, 2, 1), 1);
    expense.kind = ExpenseKind::IncompleteInstallment;

    let renamed = expense
        .apply_update(
            &ExpenseUpdate {
                title: Some("TV".to_string()),
                ..Default::default()
            },
            epoch(),
        )
        .unwrap();
    assert_eq!(renamed.kind, ExpenseKind::IncompleteInstallment);

    let repaired = expense
        .apply_update(
            &ExpenseUpdate {
                emi_tenure: Some(9),
                ..Default::default()
            },
            epoch(),
        )
        .unwrap();
    assert_eq!(repaired.plan().unwrap().monthly_amount(), 100.0);
}
