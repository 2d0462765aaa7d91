//! Dashboard analytics over a set of expenses
//!
//! Everything is evaluated against the calendar month containing `today`.
//! Sums use `Expense::amount`, i.e. the total payable for installment
//! purchases.

use std::collections::BTreeMap;

use jiff::civil::Date;
use serde::Serialize;

use crate::model::{Budget, Expense, PaymentMode, PaymentModeId, YearMonth};
use crate::money::{round_cents, round_tenths};

/// Month-over-month change (percent) that raises a spending insight
const CHANGE_THRESHOLD_PCT: f64 = 20.0;
/// Share of the month's spending (percent) that flags a category as dominant
const DOMINANT_SHARE_PCT: f64 = 40.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardOverview {
    pub total_expenses: f64,
    pub total_expenses_this_month: f64,
    pub top_category: String,
    pub top_category_amount: f64,
    pub most_used_payment_mode: String,
    pub expenses_count: usize,
    pub average_expense: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub category: String,
    pub amount: f64,
    pub percentage: f64,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetUsage {
    pub category: String,
    pub budget_amount: f64,
    pub spent_amount: f64,
    pub percentage_used: f64,
    pub is_exceeded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    SpendingPattern,
    BudgetAlert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Alert,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub category: Option<String>,
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpenseTrend {
    pub date: Date,
    pub amount: f64,
    pub count: usize,
}

fn in_month(expenses: &[Expense], month: YearMonth) -> impl Iterator<Item = &Expense> {
    expenses.iter().filter(move |e| month.contains(e.date))
}

/// (amount, count) per category, alphabetical
fn totals_by_category<'a>(
    expenses: impl Iterator<Item = &'a Expense>,
) -> BTreeMap<&'a str, (f64, usize)> {
    let mut totals: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for expense in expenses {
        let entry = totals.entry(expense.category.as_str()).or_default();
        entry.0 += expense.amount;
        entry.1 += 1;
    }
    totals
}

pub fn overview(expenses: &[Expense], modes: &[PaymentMode], today: Date) -> DashboardOverview {
    let month = YearMonth::of(today);

    let total_expenses: f64 = expenses.iter().map(|e| e.amount).sum();
    let total_this_month: f64 = in_month(expenses, month).map(|e| e.amount).sum();

    // Highest amount wins; ties go to the alphabetically first category
    let top = totals_by_category(in_month(expenses, month))
        .into_iter()
        .fold(None::<(&str, f64)>, |best, (category, (amount, _))| match best {
            Some((_, best_amount)) if best_amount >= amount => best,
            _ => Some((category, amount)),
        });

    let mut usage: BTreeMap<PaymentModeId, usize> = BTreeMap::new();
    for expense in in_month(expenses, month) {
        *usage.entry(expense.payment_mode_id).or_default() += 1;
    }
    let most_used = usage
        .into_iter()
        .fold(None::<(PaymentModeId, usize)>, |best, (id, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((id, count)),
        })
        .and_then(|(id, _)| modes.iter().find(|m| m.id == id))
        .map(|m| m.name.clone());

    let count = expenses.len();
    DashboardOverview {
        total_expenses: round_cents(total_expenses),
        total_expenses_this_month: round_cents(total_this_month),
        top_category: top.map_or_else(|| "No expenses".to_string(), |(c, _)| c.to_string()),
        top_category_amount: round_cents(top.map_or(0.0, |(_, a)| a)),
        most_used_payment_mode: most_used.unwrap_or_else(|| "No payments".to_string()),
        expenses_count: count,
        average_expense: if count > 0 {
            round_cents(total_expenses / count as f64)
        } else {
            0.0
        },
    }
}

/// Spending per category this month, largest first
pub fn category_breakdown(expenses: &[Expense], today: Date) -> Vec<CategoryBreakdown> {
    let month = YearMonth::of(today);
    let total: f64 = in_month(expenses, month).map(|e| e.amount).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut breakdown: Vec<CategoryBreakdown> = totals_by_category(in_month(expenses, month))
        .into_iter()
        .map(|(category, (amount, count))| CategoryBreakdown {
            category: category.to_string(),
            amount: round_cents(amount),
            percentage: round_tenths(amount / total * 100.0),
            count,
        })
        .collect();
    breakdown.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    breakdown
}

/// Usage of this month's budgets
pub fn budget_usage(expenses: &[Expense], budgets: &[Budget], today: Date) -> Vec<BudgetUsage> {
    let month = YearMonth::of(today);
    let spent = totals_by_category(in_month(expenses, month));

    budgets
        .iter()
        .filter(|b| b.month == month)
        .map(|budget| {
            let spent_amount = spent
                .get(budget.category.as_str())
                .map_or(0.0, |(amount, _)| *amount);
            BudgetUsage {
                category: budget.category.clone(),
                budget_amount: budget.amount,
                spent_amount: round_cents(spent_amount),
                percentage_used: if budget.amount > 0.0 {
                    spent_amount / budget.amount * 100.0
                } else {
                    0.0
                },
                is_exceeded: spent_amount > budget.amount,
            }
        })
        .collect()
}

/// Month-over-month changes, dominant categories and exceeded budgets
pub fn insights(expenses: &[Expense], budgets: &[Budget], today: Date) -> Vec<Insight> {
    let month = YearMonth::of(today);
    let current = totals_by_category(in_month(expenses, month));
    let previous = totals_by_category(in_month(expenses, month.previous()));

    let mut insights = Vec::new();

    for (&category, &(amount, _)) in &current {
        let Some(&(last_amount, _)) = previous.get(category) else {
            continue;
        };
        if last_amount <= 0.0 {
            continue;
        }
        let change = (amount - last_amount) / last_amount * 100.0;
        if change > CHANGE_THRESHOLD_PCT {
            insights.push(Insight {
                kind: InsightKind::SpendingPattern,
                title: format!("Spending Increase in {category}"),
                message: format!(
                    "Your {category} spending increased by {change:.1}% compared to last month. \
                     Consider reviewing your expenses in this category."
                ),
                severity: Severity::Warning,
                category: Some(category.to_string()),
                amount: Some(round_cents(amount)),
            });
        } else if change < -CHANGE_THRESHOLD_PCT {
            insights.push(Insight {
                kind: InsightKind::SpendingPattern,
                title: format!("Spending Decrease in {category}"),
                message: format!(
                    "Great job! Your {category} spending decreased by {:.1}% compared to last month.",
                    change.abs()
                ),
                severity: Severity::Info,
                category: Some(category.to_string()),
                amount: Some(round_cents(amount)),
            });
        }
    }

    let month_total: f64 = current.values().map(|(amount, _)| amount).sum();
    if month_total > 0.0 {
        for (&category, &(amount, _)) in &current {
            let share = amount / month_total * 100.0;
            if share > DOMINANT_SHARE_PCT {
                insights.push(Insight {
                    kind: InsightKind::SpendingPattern,
                    title: format!("High {category} Spending"),
                    message: format!(
                        "You're spending {share:.1}% of your money on {category}. \
                         Consider diversifying your expenses."
                    ),
                    severity: Severity::Alert,
                    category: Some(category.to_string()),
                    amount: Some(round_cents(amount)),
                });
            }
        }
    }

    for usage in budget_usage(expenses, budgets, today) {
        if usage.is_exceeded {
            insights.push(Insight {
                kind: InsightKind::BudgetAlert,
                title: format!("{} Budget Exceeded", usage.category),
                message: format!(
                    "You've spent {:.2} of your {:.2} {} budget this month ({:.1}%).",
                    usage.spent_amount, usage.budget_amount, usage.category, usage.percentage_used
                ),
                severity: Severity::Alert,
                category: Some(usage.category),
                amount: Some(usage.spent_amount),
            });
        }
    }

    insights
}

/// Daily totals for this month, oldest first
pub fn expense_trends(expenses: &[Expense], today: Date) -> Vec<ExpenseTrend> {
    let month = YearMonth::of(today);
    let mut by_day: BTreeMap<Date, (f64, usize)> = BTreeMap::new();
    for expense in in_month(expenses, month) {
        let entry = by_day.entry(expense.date).or_default();
        entry.0 += expense.amount;
        entry.1 += 1;
    }
    by_day
        .into_iter()
        .map(|(date, (amount, count))| ExpenseTrend {
            date,
            amount: round_cents(amount),
            count,
        })
        .collect()
}
