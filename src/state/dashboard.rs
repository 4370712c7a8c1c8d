//! Mock dashboard figures.
//!
//! Every amount is a literal; nothing is fetched or stored. Amounts are in
//! cents to keep formatting exact.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// Colour family for a summary card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoneyKind {
    Income,
    Expense,
    Savings,
    Investment,
}

impl MoneyKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Income => "summary-card summary-card--income",
            Self::Expense => "summary-card summary-card--expense",
            Self::Savings => "summary-card summary-card--savings",
            Self::Investment => "summary-card summary-card--investment",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SummaryCard {
    pub label: &'static str,
    pub amount_cents: i64,
    pub kind: MoneyKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activity {
    pub title: &'static str,
    pub when: &'static str,
    /// Positive for money in, negative for money out.
    pub amount_cents: i64,
}

impl Activity {
    pub fn is_income(&self) -> bool {
        self.amount_cents > 0
    }
}

pub const SUMMARY: [SummaryCard; 4] = [
    SummaryCard { label: "Total Income", amount_cents: 542_000, kind: MoneyKind::Income },
    SummaryCard { label: "Total Expenses", amount_cents: 328_000, kind: MoneyKind::Expense },
    SummaryCard { label: "Savings", amount_cents: 214_000, kind: MoneyKind::Savings },
    SummaryCard { label: "Investments", amount_cents: 875_000, kind: MoneyKind::Investment },
];

pub const RECENT_ACTIVITY: [Activity; 3] = [
    Activity { title: "Grocery Store", when: "Today, 2:30 PM", amount_cents: -8_732 },
    Activity { title: "Salary Deposit", when: "Yesterday, 9:00 AM", amount_cents: 250_000 },
    Activity { title: "Coffee Shop", when: "Yesterday, 8:15 AM", amount_cents: -450 },
];

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `$5,420` style, dropping cents.
pub fn format_whole_dollars(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(cents.unsigned_abs() / 100))
}

/// `+$2,500.00` / `-$87.32` style, always signed.
pub fn format_signed_amount(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "+" };
    let abs = cents.unsigned_abs();
    format!("{sign}${}.{:02}", group_thousands(abs / 100), abs % 100)
}
