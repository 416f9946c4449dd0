//! Membership plans and price display.

#[cfg(test)]
#[path = "membership_test.rs"]
mod membership_test;

/// Yearly billing charges this many months (two months free).
pub const YEARLY_MONTHS_CHARGED: u32 = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Billing {
    #[default]
    Monthly,
    Yearly,
}

impl Billing {
    pub fn toggled(self) -> Self {
        match self {
            Self::Monthly => Self::Yearly,
            Self::Yearly => Self::Monthly,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Self::Monthly => "/ month",
            Self::Yearly => "/ year",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub monthly_cents: u32,
    pub tagline: &'static str,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

pub const PLANS: &[Plan] = &[
    Plan {
        id: "free",
        name: "Free",
        monthly_cents: 0,
        tagline: "Everything you need to get started.",
        features: &["30 chats per day", "1 companion", "Community access"],
        highlighted: false,
    },
    Plan {
        id: "plus",
        name: "Plus",
        monthly_cents: 999,
        tagline: "For everyday creators.",
        features: &["Unlimited chats", "5 companions", "100 creations per month", "Early features"],
        highlighted: true,
    },
    Plan {
        id: "pro",
        name: "Pro",
        monthly_cents: 2499,
        tagline: "For power users and teams.",
        features: &["Everything in Plus", "Unlimited creations", "Digital human sessions", "Priority support"],
        highlighted: false,
    },
];

pub fn price_cents(plan: &Plan, billing: Billing) -> u32 {
    match billing {
        Billing::Monthly => plan.monthly_cents,
        Billing::Yearly => plan.monthly_cents * YEARLY_MONTHS_CHARGED,
    }
}

pub fn format_cents(cents: u32) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Price label such as `$9.99 / month`; free plans read `Free`.
pub fn price_label(plan: &Plan, billing: Billing) -> String {
    match price_cents(plan, billing) {
        0 => "Free".to_owned(),
        cents => format!("{} {}", format_cents(cents), billing.suffix()),
    }
}
