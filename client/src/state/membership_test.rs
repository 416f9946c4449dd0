use super::*;

fn plan(id: &str) -> &'static Plan {
    PLANS.iter().find(|p| p.id == id).unwrap()
}

#[test]
fn monthly_price_is_list_price() {
    assert_eq!(price_cents(plan("plus"), Billing::Monthly), 999);
}

#[test]
fn yearly_price_charges_ten_months() {
    assert_eq!(price_cents(plan("plus"), Billing::Yearly), 9990);
    assert_eq!(price_cents(plan("pro"), Billing::Yearly), 24990);
}

#[test]
fn free_plan_stays_free_on_both_billings() {
    assert_eq!(price_label(plan("free"), Billing::Monthly), "Free");
    assert_eq!(price_label(plan("free"), Billing::Yearly), "Free");
}

#[test]
fn price_label_includes_period() {
    assert_eq!(price_label(plan("plus"), Billing::Monthly), "$9.99 / month");
    assert_eq!(price_label(plan("pro"), Billing::Yearly), "$249.90 / year");
}

#[test]
fn format_cents_pads_fraction() {
    assert_eq!(format_cents(5), "$0.05");
    assert_eq!(format_cents(1000), "$10.00");
}

#[test]
fn billing_toggle_flips() {
    assert_eq!(Billing::default(), Billing::Monthly);
    assert_eq!(Billing::Monthly.toggled(), Billing::Yearly);
    assert_eq!(Billing::Yearly.toggled(), Billing::Monthly);
}

#[test]
fn exactly_one_plan_is_highlighted() {
    assert_eq!(PLANS.iter().filter(|p| p.highlighted).count(), 1);
}
