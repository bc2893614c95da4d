// Host-side tests for loader, cart and navigation helpers.

use simba_core::loading::*;
use simba_core::nav::*;
use simba_core::shop::*;

#[test]
fn loader_completes_once() {
    let mut t = LoadTracker::new(3);
    assert!(!t.settle("a", true).unwrap().just_completed);
    assert!(!t.settle("b", false).unwrap().just_completed);
    let last = t.settle("c", true).unwrap();
    assert!(last.just_completed);
    assert_eq!(last.percent, 100.0);
    assert!(t.is_complete());
    // A duplicate settlement is ignored
    assert!(t.settle("c", true).is_none());
}

#[test]
fn failed_assets_still_count() {
    let mut t = LoadTracker::new(2);
    t.settle("x", false);
    assert_eq!(t.percent(), 50.0);
    assert!(t.settle("y", false).unwrap().just_completed);
}

#[test]
fn simulated_loader_uses_ten_steps() {
    let mut t = LoadTracker::new(0);
    assert_eq!(t.total(), SIMULATED_STEPS);
    let mut completions = 0;
    for _ in 0..SIMULATED_STEPS + 3 {
        if t.step().just_completed {
            completions += 1;
        }
    }
    assert_eq!(completions, 1);
    assert_eq!(t.percent(), 100.0);
}

#[test]
fn site_assets_include_the_can_model() {
    assert!(SITE_ASSETS.iter().any(|a| a.kind == AssetKind::Model));
    assert_eq!(
        SITE_ASSETS.iter().filter(|a| a.kind == AssetKind::Image).count(),
        4
    );
}

#[test]
fn cart_total_is_sum_of_prices() {
    let mut cart = Cart::default();
    cart.add("Original", 3.99);
    cart.add("Zero Sugar", 4.49);
    cart.add("Gold Edition", 5.25);
    assert_eq!(cart.count(), 3);
    let sum: f32 = cart.items().iter().map(|i| i.price).sum();
    assert!((cart.total() - sum).abs() < 1e-4);
    assert!((cart.total() - 13.73).abs() < 1e-4);
}

#[test]
fn price_parsing() {
    assert_eq!(parse_price("$3.99"), Some(3.99));
    assert_eq!(parse_price(" ₹120 "), Some(120.0));
    assert_eq!(parse_price("free"), None);
    assert_eq!(added_message("Original"), "Added Original to cart!");
}

#[test]
fn section_routing() {
    assert_eq!(section_from_href("#products"), Some("products"));
    assert_eq!(section_from_href("#"), None);
    assert_eq!(section_from_href("/about"), None);
    assert_eq!(section_for_history(Some("contact")), "contact");
    assert_eq!(section_for_history(Some("main")), DEFAULT_SECTION);
    assert_eq!(section_for_history(None), DEFAULT_SECTION);
}

#[test]
fn reveal_and_stagger() {
    assert!(should_reveal(500.0, 800.0));
    assert!(!should_reveal(700.0, 800.0));
    assert_eq!(stagger_delay_ms(0, 0), 0);
    assert_eq!(stagger_delay_ms(3, 50), 350);
    assert!(is_enter_key("Enter"));
    assert!(is_enter_key("Space"));
    assert!(!is_enter_key("Escape"));
}
