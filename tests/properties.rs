//! Property tests for the pricing engine.

use std::sync::Arc;
use std::thread;

use proptest::prelude::*;
use rust_decimal::Decimal;

use build_estimator::calculation::{
    calculate_detailed_price, calculate_price, estimate_price, round_to_nearest_thousand,
};
use build_estimator::config::PricingConfig;
use build_estimator::models::{DetailedPriceBreakdown, PriceInputs, ProvinceCode};

// =============================================================================
// Strategies
// =============================================================================

fn province() -> impl Strategy<Value = ProvinceCode> {
    prop::sample::select(ProvinceCode::ALL.to_vec())
}

/// Areas in tenths of a square foot, up to well past the largest table row.
fn area() -> impl Strategy<Value = Decimal> {
    (0i64..60_000).prop_map(|tenths| Decimal::new(tenths, 1))
}

fn price(province: ProvinceCode, main: Decimal, second: Decimal, early: bool) -> DetailedPriceBreakdown {
    let inputs = PriceInputs::new(province, main, second, early).unwrap();
    calculate_detailed_price(&inputs, &PricingConfig::standard()).unwrap()
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn grand_total_is_ordered(p in province(), main in area(), second in area(), early: bool) {
        let total = price(p, main, second, early).grand_total;
        prop_assert!(total.min <= total.average);
        prop_assert!(total.average <= total.max);
    }

    #[test]
    fn category_totals_equal_their_items(p in province(), main in area(), second in area(), early: bool) {
        let extras = price(p, main, second, early).additional_costs;

        let foundation = extras.foundation;
        prop_assert_eq!(
            foundation.total,
            (foundation.bearing_piles.subtotal + foundation.bracing_piles.subtotal)
                * foundation.provincial_multiplier
                + foundation.mobilization.subtotal
        );

        let delivery = extras.delivery;
        prop_assert_eq!(
            delivery.containers.subtotal,
            delivery.containers.first_container_cost + delivery.containers.additional_containers_cost
        );
        prop_assert_eq!(delivery.total, delivery.containers.subtotal + delivery.distance.subtotal);

        let sewer = extras.sewer_water_septic;
        prop_assert_eq!(sewer.total.min, sewer.min_cost * sewer.provincial_multiplier);
        prop_assert_eq!(sewer.total.max, sewer.max_cost * sewer.provincial_multiplier);
        prop_assert_eq!(sewer.total.average, sewer.average_cost * sewer.provincial_multiplier);

        let permit = extras.permit_fees;
        prop_assert_eq!(permit.total, permit.base_cost * permit.provincial_multiplier);
    }

    #[test]
    fn repeated_estimates_are_identical(p in province(), main in area(), second in area(), early: bool) {
        let inputs = PriceInputs::new(p, main, second, early).unwrap();
        let config = PricingConfig::standard();

        let first = estimate_price(&inputs, &config).unwrap();
        let second = estimate_price(&inputs, &config).unwrap();
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn larger_main_floor_never_costs_less(
        p in province(),
        main in area(),
        extra in area(),
        second in area(),
        early: bool,
    ) {
        let smaller = price(p, main, second, early);
        let larger = price(p, main + extra, second, early);

        prop_assert!(larger.total_price >= smaller.total_price);
        prop_assert!(larger.grand_total.average >= smaller.grand_total.average);
    }

    #[test]
    fn early_adopter_discount_lowers_price(p in province(), main in area(), second in area()) {
        let inputs = PriceInputs::new(p, main, second, false).unwrap();
        let config = PricingConfig::standard();

        let full = calculate_price(&inputs, &config).unwrap();
        let discounted = calculate_price(&PriceInputs { early_adopter: true, ..inputs }, &config).unwrap();
        prop_assert!(discounted <= full);

        // Each price is rounded separately, so the gap is the rounded
        // discount give or take one rounding step.
        let discount = inputs.total_area_sqft() * Decimal::from(10);
        let gap = full - discounted;
        let rounded_discount = round_to_nearest_thousand(discount);
        prop_assert!((gap - rounded_discount).abs() <= Decimal::ONE_THOUSAND);
    }

    #[test]
    fn oversized_footprint_matches_largest_row(p in province(), beyond in 0i64..100_000, second in area()) {
        let largest = Decimal::from(3848);
        let at_limit = price(p, largest, second, false).additional_costs;
        let past_limit = price(p, largest + Decimal::from(beyond), second, false).additional_costs;

        prop_assert_eq!(past_limit.foundation, at_limit.foundation);
        prop_assert_eq!(past_limit.delivery, at_limit.delivery);
    }

    #[test]
    fn rounded_totals_are_whole_thousands(p in province(), main in area(), second in area(), early: bool) {
        let breakdown = price(p, main, second, early);
        for amount in [
            breakdown.total_price,
            breakdown.grand_total.min,
            breakdown.grand_total.max,
            breakdown.grand_total.average,
        ] {
            prop_assert!((amount % Decimal::ONE_THOUSAND).is_zero());
        }
    }
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn concurrent_estimates_share_one_config() {
    let config = Arc::new(PricingConfig::standard());
    let inputs = PriceInputs::new(
        ProvinceCode::MB,
        Decimal::from(1040),
        Decimal::from(1040),
        true,
    )
    .unwrap();
    let expected = calculate_detailed_price(&inputs, &config).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let config = Arc::clone(&config);
            thread::spawn(move || calculate_detailed_price(&inputs, &config).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
