use proptest::prelude::*;
use tempora::{
    between, date_time, days, floor, hours, local_date, minus, months, plus, weeks, within,
    FixedClock, Interval, Kind, TemporalValue, Unit,
};

fn dt(y: i32, mo: u32, d: u32) -> TemporalValue {
    date_time((y, mo, d)).unwrap()
}

#[test]
fn month_then_week_addition_matches_reference_scenario() {
    let v = plus(&dt(1986, 10, 14), &[months(1), weeks(3)]).unwrap();
    assert!(v.equal(&dt(1986, 12, 5)).unwrap());
}

#[test]
fn twelve_day_interval_measures_17280_minutes() {
    let i = Interval::new(dt(1986, 10, 2), dt(1986, 10, 14)).unwrap();
    assert_eq!(i.in_units(Unit::Minutes).unwrap(), 17_280);
}

#[test]
fn interval_contains_interior_point() {
    let i = Interval::new(dt(1986, 1, 1), dt(1990, 1, 1)).unwrap();
    assert!(i.contains(&dt(1987, 1, 1)).unwrap());
    assert!(i.contains(&dt(1986, 1, 1)).unwrap());
    assert!(!i.contains(&dt(1990, 1, 1)).unwrap());
}

#[test]
fn overlap_clamps_to_inner_boundaries() {
    let a = Interval::new(dt(1986, 1, 1), dt(1990, 1, 1)).unwrap();
    let b = Interval::new(dt(1987, 1, 1), dt(1991, 1, 1)).unwrap();
    let o = a.overlap(&b).unwrap().unwrap();
    assert!(o.start().equal(&dt(1987, 1, 1)).unwrap());
    assert!(o.end().equal(&dt(1990, 1, 1)).unwrap());

    let disjoint = Interval::new(dt(1995, 1, 1), dt(1996, 1, 1)).unwrap();
    assert_eq!(a.overlap(&disjoint).unwrap(), None);
}

#[test]
fn shared_boundary_abuts_and_never_overlaps() {
    let a = Interval::new(dt(1986, 1, 1), dt(1987, 6, 1)).unwrap();
    let b = Interval::new(dt(1987, 6, 1), dt(1988, 1, 1)).unwrap();
    assert!(a.abuts(&b).unwrap());
    assert!(!a.overlaps(&b).unwrap());
    assert!(!b.overlaps(&a).unwrap());
}

#[test]
fn overlaps_is_symmetric_for_these_operands() {
    // The definition reads asymmetrically; exercised in both orders.
    let a = Interval::new(dt(1986, 1, 1), dt(1990, 1, 1)).unwrap();
    let b = Interval::new(dt(1987, 1, 1), dt(1991, 1, 1)).unwrap();
    assert_eq!(a.overlaps(&b).unwrap(), b.overlaps(&a).unwrap());
}

#[test]
fn floor_to_hour_is_idempotent() {
    let v = date_time((2024, 5, 17, 14, 42, 31, 250)).unwrap();
    let once = floor(&v, Unit::Hours).unwrap();
    assert!(floor(&once, Unit::Hours).unwrap().equal(&once).unwrap());
    assert_eq!(once.minute().unwrap(), 0);
}

#[test]
fn february_day_count_tracks_leap_years() {
    assert_eq!(
        local_date(2024, 2, 1).unwrap().number_of_days_in_month().unwrap(),
        29
    );
    assert_eq!(
        local_date(2023, 2, 1).unwrap().number_of_days_in_month().unwrap(),
        28
    );
}

#[test]
fn relative_helpers_against_a_fixed_clock() {
    let clock = FixedClock::at_unix_millis(820_454_400_000); // 1996-01-01T00:00Z
    let behind = tempora::ago_with(&[days(1)], &clock).unwrap();
    assert!(behind.equal(&dt(1995, 12, 31)).unwrap());
    let ahead = tempora::from_now_with(&[hours(36)], &clock).unwrap();
    assert!(ahead
        .equal(&date_time((1996, 1, 2, 12)).unwrap())
        .unwrap());
}

#[test]
fn within_three_arg_form_includes_both_boundaries() {
    let (a, b) = (dt(1986, 1, 1), dt(1990, 1, 1));
    assert!(within(&a, &b, &b).unwrap());
    // The interval form excludes the end; the divergence is intentional.
    let i = Interval::new(a, b).unwrap();
    assert!(!i.contains(&b).unwrap());
}

#[test]
fn parse_and_format_round_trip_through_the_adapter() {
    let v = tempora::format::parse_any(Kind::DateTime, "1986-10-14T04:03:27").unwrap();
    assert_eq!(v.day().unwrap(), 14);
    assert_eq!(
        tempora::format::format(&v, "%Y-%m-%d %H:%M").unwrap(),
        "1986-10-14 04:03"
    );
}

proptest! {
    // Exact-duration amounts invert exactly.
    #[test]
    fn exact_plus_minus_inverts(seed in 0i64..2_000_000_000_000, n in -10_000i64..10_000) {
        let v = tempora::coerce::from_unix_millis(seed).unwrap();
        let amounts = [tempora::minutes(n), tempora::seconds(n)];
        let back = minus(&plus(&v, &amounts).unwrap(), &amounts).unwrap();
        prop_assert!(back.equal(&v).unwrap());
    }

    // Calendar amounts invert except when the forward step clipped the
    // day-of-month; detect that case and assert the documented clamp.
    #[test]
    fn calendar_plus_minus_inverts_unless_clipped(
        seed in 0i64..2_000_000_000_000,
        n in -48i64..48,
    ) {
        let v = tempora::coerce::from_unix_millis(seed).unwrap();
        let forward = plus(&v, &[months(n)]).unwrap();
        let back = minus(&forward, &[months(n)]).unwrap();
        if forward.day().unwrap() == v.day().unwrap() {
            prop_assert!(back.equal(&v).unwrap());
        } else {
            // Forward clipped; the return lands on or before the origin day.
            prop_assert!(back.day().unwrap() <= v.day().unwrap());
            prop_assert_eq!(back.month().unwrap(), v.month().unwrap());
        }
    }

    // Start is inside, end is outside, for every non-degenerate interval.
    #[test]
    fn half_open_boundary_rule(a in 0i64..1_000_000_000_000, span in 1i64..1_000_000_000) {
        let start = tempora::coerce::from_unix_millis(a).unwrap();
        let end = tempora::coerce::from_unix_millis(a + span).unwrap();
        let i = Interval::new(start, end).unwrap();
        prop_assert!(i.contains(&start).unwrap());
        prop_assert!(!i.contains(&end).unwrap());
    }

    // Unit measurements truncate toward zero and negate cleanly.
    #[test]
    fn measurement_negates_with_order(a in 0i64..1_000_000_000_000, span in 0i64..1_000_000_000) {
        let x = tempora::coerce::from_unix_millis(a).unwrap();
        let y = tempora::coerce::from_unix_millis(a + span).unwrap();
        prop_assert_eq!(
            between(&x, &y, Unit::Seconds).unwrap(),
            -between(&y, &x, Unit::Seconds).unwrap()
        );
    }
}
