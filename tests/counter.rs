use folio_wasm::config::CounterSettings;
use folio_wasm::counter::{parse_target, CounterRamp};

#[test]
fn ramp_reaches_exact_target_with_suffix() {
    let mut ramp = CounterRamp::new(200, "+", &CounterSettings::default());
    assert_eq!(ramp.steps(), 88);

    let shown: Vec<String> = (0..ramp.steps()).map(|_| ramp.tick()).collect();
    assert_eq!(shown[43], "100+");
    assert_eq!(shown.last().map(String::as_str), Some("200+"));
    assert!(ramp.is_done());
    assert_eq!(ramp.tick(), "200+");
}

#[test]
fn ramp_values_never_decrease() {
    let mut ramp = CounterRamp::new(17, "", &CounterSettings::default());
    let mut last = 0;
    while !ramp.is_done() {
        let v: i64 = ramp.tick().parse().unwrap();
        assert!(v >= last && v <= 17);
        last = v;
    }
    assert_eq!(last, 17);
}

#[test]
fn halves_round_up() {
    let settings = CounterSettings { duration: 4, tick: 1, threshold: 0.5 };
    let mut ramp = CounterRamp::new(2, "", &settings);
    assert_eq!(ramp.tick(), "1");
}

#[test]
fn parse_takes_the_integer_prefix() {
    assert_eq!(parse_target("200"), Some(200));
    assert_eq!(parse_target("  15yrs"), Some(15));
    assert_eq!(parse_target("-3"), Some(-3));
    assert_eq!(parse_target("+8"), Some(8));
    assert_eq!(parse_target("abc"), None);
    assert_eq!(parse_target(""), None);
    assert_eq!(parse_target("-"), None);
}
