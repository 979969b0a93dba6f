use super::*;

#[test]
fn one_is_present() {
    let generator = <(i32, i32)>::generator();
    for (value, fallback) in generator.sample(COUNT) {
        let maybe = Maybe::one(value);
        assert!(maybe.has());
        assert_eq!(maybe.get(), Some(value));
        assert_eq!(maybe.or(fallback), value);
    }
}

#[test]
fn absent_yields_the_fallback() {
    let generator = <i32>::generator();
    for fallback in generator.sample(COUNT) {
        let maybe = Maybe::<i32>::NOT;
        assert!(!maybe.has());
        assert_eq!(maybe.get(), None);
        assert_eq!(maybe.or(fallback), fallback);
    }
}

#[test]
fn default_is_absent() {
    assert!(!Maybe::<u8>::default().has());
}

#[test]
fn marker_converts_to_any_absent_container() {
    let maybe: Maybe<u8> = Not.into();
    assert!(!maybe.has());
    let maybe: Maybe<String> = Maybe::from(Not);
    assert!(!maybe.has());
}

#[test]
fn marker_has_nothing() {
    assert!(!<Not as Has<u8>>::has(&Not));
    assert_eq!(<Not as Has<u8>>::get(Not), None);
}

#[test]
fn option_squashes_into_the_container() {
    assert_eq!(Maybe::<i32>::from(Some(5)), Maybe::one(5));
    assert_eq!(Maybe::<i32>::from(None), Maybe::NOT);
    assert_eq!(Option::<i32>::from(Maybe::one(5)), Some(5));
    assert_eq!(Option::<i32>::from(Maybe::NOT), None);
}

#[test]
fn when_follows_its_condition() {
    let generator = <u16>::generator();
    for value in generator.sample(COUNT) {
        assert_eq!(Maybe::when(true, value), Maybe::one(value));
        assert_eq!(Maybe::when(false, value), Maybe::NOT);
    }
}

#[test]
fn when_with_skips_the_thunk_when_false() {
    let mut called = false;
    let maybe = Maybe::when_with(false, || {
        called = true;
        1
    });
    assert_eq!(maybe, Maybe::NOT);
    assert!(!called);
}

#[test]
fn when_with_runs_the_thunk_once_when_true() {
    let mut calls = 0;
    let maybe = Maybe::when_with(true, || {
        calls += 1;
        1
    });
    assert_eq!(maybe, Maybe::one(1));
    assert_eq!(calls, 1);
}

#[test]
fn present_displays_its_value() {
    let generator = <i64>::generator();
    for value in generator.sample(COUNT) {
        assert_eq!(Maybe::one(value).to_string(), value.to_string());
    }
}

#[test]
fn absent_displays_as_empty() {
    assert_eq!(Maybe::<i64>::NOT.to_string(), "");
    assert_eq!(Not.to_string(), "");
}
