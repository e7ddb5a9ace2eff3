use insta::assert_snapshot;
use option_result::{Maybe, Outcome, UnwrapError};
use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn debug_output() {
    assert_snapshot!(format!("{:?}", Maybe::Some(5)), @"Some(5)");
    assert_snapshot!(format!("{:?}", Maybe::<i32>::None), @"None");
    assert_snapshot!(format!("{:?}", Outcome::<i32, &str>::Ok(1)), @"Ok(1)");
    assert_snapshot!(format!("{:?}", Outcome::<i32, &str>::Err("bad")), @r#"Err("bad")"#);
}

#[test]
fn display_output() {
    assert_snapshot!(Maybe::Some("text").to_string(), @"Some(text)");
    assert_snapshot!(Outcome::<u8, &str>::Err("bad").to_string(), @"Err(bad)");
}

#[test]
fn unwrap_error_output() {
    let err = Outcome::<i32, &str>::Err("bad")
        .try_unwrap()
        .expect_err("Err holds no success value");
    assert_snapshot!(err.to_string(), @r#"called `Outcome::unwrap()` on an `Err` value: "bad""#);
    assert_eq!(err.found(), Some("\"bad\""));

    let err = Maybe::<i32>::None
        .try_unwrap()
        .expect_err("None holds no value");
    assert!(matches!(err, UnwrapError::NoneValue { .. }));
    assert_snapshot!(err.to_string(), @"called `Maybe::unwrap()` on a `None` value");
}

#[test]
fn equal_values_hash_equally() {
    assert_eq!(hash_of(&Maybe::Some(1)), hash_of(&Maybe::Some(1)));
    assert_eq!(hash_of(&Maybe::<u8>::None), hash_of(&Maybe::<u8>::None));
    assert_eq!(
        hash_of(&Outcome::<u8, u8>::Err(2)),
        hash_of(&Outcome::<u8, u8>::Err(2))
    );
}

#[test]
fn ordering_follows_the_variant_first() {
    let mut values = vec![Maybe::Some(3), Maybe::None, Maybe::Some(1)];
    values.sort();
    assert_eq!(values, [Maybe::None, Maybe::Some(1), Maybe::Some(3)]);

    let mut outcomes = vec![
        Outcome::<i32, i32>::Err(0),
        Outcome::Ok(9),
        Outcome::Ok(2),
    ];
    outcomes.sort();
    assert_eq!(
        outcomes,
        [Outcome::Ok(2), Outcome::Ok(9), Outcome::Err(0)]
    );
}
