pub mod construct;

use super::*;
use maybe_check::*;

pub const COUNT: usize = 1000;

#[test]
fn composes_end_to_end() {
    let parser = parser(|source: &str, value: &mut i32| match source.parse() {
        Ok(parsed) => {
            *value = parsed;
            true
        }
        Err(_) => false,
    });
    let value = parser
        .parse("42")
        .filter(|value| *value > 0)
        .map(|value| value * 2)
        .join(|_| Maybe::one(3), |left, right| left + right)
        .or(0);
    assert_eq!(value, 87);
}
