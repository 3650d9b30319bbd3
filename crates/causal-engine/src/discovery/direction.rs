//! Edge direction for a correlated pair.

use std::cmp::Ordering;

use causal_core::models::Observation;

/// Orient the pair `(first, second)`, where `first` was observed before `second`.
///
/// When observations carry `{var}{time_suffix}` companions for both variables,
/// the variable that is earlier in more of those observations is the cause.
/// With no temporal evidence, or a tie, the first-observed variable is the cause.
pub fn determine_direction<'a>(
    first: &'a str,
    second: &'a str,
    observations: &[Observation],
    time_suffix: &str,
) -> (&'a str, &'a str) {
    let first_key = format!("{first}{time_suffix}");
    let second_key = format!("{second}{time_suffix}");

    let mut votes: i64 = 0;
    for obs in observations {
        let (Some(t1), Some(t2)) = (
            obs.get(&first_key).and_then(|v| v.as_timestamp()),
            obs.get(&second_key).and_then(|v| v.as_timestamp()),
        ) else {
            continue;
        };
        match t1.partial_cmp(&t2) {
            Some(Ordering::Less) => votes += 1,
            Some(Ordering::Greater) => votes -= 1,
            _ => {}
        }
    }

    if votes < 0 {
        (second, first)
    } else {
        (first, second)
    }
}

/// Whether a key is a temporal companion rather than a variable of its own.
pub fn is_time_key(key: &str, time_suffix: &str) -> bool {
    !time_suffix.is_empty() && key.len() > time_suffix.len() && key.ends_with(time_suffix)
}
