//! Average treatment effect estimation from the observation log.
//!
//! The naive estimator is `mean(outcome | treated) - mean(outcome | untreated)`
//! where "treated" means the treatment value is truthy. With backdoor
//! adjustment enabled, the same difference is computed within each stratum of
//! the adjustment variables and averaged by stratum size.

use std::collections::{BTreeMap, BTreeSet};

use causal_core::config::EstimationConfig;
use causal_core::models::{Observation, Variable};

/// Outcome sums for the treated and untreated arms.
#[derive(Debug, Clone, Copy, Default)]
struct Arms {
    treated_sum: f64,
    treated_n: usize,
    control_sum: f64,
    control_n: usize,
}

impl Arms {
    fn push(&mut self, treated: bool, outcome: f64) {
        if treated {
            self.treated_sum += outcome;
            self.treated_n += 1;
        } else {
            self.control_sum += outcome;
            self.control_n += 1;
        }
    }

    fn difference(&self) -> Option<f64> {
        if self.treated_n == 0 || self.control_n == 0 {
            return None;
        }
        Some(self.treated_sum / self.treated_n as f64 - self.control_sum / self.control_n as f64)
    }

    fn len(&self) -> usize {
        self.treated_n + self.control_n
    }
}

/// Observations where both treatment and outcome are present and the outcome is numeric.
fn usable<'a>(
    observations: &'a [Observation],
    treatment: &'a str,
    outcome: &'a str,
) -> impl Iterator<Item = (&'a Observation, bool, f64)> + 'a {
    observations.iter().filter_map(move |obs| {
        let treated = obs.get(treatment)?.is_truthy();
        let y = obs.get(outcome)?.as_f64()?;
        Some((obs, treated, y))
    })
}

/// Difference of outcome means between the treated and untreated arms. 0.0 if an arm is empty.
pub fn naive_effect(observations: &[Observation], treatment: &str, outcome: &str) -> f64 {
    let mut arms = Arms::default();
    for (_, treated, y) in usable(observations, treatment, outcome) {
        arms.push(treated, y);
    }
    arms.difference().unwrap_or_else(|| {
        tracing::debug!(
            treatment,
            outcome,
            treated = arms.treated_n,
            untreated = arms.control_n,
            "estimator arm empty"
        );
        0.0
    })
}

/// Size-weighted average of per-stratum differences, over strata where both arms have data.
pub fn stratified_effect(
    observations: &[Observation],
    treatment: &str,
    outcome: &str,
    adjustment_set: &BTreeSet<Variable>,
) -> Option<f64> {
    let mut strata: BTreeMap<Vec<String>, Arms> = BTreeMap::new();
    for (obs, treated, y) in usable(observations, treatment, outcome) {
        let key = adjustment_set
            .iter()
            .map(|v| obs.get(v).map(|value| value.to_string()).unwrap_or_default())
            .collect();
        strata.entry(key).or_default().push(treated, y);
    }

    let (weighted, total) = strata
        .values()
        .filter_map(|arms| arms.difference().map(|d| (d, arms.len())))
        .fold((0.0, 0usize), |(sum, n), (d, len)| (sum + d * len as f64, n + len));

    (total > 0).then(|| weighted / total as f64)
}

/// Estimate the effect of `treatment` on `outcome`.
///
/// The adjustment set is only applied when `config.backdoor_adjustment` is on.
pub fn estimate(
    observations: &[Observation],
    treatment: &str,
    outcome: &str,
    adjustment_set: Option<&BTreeSet<Variable>>,
    config: &EstimationConfig,
) -> f64 {
    let adjustment = adjustment_set.filter(|set| !set.is_empty());
    match adjustment {
        Some(set) if config.backdoor_adjustment => {
            stratified_effect(observations, treatment, outcome, set).unwrap_or_else(|| {
                tracing::warn!(
                    treatment,
                    outcome,
                    "no stratum has both arms, falling back to naive estimate"
                );
                naive_effect(observations, treatment, outcome)
            })
        }
        Some(set) => {
            tracing::debug!(
                treatment,
                outcome,
                ignored = set.len(),
                "backdoor adjustment disabled, adjustment set ignored"
            );
            naive_effect(observations, treatment, outcome)
        }
        None => naive_effect(observations, treatment, outcome),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use causal_core::models::ObservedValue;

    fn obs(pairs: &[(&str, ObservedValue)]) -> Observation {
        pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
    }

    fn treatment_log() -> Vec<Observation> {
        vec![
            obs(&[("t", true.into()), ("o", 10.into())]),
            obs(&[("t", true.into()), ("o", 12.into())]),
            obs(&[("t", false.into()), ("o", 4.into())]),
            obs(&[("t", false.into()), ("o", 6.into())]),
        ]
    }

    /// Severity drives both treatment and outcome; within each severity level
    /// treatment adds exactly 1.
    fn confounded_log() -> Vec<Observation> {
        let mut log = Vec::new();
        for _ in 0..3 {
            log.push(obs(&[("s", "high".into()), ("t", true.into()), ("o", 11.into())]));
        }
        log.push(obs(&[("s", "high".into()), ("t", false.into()), ("o", 10.into())]));
        log.push(obs(&[("s", "low".into()), ("t", true.into()), ("o", 1.into())]));
        for _ in 0..3 {
            log.push(obs(&[("s", "low".into()), ("t", false.into()), ("o", 0.into())]));
        }
        log
    }

    #[test]
    fn naive_difference_of_means() {
        assert_eq!(naive_effect(&treatment_log(), "t", "o"), 6.0);
    }

    #[test]
    fn empty_arm_yields_zero() {
        let log = vec![obs(&[("t", true.into()), ("o", 1.into())])];
        assert_eq!(naive_effect(&log, "t", "o"), 0.0);
        assert_eq!(naive_effect(&[], "t", "o"), 0.0);
    }

    #[test]
    fn adjustment_ignored_unless_enabled() {
        let set: BTreeSet<Variable> = ["s".to_string()].into();
        let log = confounded_log();
        let naive = naive_effect(&log, "t", "o");
        let off = estimate(&log, "t", "o", Some(&set), &EstimationConfig::default());
        assert_eq!(off, naive);

        let config = EstimationConfig {
            backdoor_adjustment: true,
            ..EstimationConfig::default()
        };
        let adjusted = estimate(&log, "t", "o", Some(&set), &config);
        assert!((adjusted - 1.0).abs() < 1e-9);
        assert!(naive > 5.0);
    }

    #[test]
    fn stratified_falls_back_when_no_stratum_qualifies() {
        let set: BTreeSet<Variable> = ["id".to_string()].into();
        let log: Vec<Observation> = treatment_log()
            .into_iter()
            .enumerate()
            .map(|(i, mut o)| {
                o.insert("id".to_string(), ObservedValue::from(i as i64));
                o
            })
            .collect();
        assert!(stratified_effect(&log, "t", "o", &set).is_none());
        let config = EstimationConfig {
            backdoor_adjustment: true,
            ..EstimationConfig::default()
        };
        assert_eq!(estimate(&log, "t", "o", Some(&set), &config), 6.0);
    }
}
