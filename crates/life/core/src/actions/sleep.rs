use super::ActionEffect;
use crate::config::SleepRules;
use crate::decay::{DecayEngine, DecayMode, DecaySeed};
use crate::error::ActionError;
use crate::state::{Elapsed, LifeRecord, Need};

/// Validates the requested duration against the configured range.
pub fn validate_hours(rules: &SleepRules, hours: u32) -> Result<(), ActionError> {
    if hours < rules.min_hours || hours > rules.max_hours {
        return Err(ActionError::InvalidDuration {
            hours,
            min: rules.min_hours,
            max: rules.max_hours,
        });
    }
    Ok(())
}

/// Fatigue removed by `hours` of sleep; hours past `full_rate_hours` count at a reduced rate.
pub fn fatigue_recovery(rules: &SleepRules, hours: u32) -> f64 {
    let full = hours.min(rules.full_rate_hours) as f64;
    let extra = hours.saturating_sub(rules.full_rate_hours) as f64;
    (full + extra * rules.diminished_factor) * rules.fatigue_recovery_per_hour
}

/// Sleeps for `hours` of game time.
///
/// The slept hours are decayed (fatigue excluded) and `last_update` moves
/// forward by exactly `hours`; the caller advances the game clock to match.
/// Active diseases keep progressing and are not cleared.
pub fn sleep(
    engine: &DecayEngine<'_>,
    rules: &SleepRules,
    record: &mut LifeRecord,
    hours: u32,
    seed: DecaySeed,
) -> Result<ActionEffect, ActionError> {
    validate_hours(rules, hours)?;

    let report = engine.apply(record, Elapsed::from_hours(hours), DecayMode::Asleep, seed);
    let stats = &mut record.stats;
    stats.adjust(Need::Fatigue, -fatigue_recovery(rules, hours));
    stats.adjust_health(hours as f64 * rules.health_per_hour);

    let message = if hours == 1 {
        "You take a short nap.".to_string()
    } else {
        format!("You sleep for {hours} hours.")
    };
    Ok(ActionEffect {
        message,
        events: report.events,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovery_diminishes_after_eight_hours() {
        let rules = SleepRules::default();
        assert_eq!(fatigue_recovery(&rules, 8), 100.0);
        assert_eq!(fatigue_recovery(&rules, 4), 50.0);
        let ten = fatigue_recovery(&rules, 10);
        assert_eq!(ten, 100.0 + 2.0 * 0.5 * 12.5);
        assert!(ten - fatigue_recovery(&rules, 9) < fatigue_recovery(&rules, 8) - fatigue_recovery(&rules, 7));
    }

    #[test]
    fn duration_bounds() {
        let rules = SleepRules::default();
        assert!(validate_hours(&rules, 0).is_err());
        assert!(validate_hours(&rules, 1).is_ok());
        assert!(validate_hours(&rules, 12).is_ok());
        assert_eq!(
            validate_hours(&rules, 13),
            Err(ActionError::InvalidDuration {
                hours: 13,
                min: 1,
                max: 12
            })
        );
    }
}
