//! Access gate.
//!
//! Only required steps gate progression. Optional steps (credentials,
//! specializations, communication) never block later steps, even when
//! skipped.

use crate::wizard::completion::CompletedSteps;
use crate::wizard::mode::WizardMode;
use crate::wizard::step::WizardStep;

/// Whether `step` is reachable in `mode` given the completed steps.
pub fn can_access_step(step: WizardStep, mode: WizardMode, completed: &CompletedSteps) -> bool {
    match mode {
        WizardMode::Review => true,
        WizardMode::Setup | WizardMode::Edit => missing_required_before(step, completed).is_empty(),
    }
}

/// Required predecessors of `step` that are not complete yet.
pub fn missing_required_before(step: WizardStep, completed: &CompletedSteps) -> Vec<WizardStep> {
    step.predecessors()
        .iter()
        .copied()
        .filter(|prev| prev.required() && !completed.contains(*prev))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(steps: &[WizardStep]) -> CompletedSteps {
        steps.iter().copied().collect()
    }

    #[test]
    fn first_step_is_always_reachable() {
        assert!(can_access_step(
            WizardStep::PersonalStory,
            WizardMode::Setup,
            &CompletedSteps::new()
        ));
    }

    #[test]
    fn review_mode_opens_every_step() {
        for step in WizardStep::ALL {
            assert!(can_access_step(step, WizardMode::Review, &CompletedSteps::new()));
        }
    }

    #[test]
    fn setup_gate_matches_required_predecessors_for_every_subset() {
        // Every subset of the 7 steps.
        for mask in 0u32..(1 << 7) {
            let done: CompletedSteps = WizardStep::ALL
                .into_iter()
                .filter(|s| mask & (1 << s.index()) != 0)
                .collect();
            for step in WizardStep::ALL {
                let expected = step
                    .predecessors()
                    .iter()
                    .filter(|p| p.required())
                    .all(|p| done.contains(*p));
                assert_eq!(can_access_step(step, WizardMode::Setup, &done), expected);
                assert_eq!(can_access_step(step, WizardMode::Edit, &done), expected);
            }
        }
    }

    #[test]
    fn optional_steps_do_not_gate_review() {
        let done = completed(&[
            WizardStep::PersonalStory,
            WizardStep::AddictionTypes,
            WizardStep::Availability,
        ]);
        assert!(can_access_step(WizardStep::Review, WizardMode::Setup, &done));
    }

    #[test]
    fn missing_required_reports_blockers() {
        let done = completed(&[WizardStep::PersonalStory, WizardStep::Credentials]);
        assert_eq!(
            missing_required_before(WizardStep::Review, &done),
            vec![WizardStep::AddictionTypes, WizardStep::Availability]
        );
        assert!(!can_access_step(WizardStep::Credentials, WizardMode::Setup, &done));
    }
}
