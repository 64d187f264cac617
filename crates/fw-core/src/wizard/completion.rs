//! Completion tracking.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::wizard::form_data::BackgroundFormData;
use crate::wizard::step::WizardStep;

/// Set of steps the user has completed in this session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletedSteps(BTreeSet<WizardStep>);

impl CompletedSteps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the step was not already complete.
    pub fn insert(&mut self, step: WizardStep) -> bool {
        self.0.insert(step)
    }

    pub fn contains(&self, step: WizardStep) -> bool {
        self.0.contains(&step)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = WizardStep> + '_ {
        self.0.iter().copied()
    }

    /// Required steps not yet completed, in wizard order.
    pub fn missing_required(&self) -> Vec<WizardStep> {
        WizardStep::required_steps()
            .filter(|step| !self.contains(*step))
            .collect()
    }

    pub fn all_required_complete(&self) -> bool {
        self.missing_required().is_empty()
    }
}

impl FromIterator<WizardStep> for CompletedSteps {
    fn from_iter<I: IntoIterator<Item = WizardStep>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Coarse completion seed for a loaded record.
///
/// Presence checks only: a step counts as complete when its key fields are
/// non-empty. This does not run the step validators, so a seeded step may
/// still hold data the validator would reject.
pub fn infer_completed_steps(form: &BackgroundFormData) -> CompletedSteps {
    WizardStep::ALL
        .into_iter()
        .filter(|step| has_step_data(*step, form))
        .collect()
}

fn has_step_data(step: WizardStep, form: &BackgroundFormData) -> bool {
    match step {
        WizardStep::PersonalStory => !form.personal_recovery_story.is_empty(),
        WizardStep::AddictionTypes => !form.addiction_types_experienced.is_empty(),
        WizardStep::Credentials => form.has_professional_credentials.is_some(),
        WizardStep::Specializations => {
            !form.specializations.is_empty() || !form.other_specialization.is_empty()
        }
        WizardStep::Availability => form.available_for_one_on_one.is_some(),
        WizardStep::Communication => !form.preferred_contact_methods.is_empty(),
        WizardStep::Review => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_idempotent() {
        let mut completed = CompletedSteps::new();
        assert!(completed.insert(WizardStep::Credentials));
        assert!(!completed.insert(WizardStep::Credentials));
        assert_eq!(completed.len(), 1);
    }

    #[test]
    fn seed_ignores_empty_list_and_undefined_flag() {
        let form = BackgroundFormData {
            personal_recovery_story: "short".into(),
            addiction_types_experienced: vec![],
            available_for_one_on_one: None,
            ..Default::default()
        };
        let completed = infer_completed_steps(&form);
        assert_eq!(
            completed.iter().collect::<Vec<_>>(),
            vec![WizardStep::PersonalStory]
        );
    }

    #[test]
    fn whitespace_story_still_counts_as_present() {
        let form = BackgroundFormData {
            personal_recovery_story: "   ".into(),
            ..Default::default()
        };
        assert!(infer_completed_steps(&form).contains(WizardStep::PersonalStory));
        assert!(!infer_completed_steps(&BackgroundFormData::default())
            .contains(WizardStep::PersonalStory));
    }

    #[test]
    fn credentials_flag_counts_regardless_of_value() {
        let form = BackgroundFormData {
            has_professional_credentials: Some(false),
            available_for_one_on_one: Some(false),
            ..Default::default()
        };
        let completed = infer_completed_steps(&form);
        assert!(completed.contains(WizardStep::Credentials));
        assert!(completed.contains(WizardStep::Availability));
        assert!(!completed.contains(WizardStep::PersonalStory));
    }

    #[test]
    fn review_is_never_seeded() {
        let form = BackgroundFormData {
            agreed_to_guidelines: true,
            ..Default::default()
        };
        assert!(infer_completed_steps(&form).is_empty());
    }

    #[test]
    fn missing_required_lists_in_order() {
        let completed: CompletedSteps = [WizardStep::AddictionTypes].into_iter().collect();
        assert_eq!(
            completed.missing_required(),
            vec![WizardStep::PersonalStory, WizardStep::Availability]
        );
        assert!(!completed.all_required_complete());
    }
}
