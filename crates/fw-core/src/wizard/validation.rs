//! Per-step validators.
//!
//! These are the authoritative field checks a step runs before it is marked
//! complete. They are intentionally separate from
//! [`infer_completed_steps`](crate::wizard::completion::infer_completed_steps),
//! which only checks presence.

use crate::wizard::error::FieldError;
use crate::wizard::form_data::BackgroundFormData;
use crate::wizard::step::WizardStep;

pub const MIN_STORY_LEN: usize = 50;
pub const MAX_STORY_LEN: usize = 5000;
pub const MAX_YEARS_IN_RECOVERY: u32 = 80;
pub const MAX_OTHER_SPECIALIZATION_LEN: usize = 200;
pub const MAX_MENTEES: u32 = 20;
pub const CONTACT_METHODS: [&str; 4] = ["email", "phone", "in-app", "video"];

/// Validates the fields owned by `step`. An empty vector means valid.
pub fn validate_step(step: WizardStep, form: &BackgroundFormData) -> Vec<FieldError> {
    match step {
        WizardStep::PersonalStory => validate_personal_story(form),
        WizardStep::AddictionTypes => validate_addiction_types(form),
        WizardStep::Credentials => validate_credentials(form),
        WizardStep::Specializations => validate_specializations(form),
        WizardStep::Availability => validate_availability(form),
        WizardStep::Communication => validate_communication(form),
        WizardStep::Review => validate_review(form),
    }
}

fn validate_personal_story(form: &BackgroundFormData) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let len = form.personal_recovery_story.trim().chars().count();
    if len < MIN_STORY_LEN {
        errors.push(FieldError::new(
            "personal_recovery_story",
            format!("Please share at least {MIN_STORY_LEN} characters"),
        ));
    } else if len > MAX_STORY_LEN {
        errors.push(FieldError::new(
            "personal_recovery_story",
            format!("Please keep your story under {MAX_STORY_LEN} characters"),
        ));
    }
    if form
        .years_in_recovery
        .is_some_and(|years| years > MAX_YEARS_IN_RECOVERY)
    {
        errors.push(FieldError::new(
            "years_in_recovery",
            format!("Years in recovery must be at most {MAX_YEARS_IN_RECOVERY}"),
        ));
    }
    errors
}

fn validate_addiction_types(form: &BackgroundFormData) -> Vec<FieldError> {
    if form.addiction_types_experienced.is_empty() {
        return vec![FieldError::new(
            "addiction_types_experienced",
            "Select at least one addiction type",
        )];
    }
    Vec::new()
}

fn validate_credentials(form: &BackgroundFormData) -> Vec<FieldError> {
    match form.has_professional_credentials {
        None => vec![FieldError::new(
            "has_professional_credentials",
            "Let us know whether you hold professional credentials",
        )],
        Some(false) => Vec::new(),
        Some(true) if form.credentials.is_empty() => vec![FieldError::new(
            "credentials",
            "Add at least one credential",
        )],
        Some(true) => {
            let mut errors = Vec::new();
            for (i, entry) in form.credentials.iter().enumerate() {
                if entry.credential_type.trim().is_empty() {
                    errors.push(FieldError::new(
                        format!("credentials[{i}].credential_type"),
                        "Credential type is required",
                    ));
                }
                if entry.issuing_organization.trim().is_empty() {
                    errors.push(FieldError::new(
                        format!("credentials[{i}].issuing_organization"),
                        "Issuing organization is required",
                    ));
                }
            }
            errors
        }
    }
}

fn validate_specializations(form: &BackgroundFormData) -> Vec<FieldError> {
    if form.other_specialization.chars().count() > MAX_OTHER_SPECIALIZATION_LEN {
        return vec![FieldError::new(
            "other_specialization",
            format!("Keep this under {MAX_OTHER_SPECIALIZATION_LEN} characters"),
        )];
    }
    Vec::new()
}

fn validate_availability(form: &BackgroundFormData) -> Vec<FieldError> {
    match form.available_for_one_on_one {
        None => vec![FieldError::new(
            "available_for_one_on_one",
            "Let us know whether you can offer one-on-one support",
        )],
        Some(true) => match form.max_mentees {
            Some(n) if (1..=MAX_MENTEES).contains(&n) => Vec::new(),
            _ => vec![FieldError::new(
                "max_mentees",
                format!("Choose between 1 and {MAX_MENTEES} mentees"),
            )],
        },
        Some(false) => Vec::new(),
    }
}

fn validate_communication(form: &BackgroundFormData) -> Vec<FieldError> {
    form.preferred_contact_methods
        .iter()
        .filter(|method| !CONTACT_METHODS.contains(&method.as_str()))
        .map(|method| {
            FieldError::new(
                "preferred_contact_methods",
                format!("Unsupported contact method: {method}"),
            )
        })
        .collect()
}

fn validate_review(form: &BackgroundFormData) -> Vec<FieldError> {
    if !form.agreed_to_guidelines {
        return vec![FieldError::new(
            "agreed_to_guidelines",
            "Please agree to the community guidelines",
        )];
    }
    Vec::new()
}
