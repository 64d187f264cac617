//! Form data aggregate.
//!
//! `BackgroundFormData` is the single record accumulated across all wizard
//! steps and submitted as one unit. Field names match the backend's JSON keys.
//! Steps never write it directly; they hand a sparse `BackgroundPatch` to the
//! aggregator, which merges it shallowly (last write wins per key).

use serde::{Deserialize, Serialize};

use crate::document::CredentialDocument;
use crate::wizard::mode::ApplicationStatus;

/// One professional credential listed on the credentials step.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialEntry {
    pub credential_type: String,
    pub issuing_organization: String,
    pub credential_number: Option<String>,
    pub document: Option<CredentialDocument>,
}

/// The supporter background aggregate.
///
/// `Default` is the documented empty shape: every field present, strings
/// empty, lists empty, flags false and optional values undefined.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundFormData {
    // personal-story
    pub personal_recovery_story: String,
    pub years_in_recovery: Option<u32>,
    pub recovery_approach: String,

    // addiction-types
    pub addiction_types_experienced: Vec<String>,
    pub addiction_types_supported: Vec<String>,

    // credentials
    pub has_professional_credentials: Option<bool>,
    pub credentials: Vec<CredentialEntry>,

    // specializations
    pub specializations: Vec<String>,
    pub other_specialization: String,

    // availability
    pub available_for_one_on_one: Option<bool>,
    pub available_for_group_sessions: Option<bool>,
    pub max_mentees: Option<u32>,
    pub availability_notes: String,

    // communication
    pub preferred_contact_methods: Vec<String>,
    pub languages_spoken: Vec<String>,
    pub timezone: String,

    // review
    pub agreed_to_guidelines: bool,
}

/// Sparse partial update of [`BackgroundFormData`].
///
/// `None` means "key absent from this patch". For record fields that are
/// optional themselves, `Some(None)` resets the value to undefined.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BackgroundPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_recovery_story: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub years_in_recovery: Option<Option<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_approach: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addiction_types_experienced: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addiction_types_supported: Option<Vec<String>>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub has_professional_credentials: Option<Option<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<Vec<CredentialEntry>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specializations: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_specialization: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub available_for_one_on_one: Option<Option<bool>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub available_for_group_sessions: Option<Option<bool>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub max_mentees: Option<Option<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_notes: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_contact_methods: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages_spoken: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agreed_to_guidelines: Option<bool>,
}

macro_rules! patch_fields {
    ($macro:ident) => {
        $macro!(
            personal_recovery_story,
            years_in_recovery,
            recovery_approach,
            addiction_types_experienced,
            addiction_types_supported,
            has_professional_credentials,
            credentials,
            specializations,
            other_specialization,
            available_for_one_on_one,
            available_for_group_sessions,
            max_mentees,
            availability_notes,
            preferred_contact_methods,
            languages_spoken,
            timezone,
            agreed_to_guidelines
        )
    };
}

impl BackgroundFormData {
    /// Shallow-merges `patch` over the record. Keys present in the patch
    /// overwrite; absent keys are untouched. No validation happens here.
    pub fn merge(&mut self, patch: BackgroundPatch) {
        macro_rules! apply {
            ($($field:ident),*) => {
                $(
                    if let Some(value) = patch.$field {
                        self.$field = value;
                    }
                )*
            };
        }
        patch_fields!(apply);
    }

    /// Returns a copy with `patch` merged in.
    pub fn merged(mut self, patch: BackgroundPatch) -> Self {
        self.merge(patch);
        self
    }
}

impl BackgroundPatch {
    /// Names of the keys carried by this patch.
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys = Vec::new();
        macro_rules! collect {
            ($($field:ident),*) => {
                $(
                    if self.$field.is_some() {
                        keys.push(stringify!($field));
                    }
                )*
            };
        }
        patch_fields!(collect);
        keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys().is_empty()
    }
}

/// Background record as reported by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundRecord {
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(flatten)]
    pub form: BackgroundFormData,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(text: &str) -> BackgroundPatch {
        BackgroundPatch {
            personal_recovery_story: Some(text.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn merge_overwrites_only_present_keys() {
        let mut form = BackgroundFormData {
            timezone: "Europe/Berlin".into(),
            ..Default::default()
        };
        form.merge(story("my story"));

        assert_eq!(form.personal_recovery_story, "my story");
        assert_eq!(form.timezone, "Europe/Berlin");
    }

    #[test]
    fn merge_is_commutative_for_disjoint_keys() {
        let a = story("first");
        let b = BackgroundPatch {
            addiction_types_experienced: Some(vec!["alcohol".into()]),
            available_for_one_on_one: Some(Some(true)),
            ..Default::default()
        };

        let ab = BackgroundFormData::default()
            .merged(a.clone())
            .merged(b.clone());
        let ba = BackgroundFormData::default().merged(b).merged(a);
        assert_eq!(ab, ba);
    }

    #[test]
    fn merge_is_right_biased_for_overlapping_keys() {
        let form = BackgroundFormData::default()
            .merged(story("draft"))
            .merged(story("final"));
        assert_eq!(form.personal_recovery_story, "final");
    }

    #[test]
    fn double_option_resets_optional_field_to_undefined() {
        let mut form = BackgroundFormData {
            available_for_one_on_one: Some(true),
            ..Default::default()
        };
        form.merge(BackgroundPatch {
            available_for_one_on_one: Some(None),
            ..Default::default()
        });
        assert_eq!(form.available_for_one_on_one, None);
    }

    #[test]
    fn patch_deserializes_null_as_reset_and_missing_as_absent() {
        let patch: BackgroundPatch =
            serde_json::from_str(r#"{"max_mentees": null, "timezone": "UTC"}"#).unwrap();
        assert_eq!(patch.max_mentees, Some(None));
        assert_eq!(patch.years_in_recovery, None);
        assert_eq!(patch.keys(), vec!["max_mentees", "timezone"]);
    }

    #[test]
    fn default_record_has_every_documented_key() {
        let value = serde_json::to_value(BackgroundFormData::default()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 17);
        assert_eq!(object["personal_recovery_story"], "");
        assert!(object["available_for_one_on_one"].is_null());
        assert_eq!(object["agreed_to_guidelines"], false);
    }

    #[test]
    fn record_deserializes_sparse_server_payload() {
        let record: BackgroundRecord = serde_json::from_str(
            r#"{"status": "submitted", "personal_recovery_story": "text", "max_mentees": 3}"#,
        )
        .unwrap();
        assert_eq!(record.status, ApplicationStatus::Submitted);
        assert_eq!(record.form.personal_recovery_story, "text");
        assert_eq!(record.form.max_mentees, Some(3));
        assert!(record.form.credentials.is_empty());
    }
}
