//! Account and messaging helper commands

use fw_core::messaging::{self, MemberProfile};
use fw_core::password::{self, PasswordStrength};
use fw_core::UserId;

pub fn evaluate_password_strength(password: String) -> PasswordStrength {
    password::evaluate_password(&password)
}

pub fn can_send_direct_message(sender: MemberProfile, recipient: MemberProfile) -> bool {
    messaging::can_send_direct_message(&sender, &recipient)
}

pub fn can_view_conversation(viewer: MemberProfile, participants: Vec<UserId>) -> bool {
    messaging::can_view_conversation(&viewer, &participants)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fw_core::messaging::{DirectMessagePolicy, MemberRole};
    use fw_core::password::StrengthLabel;

    #[test]
    fn password_command_scores_input() {
        assert_eq!(
            evaluate_password_strength("letmein".to_string()).label,
            StrengthLabel::VeryWeak
        );
    }

    #[test]
    fn messaging_commands_accept_json_profiles() {
        let sender: MemberProfile = serde_json::from_value(serde_json::json!({
            "id": "sam",
            "role": "member",
            "group_ids": ["tuesday-group"]
        }))
        .unwrap();
        let recipient: MemberProfile = serde_json::from_value(serde_json::json!({
            "id": "jo",
            "role": "supporter",
            "group_ids": ["tuesday-group"]
        }))
        .unwrap();
        assert_eq!(recipient.direct_messages, DirectMessagePolicy::GroupMembers);
        assert_eq!(sender.role, MemberRole::Member);

        assert!(can_send_direct_message(sender.clone(), recipient));
        assert!(!can_view_conversation(sender, vec![UserId::from("jo")]));
    }
}
