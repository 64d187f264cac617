//! Messaging permission predicates.
//!
//! Client-side visibility gating for direct messages. The backend remains
//! authoritative; these predicates only decide what the UI offers.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ids::{GroupId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberRole {
    Member,
    Supporter,
    Moderator,
    Admin,
}

/// Who may open a direct conversation with a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DirectMessagePolicy {
    Everyone,
    #[default]
    GroupMembers,
    Nobody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberProfile {
    pub id: UserId,
    pub role: MemberRole,
    #[serde(default)]
    pub group_ids: BTreeSet<GroupId>,
    #[serde(default)]
    pub blocked: BTreeSet<UserId>,
    #[serde(default)]
    pub direct_messages: DirectMessagePolicy,
}

impl MemberProfile {
    fn is_staff(&self) -> bool {
        matches!(self.role, MemberRole::Moderator | MemberRole::Admin)
    }

    fn has_blocked(&self, other: &UserId) -> bool {
        self.blocked.contains(other)
    }
}

pub fn shares_group(a: &MemberProfile, b: &MemberProfile) -> bool {
    !a.group_ids.is_disjoint(&b.group_ids)
}

pub fn can_send_direct_message(sender: &MemberProfile, recipient: &MemberProfile) -> bool {
    if sender.id == recipient.id {
        return false;
    }
    if sender.has_blocked(&recipient.id) || recipient.has_blocked(&sender.id) {
        return false;
    }
    match recipient.direct_messages {
        DirectMessagePolicy::Everyone => true,
        DirectMessagePolicy::GroupMembers => sender.is_staff() || shares_group(sender, recipient),
        DirectMessagePolicy::Nobody => sender.role == MemberRole::Admin,
    }
}

pub fn can_view_conversation(viewer: &MemberProfile, participants: &[UserId]) -> bool {
    viewer.role == MemberRole::Admin || participants.contains(&viewer.id)
}
