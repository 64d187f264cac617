use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Backend identifier of a community member.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(String);

/// Backend identifier of a fellowship group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupId(String);

impl_id!(UserId, GroupId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_compare_by_inner_value() {
        assert_eq!(UserId::from("u-1"), UserId::from("u-1"));
        assert_ne!(GroupId::from("g-1"), GroupId::from("g-2"));
        assert_eq!(GroupId::from("g-7").to_string(), "g-7");
    }
}
