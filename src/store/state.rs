use crate::domain::UserProfile;

/// Snapshot of the store-owned state the form's owner observes: the record
/// currently selected for editing and whether an update is in flight
/// process-wide.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreState {
    pub is_fetching: bool,
    pub current_user: Option<UserProfile>,
}
