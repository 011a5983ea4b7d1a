//! Roster user entity <-> model mapper

use relay_core::entities::RosterUser;

use crate::models::RosterUserModel;

/// Convert RosterUserModel to RosterUser entity
impl From<RosterUserModel> for RosterUser {
    fn from(model: RosterUserModel) -> Self {
        RosterUser {
            name: model.name,
            created_at: model.created_at,
        }
    }
}
