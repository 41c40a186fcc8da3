use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;

/// Service port for the external user directory.
///
/// Implementations must answer `false` whenever the lookup cannot be
/// completed; a failure is never surfaced to the caller.
#[async_trait]
pub trait UserDirectoryService: Send + Sync {
    async fn is_owner_role(&self, user_id: UserId) -> bool;
}
