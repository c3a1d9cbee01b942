use std::time::Duration;

use twilight_http::{Client, request::AuditLogReason as _};
use twilight_model::id::{
    Id,
    marker::{GuildMarker, RoleMarker, UserMarker},
};

use crate::{failure::PlatformError, time::timestamp_after};

/// Restrict a member from communicating for `duration`.
pub async fn apply_communication_timeout(
    http: &Client,
    guild_id: Id<GuildMarker>,
    user_id: Id<UserMarker>,
    duration: Duration,
    reason: &str,
) -> Result<(), PlatformError> {
    let until = timestamp_after(duration)?;

    http.update_guild_member(guild_id, user_id)
        .communication_disabled_until(Some(until))
        .reason(reason)
        .await?;

    Ok(())
}

pub async fn add_member_role(
    http: &Client,
    guild_id: Id<GuildMarker>,
    user_id: Id<UserMarker>,
    role_id: Id<RoleMarker>,
    reason: &str,
) -> Result<(), PlatformError> {
    http.add_guild_member_role(guild_id, user_id, role_id)
        .reason(reason)
        .await?;

    Ok(())
}
