pub mod biweekly;
pub mod fafo;
pub mod host;
pub mod lfg;
pub mod messages;
pub mod rule;
pub mod wow;

use tracing::{debug, warn};
use twilight_http::Client;
use twilight_model::gateway::payload::incoming::MessageCreate;

use wiki_core::CommandSet;
use wiki_utils::{
    failure::FailureKind,
    message::{Reply, delete_invocation, send_reply},
    permissions::{AuthorRoles, MessageAuthor, resolve_message_author},
};

/// Whether `roles` may run this set's guidance commands.
pub fn authorize(set: &CommandSet, roles: &AuthorRoles) -> bool {
    roles.is_authorized(set.allowed_roles())
}

/// Delete the invoking message, then check its author against the set's allow-list.
///
/// Returns the author when authorized. Unauthorized authors get no reply.
pub(crate) async fn delete_and_check(
    http: &Client,
    set: &CommandSet,
    msg: &MessageCreate,
) -> anyhow::Result<Option<MessageAuthor>> {
    if let Err(source) = delete_invocation(http, msg).await
        && source.kind() != FailureKind::Forbidden
    {
        warn!(?source, message_id = msg.id.get(), "failed to delete invoking message");
    }

    let Some(author) = resolve_message_author(http, msg).await? else {
        return Ok(None);
    };

    if !authorize(set, &author.roles) {
        debug!(
            author_id = msg.author.id.get(),
            command_set = set.key(),
            "guidance command from unauthorized author ignored"
        );
        return Ok(None);
    }

    Ok(Some(author))
}

/// Post a fixed guidance text as a reply to the invocation.
pub(crate) async fn post_guidance(
    http: &Client,
    msg: &MessageCreate,
    output: &str,
) -> anyhow::Result<()> {
    send_reply(http, msg, Reply::text(output)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use twilight_model::id::Id;
    use wiki_core::config::CommandSetConfig;

    use super::*;

    fn roles(names: &[&str]) -> AuthorRoles {
        AuthorRoles {
            ids: (1..=names.len() as u64).map(Id::new).collect(),
            names: names.iter().map(|name| (*name).to_owned()).collect(),
        }
    }

    #[test]
    fn allow_listed_roles_pass_in_both_sets() {
        for config in [CommandSetConfig::default_set(), CommandSetConfig::beta_set()] {
            let set = CommandSet::new(config).unwrap();

            assert!(authorize(&set, &roles(&["Member", "Wardens"])));
            assert!(authorize(&set, &roles(&["Community Manager - Minecraft"])));
        }
    }

    #[test]
    fn other_roles_are_turned_away() {
        let set = CommandSet::new(CommandSetConfig::default_set()).unwrap();

        assert!(!authorize(&set, &roles(&[])));
        assert!(!authorize(&set, &roles(&["Member", "Level 10"])));
        assert!(!authorize(&set, &roles(&["wardens"])));
    }
}
