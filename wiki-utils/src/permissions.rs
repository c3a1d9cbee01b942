use std::collections::HashSet;

use twilight_http::Client;
use twilight_model::{
    gateway::payload::incoming::MessageCreate,
    id::{Id, marker::RoleMarker},
};

use crate::failure::PlatformError;

/// Role names permitted to run moderator commands.
#[derive(Clone, Debug, Default)]
pub struct AllowedRoleSet {
    names: HashSet<String>,
}

impl AllowedRoleSet {
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for AllowedRoleSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// True iff any of the actor's role names is on the allow-list.
pub fn is_authorized<'a>(
    actor_roles: impl IntoIterator<Item = &'a str>,
    allow_list: &AllowedRoleSet,
) -> bool {
    actor_roles
        .into_iter()
        .any(|name| allow_list.contains(name))
}

/// The invoking member's roles, as ids and as display names.
#[derive(Clone, Debug, Default)]
pub struct AuthorRoles {
    pub ids: Vec<Id<RoleMarker>>,
    pub names: Vec<String>,
}

impl AuthorRoles {
    pub fn has(&self, role_id: Id<RoleMarker>) -> bool {
        self.ids.contains(&role_id)
    }

    pub fn is_authorized(&self, allow_list: &AllowedRoleSet) -> bool {
        is_authorized(self.names.iter().map(String::as_str), allow_list)
    }
}

/// A guild's roles by id and name, fetched once per invocation.
#[derive(Clone, Debug, Default)]
pub struct GuildRoleIndex {
    roles: Vec<(Id<RoleMarker>, String)>,
}

impl GuildRoleIndex {
    /// Id of the first role named exactly `name`.
    pub fn id_of(&self, name: &str) -> Option<Id<RoleMarker>> {
        self.roles
            .iter()
            .find(|(_, role_name)| role_name == name)
            .map(|(id, _)| *id)
    }

    /// Pair a member's role ids with their names.
    pub fn author_roles(&self, ids: Vec<Id<RoleMarker>>) -> AuthorRoles {
        let names = self
            .roles
            .iter()
            .filter(|(id, _)| ids.contains(id))
            .map(|(_, name)| name.clone())
            .collect();

        AuthorRoles { ids, names }
    }
}

impl<S: Into<String>> FromIterator<(Id<RoleMarker>, S)> for GuildRoleIndex {
    fn from_iter<I: IntoIterator<Item = (Id<RoleMarker>, S)>>(iter: I) -> Self {
        Self {
            roles: iter
                .into_iter()
                .map(|(id, name)| (id, name.into()))
                .collect(),
        }
    }
}

/// Author of a message command together with the guild's roles.
#[derive(Clone, Debug, Default)]
pub struct MessageAuthor {
    pub roles: AuthorRoles,
    pub guild_roles: GuildRoleIndex,
}

/// Resolve the roles of a message command's author.
///
/// Uses the member payload attached to the gateway event when present and
/// falls back to fetching the member. Returns `Ok(None)` outside a guild.
pub async fn resolve_message_author(
    http: &Client,
    msg: &MessageCreate,
) -> Result<Option<MessageAuthor>, PlatformError> {
    let Some(guild_id) = msg.guild_id else {
        return Ok(None);
    };

    let ids = match msg.member.as_ref() {
        Some(member) => member.roles.clone(),
        None => {
            http.guild_member(guild_id, msg.author.id)
                .await?
                .model()
                .await?
                .roles
        }
    };

    let guild_roles: GuildRoleIndex = http
        .roles(guild_id)
        .await?
        .model()
        .await?
        .into_iter()
        .map(|role| (role.id, role.name))
        .collect();

    Ok(Some(MessageAuthor {
        roles: guild_roles.author_roles(ids),
        guild_roles,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allow_list() -> AllowedRoleSet {
        ["Wardens", "Sentinels", "Community Manager - D&D"]
            .into_iter()
            .collect()
    }

    #[test]
    fn any_shared_role_authorizes() {
        assert!(is_authorized(["Member", "Sentinels"], &allow_list()));
        assert!(is_authorized(["Community Manager - D&D"], &allow_list()));
    }

    #[test]
    fn disjoint_roles_are_rejected() {
        assert!(!is_authorized(["Member", "Level 5"], &allow_list()));
    }

    #[test]
    fn empty_roles_are_rejected() {
        let none: [&str; 0] = [];
        assert!(!is_authorized(none, &allow_list()));
        assert!(!is_authorized(["Wardens"], &AllowedRoleSet::default()));
    }

    #[test]
    fn role_names_match_exactly() {
        assert!(!is_authorized(["wardens"], &allow_list()));
        assert!(!is_authorized(["Wardens "], &allow_list()));
    }

    #[test]
    fn author_roles_check_ids_and_names() {
        let roles = AuthorRoles {
            ids: vec![Id::new(10), Id::new(20)],
            names: vec!["Member".to_owned(), "Wardens".to_owned()],
        };

        assert!(roles.has(Id::new(20)));
        assert!(!roles.has(Id::new(30)));
        assert!(roles.is_authorized(&allow_list()));
    }

    #[test]
    fn role_index_names_member_roles() {
        let index: GuildRoleIndex = [
            (Id::new(10), "Member"),
            (Id::new(20), "Wardens"),
            (Id::new(30), "Apex Legends"),
        ]
        .into_iter()
        .collect();

        let roles = index.author_roles(vec![Id::new(20), Id::new(99)]);

        assert_eq!(roles.names, ["Wardens"]);
        assert!(roles.is_authorized(&allow_list()));
        assert_eq!(index.id_of("Apex Legends"), Some(Id::new(30)));
        assert_eq!(index.id_of("apex legends"), None);
    }

    #[test]
    fn duplicate_role_names_resolve_to_the_first() {
        let index: GuildRoleIndex = [(Id::new(5), "Minecraft"), (Id::new(6), "Minecraft")]
            .into_iter()
            .collect();

        assert_eq!(index.id_of("Minecraft"), Some(Id::new(5)));
    }
}
