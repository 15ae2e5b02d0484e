use uuid::{Builder, Uuid};

/// Who a message is being rendered for. Placeholders and hover text resolve against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub username: String,
    pub uuid: Uuid,
    /// Name of the world/dimension the player is in, if known
    pub world: Option<String>,
}

impl Player {
    pub fn new(username: impl Into<String>, uuid: Uuid) -> Self {
        Self {
            username: username.into(),
            uuid,
            world: None,
        }
    }

    /// A player with the UUID an offline-mode server would give them
    pub fn offline(username: &str) -> Self {
        Self::new(username, offline_uuid(username))
    }

    pub fn in_world(mut self, world: impl Into<String>) -> Self {
        self.world = Some(world.into());
        self
    }
}

/// Version 3 UUID of `OfflinePlayer:<name>` without a namespace, same as the vanilla server
pub fn offline_uuid(username: &str) -> Uuid {
    let digest = md5::compute(format!("OfflinePlayer:{username}"));

    Builder::from_md5_bytes(digest.0).into_uuid()
}
