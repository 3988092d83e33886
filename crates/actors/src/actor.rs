use serde::{Deserialize, Serialize};

use satchel_core::{Entity, TokenId};
use satchel_inventory::Inventory;

/// A party that owns an inventory, addressed by a stable token identifier.
///
/// The token is the external addressing key; the display name is presentation
/// only. An actor owns its inventory exclusively - no sharing, no
/// back-references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    display_name: String,
    token: TokenId,
    inventory: Inventory,
}

impl Actor {
    /// Create an actor with an empty inventory.
    pub fn new(display_name: impl Into<String>, token: impl Into<TokenId>) -> Self {
        Self {
            display_name: display_name.into(),
            token: token.into(),
            inventory: Inventory::new(),
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn token(&self) -> &TokenId {
        &self.token
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }
}

impl Entity for Actor {
    type Id = TokenId;

    fn id(&self) -> &Self::Id {
        &self.token
    }
}
