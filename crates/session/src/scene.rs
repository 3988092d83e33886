//! Demo scene: a small cast of actors with starting inventories.
//!
//! In a real deployment the game scene/engine supplies and maintains the
//! registry; this stands in for it during interactive sessions.

use anyhow::Context;

use satchel_actors::{Actor, ActorRegistry};

/// Build the demo registry: three player-controlled tokens and three NPCs,
/// with a few starting items to move around.
pub fn demo_registry() -> anyhow::Result<ActorRegistry> {
    let mut registry = ActorRegistry::new();

    let mut alpha = Actor::new("Player Alpha", "ControlledToken1");
    alpha
        .inventory_mut()
        .add("Health Potion", 5)
        .context("seeding Player Alpha")?;
    alpha
        .inventory_mut()
        .add("Mana Potion", 3)
        .context("seeding Player Alpha")?;
    registry.insert(alpha);

    let mut beta = Actor::new("Player Beta", "ControlledToken2");
    beta.inventory_mut()
        .add("Gold Coins", 100)
        .context("seeding Player Beta")?;
    registry.insert(beta);

    registry.insert(Actor::new("Player Gamma", "ControlledToken3"));
    registry.insert(Actor::new("NPC Charlie", "TokenC"));
    registry.insert(Actor::new("NPC Delta", "TokenD"));
    registry.insert(Actor::new("NPC Echo", "TokenE"));

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use satchel_core::TokenId;

    use super::*;

    #[test]
    fn demo_scene_has_six_actors_with_seeded_stock() {
        let registry = demo_registry().unwrap();
        assert_eq!(registry.len(), 6);

        let alpha = registry.resolve(&TokenId::from("ControlledToken1")).unwrap();
        assert_eq!(alpha.inventory().find("Health Potion").unwrap().quantity(), 5);
        assert_eq!(alpha.inventory().find("Mana Potion").unwrap().quantity(), 3);

        let beta = registry.resolve(&TokenId::from("ControlledToken2")).unwrap();
        assert_eq!(beta.inventory().find("Gold Coins").unwrap().quantity(), 100);
    }
}
