use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use satchel_core::{Entity, TokenId};

use crate::actor::Actor;

/// Lookup of actors by token identifier.
///
/// The host environment (game scene/engine) owns this set and its lifecycle;
/// the transfer core only reads and mutates the inventories of actors handed
/// to it through a registry handle. Backed by an ordered map so `tokens()`
/// iterates deterministically (hosts populate pickers from it).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorRegistry {
    actors: BTreeMap<TokenId, Actor>,
}

impl ActorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an actor under its own token.
    ///
    /// Replaces and returns any actor already registered under that token.
    pub fn insert(&mut self, actor: Actor) -> Option<Actor> {
        self.actors.insert(actor.id().clone(), actor)
    }

    /// Unregister and return the actor for `token`, if any.
    pub fn remove(&mut self, token: &TokenId) -> Option<Actor> {
        self.actors.remove(token)
    }

    /// Resolve a token to its actor. Absence is the caller's
    /// `ActorNotFound`; the registry never fabricates one.
    pub fn resolve(&self, token: &TokenId) -> Option<&Actor> {
        self.actors.get(token)
    }

    pub fn resolve_mut(&mut self, token: &TokenId) -> Option<&mut Actor> {
        self.actors.get_mut(token)
    }

    /// Registered tokens in sorted order.
    pub fn tokens(&self) -> impl Iterator<Item = &TokenId> {
        self.actors.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Actor> {
        self.actors.values()
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_finds_registered_actor() {
        let mut registry = ActorRegistry::new();
        registry.insert(Actor::new("Player Alpha", "ControlledToken1"));

        let actor = registry.resolve(&TokenId::from("ControlledToken1")).unwrap();
        assert_eq!(actor.display_name(), "Player Alpha");
    }

    #[test]
    fn resolve_unknown_token_is_none() {
        let registry = ActorRegistry::new();
        assert!(registry.resolve(&TokenId::from("TokenZ")).is_none());
    }

    #[test]
    fn insert_replaces_actor_under_same_token() {
        let mut registry = ActorRegistry::new();
        registry.insert(Actor::new("Player Alpha", "ControlledToken1"));
        let previous = registry.insert(Actor::new("Player Alpha (renamed)", "ControlledToken1"));

        assert_eq!(previous.unwrap().display_name(), "Player Alpha");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn tokens_iterate_in_sorted_order() {
        let mut registry = ActorRegistry::new();
        registry.insert(Actor::new("NPC Delta", "TokenD"));
        registry.insert(Actor::new("Player Alpha", "ControlledToken1"));
        registry.insert(Actor::new("NPC Charlie", "TokenC"));

        let tokens: Vec<&str> = registry.tokens().map(|t| t.as_str()).collect();
        assert_eq!(tokens, vec!["ControlledToken1", "TokenC", "TokenD"]);
    }

    #[test]
    fn remove_unregisters_the_actor() {
        let mut registry = ActorRegistry::new();
        registry.insert(Actor::new("NPC Echo", "TokenE"));

        let removed = registry.remove(&TokenId::from("TokenE")).unwrap();
        assert_eq!(removed.display_name(), "NPC Echo");
        assert!(registry.is_empty());
    }
}
