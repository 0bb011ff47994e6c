//! Per-session key bindings.
//!
//! Each front-end owns an `InputBindings` and resolves key presses to
//! player actions before calling into the table. Pacing and debouncing of
//! physical inputs happen before this point.

use rustc_hash::FxHashMap;

use crate::core::PlayerId;
use crate::table::PlayerAction;

/// Key to action map for one session.
///
/// ```
/// use rat_screw::core::PlayerId;
/// use rat_screw::input::InputBindings;
/// use rat_screw::table::PlayerAction;
///
/// let mut keys = InputBindings::two_player();
/// assert_eq!(keys.resolve('x'), Some(PlayerAction::Slap(PlayerId(0))));
///
/// keys.bind('j', PlayerAction::Play(PlayerId(1)));
/// assert_eq!(keys.resolve('J'), Some(PlayerAction::Play(PlayerId(1))));
/// ```
#[derive(Clone, Debug, Default)]
pub struct InputBindings {
    keys: FxHashMap<char, PlayerAction>,
}

impl InputBindings {
    /// No keys bound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `z`/`x` play and slap for player 0, `n`/`m` for player 1.
    #[must_use]
    pub fn two_player() -> Self {
        let mut bindings = Self::new();
        bindings.bind('z', PlayerAction::Play(PlayerId(0)));
        bindings.bind('x', PlayerAction::Slap(PlayerId(0)));
        bindings.bind('n', PlayerAction::Play(PlayerId(1)));
        bindings.bind('m', PlayerAction::Slap(PlayerId(1)));
        bindings
    }

    /// Bind a key, returning the action it replaced. Keys are
    /// case-insensitive.
    pub fn bind(&mut self, key: char, action: PlayerAction) -> Option<PlayerAction> {
        self.keys.insert(key.to_ascii_lowercase(), action)
    }

    pub fn unbind(&mut self, key: char) -> Option<PlayerAction> {
        self.keys.remove(&key.to_ascii_lowercase())
    }

    #[must_use]
    pub fn resolve(&self, key: char) -> Option<PlayerAction> {
        self.keys.get(&key.to_ascii_lowercase()).copied()
    }

    /// Drop every binding for a seat, e.g. after shrinking the table.
    pub fn unbind_player(&mut self, player: PlayerId) {
        self.keys.retain(|_, action| action.player() != player);
    }

    /// Bound keys in sorted order, for help text.
    #[must_use]
    pub fn bound(&self) -> Vec<(char, PlayerAction)> {
        let mut keys: Vec<_> = self.keys.iter().map(|(&k, &a)| (k, a)).collect();
        keys.sort_by_key(|&(k, _)| k);
        keys
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_player_defaults() {
        let keys = InputBindings::two_player();
        assert_eq!(keys.len(), 4);
        assert_eq!(keys.resolve('z'), Some(PlayerAction::Play(PlayerId(0))));
        assert_eq!(keys.resolve('M'), Some(PlayerAction::Slap(PlayerId(1))));
        assert_eq!(keys.resolve('q'), None);
    }

    #[test]
    fn test_rebind_and_unbind() {
        let mut keys = InputBindings::two_player();

        let old = keys.bind('z', PlayerAction::Slap(PlayerId(1)));
        assert_eq!(old, Some(PlayerAction::Play(PlayerId(0))));
        assert_eq!(keys.resolve('z'), Some(PlayerAction::Slap(PlayerId(1))));

        assert_eq!(keys.unbind('Z'), Some(PlayerAction::Slap(PlayerId(1))));
        assert_eq!(keys.resolve('z'), None);
    }

    #[test]
    fn test_unbind_player() {
        let mut keys = InputBindings::two_player();
        keys.unbind_player(PlayerId(1));

        let bound = keys.bound();
        assert_eq!(
            bound,
            vec![
                ('x', PlayerAction::Slap(PlayerId(0))),
                ('z', PlayerAction::Play(PlayerId(0))),
            ]
        );
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut a = InputBindings::two_player();
        let b = InputBindings::two_player();
        a.unbind('x');
        assert_eq!(a.resolve('x'), None);
        assert!(b.resolve('x').is_some());
    }
}
