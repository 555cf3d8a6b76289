use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `PanUp` → `"KeyW"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl PartialEq for KeybindingOptions {
    fn eq(&self, other: &Self) -> bool {
        self.bindings == other.bindings
    }
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::PanLeft, "KeyA".into()),
            (KeyAction::PanRight, "KeyD".into()),
            (KeyAction::PanUp, "KeyW".into()),
            (KeyAction::PanDown, "KeyS".into()),
            (KeyAction::DollyForward, "KeyF".into()),
            (KeyAction::DollyBackward, "KeyB".into()),
            (KeyAction::ZoomIn, "KeyZ".into()),
            (KeyAction::ZoomOut, "KeyX".into()),
            (KeyAction::ToggleProjection, "KeyT".into()),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    ///
    /// If a preset binds one key to several actions, the action declared
    /// first in [`KeyAction`] owns the key.
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        let mut entries: Vec<_> = self.bindings.iter().collect();
        entries.sort_unstable_by_key(|(action, _)| **action);
        for (action, key) in entries {
            let _ = self.key_to_action.entry(key.clone()).or_insert(*action);
        }
    }

    /// Restore the default key for every action a preset left unbound.
    ///
    /// A default is skipped when the preset already uses its key for another
    /// action.
    pub fn fill_missing_defaults(&mut self) {
        for (action, key) in Self::default().bindings {
            if self.bindings.contains_key(&action)
                || self.bindings.values().any(|bound| *bound == key)
            {
                continue;
            }
            let _ = self.bindings.insert(action, key);
        }
        self.rebuild_reverse_map();
    }

    /// Bind `action` to `key`, replacing any previous binding for it.
    ///
    /// Any other action bound to `key` becomes unbound.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let key = key.into();
        self.bindings
            .retain(|other, bound| *other == action || *bound != key);
        let _ = self.bindings.insert(action, key);
        self.rebuild_reverse_map();
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}
