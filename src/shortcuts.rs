/// Key identity for shortcut resolution, normalized by the host shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutKey {
    Char(char),
    Delete,
    Backspace,
}

/// A pressed combination as reported by the host: the key plus modifier
/// state. Ctrl and Cmd are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCombo {
    pub key: ShortcutKey,
    pub ctrl_or_meta: bool,
    pub shift: bool,
}

impl KeyCombo {
    pub fn ctrl(key: ShortcutKey) -> Self {
        Self {
            key,
            ctrl_or_meta: true,
            shift: false,
        }
    }

    pub fn ctrl_shift(key: ShortcutKey) -> Self {
        Self {
            key,
            ctrl_or_meta: true,
            shift: true,
        }
    }
}

/// Editor operations reachable from the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    Undo,
    Redo,
    Save,
    Preview,
    DeleteSelected,
}

/// Map a key combination to an editor action.
///
/// Returns `None` when the controller is disabled or the combination is
/// unbound. A `Some` result means the host must consume the event
/// (prevent the native browser action) so bindings like mod+S never
/// reach the browser.
pub fn resolve(combo: KeyCombo, enabled: bool) -> Option<ShortcutAction> {
    if !enabled || !combo.ctrl_or_meta {
        return None;
    }
    match combo.key {
        ShortcutKey::Char(c) => match c.to_ascii_lowercase() {
            'z' if combo.shift => Some(ShortcutAction::Redo),
            'z' => Some(ShortcutAction::Undo),
            'y' => Some(ShortcutAction::Redo),
            's' => Some(ShortcutAction::Save),
            'p' => Some(ShortcutAction::Preview),
            _ => None,
        },
        ShortcutKey::Delete | ShortcutKey::Backspace => Some(ShortcutAction::DeleteSelected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings() {
        assert_eq!(
            resolve(KeyCombo::ctrl(ShortcutKey::Char('z')), true),
            Some(ShortcutAction::Undo)
        );
        assert_eq!(
            resolve(KeyCombo::ctrl_shift(ShortcutKey::Char('Z')), true),
            Some(ShortcutAction::Redo)
        );
        assert_eq!(
            resolve(KeyCombo::ctrl(ShortcutKey::Char('y')), true),
            Some(ShortcutAction::Redo)
        );
        assert_eq!(
            resolve(KeyCombo::ctrl(ShortcutKey::Char('s')), true),
            Some(ShortcutAction::Save)
        );
        assert_eq!(
            resolve(KeyCombo::ctrl(ShortcutKey::Char('p')), true),
            Some(ShortcutAction::Preview)
        );
        assert_eq!(
            resolve(KeyCombo::ctrl(ShortcutKey::Backspace), true),
            Some(ShortcutAction::DeleteSelected)
        );
    }

    #[test]
    fn test_requires_modifier_and_enabled() {
        let plain = KeyCombo {
            key: ShortcutKey::Char('z'),
            ctrl_or_meta: false,
            shift: false,
        };
        assert_eq!(resolve(plain, true), None);
        assert_eq!(resolve(KeyCombo::ctrl(ShortcutKey::Char('z')), false), None);
    }
}
