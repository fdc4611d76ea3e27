//! Plugin menu items and the actions they trigger.
use clientmanager_plugin::{MenuId, MenuKind};

/// An action triggered from one of our menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Copy the selected client's unique identity to the clipboard.
    CopyUniqueId,
    /// Start swallowing pokes.
    EnableAntiPoke,
    /// Stop swallowing pokes.
    DisableAntiPoke,
    /// Start moving back after being kicked from a channel.
    EnableAntiKick,
    /// Stop moving back after being kicked from a channel.
    DisableAntiKick,
}

/// A menu item registered with the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    /// The menu the item is shown in.
    pub kind: MenuKind,
    /// The id the client reports back when the item is triggered.
    pub id: MenuId,
    /// The item's label.
    pub text: &'static str,
    /// Icon file name, relative to the plugin's resource directory.
    pub icon: &'static str,
    /// The action the item triggers.
    pub action: MenuAction,
}

/// Icon of the plugin's submenu.
pub const MENU_ICON: &str = "t.png";

/// Every menu item the plugin registers, in display order.
pub static MENU_ITEMS: [MenuItem; 5] = [
    MenuItem {
        kind: MenuKind::Client,
        id: MenuId(1),
        text: "Copy ID",
        icon: "1.png",
        action: MenuAction::CopyUniqueId,
    },
    MenuItem {
        kind: MenuKind::Global,
        id: MenuId(2),
        text: "activate Antipoke",
        icon: "1.png",
        action: MenuAction::EnableAntiPoke,
    },
    MenuItem {
        kind: MenuKind::Global,
        id: MenuId(3),
        text: "deactivate Antipoke",
        icon: "1.png",
        action: MenuAction::DisableAntiPoke,
    },
    MenuItem {
        kind: MenuKind::Global,
        id: MenuId(4),
        text: "activate Antikick",
        icon: "1.png",
        action: MenuAction::EnableAntiKick,
    },
    MenuItem {
        kind: MenuKind::Global,
        id: MenuId(5),
        text: "deactivate Antikick",
        icon: "1.png",
        action: MenuAction::DisableAntiKick,
    },
];

impl MenuAction {
    /// Looks up the action of the item with the given `kind` and `id`.
    #[must_use]
    pub fn from_menu(kind: MenuKind, id: MenuId) -> Option<MenuAction> {
        MENU_ITEMS
            .iter()
            .find(|item| item.kind == kind && item.id == id)
            .map(|item| item.action)
    }

    /// Returns the id of the menu item that triggers this action.
    #[must_use]
    pub fn menu_id(self) -> MenuId {
        MENU_ITEMS
            .iter()
            .find(|item| item.action == self)
            .map_or(MenuId(0), |item| item.id)
    }

    /// Returns the action that undoes this one, if it is one half of an on/off pair.
    #[must_use]
    pub const fn counterpart(self) -> Option<MenuAction> {
        match self {
            MenuAction::CopyUniqueId => None,
            MenuAction::EnableAntiPoke => Some(MenuAction::DisableAntiPoke),
            MenuAction::DisableAntiPoke => Some(MenuAction::EnableAntiPoke),
            MenuAction::EnableAntiKick => Some(MenuAction::DisableAntiKick),
            MenuAction::DisableAntiKick => Some(MenuAction::EnableAntiKick),
        }
    }
}

/// Returns the items that are disabled when the plugin is loaded, since their flags start off.
pub fn initially_disabled() -> impl Iterator<Item = &'static MenuItem> {
    MENU_ITEMS.iter().filter(|item| {
        matches!(
            item.action,
            MenuAction::DisableAntiPoke | MenuAction::DisableAntiKick
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        for (i, a) in MENU_ITEMS.iter().enumerate() {
            for b in &MENU_ITEMS[i + 1..] {
                assert_ne!(a.id, b.id, "{} and {} share an id", a.text, b.text);
            }
        }
    }

    #[test]
    fn from_menu_requires_matching_kind() {
        assert_eq!(
            MenuAction::from_menu(MenuKind::Client, MenuId(1)),
            Some(MenuAction::CopyUniqueId)
        );
        assert_eq!(MenuAction::from_menu(MenuKind::Global, MenuId(1)), None);
        assert_eq!(MenuAction::from_menu(MenuKind::Channel, MenuId(2)), None);
        assert_eq!(MenuAction::from_menu(MenuKind::Global, MenuId(99)), None);
    }

    #[test]
    fn counterparts_are_symmetric() {
        for item in &MENU_ITEMS {
            if let Some(other) = item.action.counterpart() {
                assert_eq!(other.counterpart(), Some(item.action));
            }
        }
    }

    #[test]
    fn menu_id_round_trips_through_table() {
        for item in &MENU_ITEMS {
            assert_eq!(item.action.menu_id(), item.id);
        }
    }

    #[test]
    fn deactivate_items_start_disabled() {
        let ids: Vec<MenuId> = initially_disabled().map(|item| item.id).collect();

        assert_eq!(ids, [MenuId(3), MenuId(5)]);
    }
}
