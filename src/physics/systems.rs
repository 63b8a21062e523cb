use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use tracing::{debug, info};

use crate::config::IMPULSE_FACTOR;
use crate::physics::body::{BodyColor, BodyId};
use crate::physics::store::BodyStore;

/// Last known cursor position in plane coordinates.
///
/// Window logical pixels already use the plane's convention (top-left
/// origin, +Y down), so no camera transform is involved.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct CursorPlane(pub Option<Vec2>);

/// Which body the color menu is open for.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    Selected(BodyId),
}

impl Selection {
    pub fn body(&self) -> Option<BodyId> {
        match *self {
            Selection::None => None,
            Selection::Selected(id) => Some(id),
        }
    }
}

/// Apply the user's menu choice and close the menu.
///
/// The menu closes even when nothing was selected; a selected id that has
/// since vanished from the store is ignored by `set_color`.
pub fn resolve_color(selection: &mut Selection, store: &mut BodyStore, color: BodyColor) {
    if let Selection::Selected(id) = *selection {
        store.set_color(id, color);
        info!(body = %id, color = color.label(), "body recolored");
    }
    *selection = Selection::None;
}

/// Open the menu for the first body under `point`, if any.
pub fn select_at(selection: &mut Selection, store: &BodyStore, point: Vec2) -> Option<BodyId> {
    let id = store.find_at(point)?;
    *selection = Selection::Selected(id);
    Some(id)
}

/// Track the cursor and nudge whatever it moves across.
pub fn track_pointer(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut cursor: ResMut<CursorPlane>,
    mut store: ResMut<BodyStore>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(pos) = window.cursor_position() else {
        cursor.0 = None;
        return;
    };
    if cursor.0 == Some(pos) {
        return;
    }
    cursor.0 = Some(pos);

    let nudged = store.apply_impulse_near(pos, IMPULSE_FACTOR);
    if nudged > 0 {
        debug!(x = pos.x, y = pos.y, nudged, "pointer impulse");
    }
}

/// Left click on a body opens the color menu for it.
pub fn pick_on_click(
    buttons: Res<ButtonInput<MouseButton>>,
    cursor: Res<CursorPlane>,
    store: Res<BodyStore>,
    mut selection: ResMut<Selection>,
) {
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    let Some(point) = cursor.0 else {
        return;
    };
    if let Some(id) = select_at(&mut selection, &store, point) {
        info!(body = %id, "color menu opened (R/G/B or 1/2/3 to pick, Esc to cancel)");
    }
}

/// Keyboard stand-in for the color menu buttons.
pub fn choose_color_from_keys(
    keys: Res<ButtonInput<KeyCode>>,
    mut selection: ResMut<Selection>,
    mut store: ResMut<BodyStore>,
) {
    if *selection == Selection::None {
        return;
    }
    let choice = if keys.any_just_pressed([KeyCode::KeyR, KeyCode::Digit1]) {
        BodyColor::Red
    } else if keys.any_just_pressed([KeyCode::KeyB, KeyCode::Digit2]) {
        BodyColor::Blue
    } else if keys.any_just_pressed([KeyCode::KeyG, KeyCode::Digit3]) {
        BodyColor::Green
    } else {
        return;
    };
    resolve_color(&mut selection, &mut store, choice);
}

/// Esc closes an open menu; with no menu open, Esc or Q quits.
/// (No-op quit on wasm32.)
pub fn escape_or_exit(
    keys: Res<ButtonInput<KeyCode>>,
    mut selection: ResMut<Selection>,
    mut exit: MessageWriter<AppExit>,
) {
    if *selection != Selection::None {
        if keys.just_pressed(KeyCode::Escape) {
            debug!("color menu cancelled");
            *selection = Selection::None;
        }
        return;
    }
    if cfg!(not(target_arch = "wasm32")) && keys.any_just_pressed([KeyCode::Escape, KeyCode::KeyQ]) {
        exit.write(AppExit::Success);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::seed_bodies;

    #[test]
    fn click_then_color_recolors_and_closes() {
        let mut store = BodyStore::new(seed_bodies()).unwrap();
        let mut selection = Selection::default();

        assert_eq!(select_at(&mut selection, &store, Vec2::new(205.0, 195.0)), Some(BodyId(2)));
        assert_eq!(selection, Selection::Selected(BodyId(2)));

        resolve_color(&mut selection, &mut store, BodyColor::Green);
        assert_eq!(selection, Selection::None);
        assert_eq!(store.get(BodyId(2)).unwrap().color, BodyColor::Green);
    }

    #[test]
    fn click_on_empty_space_keeps_selection() {
        let store = BodyStore::new(seed_bodies()).unwrap();
        let mut selection = Selection::Selected(BodyId(1));
        assert_eq!(select_at(&mut selection, &store, Vec2::new(10.0, 500.0)), None);
        assert_eq!(selection.body(), Some(BodyId(1)));
    }

    #[test]
    fn resolving_without_selection_changes_nothing() {
        let mut store = BodyStore::new(seed_bodies()).unwrap();
        let before = store.clone();
        let mut selection = Selection::None;
        resolve_color(&mut selection, &mut store, BodyColor::Blue);
        assert_eq!(store, before);
        assert_eq!(selection, Selection::None);
    }
}
