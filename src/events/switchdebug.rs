//! Events and observers to toggle the debug overlay.
//!
//! Emitting a [`SwitchDebugEvent`] flips the presence of the [`DebugMode`]
//! resource. [`ToggleDebugSectionEvent`] flips one section of an active
//! overlay.
use crate::resources::debugmode::DebugMode;
use crate::resources::debugoverlay::DebugOverlay;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

/// Event used to toggle the [`DebugMode`] resource on/off.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

/// Overlay sections that can be switched while debug mode is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugSection {
    Hitboxes,
    EntityInfo,
    Performance,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct ToggleDebugSectionEvent {
    pub section: DebugSection,
}

/// Observer that toggles the [`DebugMode`] resource.
///
/// - If `DebugMode` is present, it is removed and the overlay is cleared.
/// - If absent, it is inserted with every section enabled.
pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    mut commands: Commands,
    debug_mode: Option<Res<DebugMode>>,
    overlay: Option<ResMut<DebugOverlay>>,
) {
    if debug_mode.is_some() {
        commands.remove_resource::<DebugMode>();
        if let Some(mut overlay) = overlay {
            overlay.clear();
        }
        info!("Debug overlay disabled");
    } else {
        commands.insert_resource(DebugMode::default());
        info!("Debug overlay enabled");
    }
}

/// Observer that flips one overlay section. Ignored when debug mode is off.
pub fn toggle_debug_section_observer(
    trigger: On<ToggleDebugSectionEvent>,
    debug_mode: Option<ResMut<DebugMode>>,
) {
    let Some(mut debug_mode) = debug_mode else {
        return;
    };
    match trigger.event().section {
        DebugSection::Hitboxes => {
            debug_mode.show_hitboxes = !debug_mode.show_hitboxes;
            info!("Hitboxes {}", on_off(debug_mode.show_hitboxes));
        }
        DebugSection::EntityInfo => {
            debug_mode.show_entity_info = !debug_mode.show_entity_info;
            info!("Entity info {}", on_off(debug_mode.show_entity_info));
        }
        DebugSection::Performance => {
            debug_mode.show_performance = !debug_mode.show_performance;
            info!("Performance metrics {}", on_off(debug_mode.show_performance));
        }
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "enabled" } else { "disabled" }
}
