//! UI domain: coin HUD and the respawn fade overlay.

mod fade;
mod hud_wallet;


pub use fade::{Fade, FadeFinishedEvent, FadeRequestEvent, ScreenFade};

use bevy::prelude::*;

use crate::movement::ControllerSet;
use crate::ui::fade::{apply_fade_overlay, spawn_fade_overlay, start_fades, update_fade};
use crate::ui::hud_wallet::{spawn_coin_display_ui, update_coin_display};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScreenFade>()
            .add_message::<FadeRequestEvent>()
            .add_message::<FadeFinishedEvent>()
            .add_systems(Startup, (spawn_coin_display_ui, spawn_fade_overlay))
            .add_systems(
                Update,
                (start_fades, update_fade)
                    .chain()
                    .in_set(ControllerSet::Animate),
            )
            .add_systems(
                Update,
                (update_coin_display, apply_fade_overlay).after(ControllerSet::Sync),
            );
    }
}
