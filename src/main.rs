mod content;
mod core;
mod interaction;
mod movement;
mod respawn;
mod sprites;
mod ui;

use avian2d::prelude::*;
use bevy::log::LogPlugin;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Cliffside".to_string(),
                        resolution: (1280, 720).into(),
                        resizable: true,
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    filter: "info,wgpu=error,naga=warn,cliffside=debug".to_string(),
                    ..default()
                }),
        )
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            movement::MovementPlugin,
            interaction::InteractionPlugin,
            respawn::RespawnPlugin,
            sprites::SpritesPlugin,
            ui::UiPlugin,
        ))
        .run();
}
