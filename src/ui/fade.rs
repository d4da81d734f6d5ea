//! UI domain: full-screen fade overlay used to hide respawns.

use bevy::ecs::message::{Message, MessageReader, MessageWriter};
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fade {
    /// Clear screen to black.
    ToOpaque,
    /// Black screen to clear.
    FromOpaque,
}

impl Fade {
    fn target_alpha(self) -> f32 {
        match self {
            Fade::ToOpaque => 1.0,
            Fade::FromOpaque => 0.0,
        }
    }
}

/// Event requesting a fade over `duration` seconds
#[derive(Debug)]
pub struct FadeRequestEvent {
    pub fade: Fade,
    pub duration: f32,
}

impl Message for FadeRequestEvent {}

/// Event fired when a requested fade has reached its target
#[derive(Debug)]
pub struct FadeFinishedEvent {
    pub fade: Fade,
}

impl Message for FadeFinishedEvent {}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ActiveFade {
    fade: Fade,
    from: f32,
    elapsed: f32,
    duration: f32,
}

/// Current overlay opacity and the fade driving it, if any.
#[derive(Resource, Debug, Default)]
pub struct ScreenFade {
    alpha: f32,
    active: Option<ActiveFade>,
}

impl ScreenFade {
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn is_fading(&self) -> bool {
        self.active.is_some()
    }

    /// Starts `fade` from the current opacity, replacing any fade in progress.
    pub fn start(&mut self, fade: Fade, duration: f32) {
        self.active = Some(ActiveFade {
            fade,
            from: self.alpha,
            elapsed: 0.0,
            duration: duration.max(0.0),
        });
    }

    /// Advances the active fade; returns it on the tick it completes.
    pub fn tick(&mut self, dt: f32) -> Option<Fade> {
        let active = self.active.as_mut()?;
        active.elapsed += dt;

        let target = active.fade.target_alpha();
        if active.elapsed >= active.duration {
            let finished = active.fade;
            self.alpha = target;
            self.active = None;
            return Some(finished);
        }

        let t = active.elapsed / active.duration;
        self.alpha = active.from + (target - active.from) * t;
        None
    }
}

/// Marker for the fade overlay node
#[derive(Component)]
pub struct FadeOverlay;

pub(crate) fn spawn_fade_overlay(mut commands: Commands) {
    commands.spawn((
        FadeOverlay,
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            right: Val::Px(0.0),
            top: Val::Px(0.0),
            bottom: Val::Px(0.0),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.0)),
        // Above the HUD
        ZIndex(100),
    ));
}

pub(crate) fn start_fades(
    mut requests: MessageReader<FadeRequestEvent>,
    mut screen_fade: ResMut<ScreenFade>,
) {
    for request in requests.read() {
        debug!("Fade {:?} over {}s", request.fade, request.duration);
        screen_fade.start(request.fade, request.duration);
    }
}

pub(crate) fn update_fade(
    time: Res<Time>,
    mut screen_fade: ResMut<ScreenFade>,
    mut finished_events: MessageWriter<FadeFinishedEvent>,
) {
    if !screen_fade.is_fading() {
        return;
    }

    if let Some(fade) = screen_fade.tick(time.delta_secs()) {
        finished_events.write(FadeFinishedEvent { fade });
    }
}

pub(crate) fn apply_fade_overlay(
    screen_fade: Res<ScreenFade>,
    mut query: Query<&mut BackgroundColor, With<FadeOverlay>>,
) {
    if !screen_fade.is_changed() {
        return;
    }

    for mut background in &mut query {
        background.0 = Color::srgba(0.0, 0.0, 0.0, screen_fade.alpha());
    }
}
