//! UI domain: coin display HUD element.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::interaction::CoinsChangedEvent;

const HUD_PADDING: f32 = 16.0;

/// Marker for the coin display UI container
#[derive(Component)]
pub struct CoinDisplayUI;

/// Marker for the coin amount text
#[derive(Component)]
pub struct CoinAmountText;

pub(crate) fn spawn_coin_display_ui(mut commands: Commands) {
    commands
        .spawn((
            CoinDisplayUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(HUD_PADDING),
                top: Val::Px(HUD_PADDING),
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                column_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            // Coin icon (gold square)
            parent.spawn((
                Node {
                    width: Val::Px(16.0),
                    height: Val::Px(16.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.9, 0.75, 0.2)),
            ));

            parent.spawn((
                CoinAmountText,
                Text::new("0"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.85, 0.5)),
            ));
        });
}

pub(crate) fn update_coin_display(
    mut coins_changed: MessageReader<CoinsChangedEvent>,
    mut query: Query<&mut Text, With<CoinAmountText>>,
) {
    let Some(latest) = coins_changed.read().last() else {
        return;
    };

    for mut text in &mut query {
        **text = format!("{}", latest.total);
    }
}
