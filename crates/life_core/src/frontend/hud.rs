use bevy::prelude::*;

use super::{ActiveSession, LifeSimSet, PlayerCommand, Toast};
use crate::Location;

const ACTION_KEYS: [(KeyCode, char); 4] = [
    (KeyCode::Digit1, '1'),
    (KeyCode::Digit2, '2'),
    (KeyCode::Digit3, '3'),
    (KeyCode::Digit4, '4'),
];

const EXIT_KEYS: [(KeyCode, char); 6] = [
    (KeyCode::KeyQ, 'Q'),
    (KeyCode::KeyW, 'W'),
    (KeyCode::KeyE, 'E'),
    (KeyCode::KeyR, 'R'),
    (KeyCode::KeyT, 'T'),
    (KeyCode::KeyY, 'Y'),
];

/// Window presentation: background per location, status line, key menu
/// and the toast line.
pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb_u8(5, 6, 16)))
            .add_systems(Startup, spawn_hud)
            .add_systems(Update, read_keyboard.in_set(LifeSimSet::Input))
            .add_systems(
                Update,
                (update_background, update_status, update_toast).in_set(LifeSimSet::Present),
            );
    }
}

#[derive(Component)]
struct Background;

#[derive(Component)]
struct StatusText;

#[derive(Component)]
struct MenuText;

#[derive(Component)]
struct ToastText;

fn spawn_hud(mut commands: Commands) {
    commands.spawn(Camera2d);
    commands.spawn((Sprite::default(), Transform::from_xyz(0.0, 0.0, -1.0), Background));

    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 20.0,
            ..default()
        },
        TextColor(Color::BLACK),
        BackgroundColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(10.0),
            padding: UiRect::all(Val::Px(5.0)),
            ..default()
        },
        StatusText,
    ));

    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(100.0),
            left: Val::Px(100.0),
            ..default()
        },
        MenuText,
    ));

    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 32.0,
            ..default()
        },
        TextColor(Color::WHITE),
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(10.0),
            left: Val::Percent(30.0),
            padding: UiRect::axes(Val::Px(15.0), Val::Px(10.0)),
            ..default()
        },
        Visibility::Hidden,
        ToastText,
    ));
}

fn read_keyboard(
    keys: Res<ButtonInput<KeyCode>>,
    session: Res<ActiveSession>,
    mut requests: EventWriter<PlayerCommand>,
) {
    let info = session.0.location().info();
    for ((key, _), action) in ACTION_KEYS.iter().zip(info.actions) {
        if keys.just_pressed(*key) {
            requests.send(PlayerCommand::Perform(*action));
        }
    }
    for ((key, _), exit) in EXIT_KEYS.iter().zip(info.exits) {
        if keys.just_pressed(*key) {
            requests.send(PlayerCommand::Travel(*exit));
        }
    }
}

fn update_background(
    session: Res<ActiveSession>,
    asset_server: Res<AssetServer>,
    mut shown: Local<Option<Location>>,
    mut backgrounds: Query<&mut Sprite, With<Background>>,
) {
    let location = session.0.location();
    if *shown == Some(location) {
        return;
    }
    for mut sprite in backgrounds.iter_mut() {
        sprite.image = asset_server.load(location.info().background);
    }
    *shown = Some(location);
}

fn update_status(
    session: Res<ActiveSession>,
    mut status: Query<&mut Text, (With<StatusText>, Without<MenuText>)>,
    mut menu: Query<&mut Text, (With<MenuText>, Without<StatusText>)>,
) {
    if !session.is_changed() {
        return;
    }
    if let Ok(mut text) = status.get_single_mut() {
        **text = session.0.describe();
    }
    if let Ok(mut text) = menu.get_single_mut() {
        **text = menu_lines(session.0.location());
    }
}

fn menu_lines(location: Location) -> String {
    let info = location.info();
    let mut lines = vec![info.name.to_string()];
    for ((_, key), action) in ACTION_KEYS.iter().zip(info.actions) {
        lines.push(format!("[{key}] {}", action.label()));
    }
    for ((_, key), exit) in EXIT_KEYS.iter().zip(info.exits) {
        lines.push(format!("[{key}] Go to {exit}"));
    }
    lines.join("\n")
}

fn update_toast(
    toast: Res<Toast>,
    mut query: Query<(&mut Text, &mut Visibility), With<ToastText>>,
) {
    let Ok((mut text, mut visibility)) = query.get_single_mut() else {
        return;
    };
    match toast.text() {
        Some(message) => {
            if text.as_str() != message {
                message.clone_into(&mut **text);
            }
            *visibility = Visibility::Visible;
        }
        None => *visibility = Visibility::Hidden,
    }
}
