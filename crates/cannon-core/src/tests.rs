use crate::commands::{InputEvent, PlayerCommand};
use crate::components::Hitbox;
use crate::enums::*;
use crate::events::GameEvent;
use crate::settings::{GameSettings, SettingsError};
use crate::state::{format_score, GameStateSnapshot, ScoreView};
use crate::types::{Position, SimTime, Velocity};

#[test]
fn test_player_command_serde() {
    let commands = vec![
        PlayerCommand::StartGame,
        PlayerCommand::ResetSession,
        PlayerCommand::Pause,
        PlayerCommand::Resume,
        PlayerCommand::SetTimeScale { scale: 2.0 },
        PlayerCommand::Input {
            event: InputEvent::PointerMoved { x: 220.0, y: 500.0 },
        },
        PlayerCommand::Input {
            event: InputEvent::ButtonPressed {
                button: MouseButton::Primary,
            },
        },
    ];
    for cmd in commands {
        let json = serde_json::to_string(&cmd).unwrap();
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(cmd, back);
    }
}

#[test]
fn test_player_command_tagged_format() {
    let json = r#"{"type":"Input","event":{"type":"ButtonPressed","button":"Primary"}}"#;
    let cmd: PlayerCommand = serde_json::from_str(json).unwrap();
    assert_eq!(
        cmd,
        PlayerCommand::Input {
            event: InputEvent::ButtonPressed {
                button: MouseButton::Primary
            }
        }
    );
}

#[test]
fn test_game_event_serde() {
    let event = GameEvent::ScoreChanged { value: 3000 };
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("\"type\":\"ScoreChanged\""));
    let back: GameEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(event, back);
}

#[test]
fn test_snapshot_serializes() {
    let snapshot = GameStateSnapshot {
        score: ScoreView::new(1000),
        ..Default::default()
    };
    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("Score: [1000]"));
}

#[test]
fn test_score_text_format() {
    assert_eq!(format_score(0), "Score: [0]");
    assert_eq!(format_score(12000), "Score: [12000]");
    assert_eq!(ScoreView::new(5000).text, "Score: [5000]");
}

#[test]
fn test_direction_flip_and_sign() {
    assert_eq!(Direction::default(), Direction::Up);
    assert_eq!(Direction::Up.flipped(), Direction::Down);
    assert_eq!(Direction::Down.flipped(), Direction::Up);
    assert_eq!(Direction::Up.sign(), -1.0);
    assert_eq!(Direction::Down.sign(), 1.0);
}

#[test]
fn test_hitbox_overlap() {
    let bullet = Hitbox::square(25.0);
    let line = Hitbox::new(200.0, 5.0);
    let line_pos = Position::new(500.0, 600.0);

    assert!(bullet.overlaps(&Position::new(550.0, 590.0), &line, &line_pos));
    assert!(line.overlaps(&line_pos, &bullet, &Position::new(550.0, 590.0)));
    // Left of the line.
    assert!(!bullet.overlaps(&Position::new(400.0, 590.0), &line, &line_pos));
    // Touching edges only.
    assert!(!bullet.overlaps(&Position::new(550.0, 575.0), &line, &line_pos));
    assert!(!bullet.overlaps(&Position::new(475.0, 590.0), &line, &line_pos));
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..60 {
        time.advance(1.0 / 60.0);
    }
    assert_eq!(time.tick, 60);
    assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    assert!((SimTime::ticks_to_secs(240, 1.0 / 60.0) - 4.0).abs() < 1e-9);
}

#[test]
fn test_velocity_helpers() {
    let v = Velocity::new(3.0, 4.0);
    assert_eq!(v.speed(), 5.0);
    assert!(!v.is_zero());
    assert!(Velocity::default().is_zero());
}

// ---- Settings ----

#[test]
fn test_default_settings() {
    let settings = GameSettings::default();
    assert_eq!(settings.width, 800.0);
    assert_eq!(settings.height, 600.0);
    assert_eq!(settings.tick_rate, 60);
    assert_eq!(settings.lift.period_secs, 2.0);
    assert_eq!(settings.lift.step, 2.0);
    assert_eq!(settings.projectile.speed, 10.0);
    assert_eq!(settings.projectile.lifetime_secs, 4.0);
    assert_eq!(settings.projectile.spawn_offset, Position::new(70.0, 0.0));
    assert_eq!(settings.scoring.points_per_hit, 1000);
    assert!(settings.menu_enabled);
    assert!(settings.validate().is_ok());
    assert_eq!(settings.secs_to_ticks(4.0), 240);
}

#[test]
fn test_settings_partial_toml() {
    let text = r#"
        menu_enabled = false
        tick_rate = 30

        [projectile]
        speed = 12.5
    "#;
    let settings = GameSettings::from_toml_str(text).unwrap();
    assert!(!settings.menu_enabled);
    assert_eq!(settings.tick_rate, 30);
    assert_eq!(settings.projectile.speed, 12.5);
    // Untouched keys keep their defaults.
    assert_eq!(settings.projectile.lifetime_secs, 4.0);
    assert_eq!(settings.lift, GameSettings::default().lift);
    assert_eq!(settings.secs_to_ticks(4.0), 120);
}

#[test]
fn test_settings_toml_round_trip() {
    let settings = GameSettings::default();
    let text = toml::to_string(&settings).unwrap();
    let back = GameSettings::from_toml_str(&text).unwrap();
    assert_eq!(settings, back);
}

#[test]
fn test_settings_parse_error() {
    let err = GameSettings::from_toml_str("tick_rate = \"fast\"").unwrap_err();
    assert!(matches!(err, SettingsError::Parse(_)));
}

#[test]
fn test_settings_validation() {
    let err = GameSettings::from_toml_str("tick_rate = 0").unwrap_err();
    assert!(matches!(err, SettingsError::Invalid(_)));

    let err = GameSettings::from_toml_str("[lift]\nperiod_secs = 0.0").unwrap_err();
    assert!(matches!(err, SettingsError::Invalid(_)));

    let err = GameSettings::from_toml_str("[projectile]\nspeed = -1.0").unwrap_err();
    assert!(matches!(err, SettingsError::Invalid(_)));

    let err = GameSettings::from_toml_str("[projectile]\nlifetime_secs = 0.0").unwrap_err();
    assert!(matches!(err, SettingsError::Invalid(_)));
}

#[test]
fn test_settings_missing_file() {
    let err = GameSettings::load("/definitely/not/here/cannon.toml").unwrap_err();
    assert!(matches!(err, SettingsError::Io { .. }));
}
