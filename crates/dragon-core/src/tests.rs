#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::components::Tower;
    use crate::constants::*;
    use crate::enums::GamePhase;
    use crate::events::SimEvent;
    use crate::state::{GameStateSnapshot, GhostView, TowerView};
    use crate::types::{direction_to, rotate_ccw, rotate_cw, Rect, SimTime, Vec2};

    #[test]
    fn test_game_phase_serde() {
        for v in [GamePhase::Idle, GamePhase::WaveInProgress, GamePhase::GameOver] {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::StartWave,
            PlayerCommand::ToggleTowerPlacementCursor,
            PlayerCommand::MoveCursor { x: 10.0, y: -4.5 },
            PlayerCommand::PlaceTower { x: 12.5, y: 3.0 },
            PlayerCommand::Reset,
            PlayerCommand::Quit,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(*cmd, back);
        }
    }

    #[test]
    fn test_player_command_tag_format() {
        let json = serde_json::to_string(&PlayerCommand::PlaceTower { x: 1.0, y: 2.0 }).unwrap();
        assert_eq!(json, r#"{"type":"PlaceTower","x":1.0,"y":2.0}"#);

        let parsed: PlayerCommand = serde_json::from_str(r#"{"type":"StartWave"}"#).unwrap();
        assert_eq!(parsed, PlayerCommand::StartWave);
    }

    #[test]
    fn test_sim_event_serde() {
        let events = vec![
            SimEvent::WaveStarted { wave: 1, enemies: 1 },
            SimEvent::BoundsChanged {
                bounds: Rect::new(Vec2::new(-12.5, 0.0), Vec2::new(25.0, 0.0)),
            },
            SimEvent::EnemyLeaked { lives_remaining: 9 },
            SimEvent::ProjectileFizzled,
            SimEvent::GameOver { wave: 3 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: SimEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    /// Verify GameStateSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.tick, back.time.tick);
        assert_eq!(snapshot.phase, back.phase);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    #[test]
    fn test_snapshot_awaiting_wave() {
        let mut snapshot = GameStateSnapshot::default();
        assert!(snapshot.awaiting_wave());
        snapshot.economy.enemies_remaining = 2;
        assert!(!snapshot.awaiting_wave());
        assert!(!snapshot.is_game_over());
    }

    // ---- Vector math ----

    #[test]
    fn test_rotations_are_inverse_quarter_turns() {
        let v = Vec2::new(-1.0, 0.0);
        assert_eq!(rotate_cw(v), Vec2::new(0.0, -1.0));
        assert_eq!(rotate_ccw(v), Vec2::new(0.0, 1.0));
        assert_eq!(rotate_ccw(rotate_cw(v)), v);
        assert_eq!(rotate_cw(rotate_cw(rotate_cw(rotate_cw(v)))), v);
    }

    #[test]
    fn test_rotate_cw_on_screen() {
        // Facing right on screen, a clockwise turn faces down (+y).
        assert_eq!(rotate_cw(Vec2::X), Vec2::Y);
        assert_eq!(rotate_ccw(Vec2::X), -Vec2::Y);
    }

    #[test]
    fn test_direction_to() {
        let d = direction_to(Vec2::new(1.0, 1.0), Vec2::new(4.0, 5.0));
        assert!((d - Vec2::new(0.6, 0.8)).length() < 1e-12);
        assert!((d.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "coincident")]
    fn test_direction_to_zero_offset_panics() {
        let p = Vec2::new(3.0, 3.0);
        let _ = direction_to(p, p);
    }

    // ---- Rect ----

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(Vec2::new(160.0, 120.0), Vec2::new(320.0, 240.0));
        assert_eq!(r.min_x(), 0.0);
        assert_eq!(r.max_x(), 320.0);
        assert_eq!(r.min_y(), 0.0);
        assert_eq!(r.max_y(), 240.0);
        assert_eq!(r.min_xy(), Vec2::ZERO);
        assert_eq!(r.max_xy(), Vec2::new(320.0, 240.0));
    }

    #[test]
    fn test_rect_contains_point_inclusive() {
        let r = Rect::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        assert!(r.contains_point(Vec2::new(5.0, -5.0)));
        assert!(r.contains_point(Vec2::ZERO));
        assert!(!r.contains_point(Vec2::new(5.01, 0.0)));

        // The empty rect at the origin still contains the origin.
        assert!(Rect::default().contains_point(Vec2::ZERO));
        assert!(!Rect::default().contains_point(Vec2::new(-25.0, 0.0)));
    }

    #[test]
    fn test_rect_contains_rect() {
        let outer = Rect::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let inner = Rect::new(Vec2::new(2.0, 2.0), Vec2::new(4.0, 4.0));
        let straddling = Rect::new(Vec2::new(4.0, 0.0), Vec2::new(4.0, 4.0));
        assert!(outer.contains_rect(&inner));
        assert!(outer.contains_rect(&outer));
        assert!(!outer.contains_rect(&straddling));
        assert!(!inner.contains_rect(&outer));
    }

    #[test]
    fn test_rect_union_point() {
        let r = Rect::default().union_point(Vec2::new(-25.0, 0.0));
        assert_eq!(r.position, Vec2::new(-12.5, 0.0));
        assert_eq!(r.size, Vec2::new(25.0, 0.0));

        let r = r.union_point(Vec2::new(-25.0, -25.0));
        assert_eq!(r.min_xy(), Vec2::new(-25.0, -25.0));
        assert_eq!(r.max_xy(), Vec2::ZERO);
    }

    // ---- Views / components ----

    #[test]
    fn test_attack_radius_scales() {
        let view = TowerView {
            position: Vec2::ZERO,
            scale: 1.5,
            anim_frame: 0,
            attack_range: TOWER_ATTACK_RANGE,
            has_target: false,
        };
        assert_eq!(view.attack_radius(), 37.5);

        let tower = Tower {
            position: Vec2::ZERO,
            scale: 2.0,
            cost: INITIAL_TOWER_COST,
            attack_range: TOWER_ATTACK_RANGE,
            cooldown_secs: 0.0,
            target: None,
            animation: Default::default(),
        };
        assert_eq!(tower.attack_radius(), 50.0);
    }

    #[test]
    fn test_ghost_view_default_hidden() {
        let ghost = GhostView::default();
        assert!(!ghost.visible);
        assert!(!ghost.can_afford);
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance(DT);
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-10);
    }
}
