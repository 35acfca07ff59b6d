#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::enums::{GamePhase, ScreenEdge};
    use crate::events::{CollisionEvent, GameEvent, SimEvent};
    use crate::reducer::reduce;
    use crate::state::{CoreState, EnemyData, GameStateSnapshot};
    use crate::types::{SimTime, Vec2};

    const EPSILON: f64 = 1e-9;

    fn enemy(id: u32) -> EnemyData {
        EnemyData {
            id,
            movement_speed: 100.0,
        }
    }

    // ---- Serde round-trips ----

    #[test]
    fn test_game_phase_serde() {
        let variants = vec![
            GamePhase::Active,
            GamePhase::Paused,
            GamePhase::Victory,
            GamePhase::Defeat,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_screen_edge_serde() {
        let variants = vec![
            ScreenEdge::Left,
            ScreenEdge::Right,
            ScreenEdge::Top,
            ScreenEdge::Bottom,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: ScreenEdge = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::Pause,
            PlayerCommand::Resume,
            PlayerCommand::Restart,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::Tick { delta_time: 0.016 },
            GameEvent::Damage {
                damage_amount: 10.0,
            },
            GameEvent::Reset,
            GameEvent::Spawned { enemy: enemy(7) },
            GameEvent::KillEnemy { enemy_id: 7 },
            GameEvent::UpdateSpawnTime {
                new_spawn_time: 3.5,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_collision_event_serde() {
        let events = vec![
            CollisionEvent::PlayerDamaged {
                damage_amount: 10.0,
                source_enemy_id: 3,
            },
            CollisionEvent::EnemyDestroyed {
                destroyed_enemy_id: 3,
                score_points: Some(100),
            },
            CollisionEvent::EnemyDestroyed {
                destroyed_enemy_id: 4,
                score_points: None,
            },
            CollisionEvent::KnockbackApplied {
                target_enemy_id: 3,
                knockback_force: 150.0,
            },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: CollisionEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(*event, back);
        }
    }

    #[test]
    fn test_sim_event_serde() {
        let events = vec![
            SimEvent::EnemySpawned {
                enemy_id: 1,
                position: Vec2::new(-20.0, 100.0),
            },
            SimEvent::PlayerHit {
                source_enemy_id: 1,
                damage_amount: 10.0,
            },
            SimEvent::EnemyKnockedBack {
                enemy_id: 1,
                knockback_force: 150.0,
            },
            SimEvent::EnemyDestroyed {
                enemy_id: 1,
                points: 100,
            },
            SimEvent::GameWon,
            SimEvent::GameLost,
            SimEvent::GameReset,
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

    // ---- Geometry ----

    #[test]
    fn test_vec2_length() {
        let v = Vec2::new(3.0, 4.0);
        assert!((v.length() - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_vec2_distance() {
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(4.0, 5.0);
        assert!((a.distance_to(&b) - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_vec2_scaled() {
        let v = Vec2::new(1.0, -2.0).scaled(3.0);
        assert_eq!(v, Vec2::new(3.0, -6.0));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..30 {
            time.advance(0.5);
        }
        assert_eq!(time.tick, 30);
        assert!((time.elapsed_secs - 15.0).abs() < EPSILON);
    }

    // ---- Reducer: clock & difficulty ramp ----

    #[test]
    fn test_tick_decrements_remaining_time() {
        let state = reduce(&CoreState::initial(), &GameEvent::Tick { delta_time: 10.0 });
        assert!((state.remaining_time - 50.0).abs() < EPSILON);
    }

    #[test]
    fn test_tick_floors_remaining_time_at_zero() {
        let state = reduce(&CoreState::initial(), &GameEvent::Tick { delta_time: 100.0 });
        assert_eq!(state.remaining_time, 0.0);

        let state = reduce(&state, &GameEvent::Tick { delta_time: 1.0 });
        assert_eq!(state.remaining_time, 0.0);
    }

    #[test]
    fn test_tick_ramps_spawn_interval() {
        // 10 seconds elapsed: difficulty level 1.
        let state = reduce(&CoreState::initial(), &GameEvent::Tick { delta_time: 10.0 });
        assert!((state.spawn_config.spawn_interval - 0.67).abs() < EPSILON);

        // 20 seconds elapsed: difficulty level 2.
        let state = reduce(&state, &GameEvent::Tick { delta_time: 10.0 });
        assert!((state.spawn_config.spawn_interval - 0.64).abs() < EPSILON);
    }

    #[test]
    fn test_spawn_interval_non_increasing_and_floored() {
        let mut state = CoreState::initial();
        let mut previous = state.spawn_config.spawn_interval;

        for _ in 0..200 {
            state = reduce(&state, &GameEvent::Tick { delta_time: 0.5 });
            let interval = state.spawn_config.spawn_interval;
            assert!(interval <= previous + EPSILON);
            assert!(interval >= 0.5);
            previous = interval;
        }
    }

    /// Survival scenario: two 10-second ticks.
    #[test]
    fn test_tick_scenario() {
        let state = reduce(&CoreState::initial(), &GameEvent::Tick { delta_time: 10.0 });
        assert!((state.remaining_time - 50.0).abs() < EPSILON);
        let first_interval = state.spawn_config.spawn_interval;

        let state = reduce(&state, &GameEvent::Tick { delta_time: 10.0 });
        assert!(state.spawn_config.spawn_interval <= first_interval);
    }

    // ---- Reducer: health ----

    #[test]
    fn test_damage_reduces_health() {
        let state = reduce(
            &CoreState::initial(),
            &GameEvent::Damage {
                damage_amount: 30.0,
            },
        );
        assert!((state.current_health - 70.0).abs() < EPSILON);
        assert!(state.current_health <= state.maximum_health);
    }

    #[test]
    fn test_damage_floors_health_at_zero() {
        let state = reduce(
            &CoreState::initial(),
            &GameEvent::Damage {
                damage_amount: 150.0,
            },
        );
        assert_eq!(state.current_health, 0.0);
    }

    #[test]
    fn test_repeated_damage_converges_to_zero() {
        let mut state = CoreState::initial();
        for _ in 0..20 {
            state = reduce(
                &state,
                &GameEvent::Damage {
                    damage_amount: 30.0,
                },
            );
            assert!(state.current_health >= 0.0);
        }
        assert_eq!(state.current_health, 0.0);
    }

    // ---- Reducer: roster ----

    #[test]
    fn test_spawned_appends_in_order() {
        let mut state = CoreState::initial();
        state = reduce(&state, &GameEvent::Spawned { enemy: enemy(1) });
        state = reduce(&state, &GameEvent::Spawned { enemy: enemy(2) });

        let ids: Vec<u32> = state.active_enemies.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_kill_enemy_removes_matching_id() {
        let mut state = CoreState::initial();
        for id in 1..=3 {
            state = reduce(&state, &GameEvent::Spawned { enemy: enemy(id) });
        }

        state = reduce(&state, &GameEvent::KillEnemy { enemy_id: 2 });
        let ids: Vec<u32> = state.active_enemies.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_kill_enemy_absent_id_is_noop() {
        let mut state = CoreState::initial();
        state = reduce(&state, &GameEvent::Spawned { enemy: enemy(1) });

        let after = reduce(&state, &GameEvent::KillEnemy { enemy_id: 99 });
        assert_eq!(after, state);
    }

    // ---- Reducer: spawn clock & reset ----

    #[test]
    fn test_update_spawn_time() {
        let state = reduce(
            &CoreState::initial(),
            &GameEvent::UpdateSpawnTime {
                new_spawn_time: 4.2,
            },
        );
        assert!((state.spawn_config.last_spawn_time - 4.2).abs() < EPSILON);
    }

    #[test]
    fn test_reset_returns_initial_state() {
        let mut state = CoreState::initial();
        state = reduce(&state, &GameEvent::Tick { delta_time: 25.0 });
        state = reduce(
            &state,
            &GameEvent::Damage {
                damage_amount: 55.0,
            },
        );
        state = reduce(&state, &GameEvent::Spawned { enemy: enemy(9) });
        state = reduce(
            &state,
            &GameEvent::UpdateSpawnTime {
                new_spawn_time: 12.0,
            },
        );

        let state = reduce(&state, &GameEvent::Reset);
        assert_eq!(state, CoreState::initial());
    }

    /// Reducer transitions leave the input untouched.
    #[test]
    fn test_reduce_does_not_mutate_input() {
        let initial = CoreState::initial();
        let _ = reduce(&initial, &GameEvent::Tick { delta_time: 10.0 });
        let _ = reduce(
            &initial,
            &GameEvent::Damage {
                damage_amount: 10.0,
            },
        );
        assert_eq!(initial, CoreState::initial());
    }
}
