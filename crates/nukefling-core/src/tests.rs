#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::constants::{DT, TICK_RATE};
    use crate::events::{GameEvent, ProgressEvent};
    use crate::state::GameStateSnapshot;
    use crate::types::SimTime;

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-3);
        assert!((time.dt() - DT).abs() < f32::EPSILON);
    }

    /// Commands are tagged so a frontend can build them as plain JSON.
    #[test]
    fn test_command_wire_format() {
        let json = serde_json::to_string(&PlayerCommand::DragTo { x: -1.5, y: 4.0 }).unwrap();
        assert!(json.contains("\"type\":\"DragTo\""));

        let back: PlayerCommand =
            serde_json::from_str(r#"{"type":"Release"}"#).unwrap();
        assert!(matches!(back, PlayerCommand::Release));
    }

    /// Progress events nest inside game events without tag collisions.
    #[test]
    fn test_progress_event_nesting() {
        let event = GameEvent::Progress {
            event: ProgressEvent::ShotRecorded { used: 1, max: 3 },
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();
        match back {
            GameEvent::Progress {
                event: ProgressEvent::ShotRecorded { used, max },
            } => {
                assert_eq!(used, 1);
                assert_eq!(max, 3);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let snapshot = GameStateSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.time.tick, 0);
        assert!(back.nuke.is_none());
        assert!(back.score.is_none());
    }
}
