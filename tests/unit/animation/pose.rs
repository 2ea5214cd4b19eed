use super::*;

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn idle_formulas_at_zero() {
    let p = Pose::idle(0.0);
    assert_eq!(p.right_arm_deg, 150.0);
    assert_eq!(p.left_arm_deg, 135.0);
    assert_eq!(p.torso_tilt_deg, 5.0);
    assert_eq!(p.shrug, 1.0);
}

#[test]
fn idle_motion_stays_in_bounds() {
    for i in 0..5000 {
        let t = f64::from(i) * 0.0137;
        let p = Pose::idle(t);
        assert!((50.0..=150.0).contains(&p.right_arm_deg), "t={t}");
        assert!((125.0..=145.0).contains(&p.left_arm_deg), "t={t}");
        assert!((0.0..=1.0).contains(&p.shrug), "t={t}");
        assert!((-5.0..=5.0).contains(&p.torso_tilt_deg), "t={t}");
    }
}

#[test]
fn never_danced_is_idle() {
    let state = CharacterState::default();
    assert!(!state.is_dancing(ms(0)));
    assert_eq!(state.last_dance_start(), None);
    assert_eq!(state.pose_at(ms(1234)), Pose::idle_at(ms(1234)));
}

#[test]
fn dance_is_active_for_exactly_the_duration() {
    let mut state = CharacterState::default();
    let start = ms(10_000);
    assert!(!state.is_dancing(start));
    assert!(state.dance(start));
    assert!(state.is_dancing(start));
    assert!(state.is_dancing(start + DANCE_DURATION - Duration::from_nanos(1)));
    assert!(!state.is_dancing(start + DANCE_DURATION));
    assert!(!state.is_dancing(start + ms(60_000)));
}

#[test]
fn dance_moves_follow_the_fixed_sequence() {
    let mut state = CharacterState::default();
    let start = ms(2_500);
    state.dance(start);
    for (k, &(right, left)) in DANCE_MOVES.iter().enumerate() {
        let now = start + ms(500 * k as u64);
        let pose = state.pose_at(now);
        assert_eq!((pose.right_arm_deg, pose.left_arm_deg), (right, left), "k={k}");
        // Torso and shrug keep following idle motion.
        let idle = Pose::idle_at(now);
        assert_eq!(pose.torso_tilt_deg, idle.torso_tilt_deg);
        assert_eq!(pose.shrug, idle.shrug);
    }
    let after = start + DANCE_DURATION;
    assert_eq!(state.pose_at(after), Pose::idle_at(after));
}

#[test]
fn move_index_is_clamped() {
    let session = DanceSession {
        started_at: ms(1_000),
    };
    assert_eq!(session.move_index(ms(0)), 0);
    assert_eq!(session.move_index(ms(1_499)), 0);
    assert_eq!(session.move_index(ms(1_500)), 1);
    assert_eq!(session.move_index(ms(3_999)), 5);
    assert_eq!(session.move_index(ms(99_000)), 5);
}

#[test]
fn dancing_again_does_not_restart_or_extend() {
    let mut state = CharacterState::default();
    state.dance(ms(100));
    assert!(!state.dance(ms(2_000)));
    assert!(!state.dance(ms(3_099)));
    assert_eq!(state.last_dance_start(), Some(ms(100)));
    assert!(!state.is_dancing(ms(3_100)));

    // Once expired a new dance may start.
    assert!(state.dance(ms(3_100)));
    assert_eq!(state.last_dance_start(), Some(ms(3_100)));
}

#[test]
fn move_duration_is_a_sixth() {
    assert_eq!(MOVE_DURATION, ms(500));
}
