use bloom_core::{Point, ScriptedRandom, SeededRandom, Size};
use bloom_reactions::{
    BloomConfig, Fountain, GestureEvent, IconPhase, PointerInput, Stage, BLOOM_ALPHA,
};

const BOUNDS: Size = Size::new(390.0, 844.0);
const FRAME_MS: f32 = 10.0;

fn fountain(seed: u64) -> Fountain {
    Fountain::new(BOUNDS, &BloomConfig::hearts())
        .unwrap()
        .with_random(SeededRandom::new(seed))
}

fn press(fountain: &mut Fountain) {
    fountain.handle_input(PointerInput::Down {
        id: 1,
        x: 195.0,
        y: 400.0,
    });
}

fn release(fountain: &mut Fountain) -> Option<GestureEvent> {
    fountain.handle_input(PointerInput::Up {
        id: 1,
        x: 195.0,
        y: 400.0,
    })
}

#[test]
fn tap_spawns_one_icon() {
    let mut fountain = fountain(1);
    press(&mut fountain);
    for _ in 0..5 {
        fountain.tick(FRAME_MS);
    }
    assert!(matches!(release(&mut fountain), Some(GestureEvent::Tap { .. })));

    for _ in 0..100 {
        fountain.tick(FRAME_MS);
    }
    assert_eq!(fountain.stage().spawned_total(), 1);
}

#[test]
fn long_press_held_350ms_spawns_three_icons() {
    let mut fountain = fountain(2);
    press(&mut fountain);

    // Long press begins on the frame that reaches 200ms
    for _ in 0..20 {
        fountain.tick(FRAME_MS);
    }
    assert!(fountain.burst().is_running());
    assert_eq!(fountain.stage().spawned_total(), 0);

    for _ in 0..35 {
        fountain.tick(FRAME_MS);
    }
    assert!(matches!(
        release(&mut fountain),
        Some(GestureEvent::LongPressEnded { .. })
    ));
    assert!(!fountain.burst().is_running());

    for _ in 0..100 {
        fountain.tick(FRAME_MS);
    }
    assert_eq!(fountain.stage().spawned_total(), 3);
}

#[test]
fn moving_finger_spawns_nothing() {
    let mut fountain = fountain(3);
    press(&mut fountain);
    fountain.handle_input(PointerInput::Moved {
        id: 1,
        x: 195.0,
        y: 380.0,
    });
    for _ in 0..50 {
        fountain.tick(FRAME_MS);
    }
    assert_eq!(release(&mut fountain), None);
    assert_eq!(fountain.stage().spawned_total(), 0);
}

#[test]
fn child_count_returns_to_pre_spawn_value() {
    let mut fountain = fountain(4);
    let before = fountain.stage().child_count();

    let id = fountain.spawn();
    let total_ms = fountain.stage().icon(id).unwrap().plan().timing.total_ms();
    assert!(total_ms >= 4000.0);
    assert_eq!(fountain.stage().child_count(), before + 1);

    let mut elapsed = 0.0;
    let mut phases = vec![IconPhase::Blooming];
    while fountain.stage().contains(id) {
        fountain.tick(FRAME_MS);
        elapsed += FRAME_MS;
        if let Some(icon) = fountain.stage().icon(id) {
            let frame = icon.frame();
            assert!(frame.alpha <= BLOOM_ALPHA);
            if phases.last() != Some(&frame.phase) {
                phases.push(frame.phase);
            }
        }
        assert!(elapsed < 10_000.0, "icon never detached");
    }

    assert!(elapsed >= total_ms && elapsed < total_ms + FRAME_MS);
    assert_eq!(phases, vec![IconPhase::Blooming, IconPhase::Drifting]);
    assert_eq!(fountain.stage().child_count(), before);
    assert!(!fountain.tick(FRAME_MS));
}

#[test]
fn end_points_stay_in_upper_band() {
    let mut stage = Stage::from_config(BOUNDS, &BloomConfig::reactions())
        .unwrap()
        .with_random(SeededRandom::new(5));
    let origin = Point::new(38.0, 826.0);

    for _ in 0..500 {
        let id = stage.spawn_and_animate(origin);
        let end = stage.icon(id).unwrap().plan().path.end;
        assert!(end.y >= BOUNDS.height / 8.0);
        assert!(end.y < BOUNDS.height * 3.0 / 8.0);
    }
    assert_eq!(stage.child_count(), 500);
}

#[test]
fn scripted_spawn_reaches_end_point() {
    // theme 0, rotation -1, V=5, end +1, U(72)=10, U(200)=50, travel -1, U(72)=14, U(288)=40
    let rng = ScriptedRandom::new([0, 1, 5, 0, 10, 50, 1, 14, 40]);
    let mut stage = Stage::from_config(Size::new(390.0, 800.0), &BloomConfig::hearts())
        .unwrap()
        .with_random(rng);

    let id = stage.spawn_and_animate(Point::new(18.0, 550.0));
    let plan = *stage.icon(id).unwrap().plan();
    assert_eq!(plan.path.end, Point::new(28.0, 150.0));
    assert_eq!(plan.rotation_direction, -1.0);
    assert!((plan.tilt_angle + std::f32::consts::PI / 17.0).abs() < 1e-6);

    stage.tick(plan.timing.total_ms() - 1.0);
    let frame = stage.frames()[0].1;
    assert!(frame.position.distance_to(plan.path.end) < 1.0);
    assert!((frame.rotation - plan.tilt_angle).abs() < 1e-3);

    stage.tick(1.0);
    assert_eq!(stage.child_count(), 0);
}
