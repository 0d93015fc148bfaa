use boss_rush::Settings;
use boss_rush::consts::FRAME_INTERVAL_MS;
use boss_rush::sim::{
    GameWorld, Intents, LateralOffset, Pattern, PatternKind, ScheduledPattern, WorldEvent, advance,
};

fn weave(frame: u64) -> Intents {
    Intents {
        left: frame % 90 < 45,
        right: frame % 90 >= 45,
        up: frame % 200 < 20,
        fire: frame % 3 == 0,
        ..Default::default()
    }
}

fn run(settings: Settings, frames: u64) -> GameWorld {
    let mut world = GameWorld::new(settings);
    for frame in 0..frames {
        // Irregular gaps like a real frame scheduler
        let now = frame * FRAME_INTERVAL_MS + (frame % 7) * 3;
        advance(&mut world, &weave(frame), now);
    }
    world
}

#[test]
fn identical_inputs_reproduce_identical_worlds() {
    let a = run(Settings::default(), 400);
    let b = run(Settings::default(), 400);
    assert_eq!(a, b);
    assert_eq!(a.snapshot().expect("json"), b.snapshot().expect("json"));
    assert!(a.bullet_count() > 0);
}

#[test]
fn scatter_schedule_is_reproducible() {
    let mut settings = Settings::default();
    settings.patterns = vec![
        ScheduledPattern {
            from: 0,
            pattern: Pattern::RadialBurst {
                count: 16,
                speed: 0.0005,
                interval: 800,
            },
        },
        ScheduledPattern {
            from: 2_000,
            pattern: Pattern::Scatter {
                count: 20,
                min_speed: 0.0004,
                max_speed: 0.001,
                interval: 300,
            },
        },
    ];
    let a = run(settings.clone(), 300);
    let b = run(settings, 300);
    assert_eq!(a, b);
    assert!(a.patterns.volleys > 3);
}

#[test]
fn consecutive_bursts_use_different_curves() {
    let mut world = GameWorld::default();
    let idle = Intents::default();

    advance(&mut world, &idle, 0);
    let first: Vec<_> = world.enemy_bullets.clone();
    assert!(world.events.contains(&WorldEvent::VolleyFired {
        kind: PatternKind::RadialBurst,
        offset: LateralOffset::Sqrt,
        count: 30,
    }));

    advance(&mut world, &idle, 1_000);
    assert!(world.events.contains(&WorldEvent::VolleyFired {
        kind: PatternKind::RadialBurst,
        offset: LateralOffset::NegSqrtDouble,
        count: 30,
    }));
    let second: Vec<_> = world
        .enemy_bullets
        .iter()
        .filter(|b| b.initial_time == 1_000)
        .cloned()
        .collect();
    assert_eq!(second.len(), 30);

    // Same bullet slot, same elapsed time, different displacement
    let t = 400;
    for (a, b) in first.iter().zip(&second) {
        let da = a.position_at(a.initial_time + t) - a.initial_position;
        let db = b.position_at(b.initial_time + t) - b.initial_position;
        assert!((da - db).length() > 1e-3);
    }
}

#[test]
fn player_bullets_eventually_leave_the_arena() {
    let mut world = GameWorld::default();
    // Keep the boss out of the way so no shot is absorbed by it
    world.boss.position = glam::Vec2::new(5.0, 5.0);
    world.boss.route.clear();
    world.boss.movement = boss_rush::sim::BossMove::idle(world.boss.position);
    world.boss.cool_time = u64::MAX;

    let fire = Intents {
        fire: true,
        ..Default::default()
    };
    advance(&mut world, &fire, 0);
    assert_eq!(world.player_bullets.len(), 1);

    let mut despawned = 0;
    for frame in 1..100u64 {
        advance(&mut world, &Intents::default(), frame * FRAME_INTERVAL_MS);
        despawned += world
            .events
            .iter()
            .filter_map(|e| match e {
                WorldEvent::Despawned { count, .. } => Some(*count),
                _ => None,
            })
            .sum::<usize>();
    }
    assert_eq!(despawned, 1);
    assert!(world.player_bullets.is_empty());
}
