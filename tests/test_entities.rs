use sky_duel::compute::init_world;
use sky_duel::entities::*;
use sky_duel::vector::Vec2;

// ── Vec2 ──────────────────────────────────────────────────────────────────────

#[test]
fn vec2_arithmetic() {
    let a = Vec2::new(3.0, 4.0);
    let b = Vec2::new(1.0, 1.0);
    assert_eq!(a + b, Vec2::new(4.0, 5.0));
    assert_eq!(a - b, Vec2::new(2.0, 3.0));
    assert_eq!(a * 2.0, Vec2::new(6.0, 8.0));
    assert_eq!(a.magnitude(), 5.0);
}

#[test]
fn vec2_distance_is_symmetric() {
    let a = Vec2::new(300.0, 100.0);
    let b = Vec2::new(305.0, 105.0);
    assert_eq!(a.distance(b), b.distance(a));
    assert!((a.distance(b) - 50f64.sqrt()).abs() < 1e-12);
}

#[test]
fn vec2_is_a_copied_value() {
    let a = Vec2::new(1.0, 2.0);
    let mut b = a;
    b.x = 9.0;
    assert_eq!(a.x, 1.0);
}

// ── Direction mask ────────────────────────────────────────────────────────────

#[test]
fn direction_bits_match_mask_values() {
    assert_eq!(Direction::FORWARD.bits(), 1);
    assert_eq!(Direction::BACKWARD.bits(), 2);
    assert_eq!(Direction::LEFT.bits(), 4);
    assert_eq!(Direction::RIGHT.bits(), 8);
}

#[test]
fn direction_combines_and_contains() {
    let mut mask = Direction::FORWARD | Direction::LEFT;
    assert!(mask.contains(Direction::FORWARD));
    assert!(mask.contains(Direction::LEFT));
    assert!(!mask.contains(Direction::RIGHT));
    mask |= Direction::RIGHT;
    assert!(mask.contains(Direction::RIGHT));
    assert!(!mask.contains(Direction::NONE));
    assert!(Direction::NONE.is_empty());
}

// ── Per-kind configuration ────────────────────────────────────────────────────

#[test]
fn accelerations_differ_per_kind() {
    assert_eq!(EntityConfig::for_kind(EntityKind::Player).acceleration, 3.1);
    assert_eq!(EntityConfig::for_kind(EntityKind::Player2).acceleration, 5.1);
    assert_eq!(EntityConfig::for_kind(EntityKind::Enemy).acceleration, 0.1);
    assert_eq!(EntityConfig::for_kind(EntityKind::Crate).acceleration, 0.2);
    assert_eq!(EntityConfig::for_kind(EntityKind::Lives).acceleration, 0.2);
}

#[test]
fn enemy_is_confined_to_upper_screen() {
    assert_eq!(EntityConfig::for_kind(EntityKind::Enemy).bottom_bound, 260.0);
    for kind in [EntityKind::Player, EntityKind::Player2, EntityKind::Crate, EntityKind::Lives] {
        assert_eq!(EntityConfig::for_kind(kind).bottom_bound, 560.0);
        assert_eq!(EntityConfig::for_kind(kind).right_bound, 780.0);
    }
}

#[test]
fn only_shooters_carry_a_cannon() {
    assert!(EntityConfig::for_kind(EntityKind::Player).cannon.is_some());
    assert!(EntityConfig::for_kind(EntityKind::Player2).cannon.is_some());
    assert!(EntityConfig::for_kind(EntityKind::Enemy).cannon.is_some());
    assert!(EntityConfig::for_kind(EntityKind::Crate).cannon.is_none());
    assert!(EntityConfig::for_kind(EntityKind::Lives).cannon.is_none());
}

// ── Session & world ───────────────────────────────────────────────────────────

#[test]
fn session_starts_with_ten_lives_and_no_score() {
    let s = Session::default();
    assert_eq!(s.lives, 10);
    assert_eq!(s.score, 0);
}

#[test]
fn world_clone_is_independent() {
    let original = init_world();
    let mut cloned = original.clone();

    cloned.player.sprite.position.x = 99.0;
    cloned.session.score = 999;

    assert_eq!(original.player.position().x, 400.0);
    assert_eq!(original.session.score, 0);
}

#[test]
fn world_lists_all_six_entities() {
    let mut world = init_world();
    assert_eq!(world.entities().len(), 6);
    let kinds: Vec<EntityKind> = world.entities_mut().iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![
            EntityKind::Player,
            EntityKind::Player2,
            EntityKind::Crate,
            EntityKind::Crate,
            EntityKind::Enemy,
            EntityKind::Lives,
        ]
    );
}
