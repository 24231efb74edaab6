use glam::Vec2;
use zap_command::game::Frame;
use zap_command::sim::{
    self, Banner, Blast, GameEvent, GamePhase, MatchState, Missile, PcgPolicy, ScriptedPolicy,
};
use zap_command::{Chance, Game, GameConfig};

fn quiet_config() -> GameConfig {
    GameConfig {
        split_chance: Chance::NEVER,
        spawn_chance: Chance::NEVER,
        ..Default::default()
    }
}

fn running_state(config: &GameConfig) -> MatchState {
    let mut state = MatchState::new(config);
    state.begin(config);
    state
}

fn place_blast(state: &mut MatchState, pos: Vec2, radius: f32) -> u32 {
    let id = state.registry.next_entity_id();
    state.registry.add_blast(Blast::new(id, pos, radius));
    id
}

fn place_missile(state: &mut MatchState, pos: Vec2) -> u32 {
    let id = state.registry.next_entity_id();
    state.registry.add_missile(Missile::new(id, pos, -90.0, 0.0));
    id
}

#[test]
fn test_blast_destroys_missile_in_lethal_zone() {
    let config = quiet_config();
    let mut state = running_state(&config);
    let mut rng = PcgPolicy::new(0);
    let blast_id = place_blast(&mut state, Vec2::ZERO, 100.0);
    let missile_id = place_missile(&mut state, Vec2::new(10.0, 0.0));

    let events = sim::tick(&mut state, &config, &mut rng);

    assert!(state.registry.missile(missile_id).is_none());
    assert_eq!(state.score(), config.missile_bonus);
    let new_blasts: Vec<_> = state
        .registry
        .blasts()
        .iter()
        .filter(|b| b.id != blast_id)
        .collect();
    assert_eq!(new_blasts.len(), 1);
    assert_eq!(new_blasts[0].pos, Vec2::new(10.0, 0.0));
    assert_eq!(
        events
            .iter()
            .filter(|e| matches!(e, GameEvent::MissileDestroyed { .. }))
            .count(),
        1
    );
}

#[test]
fn test_small_blast_misses() {
    let config = quiet_config();
    let mut state = running_state(&config);
    let mut rng = PcgPolicy::new(0);
    let blast_id = place_blast(&mut state, Vec2::ZERO, 10.0);
    let missile_id = place_missile(&mut state, Vec2::new(10.0, 0.0));

    sim::tick(&mut state, &config, &mut rng);

    assert!(state.registry.missile(missile_id).is_some());
    assert!(state.registry.blast(blast_id).is_some());
    assert_eq!(state.score(), 0);
}

#[test]
fn test_missile_below_floor_lands() {
    let config = quiet_config();
    let mut state = running_state(&config);
    let mut rng = PcgPolicy::new(0);
    let id = place_missile(&mut state, Vec2::new(0.0, -(config.screen_height + 1.0)));

    sim::tick(&mut state, &config, &mut rng);

    assert!(state.registry.missile(id).is_none());
    assert_eq!(state.score(), -config.landed_penalty);
}

#[test]
fn test_fire_is_immediate() {
    let mut game = Game::with_rng(quiet_config(), ScriptedPolicy::default()).unwrap();
    game.begin();

    let event = game.fire(50.0, 50.0);

    assert!(matches!(event, Some(GameEvent::ZapFired { .. })));
    assert_eq!(game.state().score(), -game.config().zap_cost);
    let blasts = game.state().registry.blasts();
    assert_eq!(blasts.len(), 1);
    assert_eq!(blasts[0].pos, Vec2::new(50.0, 50.0));
    assert_eq!(blasts[0].radius, game.config().blast_base_radius);
}

#[test]
fn test_countdown_drops_after_twenty_ticks() {
    let mut game = Game::with_rng(quiet_config(), ScriptedPolicy::default()).unwrap();
    game.begin();
    let start = game.state().countdown();

    for _ in 0..19 {
        game.step().expect("running");
        assert_eq!(game.state().countdown(), start);
    }
    let frame = game.step().expect("running");
    assert_eq!(game.state().countdown(), start - 1);
    assert!(frame
        .events()
        .contains(&GameEvent::SecondElapsed { countdown: start - 1 }));
    assert_eq!(frame.snapshot().hud, "Time: 059 / Score: 0");
}

#[test]
fn test_full_match_ends_once() {
    let config = GameConfig {
        seed: Some(1980),
        ..Default::default()
    };
    let expected_ticks =
        config.initial_countdown as u64 * (1000 / config.tick_interval_ms) as u64;
    let mut game = Game::new(config).unwrap();
    game.begin();

    let mut frames = Vec::new();
    while let Some(frame) = game.step() {
        frames.push(frame);
    }

    assert_eq!(frames.len() as u64, expected_ticks);
    assert_eq!(game.phase(), GamePhase::GameOver);
    let over: Vec<&Frame> = frames.iter().filter(|f| f.is_game_over()).collect();
    assert_eq!(over.len(), 1);
    assert_eq!(over[0].snapshot().banner, Some(Banner::GameOver));
    assert_eq!(over[0].snapshot().countdown, 0);

    // Zaps after the end are ignored
    let score = game.state().score();
    assert!(game.fire(0.0, 0.0).is_none());
    assert_eq!(game.state().score(), score);
}

#[test]
fn test_seeded_matches_agree() {
    let config = GameConfig {
        seed: Some(42),
        ..Default::default()
    };
    let mut a = Game::new(config.clone()).unwrap();
    let mut b = Game::new(config).unwrap();
    a.begin();
    b.begin();

    for i in 0..600 {
        if i % 25 == 0 {
            a.queue_fire(0.0, -100.0);
            b.queue_fire(0.0, -100.0);
        }
        let fa = a.step().map(|f| f.snapshot().hud.clone());
        let fb = b.step().map(|f| f.snapshot().hud.clone());
        assert_eq!(fa, fb);
    }
    assert_eq!(a.state().registry.missiles(), b.state().registry.missiles());
}
