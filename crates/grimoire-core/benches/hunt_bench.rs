use criterion::{black_box, criterion_group, criterion_main, Criterion};
use grimoire_core::catalog;
use grimoire_core::resolver::CombatResolver;
use grimoire_core::state::Player;
use grimoire_core::{SeededRng, Session, State};

fn bench_hunt(c: &mut Criterion) {
    // Level high enough that hunts never end in defeat
    let mut state = State::default();
    state.player.level = 20;
    state.player.max_hp = 300;
    let mut session = Session::new(state.clone(), SeededRng::from_seed(42));

    c.bench_function("hunt_with_stake", |b| {
        b.iter(|| {
            if session.state().player.sp < 6 {
                session = Session::new(state.clone(), SeededRng::from_seed(42));
            }
            black_box(session.hunt(black_box(5)))
        })
    });
}

fn bench_orc_fight(c: &mut Criterion) {
    let mut rng = SeededRng::from_seed(7);
    let resolver = CombatResolver::new();

    c.bench_function("orc_fight", |b| {
        b.iter(|| {
            let mut player = Player::default();
            black_box(resolver.resolve(&mut player, &catalog::ORC, &mut rng))
        })
    });
}

fn bench_explore(c: &mut Criterion) {
    let mut session = Session::new(State::default(), SeededRng::from_seed(3));

    c.bench_function("explore", |b| {
        b.iter(|| {
            if !session.state().player.is_alive() {
                session.reset();
            }
            black_box(session.explore())
        })
    });
}

criterion_group!(benches, bench_hunt, bench_orc_fight, bench_explore);
criterion_main!(benches);
