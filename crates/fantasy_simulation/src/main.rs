//! Headless симуляция движения игрока
//!
//! `fantasy_simulation [config.ron]` — 600 тиков (10 sec @ 60Hz) со scripted input

use std::path::Path;

use bevy::prelude::*;
use rand::Rng;
use fantasy_simulation::movement::{spawn_player, tick_player_movement, ActionInput, PlayerMovement};
use fantasy_simulation::{
    create_headless_app, load_movement_config, log_error, log_info, run_fixed_tick,
    DeterministicRng, MoveAction, MovementConfig, SimulationPlugin,
};

const SEED: u64 = 42;
const TICK_COUNT: u32 = 600;
/// Раз в сколько тиков бот меняет нажатые кнопки
const INPUT_HOLD_TICKS: u32 = 30;

/// Scripted input: случайный набор actions, держим INPUT_HOLD_TICKS тиков
fn scripted_input(
    mut rng: ResMut<DeterministicRng>,
    mut query: Query<&mut ActionInput>,
    mut tick: Local<u32>,
) {
    if *tick % INPUT_HOLD_TICKS == 0 {
        for mut input in query.iter_mut() {
            for action in MoveAction::ALL {
                let pressed = rng.rng.gen_bool(0.35);
                input.0.set(action, pressed);
            }
        }
    }
    *tick += 1;
}

fn main() {
    let mut app = create_headless_app(SEED);

    let config = match std::env::args().nth(1) {
        Some(path) => match load_movement_config(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                log_error(&e.to_string());
                std::process::exit(1);
            }
        },
        None => MovementConfig::default(),
    };

    log_info(&format!(
        "Starting headless movement simulation (seed: {}, config: {:?})",
        SEED, config
    ));

    app.add_plugins(SimulationPlugin)
        .add_systems(FixedUpdate, scripted_input.before(tick_player_movement));

    let player = spawn_player(
        &mut app.world_mut().commands(),
        Vec3::new(0.0, 5.0, 0.0),
        config,
    );
    app.world_mut().flush();

    for tick in 0..TICK_COUNT {
        run_fixed_tick(&mut app);

        if tick % 60 == 0 {
            let world = app.world();
            let (Some(transform), Some(movement)) = (
                world.get::<Transform>(player),
                world.get::<PlayerMovement>(player),
            ) else {
                log_error("Player entity missing movement components");
                return;
            };

            log_info(&format!(
                "Tick {}: position {:.2?}, target velocity {:.2?}",
                tick,
                transform.translation,
                movement.controller.target_velocity()
            ));
        }
    }

    log_info("Simulation complete!");
}
