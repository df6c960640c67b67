//! Fantasy Game Simulation Core
//!
//! Engine-agnostic логика движения игрока + headless Bevy хост.
//!
//! HYBRID ARCHITECTURE:
//! - Simulation = per-tick правила движения (direction, pivot, velocity)
//! - Хост (Godot / headless ECS) = коллизии, move_and_slide, scene tree

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod config;
pub mod logger;
pub mod movement;

// Re-export базовых типов для удобства
pub use config::{load_movement_config, parse_movement_config, ConfigLoadError, MovementConfig};
pub use logger::*;
pub use movement::{
    CharacterBodyHost, InputQuery, MoveAction, MoveActionState, MovementController, MovementPlugin,
    TickReport,
};

/// Частота physics tick (как physics_ticks_per_second в Godot)
pub const PHYSICS_TICKS_PER_SECOND: f64 = 60.0;

/// Главный plugin симуляции
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(PHYSICS_TICKS_PER_SECOND))
            .add_plugins(MovementPlugin);
    }
}

/// Детерминистичный RNG resource (scripted input)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(Time::<Fixed>::from_hz(PHYSICS_TICKS_PER_SECOND));

    app
}

/// Один fixed tick вручную (тесты и headless driver не зависят от wall clock)
pub fn run_fixed_tick(app: &mut App) {
    let timestep = app.world().resource::<Time<Fixed>>().timestep();
    app.world_mut()
        .resource_mut::<Time<Fixed>>()
        .advance_by(timestep);
    app.world_mut().run_schedule(FixedUpdate);
}
