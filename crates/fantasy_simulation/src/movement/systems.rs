//! Headless хост для MovementController (ECS, без Godot)
//!
//! Архитектура:
//! - `tick_player_movement` в FixedUpdate вызывает `physics_tick` для каждого игрока
//! - `HeadlessHost` реализует `CharacterBodyHost` поверх Transform/HeadlessBody/Pivot
//! - move_and_slide: простая интеграция + плоский пол (stub, НЕ collision solver)

use bevy::prelude::*;

use super::components::{ActionInput, HeadlessBody, HeadlessFloor, Pivot, PlayerMovement};
use super::controller::CharacterBodyHost;
use crate::config::MovementConfig;

/// CharacterBodyHost поверх ECS компонентов одного entity
pub struct HeadlessHost<'a> {
    pub transform: &'a mut Transform,
    pub body: &'a mut HeadlessBody,
    pub pivot: &'a mut Pivot,
    pub floor_height: f32,
    pub delta: f32,
}

impl CharacterBodyHost for HeadlessHost<'_> {
    fn is_on_floor(&self) -> bool {
        self.body.on_floor
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.body.velocity = velocity;
    }

    fn move_and_slide(&mut self) {
        let mut position = self.transform.translation + self.body.velocity * self.delta;

        // Пересекли пол сверху → snap на пол, гасим падение (как floor snap CharacterBody3D)
        if position.y <= self.floor_height && self.body.velocity.y <= 0.0 {
            position.y = self.floor_height;
            self.body.velocity.y = 0.0;
            self.body.on_floor = true;
        } else {
            self.body.on_floor = false;
        }

        self.transform.translation = position;
    }

    fn set_pivot_basis(&mut self, basis: Mat3) {
        self.pivot.basis = basis;
    }
}

/// Один physics tick для всех игроков
///
/// Работает в FixedUpdate, delta = Time<Fixed>.
pub fn tick_player_movement(
    mut query: Query<(
        Entity,
        &mut PlayerMovement,
        &ActionInput,
        &mut Transform,
        &mut HeadlessBody,
        &mut Pivot,
    )>,
    floor: Res<HeadlessFloor>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs_f64();

    for (entity, mut movement, input, mut transform, mut body, mut pivot) in query.iter_mut() {
        let was_on_floor = body.on_floor;

        let mut host = HeadlessHost {
            transform: &mut *transform,
            body: &mut *body,
            pivot: &mut *pivot,
            floor_height: floor.height,
            delta: delta as f32,
        };

        let report = movement.controller.physics_tick(delta, &input.0, &mut host);
        movement.last_tick = Some(report);

        if body.on_floor != was_on_floor {
            crate::log(&format!(
                "Entity {:?}: {} at y = {:.2} (target velocity {:?})",
                entity,
                if body.on_floor { "landed" } else { "left floor" },
                transform.translation.y,
                report.velocity
            ));
        }
    }
}

/// Plugin headless движения игрока
///
/// Регистрирует HeadlessFloor (y = 0 по умолчанию) и tick в FixedUpdate.
pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HeadlessFloor>()
            .add_systems(FixedUpdate, tick_player_movement);
    }
}

/// Spawn игрока со всеми movement компонентами
pub fn spawn_player(commands: &mut Commands, position: Vec3, config: MovementConfig) -> Entity {
    commands
        .spawn((
            Transform::from_translation(position),
            PlayerMovement {
                controller: super::MovementController::new(config),
                last_tick: None,
            },
            ActionInput::default(),
            HeadlessBody::default(),
            Pivot::default(),
        ))
        .id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_host_snaps_to_floor() {
        let mut transform = Transform::from_xyz(0.0, 0.1, 0.0);
        let mut body = HeadlessBody::default();
        let mut pivot = Pivot::default();

        let mut host = HeadlessHost {
            transform: &mut transform,
            body: &mut body,
            pivot: &mut pivot,
            floor_height: 0.0,
            delta: 1.0 / 60.0,
        };

        host.set_velocity(Vec3::new(3.0, -30.0, 0.0));
        host.move_and_slide();

        assert!(host.is_on_floor());
        assert_eq!(transform.translation.y, 0.0);
        assert!((transform.translation.x - 0.05).abs() < 1e-6);
        assert_eq!(body.velocity.y, 0.0);
    }

    #[test]
    fn test_headless_host_airborne_above_floor() {
        let mut transform = Transform::from_xyz(0.0, 10.0, 0.0);
        let mut body = HeadlessBody {
            velocity: Vec3::ZERO,
            on_floor: true,
        };
        let mut pivot = Pivot::default();

        let mut host = HeadlessHost {
            transform: &mut transform,
            body: &mut body,
            pivot: &mut pivot,
            floor_height: 0.0,
            delta: 0.5,
        };

        host.set_velocity(Vec3::new(0.0, -2.0, 4.0));
        host.move_and_slide();

        assert!(!host.is_on_floor());
        assert_eq!(transform.translation, Vec3::new(0.0, 9.0, 2.0));
    }
}
