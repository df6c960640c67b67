//! GodotCharacterBody — CharacterBodyHost поверх CharacterBody3D + Pivot

use bevy::math::{Mat3, Vec3};
use fantasy_simulation::CharacterBodyHost;
use godot::classes::{CharacterBody3D, Node3D};
use godot::prelude::*;

use crate::conversions::{to_godot_basis, to_godot_vector};

/// Хост для одного тика: тело + (опционально) визуальный pivot
///
/// Pivot = None → запись ориентации игнорируется (ошибка уже залогирована в ready)
pub struct GodotCharacterBody {
    pub body: Gd<CharacterBody3D>,
    pub pivot: Option<Gd<Node3D>>,
}

impl CharacterBodyHost for GodotCharacterBody {
    fn is_on_floor(&self) -> bool {
        self.body.is_on_floor()
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.body.set_velocity(to_godot_vector(velocity));
    }

    fn move_and_slide(&mut self) {
        self.body.move_and_slide();
    }

    fn set_pivot_basis(&mut self, basis: Mat3) {
        if let Some(pivot) = self.pivot.as_mut() {
            pivot.set_basis(to_godot_basis(basis));
        }
    }
}
