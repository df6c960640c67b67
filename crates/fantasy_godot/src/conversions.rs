//! bevy::math → Godot builtin типы

use bevy::math::{Mat3, Vec3};
use godot::builtin::{Basis, Vector3};

pub fn to_godot_vector(v: Vec3) -> Vector3 {
    Vector3::new(v.x, v.y, v.z)
}

/// Mat3 (column-major) → Basis по колонкам
pub fn to_godot_basis(m: Mat3) -> Basis {
    Basis::from_cols(
        to_godot_vector(m.x_axis),
        to_godot_vector(m.y_axis),
        to_godot_vector(m.z_axis),
    )
}
