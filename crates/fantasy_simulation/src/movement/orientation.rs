//! Look-at basis для pivot'а персонажа
//!
//! Конвенция хоста: forward ноды = локальная -Z.
//! Колонки basis: `x = normalize(up × z)`, `y = z × x`, `z = -direction`.

use bevy::prelude::*;

/// Up по умолчанию (Y up)
pub const DEFAULT_UP: Vec3 = Vec3::Y;

/// Ниже этого порога `up × z` считаем вырожденным (direction ∥ up)
const DEGENERATE_EPSILON: f32 = 1e-6;

/// Basis, у которого forward (-Z) смотрит вдоль `direction`.
///
/// `None` если direction нулевой или параллелен `up`.
pub fn looking_at(direction: Vec3, up: Vec3) -> Option<Mat3> {
    let z = -direction.try_normalize()?;
    let x = up.cross(z);
    if x.length_squared() < DEGENERATE_EPSILON {
        return None;
    }
    let x = x.normalize();
    let y = z.cross(x);

    Some(Mat3::from_cols(x, y, z))
}

/// Forward вектор basis'а (-Z колонка)
pub fn forward(basis: &Mat3) -> Vec3 {
    -basis.z_axis
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_near(actual: Vec3, expected: Vec3) {
        assert!(
            (actual - expected).length() < 1e-5,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn test_forward_matches_direction() {
        let directions = [
            Vec3::Z,
            Vec3::NEG_Z,
            Vec3::X,
            Vec3::NEG_X,
            Vec3::new(1.0, 0.0, 1.0).normalize(),
            Vec3::new(-1.0, 0.0, -1.0).normalize(),
        ];

        for direction in directions {
            let basis = looking_at(direction, DEFAULT_UP).expect("horizontal direction");
            assert_vec_near(forward(&basis), direction);
        }
    }

    #[test]
    fn test_basis_is_proper_rotation() {
        let basis = looking_at(Vec3::new(0.6, 0.0, -0.8), DEFAULT_UP).unwrap();

        assert!((basis.determinant() - 1.0).abs() < 1e-5);
        assert!(basis.x_axis.dot(basis.y_axis).abs() < 1e-6);
        assert!(basis.y_axis.dot(basis.z_axis).abs() < 1e-6);
        assert!(basis.z_axis.dot(basis.x_axis).abs() < 1e-6);
        // Горизонтальное направление → up остаётся Y
        assert_vec_near(basis.y_axis, Vec3::Y);
    }

    #[test]
    fn test_forward_plus_z_basis() {
        // move_forward (+Z): pivot развёрнут на 180° вокруг Y
        let basis = looking_at(Vec3::Z, DEFAULT_UP).unwrap();
        assert_vec_near(basis.x_axis, Vec3::NEG_X);
        assert_vec_near(basis.y_axis, Vec3::Y);
        assert_vec_near(basis.z_axis, Vec3::NEG_Z);
    }

    #[test]
    fn test_degenerate_directions() {
        assert!(looking_at(Vec3::ZERO, DEFAULT_UP).is_none());
        assert!(looking_at(Vec3::Y, DEFAULT_UP).is_none());
        assert!(looking_at(Vec3::NEG_Y * 3.0, DEFAULT_UP).is_none());
    }
}
