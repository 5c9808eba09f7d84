use crate::math::Vector3;

/// Eye position plus a per-axis scale applied to every viewport direction.
///
/// `rotation` is multiplied element-wise into the ray direction. That covers
/// axis flips and stretches only; it is not a general 3-D rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vector3,
    pub rotation: Vector3,
}

impl Camera {
    pub fn new(position: Vector3, rotation: Vector3) -> Self {
        Self { position, rotation }
    }

    pub fn at(position: Vector3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn orient(&self, direction: Vector3) -> Vector3 {
        direction * self.rotation
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vector3::ZERO,
            rotation: Vector3::ONE,
        }
    }
}
