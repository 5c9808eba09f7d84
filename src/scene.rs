use crate::{camera::Camera, math::Vector3};

/// Disables the specular term for a sphere.
pub const NO_SPECULAR: f64 = -1.0;

#[derive(Debug, Default, Clone)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
    pub camera: Camera,
}

impl Scene {
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>, camera: Camera) -> Self {
        Self {
            spheres,
            lights,
            camera,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vector3,
    pub radius: f64,

    /// RGB, `0..=255` per channel.
    pub color: Vector3,
    pub specular: f64,
    pub reflective: f64,
}

impl Sphere {
    pub fn new(center: Vector3, radius: f64, color: Vector3) -> Self {
        Self {
            center,
            radius,
            color,
            ..Default::default()
        }
    }

    pub fn with_specular(mut self, specular: f64) -> Self {
        self.specular = specular;
        self
    }

    pub fn with_reflective(mut self, reflective: f64) -> Self {
        self.reflective = reflective.clamp(0.0, 1.0);
        self
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Self {
            center: Vector3::ZERO,
            radius: 1.0,
            color: Vector3::splat(255.0),
            specular: NO_SPECULAR,
            reflective: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Ambient { intensity: f64 },
    Point { position: Vector3, intensity: f64 },
    /// `direction` points from the surface towards the light.
    Directional { direction: Vector3, intensity: f64 },
}

impl Light {
    pub fn intensity(&self) -> f64 {
        match *self {
            Light::Ambient { intensity }
            | Light::Point { intensity, .. }
            | Light::Directional { intensity, .. } => intensity,
        }
    }
}
