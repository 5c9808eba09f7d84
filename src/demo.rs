//! Reference scene: three small spheres resting on a large yellow ground sphere.

use crate::{
    camera::Camera,
    math::Vector3,
    scene::{Light, Scene, Sphere},
};

pub fn spheres() -> Vec<Sphere> {
    vec![
        Sphere::new(Vector3::new(0.0, -1.0, 3.0), 1.0, Vector3::new(255.0, 0.0, 0.0))
            .with_specular(500.0)
            .with_reflective(0.2),
        Sphere::new(Vector3::new(2.0, 0.0, 4.0), 1.0, Vector3::new(0.0, 0.0, 255.0))
            .with_specular(500.0)
            .with_reflective(0.3),
        Sphere::new(Vector3::new(-2.0, 0.0, 4.0), 1.0, Vector3::new(0.0, 255.0, 0.0))
            .with_specular(10.0)
            .with_reflective(0.4),
        Sphere::new(Vector3::new(0.0, -5001.0, 0.0), 5000.0, Vector3::new(255.0, 255.0, 0.0))
            .with_specular(1000.0)
            .with_reflective(0.5),
    ]
}

pub fn lights() -> Vec<Light> {
    vec![
        Light::Ambient { intensity: 0.2 },
        Light::Point {
            position: Vector3::new(2.0, 1.0, 0.0),
            intensity: 0.6,
        },
        Light::Directional {
            direction: Vector3::new(1.0, 4.0, 4.0),
            intensity: 0.2,
        },
    ]
}

pub fn scene() -> Scene {
    Scene::new(spheres(), lights(), Camera::default())
}
