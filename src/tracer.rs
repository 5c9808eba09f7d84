use crate::{
    lighting::{compute_lighting, SHADOW_EPSILON},
    math::{normalize_or_zero, reflect, Vector3},
    ray::{closest_hit, Ray},
    scene::Scene,
};

pub const BACKGROUND_COLOR: Vector3 = Vector3::ZERO;

/// Recursion settings shared by every ray of a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceLimits {
    pub max_distance: f64,
    pub max_depth: u32,
}

/// Color seen along `ray` for hits in `[t_min, t_max]`.
///
/// Reflective surfaces blend their local shade with a mirrored ray, traced
/// again until `depth` reaches `limits.max_depth`.
pub fn trace_ray(
    ray: &Ray,
    t_min: f64,
    t_max: f64,
    scene: &Scene,
    limits: TraceLimits,
    depth: u32,
) -> Vector3 {
    let Some(hit) = closest_hit(ray, t_min, t_max, scene) else {
        return BACKGROUND_COLOR;
    };
    let sphere = hit.sphere;

    let point = ray.at(hit.t);
    let normal = normalize_or_zero(point - sphere.center);
    let view = -ray.direction;

    let intensity = compute_lighting(point, normal, view, sphere.specular, t_max, scene);
    let local_color = sphere.color * intensity;

    let r = sphere.reflective;
    if depth >= limits.max_depth || r <= 0.0 {
        return local_color;
    }

    let reflected_ray = Ray::new(point, reflect(view, normal));
    let reflected_color = trace_ray(
        &reflected_ray,
        SHADOW_EPSILON,
        limits.max_distance,
        scene,
        limits,
        depth + 1,
    );

    local_color * (1.0 - r) + reflected_color * r
}
