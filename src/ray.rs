use crate::{
    math::{dot, Vector3},
    scene::{Scene, Sphere},
};

/// Hit distance reported by [`intersect_or_sentinel`] for a miss. Lies
/// outside every range the renderer queries with its default settings.
pub const NO_HIT: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
}

impl Ray {
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    pub fn at(&self, t: f64) -> Vector3 {
        self.origin + self.direction * t
    }
}

/// Both parametric roots of the ray against `sphere`, larger root first.
///
/// `None` when the ray misses, or when the direction has zero length.
pub fn intersect(ray: &Ray, sphere: &Sphere) -> Option<(f64, f64)> {
    // (dx^2 + dy^2 + dz^2)t^2 + 2(co . d)t + (co . co - r^2) = 0
    // where
    // co = ray origin - sphere center
    // d = ray direction
    // r = radius
    let co = ray.origin - sphere.center;

    let a = dot(ray.direction, ray.direction);
    if a == 0.0 {
        return None;
    }
    let b = 2.0 * dot(co, ray.direction);
    let c = dot(co, co) - sphere.radius * sphere.radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let root = discriminant.sqrt();
    let t0 = (-b + root) / (2.0 * a);
    let t1 = (-b - root) / (2.0 * a);
    Some((t0, t1))
}

/// Same as [`intersect`], with a miss reported as `(NO_HIT, NO_HIT)`.
pub fn intersect_or_sentinel(ray: &Ray, sphere: &Sphere) -> (f64, f64) {
    intersect(ray, sphere).unwrap_or((NO_HIT, NO_HIT))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit<'scene> {
    pub t: f64,
    pub sphere: &'scene Sphere,
}

/// Nearest root within `[t_min, t_max]` over every sphere in the scene.
///
/// Spheres are visited in scene order and a later root must be strictly
/// closer to replace the current best, so the first sphere wins a tie.
pub fn closest_hit<'scene>(
    ray: &Ray,
    t_min: f64,
    t_max: f64,
    scene: &'scene Scene,
) -> Option<Hit<'scene>> {
    let mut closest: Option<Hit<'scene>> = None;

    for sphere in &scene.spheres {
        let Some((t0, t1)) = intersect(ray, sphere) else {
            continue;
        };

        for t in [t0, t1] {
            if t < t_min || t > t_max {
                continue;
            }
            match closest {
                Some(hit) if hit.t <= t => {}
                _ => closest = Some(Hit { t, sphere }),
            }
        }
    }

    closest
}
