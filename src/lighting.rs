use crate::{
    math::{dot, length, reflect, Vector3},
    ray::{closest_hit, Ray},
    scene::{Light, Scene, NO_SPECULAR},
};

/// Minimum distance a shadow ray travels before it can be blocked, so a
/// surface never shadows itself.
pub const SHADOW_EPSILON: f64 = 0.001;

/// Total light intensity reaching `point`, capped at 1.
///
/// Occluded point and directional lights contribute nothing. Diffuse and
/// specular terms only ever add.
pub fn compute_lighting(
    point: Vector3,
    normal: Vector3,
    view: Vector3,
    specular: f64,
    t_max: f64,
    scene: &Scene,
) -> f64 {
    let mut intensity = 0.0;

    for light in &scene.lights {
        let l = match *light {
            Light::Ambient { intensity: ambient } => {
                intensity += ambient;
                continue;
            }
            Light::Point { position, .. } => position - point,
            Light::Directional { direction, .. } => direction,
        };
        let light_intensity = light.intensity();

        let shadow_ray = Ray::new(point, l);
        if closest_hit(&shadow_ray, SHADOW_EPSILON, t_max, scene).is_some() {
            continue;
        }

        let n_dot_l = dot(normal, l);
        if n_dot_l > 0.0 {
            intensity += light_intensity * n_dot_l / (length(normal) * length(l));
        }

        if specular != NO_SPECULAR {
            let r = reflect(l, normal);
            let r_dot_v = dot(r, view);
            if r_dot_v > 0.0 {
                let cos = r_dot_v / (length(r) * length(view));
                intensity += light_intensity * cos.powf(specular);
            }
        }
    }

    intensity.min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Sphere;

    /// Lighting at the origin for an upward facing surface seen from above.
    fn at_origin(scene: &Scene, specular: f64) -> f64 {
        compute_lighting(Vector3::ZERO, Vector3::Y, Vector3::Y, specular, 1000.0, scene)
    }

    fn lit_scene(lights: Vec<Light>) -> Scene {
        Scene {
            lights,
            ..Default::default()
        }
    }

    #[test]
    fn ambient_only() {
        let scene = lit_scene(vec![Light::Ambient { intensity: 0.3 }]);
        for normal in [Vector3::X, Vector3::Y, -Vector3::Z] {
            let point = Vector3::new(4.0, -2.0, 1.0);
            let i = compute_lighting(point, normal, Vector3::Z, 50.0, 1000.0, &scene);
            assert_eq!(i, 0.3);
        }
    }

    #[test]
    fn diffuse_falls_off_with_angle() {
        let scene = lit_scene(vec![Light::Directional {
            direction: Vector3::new(0.0, 1.0, 1.0),
            intensity: 1.0,
        }]);
        let i = at_origin(&scene, NO_SPECULAR);
        assert!((i - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn light_behind_surface_adds_nothing() {
        let scene = lit_scene(vec![Light::Point {
            position: Vector3::new(0.0, -5.0, 0.0),
            intensity: 0.8,
        }]);
        let i = at_origin(&scene, NO_SPECULAR);
        assert_eq!(i, 0.0);
    }

    #[test]
    fn occluded_point_light_contributes_nothing() {
        let scene = Scene {
            spheres: vec![Sphere::new(Vector3::new(0.0, 3.0, 0.0), 1.0, Vector3::ONE)],
            lights: vec![Light::Point {
                position: Vector3::new(0.0, 10.0, 0.0),
                intensity: 0.6,
            }],
            ..Default::default()
        };
        let i = at_origin(&scene, 10.0);
        assert_eq!(i, 0.0);
    }

    #[test]
    fn occluded_directional_light_contributes_nothing() {
        let scene = Scene {
            spheres: vec![Sphere::new(Vector3::new(0.0, 50.0, 0.0), 2.0, Vector3::ONE)],
            lights: vec![
                Light::Ambient { intensity: 0.1 },
                Light::Directional {
                    direction: Vector3::Y,
                    intensity: 0.7,
                },
            ],
            ..Default::default()
        };
        let i = at_origin(&scene, NO_SPECULAR);
        assert_eq!(i, 0.1);
    }

    #[test]
    fn surface_does_not_shadow_itself() {
        let sphere = Sphere::new(Vector3::new(0.0, 0.0, 5.0), 1.0, Vector3::ONE);
        let scene = Scene {
            spheres: vec![sphere],
            lights: vec![Light::Point {
                position: Vector3::new(0.0, 10.0, 5.0),
                intensity: 0.6,
            }],
            ..Default::default()
        };
        let point = Vector3::new(0.0, 1.0, 5.0);
        let normal = point - sphere.center;
        let i = compute_lighting(point, normal, normal, NO_SPECULAR, 1000.0, &scene);
        assert!((i - 0.6).abs() < 1e-12);
    }

    #[test]
    fn specular_highlight_adds_to_diffuse() {
        let scene = lit_scene(vec![Light::Directional {
            direction: Vector3::Y,
            intensity: 0.4,
        }]);
        let matte = at_origin(&scene, NO_SPECULAR);
        let shiny = at_origin(&scene, 10.0);
        assert!((matte - 0.4).abs() < 1e-12);
        assert!((shiny - 0.8).abs() < 1e-12);
    }

    #[test]
    fn intensity_is_capped_at_one() {
        let scene = lit_scene(vec![
            Light::Ambient { intensity: 0.7 },
            Light::Directional {
                direction: Vector3::Y,
                intensity: 0.7,
            },
        ]);
        let i = at_origin(&scene, 100.0);
        assert_eq!(i, 1.0);
    }
}
