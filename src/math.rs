/// Scene-space vector. Colors reuse the same type with channels in `0..=255`.
pub type Vector3 = glam::DVec3;

pub fn dot(a: Vector3, b: Vector3) -> f64 {
    a.dot(b)
}

pub fn length(a: Vector3) -> f64 {
    dot(a, a).sqrt()
}

/// Element-wise division. Returns `None` when any component of `b` is zero.
pub fn checked_div(a: Vector3, b: Vector3) -> Option<Vector3> {
    if b.cmpeq(Vector3::ZERO).any() {
        return None;
    }
    Some(a / b)
}

/// Unit vector pointing along `a`, or zero when `a` has no length.
pub fn normalize_or_zero(a: Vector3) -> Vector3 {
    let len = length(a);
    checked_div(a, Vector3::splat(len)).unwrap_or(Vector3::ZERO)
}

/// Mirrors `v` about `normal`: `2·n·dot(n, v) − v`.
pub fn reflect(v: Vector3, normal: Vector3) -> Vector3 {
    normal * (2.0 * dot(normal, v)) - v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_and_length() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, -5.0, 6.0);
        assert_eq!(dot(a, b), 12.0);
        assert_eq!(length(Vector3::new(3.0, 4.0, 0.0)), 5.0);
    }

    #[test]
    fn element_wise_operators() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(2.0, 4.0, 6.0);
        assert_eq!(a + b, Vector3::new(3.0, 6.0, 9.0));
        assert_eq!(b - a, a);
        assert_eq!(a * b, Vector3::new(2.0, 8.0, 18.0));
    }

    #[test]
    fn division_by_zero_component_is_rejected() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(checked_div(a, Vector3::new(1.0, 0.0, 1.0)), None);
        assert_eq!(
            checked_div(a, Vector3::new(1.0, 2.0, 3.0)),
            Some(Vector3::ONE)
        );
    }

    #[test]
    fn normalize_zero_vector() {
        assert_eq!(normalize_or_zero(Vector3::ZERO), Vector3::ZERO);
        assert_eq!(
            normalize_or_zero(Vector3::new(0.0, 0.0, 7.0)),
            Vector3::new(0.0, 0.0, 1.0)
        );
    }

    #[test]
    fn reflect_about_normal() {
        let n = Vector3::new(0.0, 1.0, 0.0);
        let v = Vector3::new(1.0, 1.0, 0.0);
        assert_eq!(reflect(v, n), Vector3::new(-1.0, 1.0, 0.0));
    }
}
