use glam::DVec3;
use nav_marker_models::marker::{Marker, MarkerColor};

/// A half line. The direction does not need to be normalized, [Ray::new] does it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: DVec3,
    pub direction: DVec3,
}

impl Ray {
    /// Returns `None` for a zero or non-finite direction, which points nowhere.
    pub fn new(origin: DVec3, direction: DVec3) -> Option<Self> {
        let direction = direction.try_normalize()?;
        Some(Self { origin, direction })
    }

    pub fn at(&self, distance: f64) -> DVec3 {
        self.origin + self.direction * distance
    }
}

/// Where the view direction of the player crosses the surface of the closest marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection {
    pub marker_name: String,
    pub distance: f64,
    pub point: DVec3,
    pub color: MarkerColor,
}

impl Intersection {
    pub fn waypoint_name(&self) -> String {
        format!("Intercept ({})", self.marker_name)
    }

    pub fn waypoint_description(&self) -> String {
        format!(
            "Intercept point of view direction with closest Nav Marker: {}",
            self.marker_name
        )
    }
}

/// Both distances along the ray where it crosses the sphere, smallest first.
/// They can be negative when the sphere is behind the origin, or when the origin is inside.
/// `None` when the line misses the sphere.
pub fn ray_sphere_intersect(ray: &Ray, center: DVec3, radius: f64) -> Option<(f64, f64)> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    let root = discriminant.sqrt();
    Some((-b - root, -b + root))
}

/// Closest crossing in front of the ray origin, over both crossings of every marker.
/// Markers are visited in order and a later marker only wins with a strictly smaller distance.
pub fn nearest_intersection<'a>(
    ray: &Ray,
    markers: impl IntoIterator<Item = &'a Marker>,
) -> Option<Intersection> {
    let mut best: Option<(&Marker, f64)> = None;
    for marker in markers {
        let Some((t_min, t_max)) = ray_sphere_intersect(ray, marker.position, marker.radius_f64())
        else {
            continue;
        };
        for t in [t_min, t_max] {
            if t > 0.0 && best.map_or(true, |(_, distance)| t < distance) {
                best = Some((marker, t));
            }
        }
    }
    best.map(|(marker, distance)| Intersection {
        marker_name: marker.name.clone(),
        distance,
        point: ray.at(distance),
        color: marker.color,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    const EPSILON: f64 = 1e-6;

    fn marker(name: &str, position: DVec3, radius: f32) -> Marker {
        Marker::new(name, position, radius, MarkerColor::rgba(1, 2, 3, 4))
    }

    #[rstest]
    #[case(DVec3::ZERO)]
    #[case(DVec3::NAN)]
    #[case(DVec3::new(f64::INFINITY, 0.0, 0.0))]
    fn degenerate_direction(#[case] direction: DVec3) {
        assert_eq!(Ray::new(DVec3::ONE, direction), None);
    }

    #[test]
    fn entry_and_exit_of_a_centered_ray() {
        let ray = Ray::new(DVec3::ZERO, DVec3::new(0.0, 0.0, 3.0)).unwrap();
        let (t_min, t_max) = ray_sphere_intersect(&ray, DVec3::new(0.0, 0.0, 10_000.0), 1000.0).unwrap();
        assert!((t_min - 9000.0).abs() < EPSILON);
        assert!((t_max - 11_000.0).abs() < EPSILON);
    }

    #[test]
    fn nearest_is_the_entry_point() {
        let ray = Ray::new(DVec3::ZERO, DVec3::X).unwrap();
        let markers = [marker("Alpha", DVec3::new(10_000.0, 0.0, 0.0), 1000.0)];
        let hit = nearest_intersection(&ray, &markers).unwrap();
        assert_eq!(hit.marker_name, "Alpha");
        assert!((hit.distance - 9000.0).abs() < EPSILON);
        assert!(hit.point.distance(DVec3::new(9000.0, 0.0, 0.0)) < EPSILON);
        assert_eq!(hit.color, MarkerColor::rgba(1, 2, 3, 4));
        assert_eq!(hit.waypoint_name(), "Intercept (Alpha)");
        assert!(hit.waypoint_description().ends_with(": Alpha"));
    }

    #[test]
    fn miss() {
        let ray = Ray::new(DVec3::ZERO, DVec3::Y).unwrap();
        let markers = [marker("Alpha", DVec3::new(10_000.0, 0.0, 0.0), 1000.0)];
        assert_eq!(nearest_intersection(&ray, &markers), None);
        assert_eq!(nearest_intersection(&ray, &[]), None);
    }

    #[test]
    fn spheres_behind_are_ignored() {
        let ray = Ray::new(DVec3::ZERO, DVec3::X).unwrap();
        let markers = [marker("Behind", DVec3::new(-10_000.0, 0.0, 0.0), 1000.0)];
        assert_eq!(nearest_intersection(&ray, &markers), None);
    }

    #[test]
    fn inside_origin_hits_the_exit() {
        let ray = Ray::new(DVec3::new(100.0, 0.0, 0.0), DVec3::X).unwrap();
        let markers = [marker("Around", DVec3::ZERO, 1000.0)];
        let hit = nearest_intersection(&ray, &markers).unwrap();
        assert!((hit.distance - 900.0).abs() < EPSILON);
    }

    #[test]
    fn closest_marker_wins() {
        let ray = Ray::new(DVec3::ZERO, DVec3::X).unwrap();
        let markers = [
            marker("Far", DVec3::new(50_000.0, 0.0, 0.0), 1000.0),
            marker("Big", DVec3::new(20_000.0, 0.0, 0.0), 15_000.0),
            marker("Near", DVec3::new(10_000.0, 0.0, 0.0), 1000.0),
        ];
        let hit = nearest_intersection(&ray, &markers).unwrap();
        assert_eq!(hit.marker_name, "Big");
        assert!((hit.distance - 5000.0).abs() < EPSILON);
    }

    #[test]
    fn ties_go_to_the_first_marker() {
        let ray = Ray::new(DVec3::ZERO, DVec3::X).unwrap();
        let markers = [
            marker("First", DVec3::new(10_000.0, 0.0, 0.0), 1000.0),
            marker("Second", DVec3::new(10_000.0, 0.0, 0.0), 1000.0),
        ];
        assert_eq!(nearest_intersection(&ray, &markers).unwrap().marker_name, "First");
        let reversed = [markers[1].clone(), markers[0].clone()];
        assert_eq!(nearest_intersection(&ray, &reversed).unwrap().marker_name, "Second");
    }
}
