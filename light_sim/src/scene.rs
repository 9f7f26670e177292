//! Scene state owned by the frame loop

use crate::physics::{emit_rays, Circle, Ray};
use glam::DVec2;

/// The light source, the obstacle field, and the current ray set.
///
/// Obstacles are fixed after construction. The ray set is wholesale replaced
/// whenever the light moves; nothing is updated incrementally.
pub struct Scene {
    pub light: Circle,
    pub obstacles: Vec<Circle>,
    pub rays: Vec<Ray>,
    ray_count: usize,
}

impl Scene {
    pub fn new(light: Circle, obstacles: Vec<Circle>, ray_count: usize) -> Self {
        let rays = emit_rays(light.center, ray_count);
        Self {
            light,
            obstacles,
            rays,
            ray_count,
        }
    }

    /// Move the light source and regenerate its rays from the new center
    pub fn move_light(&mut self, position: DVec2) {
        self.light.center = position;
        self.rays = emit_rays(position, self.ray_count);
        log::debug!(
            "light moved to ({:.1}, {:.1}), {} rays regenerated",
            position.x,
            position.y,
            self.rays.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_scene() -> Scene {
        Scene::new(
            Circle::new(DVec2::new(200.0, 150.0), 80.0),
            vec![Circle::new(DVec2::new(700.0, 400.0), 100.0)],
            100,
        )
    }

    #[test]
    fn new_scene_starts_with_full_ray_set() {
        let scene = test_scene();
        assert_eq!(scene.rays.len(), 100);
        for ray in &scene.rays {
            assert_eq!(ray.origin, DVec2::new(200.0, 150.0));
        }
    }

    #[test]
    fn move_light_replaces_every_ray() {
        let mut scene = test_scene();
        let target = DVec2::new(450.0, 300.0);
        scene.move_light(target);

        assert_eq!(scene.light.center, target);
        assert_eq!(scene.rays.len(), 100);
        for ray in &scene.rays {
            assert_eq!(ray.origin, target);
        }
    }

    #[test]
    fn move_light_leaves_obstacles_untouched() {
        let mut scene = test_scene();
        let before = scene.obstacles.clone();
        scene.move_light(DVec2::new(10.0, 10.0));
        assert_eq!(scene.obstacles, before);
        assert_eq!(scene.light.radius, 80.0);
    }
}
