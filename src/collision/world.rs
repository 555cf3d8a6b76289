use glam::Vec3;

use super::event::CollisionEvent;
use crate::geometry::{Aabb, Axis};

/// The single cube that moves through the world.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovingBox {
    /// Center position.
    pub position: Vec3,
    /// Velocity in units per second.
    pub velocity: Vec3,
    /// Edge length.
    pub size: f32,
}

impl MovingBox {
    /// Bounding box at the current position.
    #[must_use]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.position, self.size)
    }
}

/// A cube that never moves; the moving box bounces off it.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticBox {
    /// Label carried in collision notifications.
    pub name: String,
    /// Center position.
    pub position: Vec3,
    /// Edge length.
    pub size: f32,
}

impl StaticBox {
    /// Create a named static box.
    pub fn new(name: impl Into<String>, position: Vec3, size: f32) -> Self {
        Self {
            name: name.into(),
            position,
            size,
        }
    }

    /// Bounding box of this cube.
    #[must_use]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.position, self.size)
    }
}

/// A moving box bouncing between static boxes inside a fixed boundary.
///
/// Collisions are resolved per axis: the moving box's velocity is negated
/// on the axis of least penetration, with no mass or rotation involved.
/// Static boxes are tested in insertion order and every resolution feeds
/// the next test, so the order they were added in is observable.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionWorld {
    moving: MovingBox,
    statics: Vec<StaticBox>,
    boundary: Aabb,
}

impl CollisionWorld {
    /// Create a world with no static boxes.
    #[must_use]
    pub fn new(moving: MovingBox, boundary: Aabb) -> Self {
        Self {
            moving,
            statics: Vec::new(),
            boundary,
        }
    }

    /// Builder-style [`add_static`](Self::add_static).
    #[must_use]
    pub fn with_static(mut self, static_box: StaticBox) -> Self {
        self.add_static(static_box);
        self
    }

    /// Append a static box; it is evaluated after all existing ones.
    pub fn add_static(&mut self, static_box: StaticBox) {
        self.statics.push(static_box);
    }

    /// The moving box.
    #[must_use]
    pub fn moving(&self) -> &MovingBox {
        &self.moving
    }

    /// Static boxes in evaluation order.
    #[must_use]
    pub fn statics(&self) -> &[StaticBox] {
        &self.statics
    }

    /// World extents.
    #[must_use]
    pub fn boundary(&self) -> &Aabb {
        &self.boundary
    }

    /// Replace the moving box's velocity.
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.moving.velocity = velocity;
    }

    /// Advance the simulation by `dt` seconds and resolve collisions.
    ///
    /// Returns one event per static box struck during this step. Call at
    /// most once per frame: a second call with the same `dt` moves the box
    /// again.
    pub fn tick(&mut self, dt: f32) -> Vec<CollisionEvent> {
        self.moving.position += self.moving.velocity * dt;

        let mut events = Vec::new();
        for (index, static_box) in self.statics.iter().enumerate() {
            let moving_aabb = self.moving.aabb();
            let Some(axis) = moving_aabb.min_penetration_axis(&static_box.aabb())
            else {
                continue;
            };

            let i = axis.index();
            self.moving.velocity[i] = -self.moving.velocity[i];
            // Second integration step inside the same tick to push the box
            // back out along the reversed axis.
            self.moving.position += self.moving.velocity * dt;

            let event = CollisionEvent::new(index, &static_box.name, axis);
            log::debug!("{} on {axis:?} axis", event.message);
            events.push(event);
        }

        self.resolve_boundary(dt);
        events
    }

    /// Reflect and nudge on every axis where the box leaves the boundary.
    fn resolve_boundary(&mut self, dt: f32) {
        let moving_aabb = self.moving.aabb();
        for axis in Axis::ALL {
            if !self.boundary.exceeded_on(&moving_aabb, axis) {
                continue;
            }
            let i = axis.index();
            self.moving.velocity[i] = -self.moving.velocity[i];
            self.moving.position[i] += self.moving.velocity[i] * dt;
            log::trace!(
                "boundary bounce on {axis:?}: position {:?}",
                self.moving.position
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn bounds() -> Aabb {
        Aabb::new(Vec3::splat(-5.0), Vec3::splat(5.0))
    }

    fn moving(position: Vec3, velocity: Vec3) -> MovingBox {
        MovingBox {
            position,
            velocity,
            size: 1.0,
        }
    }

    #[test]
    fn free_flight_integrates_velocity() {
        let mut world = CollisionWorld::new(
            moving(Vec3::ZERO, Vec3::new(1.0, -2.0, 0.5)),
            bounds(),
        );
        let events = world.tick(0.5);
        assert!(events.is_empty());
        assert!((world.moving().position - Vec3::new(0.5, -1.0, 0.25)).length() < EPS);
        assert_eq!(world.moving().velocity, Vec3::new(1.0, -2.0, 0.5));
    }

    #[test]
    fn static_hit_reverses_x_and_reports() {
        let mut world =
            CollisionWorld::new(moving(Vec3::ZERO, Vec3::X), bounds())
                .with_static(StaticBox::new("cube 2", Vec3::new(2.0, 0.0, 0.0), 1.0));

        let events = world.tick(1.0);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].index, 0);
        assert_eq!(events[0].name, "cube 2");
        assert_eq!(events[0].axis, Axis::X);
        assert_eq!(events[0].message, "Collision with cube 2");
        assert!(world.moving().velocity.x < 0.0);
        assert_eq!(world.moving().velocity.x, -1.0);
        // Moved to x = 1, then pushed back by the correction step.
        assert!(world.moving().position.x.abs() < EPS);
    }

    #[test]
    fn miss_leaves_velocity_alone() {
        let mut world =
            CollisionWorld::new(moving(Vec3::ZERO, Vec3::X), bounds())
                .with_static(StaticBox::new("far", Vec3::new(0.0, 3.0, 0.0), 1.0));
        assert!(world.tick(0.1).is_empty());
        assert_eq!(world.moving().velocity, Vec3::X);
    }

    #[test]
    fn resolution_uses_smallest_penetration_axis() {
        // After the step the moving box spans y in [0.6, 1.6] and the static
        // box y in [1.5, 2.5]: y depth 0.1 is far smaller than x/z depth 1.
        let mut world = CollisionWorld::new(
            moving(Vec3::new(0.0, 0.9, 0.0), Vec3::new(0.0, 0.2, 0.0)),
            bounds(),
        )
        .with_static(StaticBox::new("above", Vec3::new(0.0, 2.0, 0.0), 1.0));
        let events = world.tick(1.0);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].axis, Axis::Y);
        assert_eq!(world.moving().velocity, Vec3::new(0.0, -0.2, 0.0));
    }

    #[test]
    fn later_boxes_see_earlier_corrections() {
        // The first hit reverses x and pushes the box back into the second
        // static box, which flips x again within the same tick.
        let mut world = CollisionWorld::new(
            moving(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.5, 0.0, 0.0)),
            bounds(),
        )
        .with_static(StaticBox::new("right", Vec3::new(1.4, 0.0, 0.0), 1.0))
        .with_static(StaticBox::new("left", Vec3::new(-1.0, 0.0, 0.0), 1.0));

        let events = world.tick(1.0);

        let names: Vec<&str> = events.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["right", "left"]);
        assert_eq!(world.moving().velocity.x, 0.5);
    }

    #[test]
    fn order_of_statics_matters() {
        let forward = CollisionWorld::new(
            moving(Vec3::ZERO, Vec3::new(0.5, 0.0, 0.0)),
            bounds(),
        )
        .with_static(StaticBox::new("right", Vec3::new(1.4, 0.0, 0.0), 1.0))
        .with_static(StaticBox::new("left", Vec3::new(-1.0, 0.0, 0.0), 1.0));

        let mut reversed = CollisionWorld::new(*forward.moving(), bounds());
        for s in forward.statics().iter().rev() {
            reversed.add_static(s.clone());
        }

        let mut forward = forward;
        let _ = forward.tick(1.0);
        let events = reversed.tick(1.0);

        // Evaluated left-first, the box hasn't reached "left" yet.
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "right");
        assert_ne!(forward.moving().velocity, reversed.moving().velocity);
    }

    #[test]
    fn boundary_flips_and_corrects_single_axis() {
        let mut world = CollisionWorld::new(
            moving(Vec3::new(4.6, 0.0, 0.0), Vec3::X),
            bounds(),
        );

        let events = world.tick(0.5);

        assert!(events.is_empty());
        assert_eq!(world.moving().velocity, Vec3::new(-1.0, 0.0, 0.0));
        // 4.6 + 0.5 = 5.1 (max.x = 5.6 > 5), then 5.1 - 0.5 = 4.6.
        assert!((world.moving().position.x - 4.6).abs() < EPS);
        assert_eq!(world.moving().position.y, 0.0);
        assert_eq!(world.moving().position.z, 0.0);
    }

    #[test]
    fn boundary_handles_each_axis_independently() {
        let mut world = CollisionWorld::new(
            moving(Vec3::new(-4.6, 4.6, 0.0), Vec3::new(-1.0, 1.0, 1.0)),
            bounds(),
        );
        let _ = world.tick(0.5);
        assert_eq!(world.moving().velocity, Vec3::new(1.0, -1.0, 1.0));
        assert!((world.moving().position - Vec3::new(-4.6, 4.6, 0.5)).length() < EPS);
    }

    #[test]
    fn stays_near_boundary_over_many_ticks() {
        let mut world = CollisionWorld::new(
            moving(Vec3::ZERO, Vec3::new(3.0, 2.2, -1.7)),
            bounds(),
        )
        .with_static(StaticBox::new("cube 1", Vec3::new(-3.0, 0.0, 0.0), 1.0))
        .with_static(StaticBox::new("cube 2", Vec3::new(2.0, 0.0, 0.0), 1.0));

        let slack = Aabb::new(Vec3::splat(-6.0), Vec3::splat(6.0));
        for _ in 0..2000 {
            let _ = world.tick(1.0 / 60.0);
            assert!(slack.contains_point(world.moving().position));
        }
        assert_eq!(world.moving().velocity.abs(), Vec3::new(3.0, 2.2, 1.7));
    }
}
