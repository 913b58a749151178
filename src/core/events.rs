use crate::bodies::BodyId;
use crate::core::track::Wall;
use bitflags::bitflags;
use std::collections::VecDeque;

bitflags! {
    /// What happened during a single step
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
    pub struct StepFlags: u32 {
        /// The two bodies collided and their velocities were exchanged
        const BODY_COLLISION = 0x01;

        /// The bodies interpenetrated and were pushed apart
        const OVERLAP_CORRECTED = 0x02;

        /// A body bounced off the left wall
        const LEFT_WALL = 0x04;

        /// A body bounced off the right wall
        const RIGHT_WALL = 0x08;
    }
}

impl StepFlags {
    /// The flag raised by a bounce off `wall`
    pub fn for_wall(wall: Wall) -> Self {
        match wall {
            Wall::Left => StepFlags::LEFT_WALL,
            Wall::Right => StepFlags::RIGHT_WALL,
        }
    }
}

/// A resolved collision between the two bodies
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionEvent {
    /// Running number of this collision within the run, starting at 1
    pub number: u32,

    /// Center distance when the contact was detected
    pub distance: f32,

    /// Closing velocity when the contact was detected
    pub closing_velocity: f32,

    /// Track velocities of both bodies before the collision
    pub velocities_before: [f32; 2],

    /// Track velocities of both bodies after the collision
    pub velocities_after: [f32; 2],
}

/// A bounce of one body off a wall
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallEvent {
    /// The body that bounced
    pub body: BodyId,

    /// The wall it bounced off
    pub wall: Wall,

    /// Track velocity before the bounce
    pub velocity_before: f32,

    /// Track velocity after the bounce
    pub velocity_after: f32,
}

/// Events raised during the most recent step
#[derive(Debug, Default)]
pub struct EventQueue {
    /// Collision events
    collision_events: VecDeque<CollisionEvent>,

    /// Wall events
    wall_events: VecDeque<WallEvent>,
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self {
            collision_events: VecDeque::new(),
            wall_events: VecDeque::new(),
        }
    }

    /// Adds a collision event to the queue
    pub fn add_collision_event(&mut self, event: CollisionEvent) {
        self.collision_events.push_back(event);
    }

    /// Adds a wall event to the queue
    pub fn add_wall_event(&mut self, event: WallEvent) {
        self.wall_events.push_back(event);
    }

    /// Iterates over the queued collision events
    pub fn collision_events(&self) -> impl Iterator<Item = &CollisionEvent> {
        self.collision_events.iter()
    }

    /// Iterates over the queued wall events
    pub fn wall_events(&self) -> impl Iterator<Item = &WallEvent> {
        self.wall_events.iter()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.collision_events.is_empty() && self.wall_events.is_empty()
    }

    /// Clears all events from the queue
    pub fn clear(&mut self) {
        self.collision_events.clear();
        self.wall_events.clear();
    }

    /// Gets all wall events involving a specific body
    pub fn get_wall_events_for_body(&self, body: BodyId) -> Vec<&WallEvent> {
        self.wall_events
            .iter()
            .filter(|e| e.body == body)
            .collect()
    }
}
