use crate::bodies::{Body, BodyColor, BodyId};
use crate::collision::{detect_contact, separate, CollisionResolver};
use crate::core::events::{CollisionEvent, EventQueue, StepFlags, WallEvent};
use crate::core::{InitialConditions, SimulationConfig, Track};
use crate::integration::{EulerIntegrator, Integrator};
use crate::Result;
use tracing::{debug, trace};

/// The two bodies of a run on a bounded track
///
/// Owns both bodies and the collision counter exclusively. A new run gets a
/// new world; nothing is shared between runs.
pub struct TrackWorld {
    /// Both bodies, indexed by [`BodyId::index`]
    bodies: [Body; 2],

    /// The track the bodies live on
    track: Track,

    /// Configuration for the simulation
    config: SimulationConfig,

    /// Advances positions every step
    integrator: Box<dyn Integrator>,

    /// Events raised by the last step
    events: EventQueue,

    /// Number of collisions resolved since the run started
    collision_count: u32,

    /// Number of steps taken
    steps: u64,

    /// The total elapsed simulation time
    time: f32,
}

impl TrackWorld {
    /// Creates the bodies of a run from validated initial conditions
    pub fn new(conditions: &InitialConditions, config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        config.check_conditions(conditions)?;
        Ok(Self::with_validated_config(conditions, config))
    }

    pub(crate) fn with_validated_config(conditions: &InitialConditions, config: SimulationConfig) -> Self {
        let spawn = |id: BodyId, velocity: f32, mass: f32, color: BodyColor| {
            Body::new(
                id,
                config.start_position(id.index()),
                velocity * config.velocity_scale,
                config.body_size(mass),
                mass,
                color,
            )
        };

        let bodies = [
            spawn(BodyId::First, conditions.v1(), conditions.m1(), BodyColor::teal()),
            spawn(BodyId::Second, conditions.v2(), conditions.m2(), BodyColor::orange()),
        ];

        Self {
            bodies,
            track: Track::new(config.track_width),
            config,
            integrator: Box::new(EulerIntegrator::new()),
            events: EventQueue::new(),
            collision_count: 0,
            steps: 0,
            time: 0.0,
        }
    }

    /// Replaces the integrator used to advance positions
    pub fn set_integrator(&mut self, integrator: Box<dyn Integrator>) {
        self.integrator = integrator;
    }

    /// Advances both bodies by one fixed time step
    ///
    /// In order: collision detection and resolution, overlap correction,
    /// position integration, wall bounces.
    ///
    /// Walls are handled last. When the bodies collide next to a wall, the
    /// clamp can move a body back inside the other after the overlap was
    /// corrected; the bodies then still approach and collide again on the
    /// following step.
    pub fn step(&mut self) -> StepFlags {
        self.events.clear();

        let mut flags = StepFlags::empty();
        let dt = self.config.time_step;
        let scale = self.config.velocity_scale;

        let [a, b] = &mut self.bodies;
        if let Some(contact) = detect_contact(a, b) {
            self.collision_count += 1;
            flags |= StepFlags::BODY_COLLISION;

            let velocities_before = [a.get_velocity(), b.get_velocity()];
            let resolved = CollisionResolver::resolve(
                a.get_velocity() / scale,
                b.get_velocity() / scale,
                a.get_mass(),
                b.get_mass(),
            );
            a.set_velocity(resolved.v1 * scale);
            b.set_velocity(resolved.v2 * scale);

            if separate(a, b, contact.distance, self.config.separation_margin) {
                flags |= StepFlags::OVERLAP_CORRECTED;
            }

            let event = CollisionEvent {
                number: self.collision_count,
                distance: contact.distance,
                closing_velocity: contact.closing_velocity,
                velocities_before,
                velocities_after: [a.get_velocity(), b.get_velocity()],
            };
            debug!(
                number = event.number,
                distance = event.distance,
                before = ?event.velocities_before,
                after = ?event.velocities_after,
                "resolved collision"
            );
            self.events.add_collision_event(event);
        }

        for body in self.bodies.iter_mut() {
            self.integrator.integrate(body, dt);
        }

        for body in self.bodies.iter_mut() {
            let velocity_before = body.get_velocity();
            if let Some(wall) = self.track.constrain(body, self.config.wall_damping) {
                flags |= StepFlags::for_wall(wall);

                trace!(body = ?body.get_id(), ?wall, velocity_before, "wall bounce");
                self.events.add_wall_event(WallEvent {
                    body: body.get_id(),
                    wall,
                    velocity_before,
                    velocity_after: body.get_velocity(),
                });
            }
        }

        self.steps += 1;
        self.time += dt;

        flags
    }

    /// Returns a body by identity
    pub fn get_body(&self, id: BodyId) -> &Body {
        &self.bodies[id.index()]
    }

    /// Returns a mutable reference to a body by identity
    ///
    /// Position and velocity may be changed; size and mass are fixed.
    pub fn get_body_mut(&mut self, id: BodyId) -> &mut Body {
        &mut self.bodies[id.index()]
    }

    /// Returns both bodies
    pub fn bodies(&self) -> &[Body; 2] {
        &self.bodies
    }

    /// Live velocity of a body in physical units
    pub fn live_velocity(&self, id: BodyId) -> f32 {
        self.get_body(id).get_velocity() / self.config.velocity_scale
    }

    /// Number of collisions resolved since the run started
    pub fn collision_count(&self) -> u32 {
        self.collision_count
    }

    /// Number of steps taken since the run started
    pub fn step_count(&self) -> u64 {
        self.steps
    }

    /// Returns the current simulation time
    pub fn get_time(&self) -> f32 {
        self.time
    }

    /// Returns the track
    pub fn get_track(&self) -> &Track {
        &self.track
    }

    /// Returns a reference to the simulation configuration
    pub fn get_config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns the events raised by the last step
    pub fn get_events(&self) -> &EventQueue {
        &self.events
    }

    /// Returns the name of the integrator in use
    pub fn integrator_name(&self) -> &str {
        self.integrator.name()
    }
}
