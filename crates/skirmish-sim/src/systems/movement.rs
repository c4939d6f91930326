//! Motion primitive and kinematic integration.
//!
//! Turns each unit's `MoveOrder` into a velocity, then updates
//! Position from Velocity: position += velocity * dt.

use glam::DVec2;
use hecs::World;

use skirmish_core::components::{Mobility, MoveIntent, MoveOrder, Vitals};
use skirmish_core::constants::DT;
use skirmish_core::types::{Position, Velocity};

/// Velocity that carries out `intent` this tick.
/// `MoveTo` never overshoots the arrival circle.
pub fn steer(position: &Position, intent: &MoveIntent, speed: f64) -> Velocity {
    match *intent {
        MoveIntent::Hold => Velocity::default(),
        MoveIntent::Drift { velocity } => velocity,
        MoveIntent::MoveTo { point, arrival } => {
            let to_point = point.as_dvec2() - position.as_dvec2();
            let remaining = to_point.length() - arrival;
            if remaining <= 0.0 {
                return Velocity::default();
            }
            let step = (speed * DT).min(remaining);
            let dir = to_point.try_normalize().unwrap_or(DVec2::ZERO);
            Velocity::from(dir * (step / DT))
        }
    }
}

/// Set velocities from move orders, then integrate.
pub fn run(world: &mut World) {
    for (_entity, (pos, vel, order, mobility, vitals)) in
        world.query_mut::<(&Position, &mut Velocity, &MoveOrder, &Mobility, &Vitals)>()
    {
        *vel = if vitals.alive {
            steer(pos, &order.0, mobility.speed)
        } else {
            Velocity::default()
        };
    }

    integrate(world);
}

/// Kinematic integration for all entities with Position + Velocity.
pub fn integrate(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x * DT;
        pos.y += vel.y * DT;
    }
}
