//! Seek and flee movement primitives.

use npc_core::Vec2;

/// Which way [`flee_from`] moves relative to the threat.
///
/// One primitive serves both fleeing and chasing: the heading only flips the
/// sign of the displacement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    /// Move away from the threat (sign +1).
    Away,
    /// Move towards the threat, i.e. chase it (sign -1).
    Toward,
}

impl Heading {
    /// `+1.0` for `Away`, `-1.0` for `Toward`.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Heading::Away   => 1.0,
            Heading::Toward => -1.0,
        }
    }
}

/// One tick of movement towards `target`.
///
/// Outside `arrival_threshold` the agent moves `speed * dt` along the unit
/// direction, stopping on the target rather than passing it.  Inside the
/// threshold it snaps onto the target exactly.
pub fn seek_toward(
    position:          Vec2,
    target:            Vec2,
    speed:             f32,
    dt:                f32,
    arrival_threshold: f32,
) -> Vec2 {
    let distance = position.distance(target);
    if distance <= arrival_threshold {
        return target;
    }
    let step = speed * dt;
    if step >= distance {
        target
    } else {
        position + position.direction_to(target) * step
    }
}

/// One tick of movement relative to `threat` while it is within `proximity`.
///
/// With [`Heading::Away`] the agent moves `speed * dt` directly away from the
/// threat; with [`Heading::Toward`] it moves towards it, stopping on the
/// threat rather than passing through.  At or beyond `proximity` the position
/// is returned unchanged.
pub fn flee_from(
    position:  Vec2,
    threat:    Vec2,
    speed:     f32,
    dt:        f32,
    proximity: f32,
    heading:   Heading,
) -> Vec2 {
    let distance = position.distance(threat);
    if distance >= proximity {
        return position;
    }
    let step = speed * dt;
    if heading == Heading::Toward && step >= distance {
        return threat;
    }
    position + position.direction_to(threat) * (-heading.sign() * step)
}
