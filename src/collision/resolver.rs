use crate::bodies::Body;
use crate::math::Vector2;

/// Detects and resolves disc-disc and disc-boundary contacts
///
/// Resolution is stateless; both functions mutate the bodies they are
/// handed and nothing else.
pub struct CollisionResolver;

impl CollisionResolver {
    /// Resolves an overlap between two discs, if any
    ///
    /// Overlapping discs are pushed apart by equal halves of the overlap
    /// along the contact normal (mass only affects the velocity response,
    /// not the positional split), then exchange a 1D impulse along the
    /// normal weighted by mass and the restitution coefficient. Tangential
    /// velocity components are untouched.
    ///
    /// Two discs at the exact same position have no defined contact normal
    /// and are deliberately left alone; they pass through each other
    /// without separation or impulse.
    pub fn resolve_pair(a: &mut Body, b: &mut Body, restitution: f32) {
        let delta = b.pos - a.pos;
        let d = delta.length();
        if d == 0.0 || d > a.radius() + b.radius() {
            return;
        }

        let normal = delta / d;

        let corr = (a.radius() + b.radius() - d) / 2.0;
        a.pos -= normal * corr;
        b.pos += normal * corr;

        let v1 = a.vel.dot(&normal);
        let v2 = b.vel.dot(&normal);

        let m1 = a.mass();
        let m2 = b.mass();

        // 1D collision resolution along the contact normal
        let new_v1 = (m1 * v1 + m2 * v2 - m2 * (v1 - v2) * restitution) / (m1 + m2);
        let new_v2 = (m1 * v1 + m2 * v2 - m1 * (v2 - v1) * restitution) / (m1 + m2);

        a.vel += normal * (new_v1 - v1);
        b.vel += normal * (new_v2 - v2);
    }

    /// Resolves overlap between a disc and the rectangular world boundary
    ///
    /// Each axis is checked independently and unconditionally, so a disc
    /// in a corner reflects on both axes in one call. Position is clamped
    /// to keep the disc inside the bounds and the offending velocity
    /// component is negated. Walls reflect at full speed regardless of the
    /// body-body restitution coefficient.
    pub fn resolve_walls(body: &mut Body, bounds: Vector2) {
        let radius = body.radius();

        if body.pos.x < radius {
            body.pos.x = radius;
            body.vel.x = -body.vel.x;
        }
        if body.pos.x > bounds.x - radius {
            body.pos.x = bounds.x - radius;
            body.vel.x = -body.vel.x;
        }
        if body.pos.y < radius {
            body.pos.y = radius;
            body.vel.y = -body.vel.y;
        }
        if body.pos.y > bounds.y - radius {
            body.pos.y = bounds.y - radius;
            body.vel.y = -body.vel.y;
        }
    }
}
