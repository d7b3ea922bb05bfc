//! Player/building contact: axis-aligned overlap, push-out, and the per-frame
//! trigger that turns a contact into a lot report.

use bevy::prelude::*;

use crate::grid::PixelPosition;
use crate::lots::LotKind;
use crate::world_map::WorldMap;

// =============================================================================
// Axis-aligned boxes
// =============================================================================

/// Axis-aligned box in pixel space (y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center_x: f32,
    pub center_y: f32,
    pub half_w: f32,
    pub half_h: f32,
}

impl Aabb {
    pub fn from_top_left(top_left: PixelPosition, size: Vec2) -> Self {
        Self {
            center_x: top_left.x + size.x * 0.5,
            center_y: top_left.y + size.y * 0.5,
            half_w: size.x * 0.5,
            half_h: size.y * 0.5,
        }
    }

    pub fn top_left(&self) -> PixelPosition {
        PixelPosition::new(self.center_x - self.half_w, self.center_y - self.half_h)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.half_w * 2.0, self.half_h * 2.0)
    }

    /// Touching edges do not count as overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        (self.center_x - other.center_x).abs() < self.half_w + other.half_w
            && (self.center_y - other.center_y).abs() < self.half_h + other.half_h
    }

    /// Smallest translation that moves `self` out of `other`, along the axis
    /// of least penetration. `None` when the boxes do not overlap.
    pub fn separation(&self, other: &Aabb) -> Option<Vec2> {
        if !self.overlaps(other) {
            return None;
        }
        let dx = self.center_x - other.center_x;
        let dy = self.center_y - other.center_y;
        let pen_x = self.half_w + other.half_w - dx.abs();
        let pen_y = self.half_h + other.half_h - dy.abs();

        if pen_x < pen_y {
            let sign = if dx < 0.0 { -1.0 } else { 1.0 };
            Some(Vec2::new(pen_x * sign, 0.0))
        } else {
            let sign = if dy < 0.0 { -1.0 } else { 1.0 };
            Some(Vec2::new(0.0, pen_y * sign))
        }
    }

    pub fn translate(&mut self, by: Vec2) {
        self.center_x += by.x;
        self.center_y += by.y;
    }
}

/// Push `mover` out of every immovable box it overlaps. Returns whether any
/// overlap happened this call.
pub fn collide<I>(mover: &mut Aabb, statics: I) -> bool
where
    I: IntoIterator<Item = Aabb>,
{
    let mut hit = false;
    for other in statics {
        if let Some(push) = mover.separation(&other) {
            mover.translate(push);
            hit = true;
        }
    }
    hit
}

// =============================================================================
// Collision trigger
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionState {
    #[default]
    NotColliding,
    Colliding,
}

/// Two-state contact tracker. Every frame with contact asks for a fresh
/// lot lookup; staying in contact is not suppressed.
#[derive(Resource, Debug, Default)]
pub struct CollisionTrigger {
    pub state: CollisionState,
    /// Frames in a row with contact.
    pub contact_frames: u32,
}

impl CollisionTrigger {
    /// Record this frame's contact. Returns `true` when the resolver should run.
    pub fn observe(&mut self, contact: bool) -> bool {
        if contact {
            self.state = CollisionState::Colliding;
            self.contact_frames = self.contact_frames.saturating_add(1);
        } else {
            self.state = CollisionState::NotColliding;
            self.contact_frames = 0;
        }
        contact
    }
}

/// Written once per frame by the renderer: the player's pixel position if it
/// touched a building this frame.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct PlayerContact(pub Option<PixelPosition>);

/// The lot the player bumped into.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct LotReport {
    pub index: usize,
    pub kind: LotKind,
    pub position: PixelPosition,
    pub designation: Option<String>,
}

/// Most recent report, kept for the debug overlay.
#[derive(Resource, Debug, Default)]
pub struct LastLotReport(pub Option<LotReport>);

/// System: run the trigger on this frame's contact and report the lot.
pub fn report_lot_contacts(
    contact: Res<PlayerContact>,
    map: Option<Res<WorldMap>>,
    mut trigger: ResMut<CollisionTrigger>,
    mut last: ResMut<LastLotReport>,
    mut reports: EventWriter<LotReport>,
) {
    if !trigger.observe(contact.0.is_some()) {
        return;
    }
    let (Some(position), Some(map)) = (contact.0, map) else {
        return;
    };

    match map.resolve(position) {
        Ok(index) => {
            let lot = &map.lots[index];
            let designation = lot.designation().map(str::to_string);
            info!(
                "Lot {} ({}): {}",
                index,
                lot.kind.label(),
                designation.as_deref().unwrap_or("<unlabelled>")
            );
            let report = LotReport {
                index,
                kind: lot.kind,
                position: lot.position,
                designation,
            };
            last.0 = Some(report.clone());
            reports.send(report);
        }
        Err(e) => warn!("Skipping lot report: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f32, y: f32, size: f32) -> Aabb {
        Aabb::from_top_left(PixelPosition::new(x, y), Vec2::splat(size))
    }

    #[test]
    fn test_touching_boxes_do_not_overlap() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(10.0, 0.0, 10.0);
        assert!(!a.overlaps(&b));
        assert!(a.separation(&b).is_none());
    }

    #[test]
    fn test_separation_uses_shallowest_axis() {
        let player = square(8.0, 2.0, 10.0);
        let wall = square(15.0, 0.0, 20.0);
        let push = player.separation(&wall).unwrap();
        assert_eq!(push, Vec2::new(-3.0, 0.0));
    }

    #[test]
    fn test_collide_pushes_mover_out() {
        let mut player = square(0.0, 8.0, 10.0);
        let building = square(0.0, 15.0, 10.0);
        assert!(collide(&mut player, [building]));
        assert!(!player.overlaps(&building));
        assert_eq!(player.top_left(), PixelPosition::new(0.0, 5.0));
    }

    #[test]
    fn test_collide_without_contact_leaves_mover() {
        let mut player = square(0.0, 0.0, 10.0);
        let before = player;
        assert!(!collide(&mut player, [square(50.0, 50.0, 10.0)]));
        assert_eq!(player, before);
    }

    #[test]
    fn test_trigger_fires_every_contact_frame() {
        let mut trigger = CollisionTrigger::default();
        assert!(trigger.observe(true));
        assert!(trigger.observe(true));
        assert_eq!(trigger.state, CollisionState::Colliding);
        assert_eq!(trigger.contact_frames, 2);

        assert!(!trigger.observe(false));
        assert_eq!(trigger.state, CollisionState::NotColliding);
        assert_eq!(trigger.contact_frames, 0);
    }
}
