//! Placement of a secondary badge shape relative to a primary shape.
//!
//! A [`PlacementCode`] is the packed transport form: three 4-bit sub-fields
//! for corner, scale tier and shrink tier. It is decoded once into a
//! [`Placement`], and [`compute_layout`] turns that plus both shapes' bounds
//! into the transforms to draw with.
//!
//! | Bits    | Sub-field | Flags                              |
//! |---------|-----------|------------------------------------|
//! | `0x00F` | corner    | Left, Right, Top, Bottom           |
//! | `0x0F0` | scale     | Under, Quarter, Half, Full         |
//! | `0xF00` | shrink    | X1, X2, X3, X4                     |
//!
//! # Example
//!
//! ```
//! use glyphstack::{PlacementCode, ShapeRole, compute_layout};
//! use glyphstack_render::Rect;
//!
//! let square = Rect::new(0.0, 0.0, 100.0, 100.0);
//! let target = Rect::new(0.0, 0.0, 50.0, 50.0);
//!
//! let layout = compute_layout(
//!     PlacementCode::NONE.decode(),
//!     square,
//!     Some(square),
//!     target,
//!     0.0,
//! ).unwrap();
//!
//! assert_eq!(layout.first.role, ShapeRole::Primary);
//! assert!(!layout.swapped);
//! ```

use glyphstack_render::{Rect, Transform2D};

/// Packed placement bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PlacementCode(u32);

impl PlacementCode {
    /// No flags: bottom-right corner, default scale and shrink.
    pub const NONE: Self = Self(0);

    /// Anchor the badge on the left edge.
    pub const LEFT: Self = Self(0x001);
    /// Anchor the badge on the right edge.
    pub const RIGHT: Self = Self(0x002);
    /// Anchor the badge on the top edge.
    pub const TOP: Self = Self(0x004);
    /// Anchor the badge on the bottom edge.
    pub const BOTTOM: Self = Self(0x008);

    /// Draw the secondary shape beneath the primary.
    pub const UNDER: Self = Self(0x010);
    /// Quarter scale tier.
    pub const QUARTER: Self = Self(0x020);
    /// Half scale tier.
    pub const HALF: Self = Self(0x040);
    /// Full scale tier.
    pub const FULL: Self = Self(0x080);

    /// Keep the primary at native size and zoom the secondary per scale tier.
    pub const X1: Self = Self(0x100);
    /// Shrink the secondary to one half.
    pub const X2: Self = Self(0x200);
    /// Shrink the secondary to one third.
    pub const X3: Self = Self(0x400);
    /// Shrink the secondary to one quarter.
    pub const X4: Self = Self(0x800);

    const CORNER_MASK: u32 = 0x00F;
    const SCALE_MASK: u32 = 0x0F0;
    const SHRINK_MASK: u32 = 0xF00;

    /// Create a code from raw bits. Bits outside `0xFFF` are ignored.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits & (Self::CORNER_MASK | Self::SCALE_MASK | Self::SHRINK_MASK))
    }

    /// The raw bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Look up a single flag by name (case-insensitive), e.g. `"half"` or `"X2"`.
    pub fn from_name(name: &str) -> Option<Self> {
        let code = match name.to_ascii_lowercase().as_str() {
            "left" => Self::LEFT,
            "right" => Self::RIGHT,
            "top" => Self::TOP,
            "bottom" => Self::BOTTOM,
            "under" => Self::UNDER,
            "quarter" => Self::QUARTER,
            "half" => Self::HALF,
            "full" => Self::FULL,
            "x1" => Self::X1,
            "x2" => Self::X2,
            "x3" => Self::X3,
            "x4" => Self::X4,
            _ => return None,
        };
        Some(code)
    }

    /// Split into the three sub-fields.
    pub fn decode(self) -> Placement {
        Placement {
            corners: Corners((self.0 & Self::CORNER_MASK) as u8),
            scale: ScaleTiers(((self.0 & Self::SCALE_MASK) >> 4) as u8),
            shrink: ShrinkTiers(((self.0 & Self::SHRINK_MASK) >> 8) as u8),
        }
    }
}

impl std::ops::BitOr for PlacementCode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for PlacementCode {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

macro_rules! flag_set {
    ($(#[$meta:meta])* $name:ident { $($(#[$fmeta:meta])* $flag:ident = $bit:expr),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name(u8);

        impl $name {
            /// No flags set.
            pub const EMPTY: Self = Self(0);
            $($(#[$fmeta])* pub const $flag: Self = Self($bit);)+

            /// Returns true if every flag in `other` is set.
            #[inline]
            pub fn contains(self, other: Self) -> bool {
                (self.0 & other.0) == other.0
            }

            /// Returns true if any flag in `other` is set.
            #[inline]
            pub fn intersects(self, other: Self) -> bool {
                (self.0 & other.0) != 0
            }

            /// Returns true if no flag is set.
            #[inline]
            pub fn is_empty(self) -> bool {
                self.0 == 0
            }
        }

        impl std::ops::BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self::Output {
                Self(self.0 | rhs.0)
            }
        }

        impl std::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }
    };
}

flag_set! {
    /// Edges the badge is anchored to.
    Corners {
        /// Left edge.
        LEFT = 1 << 0,
        /// Right edge.
        RIGHT = 1 << 1,
        /// Top edge.
        TOP = 1 << 2,
        /// Bottom edge.
        BOTTOM = 1 << 3,
    }
}

flag_set! {
    /// Scale tiers; combinations add up.
    ScaleTiers {
        /// Secondary drawn beneath the primary.
        UNDER = 1 << 0,
        /// Quarter tier.
        QUARTER = 1 << 1,
        /// Half tier.
        HALF = 1 << 2,
        /// Full tier.
        FULL = 1 << 3,
    }
}

flag_set! {
    /// Shrink tiers for the secondary shape; combinations add up.
    ShrinkTiers {
        /// Micro-shrink mode.
        X1 = 1 << 0,
        /// One half.
        X2 = 1 << 1,
        /// One third.
        X3 = 1 << 2,
        /// One quarter.
        X4 = 1 << 3,
    }
}

impl ScaleTiers {
    /// Quarter, Half or Full.
    pub const SIZED: Self = Self(Self::QUARTER.0 | Self::HALF.0 | Self::FULL.0);
}

/// Decoded placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Placement {
    /// Requested anchor edges.
    pub corners: Corners,
    /// Scale tier flags.
    pub scale: ScaleTiers,
    /// Shrink tier flags.
    pub shrink: ShrinkTiers,
}

impl From<PlacementCode> for Placement {
    fn from(code: PlacementCode) -> Self {
        code.decode()
    }
}

impl Placement {
    /// Anchor edges after defaulting.
    ///
    /// Unless X1 is set, an empty set becomes bottom-right and a single edge
    /// is completed towards the bottom-right corner.
    pub fn effective_corners(&self) -> Corners {
        let mut corners = self.corners;
        if self.shrink.contains(ShrinkTiers::X1) {
            return corners;
        }

        if corners.is_empty() {
            corners = Corners::BOTTOM | Corners::RIGHT;
        }
        if corners == Corners::LEFT || corners == Corners::RIGHT {
            corners |= Corners::BOTTOM;
        }
        if corners == Corners::TOP || corners == Corners::BOTTOM {
            corners |= Corners::RIGHT;
        }
        corners
    }

    /// Whether both shapes are centred instead of corner-anchored.
    pub fn is_centered(&self) -> bool {
        self.shrink.contains(ShrinkTiers::X1) && self.scale.intersects(ScaleTiers::SIZED)
    }

    /// Divisors applied to the primary (`factor`) and secondary (`zoom`) fits.
    pub fn factors(&self) -> (f32, f32) {
        let mut factor = 0.0;
        if self.scale.is_empty() || self.scale == ScaleTiers::UNDER {
            factor = 1.25;
        }
        if self.scale.contains(ScaleTiers::QUARTER) {
            factor += 2.0;
        }
        if self.scale.contains(ScaleTiers::HALF) {
            factor += 1.25;
        }
        if self.scale.contains(ScaleTiers::FULL) {
            factor += 1.0;
        }

        let mut zoom = 0.0;
        if self.shrink.is_empty() {
            zoom = 2.0;
        }
        if self.shrink.contains(ShrinkTiers::X1) {
            for (tier, step) in [
                (ScaleTiers::QUARTER, 4.0),
                (ScaleTiers::HALF, 2.0),
                (ScaleTiers::FULL, 1.0),
            ] {
                if self.scale.contains(tier) {
                    zoom += step;
                    factor = 1.0;
                }
            }
        }
        if self.shrink.contains(ShrinkTiers::X2) {
            zoom += 2.0;
        }
        if self.shrink.contains(ShrinkTiers::X3) {
            zoom += 3.0;
        }
        if self.shrink.contains(ShrinkTiers::X4) {
            zoom += 4.0;
        }

        // X1 with no sized tier contributes nothing; draw the badge at fitted size.
        if zoom == 0.0 {
            zoom = 1.0;
        }

        (factor, zoom)
    }
}

/// Which nominal shape a draw slot renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeRole {
    /// The main glyph.
    Primary,
    /// The badge glyph.
    Secondary,
}

/// Scale and translation for one shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformPair {
    /// Uniform scale.
    pub scale: Transform2D,
    /// Translation, applied before the scale.
    pub translate: Transform2D,
}

impl TransformPair {
    /// Build from a uniform scale and a translation.
    pub fn new(scale: f32, tx: f32, ty: f32) -> Self {
        Self {
            scale: Transform2D::scale(scale),
            translate: Transform2D::translate(tx, ty),
        }
    }

    /// The combined matrix: translate first, then scale.
    pub fn combined(&self) -> Transform2D {
        self.scale.then(&self.translate)
    }
}

/// One draw call of a layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawSlot {
    /// The shape to draw.
    pub role: ShapeRole,
    /// Its transform.
    pub transform: TransformPair,
}

/// Transforms for an icon stack, in draw order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    /// Drawn first.
    pub first: DrawSlot,
    /// Drawn second, absent for a lone primary shape.
    pub second: Option<DrawSlot>,
    /// True when the secondary is drawn beneath the primary.
    pub swapped: bool,
}

impl Layout {
    /// Slots in draw order.
    pub fn slots(&self) -> impl Iterator<Item = &DrawSlot> {
        std::iter::once(&self.first).chain(self.second.as_ref())
    }

    /// The slot drawing the given shape.
    pub fn slot(&self, role: ShapeRole) -> Option<&DrawSlot> {
        self.slots().find(|slot| slot.role == role)
    }
}

/// Compute the transforms that place the shapes inside `target`.
///
/// Returns `None` when nothing should be drawn: the primary bounds, or the
/// secondary bounds when a secondary is present, have zero area.
pub fn compute_layout(
    placement: Placement,
    primary: Rect,
    secondary: Option<Rect>,
    target: Rect,
    stroke_width: f32,
) -> Option<Layout> {
    if primary.is_empty() {
        return None;
    }

    let Some(secondary) = secondary else {
        return Some(Layout {
            first: DrawSlot {
                role: ShapeRole::Primary,
                transform: centered_fit(primary, target),
            },
            second: None,
            swapped: false,
        });
    };
    if secondary.is_empty() {
        return None;
    }

    let corners = placement.effective_corners();
    let centered = placement.is_centered();
    let (factor, zoom) = placement.factors();

    let first = primary.grow(stroke_width * 2.0);
    let second = secondary.grow(stroke_width * 2.0);

    // Secondary: shrunk by `zoom` and pushed towards the requested corner.
    let second_fit = second.fit_into(&target).height / second.height();
    let second_shift = (second.height() - second.width()) / 2.0;
    let (mut second_left, mut second_top) = if centered {
        (
            (second.width() * zoom - second.width()) / 2.0,
            (second.height() * zoom - second.height()) / 2.0,
        )
    } else {
        (0.0, 0.0)
    };

    if corners.contains(Corners::TOP) {
        second_top = 0.0;
    }
    if corners.contains(Corners::LEFT) {
        second_left = 0.0;
    }
    if corners.contains(Corners::RIGHT) {
        second_left = second.width() * zoom - second.width();
    }
    if corners.contains(Corners::BOTTOM) {
        second_top = second.height() * zoom - second.height();
    }

    let secondary_transform = TransformPair::new(
        second_fit / zoom,
        second_left + second_shift + second.left(),
        second_top + second.top(),
    );

    // Primary: shrunk by `factor`, anchored bottom-right unless Left/Top move it.
    let first_fit = first.fit_into(&target).height / first.height();
    let (mut first_left, mut first_top, first_shift_x, first_shift_y) = if centered {
        (
            (first.width() * factor - first.width()) / 2.0,
            (first.height() * factor - first.height()) / 2.0,
            0.0,
            0.0,
        )
    } else {
        (
            0.0,
            0.0,
            ((first.height() - first.width()) / 2.0).max(0.0),
            ((first.width() - first.height()) / 2.0).max(0.0),
        )
    };

    if corners.contains(Corners::LEFT) {
        first_left = first.width() * factor - (first.width() - first_shift_x);
    }
    if corners.contains(Corners::TOP) {
        first_top = first.height() * factor - (first.height() - first_shift_y);
    }

    let primary_transform = TransformPair::new(
        first_fit / factor,
        first_left + first_shift_x + first.left() + stroke_width,
        first_top + first_shift_y + first.top() + stroke_width,
    );

    let primary_slot = DrawSlot {
        role: ShapeRole::Primary,
        transform: primary_transform,
    };
    let secondary_slot = DrawSlot {
        role: ShapeRole::Secondary,
        transform: secondary_transform,
    };

    let swapped = placement.scale.contains(ScaleTiers::UNDER);
    let (first, second) = if swapped {
        (secondary_slot, primary_slot)
    } else {
        (primary_slot, secondary_slot)
    };

    Some(Layout {
        first,
        second: Some(second),
        swapped,
    })
}

/// Fit a lone shape into `target`, centred on both axes.
fn centered_fit(bounds: Rect, target: Rect) -> TransformPair {
    let size = bounds.fit_into(&target);
    let factor = size.height / bounds.height();
    let left = (target.width() - size.width) / factor / 2.0;
    let top = (target.height() - size.height) / factor / 2.0;

    TransformPair::new(factor, left, top)
}
