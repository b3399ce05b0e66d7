use std::fmt;

use crate::{Coords, Polygon, idx::SliceExt, math};

/// The result of [Polygon::validate]
///
/// A polygon with no problems can be expected to separate successfully. The problems are also
/// packed into a numeric [Validation::status] code: `0` when valid, bit `1` set for overlapping
/// segments and bit `2` set when the polygon is not clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Validation {
    overlapping_segments: bool,
    not_clockwise: bool,
}

impl Validation {
    /// `0` if valid, otherwise `1` for overlapping segments, `2` for a polygon which is not clockwise, `3` for both
    pub fn status(&self) -> u8 {
        let mut status = 0;
        if self.overlapping_segments {
            status |= 1;
        }
        if self.not_clockwise {
            status |= 2;
        }
        status
    }

    pub fn has_overlapping_segments(&self) -> bool {
        self.overlapping_segments
    }

    pub fn is_clockwise(&self) -> bool {
        !self.not_clockwise
    }

    pub fn is_valid(&self) -> bool {
        self.status() == 0
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.overlapping_segments, self.not_clockwise) {
            (false, false) => write!(f, "valid"),
            (true, false) => write!(f, "overlapping segments"),
            (false, true) => write!(f, "not clockwise"),
            (true, true) => write!(f, "overlapping segments, not clockwise"),
        }
    }
}

pub(crate) fn validate<P: Polygon + ?Sized>(polygon: &P) -> Validation {
    let vs: Vec<Coords<_>> = polygon.iter_indices().map(|index| Coords::from_vertex(polygon.get_vertex(index))).collect();
    if vs.is_empty() {
        return Validation::default();
    }

    let mut validation = Validation::default();
    for i in vs.iter_index() {
        let i2 = i.next_wrapped(&vs);
        let i0 = i.prev_wrapped(&vs);

        // An edge is clockwise if any other vertex lies to its right. This does not prove the
        // whole polygon is convex or clockwise, only that no edge has every vertex on its left.
        let mut clockwise_edge = false;
        for j in vs.iter_index().filter(|&j| j != i && j != i2) {
            if !clockwise_edge && math::orientation(&vs[i], &vs[i2], &vs[j]) < num_traits::zero() {
                clockwise_edge = true;
            }

            // Neighbouring edges always meet at their shared vertex
            if j != i0 {
                let j2 = j.next_wrapped(&vs);
                if math::hit_segment(&vs[i], &vs[i2], &vs[j], &vs[j2]).is_some() {
                    validation.overlapping_segments = true;
                }
            }
        }

        if !clockwise_edge {
            validation.not_clockwise = true;
        }
    }
    validation
}
