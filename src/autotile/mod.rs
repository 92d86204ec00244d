//! # Autotile Layouts
//!
//! Maps each connectivity role of an autotile to the cell it occupies in a
//! source sheet. Cells are numbered row-major, left to right then top to
//! bottom, starting at 0.

use std::fmt;

use crate::error::SliceError;

/// Connectivity variant depicted by a single slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Unconnected,
    Center,
    EdgeNs,
    EdgeEw,
    CornerNe,
    CornerSe,
    CornerSw,
    CornerNw,
    TConnectionN,
    TConnectionE,
    TConnectionS,
    TConnectionW,
    EndPieceN,
    EndPieceE,
    EndPieceS,
    EndPieceW,
}

impl Role {
    /// Every role, in table order. Corners run clockwise from north-east.
    pub const ALL: [Role; 16] = [
        Role::Unconnected,
        Role::Center,
        Role::EdgeNs,
        Role::EdgeEw,
        Role::CornerNe,
        Role::CornerSe,
        Role::CornerSw,
        Role::CornerNw,
        Role::TConnectionN,
        Role::TConnectionE,
        Role::TConnectionS,
        Role::TConnectionW,
        Role::EndPieceN,
        Role::EndPieceE,
        Role::EndPieceS,
        Role::EndPieceW,
    ];

    /// Suffix used in output filenames and descriptor references
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Unconnected => "unconnected",
            Role::Center => "center",
            Role::EdgeNs => "edge_ns",
            Role::EdgeEw => "edge_ew",
            Role::CornerNe => "corner_ne",
            Role::CornerSe => "corner_se",
            Role::CornerSw => "corner_sw",
            Role::CornerNw => "corner_nw",
            Role::TConnectionN => "t_connection_n",
            Role::TConnectionE => "t_connection_e",
            Role::TConnectionS => "t_connection_s",
            Role::TConnectionW => "t_connection_w",
            Role::EndPieceN => "end_piece_n",
            Role::EndPieceE => "end_piece_e",
            Role::EndPieceS => "end_piece_s",
            Role::EndPieceW => "end_piece_w",
        }
    }

    fn position(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 6 rows of 8 cells. Indexed by `Role::position`.
const LAYOUT_48: [usize; 16] = [
    10, // unconnected
    11, // center
    3,  // edge_ns |
    2,  // edge_ew -
    1,  // corner_ne ↗
    9,  // corner_se ↘
    8,  // corner_sw ↙
    0,  // corner_nw ↖
    24, // t_connection_n
    26, // t_connection_e
    25, // t_connection_s
    27, // t_connection_w
    16, // end_piece_n
    19, // end_piece_e
    18, // end_piece_s
    17, // end_piece_w
];

/// 4 rows of 4 cells. Indexed by `Role::position`.
const LAYOUT_16: [usize; 16] = [
    15, // unconnected
    5,  // center
    7,  // edge_ns |
    13, // edge_ew -
    2,  // corner_ne ↗
    10, // corner_se ↘
    8,  // corner_sw ↙
    0,  // corner_nw ↖
    1,  // t_connection_n
    6,  // t_connection_e
    9,  // t_connection_s
    4,  // t_connection_w
    3,  // end_piece_n
    14, // end_piece_e
    11, // end_piece_s
    12, // end_piece_w
];

/// Sheet arrangement, identified by how many slices the source yields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Slices16,
    Slices48,
}

impl Layout {
    pub fn from_slice_count(count: usize) -> Result<Self, SliceError> {
        match count {
            16 => Ok(Layout::Slices16),
            48 => Ok(Layout::Slices48),
            other => Err(SliceError::UnsupportedLayout(other)),
        }
    }

    pub fn slice_count(self) -> usize {
        match self {
            Layout::Slices16 => 16,
            Layout::Slices48 => 48,
        }
    }

    fn table(self) -> &'static [usize; 16] {
        match self {
            Layout::Slices16 => &LAYOUT_16,
            Layout::Slices48 => &LAYOUT_48,
        }
    }

    pub fn index_of(self, role: Role) -> usize {
        self.table()[role.position()]
    }

    /// `(role, slice index)` pairs in table order
    pub fn entries(self) -> impl Iterator<Item = (Role, usize)> {
        Role::ALL.into_iter().map(move |role| (role, self.index_of(role)))
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::Slices16 => write!(f, "16-slice (4x4)"),
            Layout::Slices48 => write!(f, "48-slice (8x6)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn selects_layout_by_slice_count() {
        assert_eq!(Layout::from_slice_count(16).unwrap(), Layout::Slices16);
        assert_eq!(Layout::from_slice_count(48).unwrap(), Layout::Slices48);
        assert!(matches!(
            Layout::from_slice_count(20),
            Err(SliceError::UnsupportedLayout(20))
        ));
        assert!(matches!(
            Layout::from_slice_count(0),
            Err(SliceError::UnsupportedLayout(0))
        ));
    }

    #[test]
    fn indices_are_in_range_and_distinct() {
        for layout in [Layout::Slices16, Layout::Slices48] {
            let indices: Vec<usize> = layout.entries().map(|(_, i)| i).collect();
            assert_eq!(indices.len(), 16);
            assert!(indices.iter().all(|&i| i < layout.slice_count()));
            let unique: HashSet<_> = indices.iter().collect();
            assert_eq!(unique.len(), indices.len(), "{} has duplicate cells", layout);
        }
    }

    #[test]
    fn small_layout_covers_every_cell() {
        let mut indices: Vec<usize> = Layout::Slices16.entries().map(|(_, i)| i).collect();
        indices.sort_unstable();
        assert_eq!(indices, (0..16).collect::<Vec<_>>());
    }

    #[test]
    fn known_positions() {
        assert_eq!(Layout::Slices48.index_of(Role::Unconnected), 10);
        assert_eq!(Layout::Slices48.index_of(Role::TConnectionW), 27);
        assert_eq!(Layout::Slices48.index_of(Role::EndPieceE), 19);
        assert_eq!(Layout::Slices16.index_of(Role::Unconnected), 15);
        assert_eq!(Layout::Slices16.index_of(Role::EdgeEw), 13);
        assert_eq!(Layout::Slices16.index_of(Role::CornerSe), 10);
    }

    #[test]
    fn entries_follow_role_order() {
        let roles: Vec<&str> = Layout::Slices16.entries().map(|(r, _)| r.as_str()).collect();
        assert_eq!(roles.first(), Some(&"unconnected"));
        assert_eq!(roles.last(), Some(&"end_piece_w"));
        assert_eq!(roles[7], "corner_nw");
    }
}
