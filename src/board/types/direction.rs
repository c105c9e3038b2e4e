//! Ray directions used by check/pin detection and slider generation.

use super::piece::Piece;

/// Geometry of a ray from a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RayKind {
    Orthogonal,
    Diagonal,
}

impl RayKind {
    /// Whether a piece of this type attacks along rays of this kind from any distance.
    #[inline]
    pub(crate) const fn slider_threat(self, piece: Piece) -> bool {
        match self {
            RayKind::Orthogonal => piece.attacks_straight(),
            RayKind::Diagonal => piece.attacks_diagonally(),
        }
    }
}

/// A (rank, file) step paired with the kind of ray it walks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Direction {
    pub d_rank: isize,
    pub d_file: isize,
    pub kind: RayKind,
}

impl Direction {
    /// A unit step, classified by whether it moves along one axis or both.
    #[inline]
    pub(crate) const fn new(d_rank: isize, d_file: isize) -> Self {
        if d_rank == 0 || d_file == 0 {
            Direction::orthogonal(d_rank, d_file)
        } else {
            Direction::diagonal(d_rank, d_file)
        }
    }

    const fn orthogonal(d_rank: isize, d_file: isize) -> Self {
        Direction {
            d_rank,
            d_file,
            kind: RayKind::Orthogonal,
        }
    }

    const fn diagonal(d_rank: isize, d_file: isize) -> Self {
        Direction {
            d_rank,
            d_file,
            kind: RayKind::Diagonal,
        }
    }

    /// The same line walked the other way
    #[inline]
    pub(crate) const fn reversed(self) -> Self {
        Direction {
            d_rank: -self.d_rank,
            d_file: -self.d_file,
            kind: self.kind,
        }
    }

    /// True if `other` lies on the same line, in either sense
    #[inline]
    pub(crate) fn is_axis_of(self, other: Direction) -> bool {
        self == other || self.reversed() == other
    }
}

const ORTHOGONALS: [Direction; 4] = [
    Direction::orthogonal(1, 0),
    Direction::orthogonal(-1, 0),
    Direction::orthogonal(0, 1),
    Direction::orthogonal(0, -1),
];

const DIAGONALS: [Direction; 4] = [
    Direction::diagonal(1, 1),
    Direction::diagonal(1, -1),
    Direction::diagonal(-1, 1),
    Direction::diagonal(-1, -1),
];

pub(crate) const ALL_DIRECTIONS: [Direction; 8] = [
    ORTHOGONALS[0],
    ORTHOGONALS[1],
    ORTHOGONALS[2],
    ORTHOGONALS[3],
    DIAGONALS[0],
    DIAGONALS[1],
    DIAGONALS[2],
    DIAGONALS[3],
];

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
    (2, 1),
    (-2, 1),
    (2, -1),
    (-2, -1),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];
