use ndarray::Array2;

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Coordinates as requested by a player, not yet checked against the board.
pub type Point = (i64, i64);

/// Grids are stored row-major, so `(x, y)` maps to the ndarray index `[y, x]`.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

/// Shape of an ndarray grid for a board of `(width, height)`.
pub fn grid_shape((width, height): Coord2) -> [usize; 2] {
    [height.into(), width.into()]
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Checks a signed point against `size`, both lower and upper bounds.
pub fn checked_coords((x, y): Point, (width, height): Coord2) -> Option<Coord2> {
    let x = Coord::try_from(x).ok().filter(|&x| x < width)?;
    let y = Coord::try_from(y).ok().filter(|&y| y < height)?;
    Some((x, y))
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, coords: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        // dimensions always come from a `Coord2`, so they fit
        let size = (cols as Coord, rows as Coord);
        NeighborIter::new(coords, size)
    }
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx.into())?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy.into())?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

/// Iterates the up-to-8 in-bounds neighbors of a cell.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
