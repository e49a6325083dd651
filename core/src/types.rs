/// Single coordinate axis used for grid size and positions.
pub type Coord = u8;

/// Count type used for reveal counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Scores, lives and levels.
pub type Points = u32;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Row-major iterator over every coordinate of a square grid.
#[derive(Debug)]
pub struct GridIter {
    size: Coord,
    next: CellCount,
}

impl GridIter {
    pub fn new(size: Coord) -> Self {
        Self { size, next: 0 }
    }
}

impl Iterator for GridIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        if self.size == 0 || self.next >= mult(self.size, self.size) {
            return None;
        }
        let size = CellCount::from(self.size);
        let row = (self.next / size) as Coord;
        let col = (self.next % size) as Coord;
        self.next += 1;
        Some((row, col))
    }
}
