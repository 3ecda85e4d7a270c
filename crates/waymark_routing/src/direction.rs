/// Orientation in which a graph is traversed.
///
/// `Backward` presents every edge with its endpoints swapped, which turns a
/// forward search from `node` into a search over everything that can reach
/// `node`.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

impl Direction {
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }
}
