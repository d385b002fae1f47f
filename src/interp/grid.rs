use crate::traits::FloatScalar;

/// Uniformly spaced abscissas `xᵢ = x₀ + i·h`, `i = 0 … n-1`.
///
/// A plain descriptor. The spacing is taken as exact; checking that measured
/// abscissas really are uniform is up to whoever builds the grid.
///
/// # Example
///
/// ```
/// use cardinal_spline::UniformGrid;
///
/// let grid = UniformGrid::new(1.0_f64, 0.5, 5);
/// assert_eq!(grid.end(), 3.0);
/// assert_eq!(grid.points().collect::<Vec<_>>(), vec![1.0, 1.5, 2.0, 2.5, 3.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformGrid<T> {
    origin: T,
    spacing: T,
    len: usize,
}

impl<T: FloatScalar> UniformGrid<T> {
    pub fn new(origin: T, spacing: T, len: usize) -> Self {
        Self {
            origin,
            spacing,
            len,
        }
    }

    /// First abscissa `x₀`.
    pub fn start(&self) -> T {
        self.origin
    }

    /// Last abscissa `x₀ + (n-1)·h`.
    pub fn end(&self) -> T {
        self.abscissa(self.len.saturating_sub(1))
    }

    /// Grid spacing `h`.
    pub fn spacing(&self) -> T {
        self.spacing
    }

    /// Number of grid points.
    pub fn num_points(&self) -> usize {
        self.len
    }

    /// Length of the covered range, `(n-1)·h`. This is also the period of a
    /// periodic spline.
    pub fn period(&self) -> T {
        self.end() - self.origin
    }

    /// Abscissa of grid index `i`. Indices past the end extend the grid.
    pub fn abscissa(&self, i: usize) -> T {
        self.origin + self.spacing * T::from(i).unwrap()
    }

    /// All grid abscissas in order.
    pub fn points(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.len).map(move |i| self.abscissa(i))
    }

    /// Query position in grid units, `(x - x₀) / h`.
    pub(crate) fn to_grid_units(&self, x: T) -> T {
        (x - self.origin) / self.spacing
    }
}
