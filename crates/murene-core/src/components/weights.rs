//! Link-weight matrix between agents.

/// Off-diagonal value at construction
pub const INITIAL_WEIGHT: f64 = 0.5;
/// Lower clamp for off-diagonal weights
pub const WEIGHT_MIN: f64 = 0.01;
/// Upper clamp for off-diagonal weights
pub const WEIGHT_MAX: f64 = 1.0;

/// Dense N×N matrix, row-major. The diagonal is 0 and is never written
/// after construction; it is excluded from updates and clamping.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightMatrix {
    size: usize,
    values: Vec<f64>,
}

impl WeightMatrix {
    /// Matrix with `initial` everywhere off the diagonal and 0 on it.
    pub fn new(size: usize, initial: f64) -> Self {
        let mut values = vec![initial; size * size];
        for i in 0..size {
            values[i * size + i] = 0.0;
        }
        Self { size, values }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    /// Adds `delta` to an off-diagonal entry. Diagonal writes are ignored.
    pub fn add(&mut self, i: usize, j: usize, delta: f64) {
        if i != j {
            self.values[i * self.size + j] += delta;
        }
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }

    /// Clamp every off-diagonal entry into [lo, hi]
    pub fn clamp_off_diagonal(&mut self, lo: f64, hi: f64) {
        let size = self.size;
        for (idx, w) in self.values.iter_mut().enumerate() {
            if idx / size != idx % size {
                *w = w.clamp(lo, hi);
            }
        }
    }

    /// Iterates over `(i, j, weight)` for every i != j
    pub fn off_diagonal(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        let size = self.size;
        self.values
            .iter()
            .enumerate()
            .map(move |(idx, &w)| (idx / size, idx % size, w))
            .filter(|(i, j, _)| i != j)
    }

    pub fn diagonal(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.size).map(move |i| self.get(i, i))
    }

    /// Rows as nested vectors, for display and serialization
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.size).map(|i| self.row(i).to_vec()).collect()
    }
}
