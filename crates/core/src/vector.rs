use std::ops::Index;

use ndarray::Array1;

use crate::Scalar;

/// Whether a vector is laid out as a row or a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Row,
    Column,
}

/// A dense, mutable vector of scalars with an orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<S> {
    orientation: Orientation,
    data: Array1<S>,
}

impl<S: Scalar> Vector<S> {
    /// Creates a vector of `len` zeros.
    #[must_use]
    pub fn zeros(orientation: Orientation, len: usize) -> Self {
        Self {
            orientation,
            data: Array1::zeros(len),
        }
    }

    /// Creates a vector from its entries.
    #[must_use]
    pub fn from_vec(orientation: Orientation, values: Vec<S>) -> Self {
        Self {
            orientation,
            data: Array1::from_vec(values),
        }
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the entry at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    #[must_use]
    pub fn get(&self, index: usize) -> S {
        self.data[index]
    }

    /// Sets the entry at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn set(&mut self, index: usize, value: S) {
        self.data[index] = value;
    }

    /// Returns an iterator over the entries.
    pub fn iter(&self) -> impl Iterator<Item = &S> {
        self.data.iter()
    }

    /// Returns the same entries with the other orientation.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let orientation = match self.orientation {
            Orientation::Row => Orientation::Column,
            Orientation::Column => Orientation::Row,
        };
        Self {
            orientation,
            data: self.data.clone(),
        }
    }
}

impl<S> Index<usize> for Vector<S> {
    type Output = S;

    fn index(&self, index: usize) -> &S {
        &self.data[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_then_set() {
        let mut v = Vector::<f64>::zeros(Orientation::Row, 3);
        v.set(1, 2.5);

        assert_eq!(v.len(), 3);
        assert_eq!(v.get(1), 2.5);
        assert_eq!(v[0], 0.0);
    }

    #[test]
    fn transpose_flips_orientation_only() {
        let v = Vector::from_vec(Orientation::Column, vec![1.0, 2.0]);
        let t = v.transpose();

        assert_eq!(t.orientation(), Orientation::Row);
        assert_eq!(t.iter().copied().collect::<Vec<_>>(), vec![1.0, 2.0]);
    }
}
