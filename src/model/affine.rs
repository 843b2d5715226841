use serde::{Deserialize, Serialize};

/// Row-major 3x4 affine transform: a 3x3 linear part followed by a
/// translation column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AffineTransform3D {
    pub rows: [[f64; 4]; 3],
}

impl Default for AffineTransform3D {
    fn default() -> Self {
        Self::identity()
    }
}

impl AffineTransform3D {
    pub const fn identity() -> Self {
        Self {
            rows: [
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
            ],
        }
    }

    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        let mut transform = Self::identity();
        transform.rows[0][3] = x;
        transform.rows[1][3] = y;
        transform.rows[2][3] = z;
        transform
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// `self * other`: applies `other` first, then `self`.
    pub fn concatenate(&self, other: &Self) -> Self {
        let mut rows = [[0.0; 4]; 3];
        for (r, row) in rows.iter_mut().enumerate() {
            for c in 0..4 {
                let mut sum = if c == 3 { self.rows[r][3] } else { 0.0 };
                for k in 0..3 {
                    sum += self.rows[r][k] * other.rows[k][c];
                }
                row[c] = sum;
            }
        }
        Self { rows }
    }

    pub fn apply(&self, point: [f64; 3]) -> [f64; 3] {
        let mut out = [0.0; 3];
        for (r, value) in out.iter_mut().enumerate() {
            *value = self.rows[r][0] * point[0]
                + self.rows[r][1] * point[1]
                + self.rows[r][2] * point[2]
                + self.rows[r][3];
        }
        out
    }
}
