use crate::math::Vector;
use std::ops::{Index, IndexMut, Mul};

/// Column-major matrix with `C` columns and `R` rows. Element `(column, row)`
/// sits at flat index `column * R + row`.
///
/// Both dimensions must lie in 2..=4; other shapes are rejected when the
/// crate is built:
///
/// ```compile_fail
/// let m = flycube::math::Matrix::<9, 1>::from_columns([[2.0; 1]; 9]);
/// println!("{}", m.flat_data().len());
/// ```
///
/// ```compile_fail
/// let m = flycube::math::Matrix::<9, 1> { data: [[2.0; 1]; 9] };
/// ```
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix<const C: usize, const R: usize> {
    pub(crate) data: [[f32; R]; C],
}

pub type Matrix2 = Matrix<2, 2>;
pub type Matrix3 = Matrix<3, 3>;
pub type Matrix4 = Matrix<4, 4>;

impl<const C: usize, const R: usize> Matrix<C, R> {
    const SIZE_CHECK: () = assert!(
        C >= 2 && C <= 4 && R >= 2 && R <= 4,
        "matrices have 2 to 4 columns and rows"
    );

    pub const fn from_columns(data: [[f32; R]; C]) -> Self {
        let () = Self::SIZE_CHECK;
        Self { data }
    }

    pub const fn zero() -> Self {
        Self::from_columns([[0.0; R]; C])
    }

    pub fn column(&self, index: usize) -> &[f32; R] {
        assert!(index < C, "column {} out of range for {} columns", index, C);
        &self.data[index]
    }

    pub fn column_mut(&mut self, index: usize) -> &mut [f32; R] {
        assert!(index < C, "column {} out of range for {} columns", index, C);
        &mut self.data[index]
    }

    /// All `C * R` elements, column by column.
    pub fn flat_data(&self) -> &[f32] {
        self.data.as_flattened()
    }
}

impl<const N: usize> Matrix<N, N> {
    pub fn identity() -> Self {
        let mut result = Self::zero();
        for i in 0..N {
            result.data[i][i] = 1.0;
        }
        result
    }
}

impl Matrix<2, 2> {
    pub const fn new(c0r0: f32, c0r1: f32, c1r0: f32, c1r1: f32) -> Self {
        Self::from_columns([[c0r0, c0r1], [c1r0, c1r1]])
    }
}

impl Matrix<3, 3> {
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        c0r0: f32, c0r1: f32, c0r2: f32,
        c1r0: f32, c1r1: f32, c1r2: f32,
        c2r0: f32, c2r1: f32, c2r2: f32,
    ) -> Self {
        Self::from_columns([
            [c0r0, c0r1, c0r2],
            [c1r0, c1r1, c1r2],
            [c2r0, c2r1, c2r2],
        ])
    }
}

impl Matrix<4, 4> {
    /// Elements are given column by column.
    #[allow(clippy::too_many_arguments)]
    #[rustfmt::skip]
    pub const fn new(
        c0r0: f32, c0r1: f32, c0r2: f32, c0r3: f32,
        c1r0: f32, c1r1: f32, c1r2: f32, c1r3: f32,
        c2r0: f32, c2r1: f32, c2r2: f32, c2r3: f32,
        c3r0: f32, c3r1: f32, c3r2: f32, c3r3: f32,
    ) -> Self {
        Self::from_columns([
            [c0r0, c0r1, c0r2, c0r3],
            [c1r0, c1r1, c1r2, c1r3],
            [c2r0, c2r1, c2r2, c2r3],
            [c3r0, c3r1, c3r2, c3r3],
        ])
    }

    pub fn to_cols_array(&self) -> [f32; 16] {
        bytemuck::cast(self.data)
    }

    pub fn to_cols_array_2d(&self) -> [[f32; 4]; 4] {
        self.data
    }
}

impl<const C: usize, const R: usize> Default for Matrix<C, R> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const C: usize, const R: usize> Index<usize> for Matrix<C, R> {
    type Output = [f32; R];

    fn index(&self, column: usize) -> &[f32; R] {
        self.column(column)
    }
}

impl<const C: usize, const R: usize> IndexMut<usize> for Matrix<C, R> {
    fn index_mut(&mut self, column: usize) -> &mut [f32; R] {
        self.column_mut(column)
    }
}

/// `C x R` times `K x C` gives `K x R`.
impl<const C: usize, const R: usize, const K: usize> Mul<Matrix<K, C>> for Matrix<C, R> {
    type Output = Matrix<K, R>;

    fn mul(self, rhs: Matrix<K, C>) -> Matrix<K, R> {
        let mut result = Matrix::<K, R>::zero();

        for j in 0..K {
            for i in 0..R {
                for k in 0..C {
                    result.data[j][i] += self.data[k][i] * rhs.data[j][k];
                }
            }
        }

        result
    }
}

impl<const C: usize, const R: usize> Mul<Vector<C>> for Matrix<C, R> {
    type Output = Vector<R>;

    fn mul(self, rhs: Vector<C>) -> Vector<R> {
        let mut result = Vector::<R>::zero();

        for i in 0..R {
            for k in 0..C {
                result.data[i] += self.data[k][i] * rhs.data[k];
            }
        }

        result
    }
}

impl From<Matrix4> for [[f32; 4]; 4] {
    fn from(mat: Matrix4) -> Self {
        mat.data
    }
}

unsafe impl<const C: usize, const R: usize> bytemuck::Zeroable for Matrix<C, R> {}
unsafe impl<const C: usize, const R: usize> bytemuck::Pod for Matrix<C, R> {}
