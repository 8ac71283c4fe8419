use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// Fixed-size vector of 2 to 4 `f32` components.
///
/// Any other size is rejected when the crate is built:
///
/// ```compile_fail
/// let v = flycube::math::Vector::<7>::from_array([1.0; 7]);
/// println!("{}", v.length());
/// ```
///
/// The components are only reachable through constructors and accessors:
///
/// ```compile_fail
/// let v = flycube::math::Vector::<7> { data: [1.0; 7] };
/// ```
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vector<const N: usize> {
    pub(crate) data: [f32; N],
}

pub type Vector2 = Vector<2>;
pub type Vector3 = Vector<3>;
pub type Vector4 = Vector<4>;

impl<const N: usize> Vector<N> {
    const SIZE_CHECK: () = assert!(N >= 2 && N <= 4, "vectors have 2 to 4 components");

    pub const fn from_array(data: [f32; N]) -> Self {
        let () = Self::SIZE_CHECK;
        Self { data }
    }

    pub const fn zero() -> Self {
        Self::from_array([0.0; N])
    }

    pub fn as_array(&self) -> &[f32; N] {
        &self.data
    }

    /// Exact comparison against zero, component by component.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&c| c == 0.0)
    }

    pub fn length_squared(&self) -> f32 {
        self.data.iter().map(|c| c * c).sum()
    }

    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Divides every component by the length. A zero vector yields NaN
    /// components; callers that can see one must check `is_zero` first.
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    pub fn x(&self) -> f32 {
        self.data[0]
    }

    pub fn y(&self) -> f32 {
        self.data[1]
    }

    pub fn x_mut(&mut self) -> &mut f32 {
        &mut self.data[0]
    }

    pub fn y_mut(&mut self) -> &mut f32 {
        &mut self.data[1]
    }
}

impl Vector<2> {
    pub const fn new(x: f32, y: f32) -> Self {
        Self::from_array([x, y])
    }
}

impl Vector<3> {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self::from_array([x, y, z])
    }

    pub fn z(&self) -> f32 {
        self.data[2]
    }

    pub fn z_mut(&mut self) -> &mut f32 {
        &mut self.data[2]
    }
}

impl Vector<4> {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self::from_array([x, y, z, w])
    }

    pub fn z(&self) -> f32 {
        self.data[2]
    }

    pub fn w(&self) -> f32 {
        self.data[3]
    }

    pub fn z_mut(&mut self) -> &mut f32 {
        &mut self.data[2]
    }

    pub fn w_mut(&mut self) -> &mut f32 {
        &mut self.data[3]
    }
}

impl<const N: usize> Default for Vector<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> From<[f32; N]> for Vector<N> {
    fn from(data: [f32; N]) -> Self {
        Self::from_array(data)
    }
}

impl<const N: usize> From<Vector<N>> for [f32; N] {
    fn from(vector: Vector<N>) -> Self {
        vector.data
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        assert!(index < N, "vector index {} out of range for size {}", index, N);
        &self.data[index]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        assert!(index < N, "vector index {} out of range for size {}", index, N);
        &mut self.data[index]
    }
}

impl<const N: usize> AddAssign for Vector<N> {
    fn add_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.data.iter_mut().zip(rhs.data) {
            *lhs += rhs;
        }
    }
}

impl<const N: usize> SubAssign for Vector<N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (lhs, rhs) in self.data.iter_mut().zip(rhs.data) {
            *lhs -= rhs;
        }
    }
}

impl<const N: usize> MulAssign<f32> for Vector<N> {
    fn mul_assign(&mut self, rhs: f32) {
        for c in &mut self.data {
            *c *= rhs;
        }
    }
}

impl<const N: usize> DivAssign<f32> for Vector<N> {
    fn div_assign(&mut self, rhs: f32) {
        for c in &mut self.data {
            *c /= rhs;
        }
    }
}

impl<const N: usize> Add for Vector<N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<const N: usize> Sub for Vector<N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<const N: usize> Mul<f32> for Vector<N> {
    type Output = Self;

    fn mul(mut self, rhs: f32) -> Self {
        self *= rhs;
        self
    }
}

impl<const N: usize> Div<f32> for Vector<N> {
    type Output = Self;

    fn div(mut self, rhs: f32) -> Self {
        self /= rhs;
        self
    }
}

impl<const N: usize> Neg for Vector<N> {
    type Output = Self;

    fn neg(mut self) -> Self {
        for c in &mut self.data {
            *c = -*c;
        }
        self
    }
}

unsafe impl<const N: usize> bytemuck::Zeroable for Vector<N> {}
unsafe impl<const N: usize> bytemuck::Pod for Vector<N> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_then_subtract_restores_vector() {
        let v = Vector3::new(1.0, -2.0, 3.0);
        let w = Vector3::new(4.0, 5.0, -6.0);
        assert_eq!((v + w) - w, v);

        let v = Vector4::new(7.0, 0.0, -1.0, 2.0);
        let w = Vector4::new(-3.0, 8.0, 1.0, 0.5);
        assert_eq!((v + w) - w, v);
    }

    #[test]
    fn test_compound_operators_mutate_in_place() {
        let mut v = Vector2::new(2.0, 4.0);
        v += Vector2::new(1.0, 1.0);
        assert_eq!(v, Vector2::new(3.0, 5.0));
        v -= Vector2::new(3.0, 1.0);
        assert_eq!(v, Vector2::new(0.0, 4.0));
        v *= 2.0;
        assert_eq!(v, Vector2::new(0.0, 8.0));
        v /= 4.0;
        assert_eq!(v, Vector2::new(0.0, 2.0));
    }

    #[test]
    fn test_negate_and_scale() {
        let v = Vector3::new(1.0, -2.0, 0.5);
        assert_eq!(-v, Vector3::new(-1.0, 2.0, -0.5));
        assert_eq!(v * 2.0, Vector3::new(2.0, -4.0, 1.0));
        assert_eq!(v / 2.0, Vector3::new(0.5, -1.0, 0.25));
    }

    #[test]
    fn test_length() {
        let v = Vector3::new(2.0, 3.0, 6.0);
        assert_eq!(v.length_squared(), 49.0);
        assert_eq!(v.length(), 7.0);
    }

    #[test]
    fn test_normalize_has_unit_length() {
        let samples = [
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(3.0, 4.0, 0.0),
            Vector3::new(-0.25, 10.0, 7.5),
            Vector3::new(1e-3, -2e-3, 5e-4),
        ];
        for v in samples {
            assert!((v.normalize().length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_normalize_zero_is_nan() {
        let v = Vector4::zero().normalize();
        assert!(v.data.iter().all(|c| c.is_nan()));
    }

    #[test]
    fn test_is_zero() {
        assert!(Vector4::default().is_zero());
        assert!(Vector2::new(0.0, -0.0).is_zero());
        assert!(!Vector3::new(0.0, 1e-30, 0.0).is_zero());
    }

    #[test]
    fn test_named_accessors() {
        let mut v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!((v.x(), v.y(), v.z(), v.w()), (1.0, 2.0, 3.0, 4.0));
        *v.z_mut() += 1.0;
        *v.w_mut() = 0.0;
        assert_eq!(v, Vector4::new(1.0, 2.0, 4.0, 0.0));
        assert_eq!(v[2], 4.0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_out_of_bounds_panics() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let _ = v[3];
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_mut_out_of_bounds_panics() {
        let mut v = Vector4::new(1.0, 2.0, 3.0, 4.0);
        v[4] = 5.0;
    }

    #[test]
    fn test_from_array_round_trip() {
        let v = Vector3::from([1.0, 2.0, 3.0]);
        assert_eq!(v.as_array(), &[1.0, 2.0, 3.0]);
        assert_eq!(<[f32; 3]>::from(v), [1.0, 2.0, 3.0]);
    }
}
