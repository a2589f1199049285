//! 2D刚体变换
//!
//! 碎片局部坐标系与纹理参考系都只涉及平移和旋转。

use crate::math::{Matrix3, Point2, Vector2};

/// 平移加旋转的齐次变换
#[derive(Debug, Clone, Copy)]
pub struct Transform2D {
    matrix: Matrix3,
}

impl Transform2D {
    /// 先绕原点旋转 `angle`，再平移 `offset`
    pub fn rigid(angle: f64, offset: &Vector2) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            matrix: Matrix3::new(
                cos, -sin, offset.x,
                sin, cos, offset.y,
                0.0, 0.0, 1.0,
            ),
        }
    }

    pub fn translation_by(offset: &Vector2) -> Self {
        Self::rigid(0.0, offset)
    }

    /// 绕原点旋转
    pub fn rotation(angle: f64) -> Self {
        Self::rigid(angle, &Vector2::zeros())
    }

    /// 逆变换，旋转部分取转置
    pub fn inverse(&self) -> Self {
        let rotation = self.matrix.fixed_view::<2, 2>(0, 0).transpose();
        let offset = -(rotation * Vector2::new(self.matrix[(0, 2)], self.matrix[(1, 2)]));
        let mut matrix = Matrix3::identity();
        matrix.fixed_view_mut::<2, 2>(0, 0).copy_from(&rotation);
        matrix[(0, 2)] = offset.x;
        matrix[(1, 2)] = offset.y;
        Self { matrix }
    }

    pub fn transform_point(&self, point: &Point2) -> Point2 {
        let v = self.matrix * nalgebra::Vector3::new(point.x, point.y, 1.0);
        Point2::new(v.x, v.y)
    }

    /// 向量不受平移影响
    pub fn transform_vector(&self, vector: &Vector2) -> Vector2 {
        let v = self.matrix * nalgebra::Vector3::new(vector.x, vector.y, 0.0);
        Vector2::new(v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{approx_eq, points_approx_eq};
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_translation_ignores_vectors() {
        let t = Transform2D::translation_by(&Vector2::new(10.0, 20.0));
        assert!(points_approx_eq(
            &t.transform_point(&Point2::new(5.0, 5.0)),
            &Point2::new(15.0, 25.0)
        ));

        let v = t.transform_vector(&Vector2::new(1.0, 0.0));
        assert!(approx_eq(v.x, 1.0) && approx_eq(v.y, 0.0));
    }

    #[test]
    fn test_rigid_rotates_then_translates() {
        let t = Transform2D::rigid(FRAC_PI_2, &Vector2::new(1.0, 0.0));
        assert!(points_approx_eq(
            &t.transform_point(&Point2::new(1.0, 0.0)),
            &Point2::new(1.0, 1.0)
        ));
    }

    #[test]
    fn test_inverse_restores_point() {
        let t = Transform2D::rigid(0.5, &Vector2::new(10.0, 20.0));
        let p = Point2::new(100.0, 200.0);
        let restored = t.inverse().transform_point(&t.transform_point(&p));
        assert!(points_approx_eq(&restored, &p));
    }
}
