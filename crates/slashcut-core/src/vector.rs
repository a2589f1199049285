//! 2D向量运算
//!
//! 点与向量共用同一套基本运算。nalgebra 已经提供了运算符，
//! 这里的函数把切割算法用到的运算集中在一处，方便阅读算法时对照。

use crate::math::{Point2, Vector2, EPSILON};

#[inline]
pub fn add(a: &Vector2, b: &Vector2) -> Vector2 {
    a + b
}

#[inline]
pub fn sub(a: &Point2, b: &Point2) -> Vector2 {
    a - b
}

#[inline]
pub fn scale(v: &Vector2, c: f64) -> Vector2 {
    v * c
}

/// 两点间距离，省略 `b` 时为到原点的距离
#[inline]
pub fn length(a: &Point2, b: Option<&Point2>) -> f64 {
    let origin = Point2::origin();
    let b = b.unwrap_or(&origin);
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// 单位向量
///
/// 调用方必须保证 `v` 非零；零向量请使用 [`try_unit`]。
#[inline]
pub fn unit(v: &Vector2) -> Vector2 {
    debug_assert!(v.norm() > EPSILON, "unit() of a zero-length vector");
    v / v.norm()
}

/// 单位向量，零长度时返回 `None`
#[inline]
pub fn try_unit(v: &Vector2) -> Option<Vector2> {
    let len = v.norm();
    (len > EPSILON).then(|| v / len)
}

/// 内积 = |a||b|cosθ
#[inline]
pub fn dot(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.x + a.y * b.y
}

/// 外积的 z 分量 = |a||b|sinθ
#[inline]
pub fn cross(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// 两点中点
#[inline]
pub fn midpoint(a: &Point2, b: &Point2) -> Point2 {
    Point2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// 从 `a` 转到 `b` 的有符号角度，范围 `(-π, π]`
///
/// 任一向量为零时返回 0。
#[inline]
pub fn angle_between(a: &Vector2, b: &Vector2) -> f64 {
    cross(a, b).atan2(dot(a, b))
}

/// 点 `p` 到直线 `(a, b)` 的垂足
///
/// 直线退化为一点时返回该点。
pub fn nearest_point_on_line(p: &Point2, a: &Point2, b: &Point2) -> Point2 {
    let ab = b - a;
    let ap = p - a;
    let denom = dot(&ab, &ab);
    if denom < EPSILON {
        return *a;
    }
    a + ab * (dot(&ab, &ap) / denom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{approx_eq, points_approx_eq};

    #[test]
    fn test_length() {
        let a = Point2::new(3.0, 4.0);
        assert!(approx_eq(length(&a, None), 5.0));
        assert!(approx_eq(length(&a, Some(&Point2::new(3.0, 1.0))), 3.0));
    }

    #[test]
    fn test_cross_and_dot() {
        let x = Vector2::new(1.0, 0.0);
        let y = Vector2::new(0.0, 1.0);
        assert!(approx_eq(cross(&x, &y), 1.0));
        assert!(approx_eq(cross(&y, &x), -1.0));
        assert!(approx_eq(dot(&x, &y), 0.0));
        assert!(approx_eq(angle_between(&x, &y), std::f64::consts::FRAC_PI_2));
    }

    #[test]
    fn test_unit() {
        let v = unit(&Vector2::new(0.0, -7.0));
        assert!(approx_eq(v.norm(), 1.0));
        assert!(approx_eq(v.y, -1.0));
        assert!(try_unit(&Vector2::zeros()).is_none());
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -1.0);
        assert_eq!(add(&a, &b), Vector2::new(4.0, 1.0));
        assert_eq!(scale(&a, 3.0), Vector2::new(3.0, 6.0));
        assert_eq!(
            sub(&Point2::new(5.0, 5.0), &Point2::new(2.0, 1.0)),
            Vector2::new(3.0, 4.0)
        );
        assert!(points_approx_eq(
            &midpoint(&Point2::new(0.0, 0.0), &Point2::new(4.0, -2.0)),
            &Point2::new(2.0, -1.0)
        ));
    }

    #[test]
    fn test_nearest_point_on_line() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, 0.0);
        let foot = nearest_point_on_line(&Point2::new(3.0, 7.0), &a, &b);
        assert!(points_approx_eq(&foot, &Point2::new(3.0, 0.0)));

        // 直线外的投影同样成立（无限长直线）
        let foot = nearest_point_on_line(&Point2::new(-4.0, 2.0), &a, &b);
        assert!(points_approx_eq(&foot, &Point2::new(-4.0, 0.0)));
    }
}
