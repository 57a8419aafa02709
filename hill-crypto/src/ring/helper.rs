use crate::ring::{Matrix, Vector};

/// Computes the greatest common divisor of two numbers.
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a.abs()
}

/// Finds (g, x, y) such that ax + by = g = gcd(a, b).
///
/// Iterative form; `x` and `y` may be negative and are left for the caller to normalize.
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_s, mut s) = (1i64, 0i64);
    let (mut old_t, mut t) = (0i64, 1i64);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
        (old_t, t) = (t, old_t - q * t);
    }

    if old_r < 0 {
        return (-old_r, -old_s, -old_t);
    }
    (old_r, old_s, old_t)
}

/// Maps each element of a matrix using the provided mapping function.
pub fn map_matrix(matrix: &Matrix, mapper: &dyn Fn(i64) -> i64) -> Matrix {
    matrix
        .iter()
        .map(|row| row.iter().map(|&val| mapper(val)).collect())
        .collect()
}

/// Maps each element of a vector using the provided mapping function.
pub fn map_vector(vector: &Vector, mapper: &dyn Fn(i64) -> i64) -> Vector {
    vector.iter().map(|&val| mapper(val)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_gcd() {
        assert_eq!(gcd(1, 26), 1);
        assert_eq!(gcd(2, 26), 2);
        assert_eq!(gcd(13, 26), 13);
        assert_eq!(gcd(15, 26), 1);
        assert_eq!(gcd(54, 24), 6);
        assert_eq!(gcd(10, 0), 10);
        assert_eq!(gcd(0, 5), 5);
        assert_eq!(gcd(0, 0), 0);
        assert_eq!(gcd(-12, 26), 2);
    }

    #[test]
    fn test_equivalence_with_extended_gcd() {
        let (g, _, _) = extended_gcd(54, 26);
        assert_eq!(g, gcd(54, 26));
    }

    #[test]
    fn test_extended_gcd_bezout() {
        let (g, x, y) = extended_gcd(15, 26);
        assert_eq!(g, 1);
        assert_eq!(15 * x + 26 * y, 1);

        let (g, x, y) = extended_gcd(240, 46);
        assert_eq!(g, 2);
        assert_eq!(240 * x + 46 * y, g);
    }

    #[test]
    fn test_extended_gcd_zero() {
        let (g, x, y) = extended_gcd(0, 15);
        assert_eq!((g, x, y), (15, 0, 1));

        let (g, x, _) = extended_gcd(15, 0);
        assert_eq!(g, 15);
        assert_eq!(15 * x, g);
    }

    #[test]
    fn test_extended_gcd_negative() {
        let (g, x, y) = extended_gcd(-15, 10);
        assert_eq!(g, 5);
        assert_eq!(-15 * x + 10 * y, g);

        let (g, x, y) = extended_gcd(-12, -9);
        assert_eq!(g, 3);
        assert_eq!(-12 * x + (-9) * y, g);
    }

    #[test]
    fn test_map_matrix() {
        let m = vec![vec![1, 2], vec![3, 4]];
        assert_eq!(map_matrix(&m, &|v| v * 10), vec![vec![10, 20], vec![30, 40]]);
        assert_eq!(map_vector(&vec![1, -1], &|v| v + 1), vec![2, 0]);
    }
}
