use crate::errors::HillCryptoError;
use crate::ring::{Matrix, Ring, Vector, map_matrix};

use itertools::iproduct;
use num_bigint::BigInt;
use num_traits::{One, Zero};

/// A·x where A is an m×n matrix and x is a length–n column vector.
/// Returns an m‐vector reduced into the ring.
pub fn matrix_vector_mul(a: &Matrix, x: &Vector, ring: &Ring) -> Result<Vector, HillCryptoError> {
    let m = a.len();
    if m == 0 {
        return Ok(Vec::new());
    }
    let n = a[0].len();
    if x.len() != n {
        return Err(HillCryptoError::DimensionMismatch(format!(
            "Matrix columns ({}) must match vector length ({})",
            n,
            x.len()
        )));
    }

    let mut y = vec![0i64; m];
    for (i, row) in a.iter().enumerate() {
        if row.len() != n {
            return Err(HillCryptoError::DimensionMismatch(format!(
                "Row {} has length {} but expected {}",
                i,
                row.len(),
                n
            )));
        }
        y[i] = row
            .iter()
            .zip(x)
            .fold(0, |sum, (&a_ij, &x_j)| ring.add(sum, ring.mul(a_ij, x_j)));
    }
    Ok(y)
}

/// Computes the vector sum `c = a + b` modulo `m`, where `m` is the modulus of the ring.
///
/// # Errors
///
/// Returns `HillCryptoError::DimensionMismatch` if the vectors have different lengths.
pub fn vector_add(a: &Vector, b: &Vector, ring: &Ring) -> Result<Vector, HillCryptoError> {
    if a.len() != b.len() {
        return Err(HillCryptoError::DimensionMismatch(format!(
            "Vector lengths must match for addition ({} vs {})",
            a.len(),
            b.len()
        )));
    }
    Ok(a.iter().zip(b).map(|(&x, &y)| ring.add(x, y)).collect())
}

/// Computes the vector difference `c = a - b` modulo `m`, where `m` is the modulus of the ring.
///
/// # Errors
///
/// Returns `HillCryptoError::DimensionMismatch` if the vectors have different lengths.
pub fn vector_sub(a: &Vector, b: &Vector, ring: &Ring) -> Result<Vector, HillCryptoError> {
    if a.len() != b.len() {
        return Err(HillCryptoError::DimensionMismatch(format!(
            "Vector lengths must match for subtraction ({} vs {})",
            a.len(),
            b.len()
        )));
    }
    Ok(a.iter().zip(b).map(|(&x, &y)| ring.sub(x, y)).collect())
}

/// Computes the matrix product `C = AB` modulo `m`, where `m` is the modulus of the ring.
///
/// # Errors
///
/// Returns `HillCryptoError::DimensionMismatch` if the inner dimensions of the matrices do not match
/// or if rows within the matrices have inconsistent lengths.
pub fn matrix_mul(a: &Matrix, b: &Matrix, ring: &Ring) -> Result<Matrix, HillCryptoError> {
    let n = a.len(); // rows in A
    if n == 0 {
        return Ok(Matrix::new());
    }
    let m_common = a[0].len(); // cols in A
    if b.len() != m_common {
        return Err(HillCryptoError::DimensionMismatch(format!(
            "Inner dimensions must match for matrix multiplication ({} vs {})",
            m_common,
            b.len()
        )));
    }
    let p = b.first().map_or(0, Vec::len); // cols in B

    if let Some(k) = b.iter().position(|row| row.len() != p) {
        return Err(HillCryptoError::DimensionMismatch(format!(
            "Matrix B row {} has incorrect length (expected {})",
            k, p
        )));
    }

    let mut c = vec![vec![0; p]; n];
    for i in 0..n {
        if a[i].len() != m_common {
            return Err(HillCryptoError::DimensionMismatch(format!(
                "Matrix A row {} has incorrect length (expected {})",
                i, m_common
            )));
        }
        for j in 0..p {
            let mut sum = 0i64;
            for k in 0..m_common {
                sum = ring.add(sum, ring.mul(a[i][k], b[k][j]));
            }
            c[i][j] = sum;
        }
    }
    Ok(c)
}

/// Creates an identity matrix of size `n`.
pub fn identity_matrix(n: usize) -> Matrix {
    let mut identity = vec![vec![0; n]; n];
    #[allow(clippy::needless_range_loop)]
    for i in 0..n {
        identity[i][i] = 1;
    }
    identity
}

/// Returns the transpose of a rectangular matrix.
pub fn transpose(matrix: &Matrix) -> Matrix {
    let cols = matrix.first().map_or(0, Vec::len);
    (0..cols)
        .map(|j| matrix.iter().map(|row| row[j]).collect())
        .collect()
}

/// The minor of `matrix` obtained by deleting row `row` and column `col`.
pub fn minor(matrix: &Matrix, row: usize, col: usize) -> Matrix {
    matrix
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != row)
        .map(|(_, r)| {
            r.iter()
                .enumerate()
                .filter(|&(j, _)| j != col)
                .map(|(_, &v)| v)
                .collect()
        })
        .collect()
}

fn ensure_square(matrix: &Matrix, op: &str) -> Result<usize, HillCryptoError> {
    let n = matrix.len();
    if matrix.iter().any(|row| row.len() != n) {
        return Err(HillCryptoError::DimensionMismatch(format!(
            "{}: matrix must be square",
            op
        )));
    }
    Ok(n)
}

/// Exact integer determinant of a square matrix.
///
/// Uses fraction-free (Bareiss) elimination over [`BigInt`], so every
/// intermediate division is exact and nothing is rounded. The determinant of
/// the empty matrix is 1.
///
/// # Errors
///
/// Returns `HillCryptoError::DimensionMismatch` if the matrix is not square.
pub fn determinant(matrix: &Matrix) -> Result<BigInt, HillCryptoError> {
    let n = ensure_square(matrix, "determinant")?;
    if n == 0 {
        return Ok(BigInt::one());
    }

    let mut a: Vec<Vec<BigInt>> = matrix
        .iter()
        .map(|row| row.iter().map(|&v| BigInt::from(v)).collect())
        .collect();
    let mut negate = false;
    let mut prev_pivot = BigInt::one();

    for k in 0..n - 1 {
        if a[k][k].is_zero() {
            // Swap in a lower row with a non-zero entry in this column
            match (k + 1..n).find(|&i| !a[i][k].is_zero()) {
                Some(i) => {
                    a.swap(k, i);
                    negate = !negate;
                }
                None => return Ok(BigInt::zero()),
            }
        }

        for i in k + 1..n {
            for j in k + 1..n {
                let numerator = &a[i][j] * &a[k][k] - &a[i][k] * &a[k][j];
                a[i][j] = numerator / &prev_pivot;
            }
        }
        prev_pivot = a[k][k].clone();
    }

    let det = a[n - 1][n - 1].clone();
    Ok(if negate { -det } else { det })
}

/// The exact determinant reduced into `[0, m)`.
pub fn determinant_mod(matrix: &Matrix, ring: &Ring) -> Result<i64, HillCryptoError> {
    Ok(ring.normalize_big(&determinant(matrix)?))
}

/// Cofactor matrix: cell `(i, j)` is `(-1)^(i+j) · det(minor(i, j))`, reduced mod `m`.
pub fn cofactor_matrix(matrix: &Matrix, ring: &Ring) -> Result<Matrix, HillCryptoError> {
    let n = ensure_square(matrix, "cofactor_matrix")?;
    let mut cofactors = vec![vec![0; n]; n];

    for (i, j) in iproduct!(0..n, 0..n) {
        let minor_det = ring.normalize_big(&determinant(&minor(matrix, i, j))?);
        cofactors[i][j] = if (i + j) % 2 == 0 {
            minor_det
        } else {
            ring.neg(minor_det)
        };
    }
    Ok(cofactors)
}

/// Adjugate (classical adjoint): the transpose of the cofactor matrix, mod `m`.
pub fn adjugate(matrix: &Matrix, ring: &Ring) -> Result<Matrix, HillCryptoError> {
    Ok(transpose(&cofactor_matrix(matrix, ring)?))
}

/// Inverse of a square matrix modulo `m`.
///
/// Computed as `det⁻¹ · adj(A)`: the determinant is inverted in the ring
/// rather than divided, so the result satisfies `A · A⁻¹ ≡ I (mod m)`.
///
/// # Errors
///
/// Returns `HillCryptoError::NoInverse` if `gcd(det(A), m) != 1`.
/// Returns `HillCryptoError::DimensionMismatch` if the matrix is not square.
pub fn matrix_inverse(matrix: &Matrix, ring: &Ring) -> Result<Matrix, HillCryptoError> {
    let det = determinant_mod(matrix, ring)?;
    let det_inv = ring.inv(det).map_err(|_| {
        HillCryptoError::NoInverse(format!(
            "matrix determinant {} is not invertible mod {}",
            det,
            ring.modulus()
        ))
    })?;

    let adj = adjugate(matrix, ring)?;
    Ok(map_matrix(&adj, &|v| ring.mul(v, det_inv)))
}
