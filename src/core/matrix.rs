//! Quarter-turn rotations of rectangular matrices

use crate::error::{Result, UtilError};

/// Check every row has the width of the first and return that width
fn column_count<T>(matrix: &[Vec<T>]) -> Result<usize> {
    let expected = matrix.first().map_or(0, Vec::len);

    match matrix.iter().position(|row| row.len() != expected) {
        Some(row) => Err(UtilError::RaggedMatrix {
            row,
            expected,
            found: matrix[row].len(),
        }),
        None => Ok(expected),
    }
}

/// Pure: Rotate a matrix 90° clockwise
///
/// Output row `c` is input column `c` read bottom to top, so
/// `result[c][rows - 1 - r] == matrix[r][c]`. Rows of differing length are
/// rejected with [`UtilError::RaggedMatrix`].
///
/// # Examples
///
/// ```
/// use quickfns::core::matrix::rotate_clockwise;
///
/// let rotated = rotate_clockwise(&[vec![1, 2], vec![3, 4]]).unwrap();
/// assert_eq!(rotated, vec![vec![3, 1], vec![4, 2]]);
/// ```
pub fn rotate_clockwise<T: Clone>(matrix: &[Vec<T>]) -> Result<Vec<Vec<T>>> {
    let columns = column_count(matrix)?;

    Ok((0..columns)
        .map(|c| matrix.iter().rev().map(|row| row[c].clone()).collect())
        .collect())
}

/// Pure: Rotate a matrix 90° counter-clockwise
pub fn rotate_counter_clockwise<T: Clone>(matrix: &[Vec<T>]) -> Result<Vec<Vec<T>>> {
    let columns = column_count(matrix)?;

    Ok((0..columns)
        .rev()
        .map(|c| matrix.iter().map(|row| row[c].clone()).collect())
        .collect())
}

/// Pure: Rotate a matrix 180°
pub fn rotate_half_turn<T: Clone>(matrix: &[Vec<T>]) -> Result<Vec<Vec<T>>> {
    column_count(matrix)?;

    Ok(matrix
        .iter()
        .rev()
        .map(|row| row.iter().rev().cloned().collect())
        .collect())
}
