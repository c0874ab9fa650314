use crate::error::ErrorKind;

/// Check that `rhs` can be tiled over `lhs` and return the tile length.
///
/// Broadcasting aligns the two shapes at their last axis: `rhs` may have
/// fewer axes than `lhs`, and every axis it has must equal the
/// corresponding trailing axis of `lhs`. The buffer of `lhs` is then made of
/// `size(lhs) / size(rhs)` consecutive tiles the length of `rhs`.
pub(crate) fn broadcast_block(lhs: &[usize], rhs: &[usize]) -> Result<usize, ErrorKind> {
    let k = match lhs.len().checked_sub(rhs.len()) {
        Some(k) => k,
        None => return Err(ErrorKind::ShapeMismatch),
    };
    if lhs[k..] != *rhs {
        return Err(ErrorKind::ShapeMismatch);
    }
    Ok(rhs.iter().product())
}
