//! Array helpers for influence-function fields.

use ndarray::{ArrayD, Axis};

/// Remove every length-1 axis, keeping element order.
///
/// A field of shape `(1, 2, 2)` becomes `(2, 2)`; a field whose axes are
/// all length 1 becomes a 0-dimensional array.
pub fn squeeze(field: ArrayD<f64>) -> ArrayD<f64> {
    let mut squeezed = field;
    for axis in (0..squeezed.ndim()).rev() {
        if squeezed.len_of(Axis(axis)) == 1 {
            squeezed = squeezed.index_axis_move(Axis(axis), 0);
        }
    }
    squeezed
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::IxDyn;

    #[test]
    fn test_squeeze_drops_singletons() {
        let field = ArrayD::from_shape_vec(IxDyn(&[1, 2, 1, 3]), (0..6).map(|v| v as f64).collect())
            .unwrap();
        let squeezed = squeeze(field);
        assert_eq!(squeezed.shape(), &[2, 3]);
        assert_eq!(
            squeezed.iter().copied().collect::<Vec<_>>(),
            vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]
        );
    }

    #[test]
    fn test_squeeze_without_singletons_is_identity() {
        let field = ArrayD::from_elem(IxDyn(&[2, 3]), 7.0);
        assert_eq!(squeeze(field.clone()), field);
    }

    #[test]
    fn test_squeeze_all_singletons() {
        let field = ArrayD::from_elem(IxDyn(&[1, 1, 1]), 4.0);
        let squeezed = squeeze(field);
        assert_eq!(squeezed.ndim(), 0);
        assert_eq!(squeezed.sum(), 4.0);
    }

    #[test]
    fn test_squeeze_keeps_empty_axes() {
        let field = ArrayD::<f64>::zeros(IxDyn(&[1, 0, 3]));
        assert_eq!(squeeze(field).shape(), &[0, 3]);
    }
}
