use crate::assert_err;
use crate::errors::NetError;
use crate::tensor::Tensor;

#[test]
fn test_sum_rows() {
    let a = Tensor::new(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]);
    assert_eq!(a.sum_rows(), Tensor::new(&[6.0, 15.0], &[2, 1]));
    assert_eq!(a.sum(), 21.0);
}

#[test]
fn test_argmax_columns_tie_takes_lowest_index() {
    #[rustfmt::skip]
    let a = Tensor::new(&[
        0.1, 0.5, 0.3,
        0.7, 0.5, 0.3,
        0.2, 0.0, 0.3,
    ], &[3, 3]);
    assert_eq!(a.argmax_columns(), vec![1, 0, 0]);
}

#[test]
fn test_hadamard_and_scalar_ops() {
    let a = Tensor::new(&[1.0, 2.0, 3.0, 4.0], &[2, 2]);
    let b = Tensor::new(&[2.0, 0.0, 1.0, -1.0], &[2, 2]);
    assert_eq!(a.hadamard(&b).unwrap(), Tensor::new(&[2.0, 0.0, 3.0, -4.0], &[2, 2]));
    assert_err!(a.hadamard(&Tensor::zeros(1, 4)), NetError::ShapeMismatch([2, 2], [1, 4]));

    assert_eq!(&a * 2.0, Tensor::new(&[2.0, 4.0, 6.0, 8.0], &[2, 2]));
    assert_eq!(&a / 2.0, Tensor::new(&[0.5, 1.0, 1.5, 2.0], &[2, 2]));
}

#[test]
fn test_column_and_select_columns() {
    let a = Tensor::new(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]);
    assert_eq!(a.column(1), Tensor::new(&[2.0, 5.0], &[2, 1]));
    assert_eq!(
        a.select_columns(&[2, 0]),
        Tensor::new(&[3.0, 1.0, 6.0, 4.0], &[2, 2])
    );
    assert_eq!(a.map(|x| x - 1.0), Tensor::new(&[0.0, 1.0, 2.0, 3.0, 4.0, 5.0], &[2, 3]));
}
