use crate::assert_err;
use crate::errors::NetError;
use crate::nn::{Parameters, accuracy, evaluate, make_predictions, predict_one, predictions};
use crate::tensor::Tensor;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::synthetic_batch;

#[test]
fn test_predictions_argmax_per_column() {
    #[rustfmt::skip]
    let a2 = Tensor::new(&[
        0.1, 0.6, 0.3,
        0.8, 0.2, 0.3,
        0.1, 0.2, 0.4,
    ], &[3, 3]);
    assert_eq!(predictions(&a2), vec![1, 0, 2]);
}

#[test]
fn test_accuracy() {
    assert_eq!(accuracy(&[1, 2, 3, 4], &[1, 2, 0, 4]).unwrap(), 0.75);
    assert_eq!(accuracy(&[0], &[0]).unwrap(), 1.0);
    assert_err!(accuracy(&[1, 2], &[1]), NetError::ShapeMismatch([1], [2]));
    assert_err!(accuracy(&[], &[]), NetError::EmptyBatch);
}

/// 除手工设置的 W1/W2 外参数全为 0：隐藏单元 0 汇总所有像素，且只连到类别 3
#[test]
fn test_hand_crafted_params_always_predict_three() {
    let (mut w1, b1, mut w2, b2) = Parameters::zeros().into_tensors();
    for k in 0..784 {
        w1[[0, k]] = 1.0;
    }
    w2[[3, 0]] = 1.0;
    let params = Parameters::from_tensors(w1, b1, w2, b2).unwrap();

    let mut rng = StdRng::seed_from_u64(3);
    let pixels: Vec<f32> = (0..784 * 20).map(|_| rng.gen_range(0.01..=1.0)).collect();
    let x = Tensor::from_columns(pixels, 784, 20).unwrap();

    assert_eq!(make_predictions(&params, &x).unwrap(), vec![3; 20]);

    let (x, _) = synthetic_batch(30, 3);
    assert!(make_predictions(&params, &x).unwrap().iter().all(|&p| p == 3));
}

#[test]
fn test_inference_is_idempotent() {
    let params = Parameters::new_seeded(21);
    let (x, labels) = synthetic_batch(25, 21);

    let first = make_predictions(&params, &x).unwrap();
    let second = make_predictions(&params, &x).unwrap();
    assert_eq!(first, second);
    assert_eq!(evaluate(&params, &x, &labels).unwrap(), evaluate(&params, &x, &labels).unwrap());
}

#[test]
fn test_predict_one_matches_batch() {
    let params = Parameters::new_seeded(22);
    let (x, _) = synthetic_batch(6, 22);
    let batch = make_predictions(&params, &x).unwrap();

    for (j, &expected) in batch.iter().enumerate() {
        let column = x.column(j);
        let pixels: Vec<f32> = column.data().iter().copied().collect();
        assert_eq!(predict_one(&params, &pixels).unwrap(), expected);
    }

    assert_err!(predict_one(&params, &[0.0; 10]), NetError::ShapeMismatch([784], [10]));
}
