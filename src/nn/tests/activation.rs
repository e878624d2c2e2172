use crate::nn::{relu, relu_derivative, softmax};
use crate::tensor::Tensor;
use approx::assert_abs_diff_eq;

#[test]
fn test_relu_and_derivative() {
    let z = Tensor::new(&[-2.0, -0.0, 0.0, 0.5, 3.0, -1e-6], &[2, 3]);
    assert_eq!(relu(&z), Tensor::new(&[0.0, -0.0, 0.0, 0.5, 3.0, 0.0], &[2, 3]));
    assert_eq!(
        relu_derivative(&z),
        Tensor::new(&[0.0, 0.0, 0.0, 1.0, 1.0, 0.0], &[2, 3])
    );
}

#[test]
fn test_relu_keeps_nan() {
    let z = Tensor::new(&[f32::NAN, -1.0], &[2, 1]);
    assert!(relu(&z)[[0, 0]].is_nan());
}

/// softmax 按列计算：每列之和为 1，且各元素在 [0, 1] 内
#[test]
fn test_softmax_columns_are_distributions() {
    #[rustfmt::skip]
    let z = Tensor::new(&[
        1.0, -3.0,  0.0,
        2.0,  5.0,  0.0,
        3.0,  0.5,  0.0,
    ], &[3, 3]);
    let a = softmax(&z);

    for j in 0..3 {
        let sum: f32 = (0..3).map(|i| a[[i, j]]).sum();
        assert_abs_diff_eq!(sum, 1.0, epsilon = 1e-6);
        for i in 0..3 {
            assert!((0.0..=1.0).contains(&a[[i, j]]));
        }
    }
    // 第一列：经典的 softmax([1, 2, 3])
    assert_abs_diff_eq!(a[[0, 0]], 0.090_030_57, epsilon = 1e-6);
    assert_abs_diff_eq!(a[[1, 0]], 0.244_728_48, epsilon = 1e-6);
    assert_abs_diff_eq!(a[[2, 0]], 0.665_240_94, epsilon = 1e-6);
    // 第三列：均匀分布
    assert_abs_diff_eq!(a[[1, 2]], 1.0 / 3.0, epsilon = 1e-6);
}

/// 测试 softmax 数值稳定性：不减去最大值时 exp(1000) 会溢出
#[test]
fn test_softmax_numerical_stability() {
    let z = Tensor::new(&[1000.0, -1000.0, 999.0, 1000.0, -1000.0, 1000.0], &[3, 2]);
    let a = softmax(&z);

    assert!(a.is_all_finite());
    assert_abs_diff_eq!(a[[0, 0]], 0.731_058_6, epsilon = 1e-6);
    assert_abs_diff_eq!(a[[1, 0]], 0.268_941_4, epsilon = 1e-6);
    assert_abs_diff_eq!(a[[2, 0]], 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(a[[0, 1]], 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(a[[2, 1]], 0.5, epsilon = 1e-6);
}
