/*
 * @Description  : CSV 数据流水线集成测试
 *                 验证：读取训练表 → 打乱并划分验证集 → 按配置训练 → 预测测试表 → 写出提交文件
 */

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use digit_recognizer::TrainConfig;
use digit_recognizer::data::{DataError, DigitDataset, write_submission};
use digit_recognizer::nn::{Parameters, Trainer, evaluate, make_predictions};

/// 第 c 类数字的图像：第 c 段（78 个像素）为 255，其余像素按行号取少量噪声
fn pixel_row(label: usize, row: usize) -> Vec<u32> {
    (0..784)
        .map(|i| {
            if i / 78 == label {
                255
            } else {
                ((i + row) % 7) as u32
            }
        })
        .collect()
}

fn write_table(path: &Path, rows: usize, labeled: bool) {
    let mut text = String::new();
    let pixel_header: Vec<String> = (0..784).map(|i| format!("pixel{i}")).collect();
    if labeled {
        text.push_str("label,");
    }
    text.push_str(&pixel_header.join(","));
    text.push('\n');

    for row in 0..rows {
        let label = (row * 3) % 10;
        let pixels: Vec<String> = pixel_row(label, row).iter().map(u32::to_string).collect();
        if labeled {
            write!(text, "{label},").unwrap();
        }
        text.push_str(&pixels.join(","));
        text.push('\n');
    }
    fs::write(path, text).unwrap();
}

#[test]
fn test_csv_to_submission() -> Result<(), DataError> {
    let dir = tempfile::tempdir()?;
    let train_path = dir.path().join("train.csv");
    let test_path = dir.path().join("test.csv");
    let config_path = dir.path().join("config.json");
    write_table(&train_path, 200, true);
    write_table(&test_path, 25, false);
    fs::write(
        &config_path,
        r#"{ "iterations": 150, "learning_rate": 0.1, "seed": 3, "dev_size": 40 }"#,
    )?;

    let config = TrainConfig::from_json_file(&config_path)?;
    assert_eq!(config.report_every, 10);

    let data = DigitDataset::from_csv(&train_path)?;
    assert_eq!(data.len(), 200);
    assert!(data.images().data().iter().all(|&v| (0.0..=1.0).contains(&v)));

    let (dev, train) = data.shuffle(config.seed).split_dev(config.dev_size)?;
    assert_eq!(dev.len(), 40);
    assert_eq!(train.len(), 160);

    let initial = Parameters::new_seeded(config.seed);
    let before = evaluate(&initial, dev.images(), dev.require_labels()?)?;

    let mut params = initial.clone();
    let mut trainer = Trainer::from_config(&config)?;
    trainer.fit(&mut params, train.images(), train.require_labels()?)?;
    let after = evaluate(&params, dev.images(), dev.require_labels()?)?;
    assert!(after > before, "验证集准确率：训练前 {before}，训练后 {after}");

    let test = DigitDataset::unlabeled_from_csv(&test_path)?;
    assert!(test.labels().is_none());
    let predicted = make_predictions(&params, test.images())?;
    assert_eq!(predicted.len(), 25);

    let submission_path = dir.path().join("submission.csv");
    write_submission(fs::File::create(&submission_path)?, &predicted)?;
    let text = fs::read_to_string(&submission_path)?;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 26);
    assert_eq!(lines[0], "ImageId,Label");
    assert_eq!(lines[1], format!("1,{}", predicted[0]));
    assert_eq!(lines[25], format!("25,{}", predicted[24]));
    Ok(())
}

#[test]
fn test_config_errors() {
    assert!(matches!(
        TrainConfig::from_json_file("/no/such/config.json"),
        Err(DataError::FileNotFound(_))
    ));
    assert!(matches!(
        TrainConfig::from_json_str("{ \"iterations\": "),
        Err(DataError::JsonError(_))
    ));
    assert!(matches!(
        TrainConfig::from_json_str(r#"{ "learning_rate": 0.0 }"#),
        Err(DataError::Net(_))
    ));

    let config = TrainConfig::from_json_str("{}").unwrap();
    assert_eq!(config, TrainConfig::default());
}

#[test]
fn test_dev_split_larger_than_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("train.csv");
    write_table(&path, 5, true);

    let data = DigitDataset::from_csv(&path).unwrap();
    assert!(matches!(
        data.split_dev(6),
        Err(DataError::IndexOutOfBounds { index: 6, len: 5 })
    ));
}
