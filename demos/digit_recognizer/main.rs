//! # 手写数字识别示例
//!
//! 在 Kaggle "Digit Recognizer" 格式的 CSV 数据上训练两层网络（784 -> 10 -> 10）：
//! - 打乱训练表，划出前 1000 个样本作验证集
//! - 全批量梯度下降 500 次（α = 0.10），每 10 次汇报训练准确率
//! - 输出验证集准确率；若给出测试表，则写出 `submission.csv`
//!
//! ## 运行
//! ```bash
//! RUST_LOG=info cargo run --release --example digit_recognizer -- train.csv [test.csv] [config.json]
//! ```

use std::env;
use std::fs::File;
use std::process;
use std::time::Instant;

use digit_recognizer::TrainConfig;
use digit_recognizer::data::{DataError, DigitDataset, write_submission};
use digit_recognizer::nn::{Parameters, Trainer, evaluate, make_predictions};
use log::info;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(train_path) = args.first() else {
        eprintln!("用法: digit_recognizer <train.csv> [test.csv] [config.json]");
        process::exit(2);
    };

    if let Err(e) = run(train_path, args.get(1), args.get(2)) {
        eprintln!("错误: {e}");
        process::exit(1);
    }
}

fn run(
    train_path: &str,
    test_path: Option<&String>,
    config_path: Option<&String>,
) -> Result<(), DataError> {
    let config = match config_path {
        Some(path) => TrainConfig::from_json_file(path)?,
        None => TrainConfig::default(),
    };
    info!("配置：{config:?}");

    // 1. 加载数据
    let load_start = Instant::now();
    let data = DigitDataset::from_csv(train_path)?.shuffle(config.seed);
    let (dev, train) = data.split_dev(config.dev_size)?;
    info!(
        "训练集 {} 样本，验证集 {} 样本（{:.1}s）",
        train.len(),
        dev.len(),
        load_start.elapsed().as_secs_f32()
    );

    // 2. 训练
    let train_start = Instant::now();
    let mut params = Parameters::new_seeded(config.seed);
    let mut trainer = Trainer::from_config(&config)?;
    let report = trainer.fit(&mut params, train.images(), train.require_labels()?)?;
    info!(
        "训练完成：{} 次迭代，用时 {:.1}s",
        report.iterations,
        train_start.elapsed().as_secs_f32()
    );

    // 3. 验证集评估
    if !dev.is_empty() {
        let dev_accuracy = evaluate(&params, dev.images(), dev.require_labels()?)?;
        info!("验证集准确率：{:.2}%", dev_accuracy * 100.0);
    }

    // 4. 预测测试集
    if let Some(test_path) = test_path {
        let test = DigitDataset::unlabeled_from_csv(test_path)?;
        let predicted = make_predictions(&params, test.images())?;
        write_submission(File::create("submission.csv")?, &predicted)?;
        info!("已写出 submission.csv（{} 条预测）", predicted.len());
    }
    Ok(())
}
