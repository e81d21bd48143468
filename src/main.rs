use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use dominotrain::application::trains::into_train_map;
use dominotrain::domain::search::{FaceLimit, SearchConfig, WorkerCount};
use dominotrain::domain::train::TrainRecord;
use dominotrain::infrastructure::storage::{OutputFormat, StreamTrainWriter, TrainWriter};
use dominotrain::{logging, vlog, TrainService};

// ANSI エスケープ（赤 / リセット）
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    JsonLines,
    JsonArray,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::JsonLines => OutputFormat::JsonLines,
            Format::JsonArray => OutputFormat::JsonArray,
        }
    }
}

/// 各開始値から作れる最長のドミノ列車を求める
#[derive(Parser, Debug)]
#[command(name = "dominotrain", version)]
struct Args {
    /// 盤面状態ファイル（1行目: 開始値、以降: 1行1枚の牌）
    file: PathBuf,

    /// 出力形式
    #[arg(long, value_enum, default_value_t = Format::JsonLines)]
    format: Format,

    /// 開始値ごとの探索を直列で行う
    #[arg(long)]
    serial: bool,

    /// ワーカースレッド数（省略時はCPU数）
    #[arg(long, conflicts_with = "serial")]
    threads: Option<usize>,

    /// 目の上限
    #[arg(long, default_value_t = dominotrain::MAX_FACE)]
    max_face: u8,

    /// 詳細ログの出力先
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// 詳細ログを有効にする（--log-file が必要）
    #[arg(long, requires = "log_file")]
    verbose: bool,

    /// 展開木も標準エラーに表示する
    #[arg(long)]
    tree: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let result = run(args);
    logging::close_log_file();
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}ERROR: {:#}{}", RED, e, RESET);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let workers = args.threads.map(WorkerCount::new).transpose()?;
    let config = SearchConfig {
        face_limit: FaceLimit::new(args.max_face)?,
        parallel: !args.serial,
        workers,
        verbose: args.verbose,
    };

    if let Some(path) = &args.log_file {
        logging::init_log_file(path)
            .with_context(|| format!("ログファイルを開けません: {}", path.display()))?;
        if config.verbose {
            logging::enable_verbose_logging();
        }
    }

    let mut service = TrainService::new(config)?.with_trees(args.tree);
    let input = service.load(&args.file)?;
    let outcomes = service.run(&input.start_values, &input.dominoes)?;

    if args.tree {
        let stderr = io::stderr();
        let mut err = stderr.lock();
        for outcome in &outcomes {
            if let Some(tree) = &outcome.tree {
                writeln!(err, "{}", tree)?;
            }
        }
    }

    let records: Vec<TrainRecord> = into_train_map(outcomes).to_records();

    let stdout = io::stdout();
    let mut writer = StreamTrainWriter::new(stdout.lock(), args.format.into())?;
    writer.write_batch(&records)?;
    writer.flush()?;

    let summary = service.create_summary();
    vlog!(
        "[完了] 木={} ノード={} 列車={} 最長={} ({:.3}秒)",
        summary.trees_built,
        summary.total_nodes,
        summary.trains_found,
        summary.longest_length,
        summary.elapsed_seconds
    );
    Ok(())
}
