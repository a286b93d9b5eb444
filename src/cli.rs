use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fanti-csv")]
#[command(about = "简体中文CSV批量转繁体工具", long_about = None)]
pub struct Cli {
    /// 目标目录（直下的*.csv全部转换并覆盖原文件）
    #[arg(default_value = "data/text")]
    pub target_dir: PathBuf,

    /// 字典目录（需包含STPhrases.txt与STCharacters.txt）
    #[arg(short, long, default_value = "conversion_tools")]
    pub dict_dir: PathBuf,

    /// 输出每个文件的行数与改写单元格数
    #[arg(short, long)]
    pub verbose: bool,
}
