use clap::Parser;
use fanti_csv::{cli, dict, error, processor};

use cli::Cli;
use dict::Mappings;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("🀄 fanti-csv - 简体转繁体\n");

    // 1. 字典加载（一次性，之后只读）
    println!("[1/3] 加载字典中...");
    let mappings = Mappings::load(&cli.dict_dir)?;
    println!(
        "✔ 词组{}条 / 单字{}条（最长词组{}字）\n",
        mappings.phrase_count(),
        mappings.char_count(),
        mappings.max_phrase_len
    );

    // 2. 扫描目标目录
    println!("[2/3] 扫描目标目录...");
    let files = processor::scan_folder(&cli.target_dir)?;
    println!(
        "✔ 在 {} 发现{}个CSV文件\n",
        cli.target_dir.display(),
        files.len()
    );

    // 3. 逐个转换
    println!("[3/3] 转换中...");
    let mut total_cells = 0usize;
    let mut failed = 0usize;

    for path in &files {
        match processor::convert_file(path, &mappings) {
            Ok(stats) => {
                total_cells += stats.converted_cells;
                if cli.verbose {
                    println!(
                        "  {} — {}行 / 改写{}格",
                        path.display(),
                        stats.rows,
                        stats.converted_cells
                    );
                } else {
                    println!("  {}", path.display());
                }
            }
            // 单个文件失败只跳过，不中断整批
            Err(e) => {
                failed += 1;
                println!("  ⚠ 跳过 {}: {}", path.display(), e);
            }
        }
    }

    println!("\n✅ 转换完成: 共改写{}格", total_cells);
    if failed > 0 {
        println!("⚠ {}个文件读写失败被跳过", failed);
    }

    Ok(())
}
