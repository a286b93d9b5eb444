//! CSV文件处理
//!
//! 发现目标目录直下的CSV文件，逐格转换含中文的单元格，
//! 全部行先写入同目录临时文件，再原子替换原文件。

use crate::converter;
use crate::dict::Mappings;
use crate::error::{FantiError, Result};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

/// 单个文件的转换统计
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStats {
    /// 读到的行数
    pub rows: usize,
    /// 内容发生变化的单元格数
    pub converted_cells: usize,
}

/// 列出目录直下的CSV文件，按文件名排序保证处理顺序稳定
pub fn scan_folder(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(FantiError::FolderNotFound(folder.display().to_string()));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1) // 仅目录直下，不递归
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if let Some(ext) = path.extension() {
            if ext.to_string_lossy().eq_ignore_ascii_case("csv") {
                files.push(path.to_path_buf());
            }
        }
    }

    files.sort();
    Ok(files)
}

/// 转换单个CSV文件并原地覆盖。
/// 所有行（含表头行）一律按「含中文即转换」处理；
/// 写入完成前原文件保持完整。
pub fn convert_file(path: &Path, mappings: &Mappings) -> Result<FileStats> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let tmp = NamedTempFile::new_in(parent)?;
    let mut stats = FileStats::default();

    {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(tmp.as_file());

        for record in reader.records() {
            let record = record?;
            let mut row: Vec<String> = Vec::with_capacity(record.len());

            for cell in record.iter() {
                if converter::contains_chinese(cell) {
                    let converted = converter::convert(mappings, cell);
                    if converted != cell {
                        stats.converted_cells += 1;
                    }
                    row.push(converted);
                } else {
                    row.push(cell.to_string());
                }
            }

            writer.write_record(&row)?;
            stats.rows += 1;
        }

        writer.flush()?;
    }

    tmp.persist(path).map_err(|e| FantiError::Io(e.error))?;

    Ok(stats)
}
