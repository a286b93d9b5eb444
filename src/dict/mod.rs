//! 字典加载
//!
//! 从词组表和单字表构建只读映射集，
//! 供转换器做最长匹配查询。加载一次后不再变更。

use crate::error::{FantiError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// 词组表文件名（OpenCC格式）
pub const PHRASE_TABLE: &str = "STPhrases.txt";
/// 单字表文件名
pub const CHAR_TABLE: &str = "STCharacters.txt";

/// 只读映射集：词组层优先于单字层
#[derive(Debug, Default)]
pub struct Mappings {
    /// 多字词组 简体→繁体
    pub phrase_map: HashMap<String, String>,
    /// 单字 简体→繁体
    pub char_map: HashMap<char, String>,
    /// 词组键的最大字符数（加载时预计算）
    pub max_phrase_len: usize,
}

impl Mappings {
    /// 从字典目录加载两张表，任一缺失即整体失败
    pub fn load(dict_dir: &Path) -> Result<Mappings> {
        let phrase_map = load_table(&dict_dir.join(PHRASE_TABLE))?;
        let char_entries = load_table(&dict_dir.join(CHAR_TABLE))?;

        // 单字表里多字符的键永远不会命中单字回退查询，直接丢弃
        let mut char_map = HashMap::new();
        for (source, target) in char_entries {
            let mut chars = source.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                char_map.insert(c, target);
            }
        }

        let max_phrase_len = phrase_map
            .keys()
            .map(|k| k.chars().count())
            .max()
            .unwrap_or(0);

        Ok(Mappings {
            phrase_map,
            char_map,
            max_phrase_len,
        })
    }

    pub fn phrase_count(&self) -> usize {
        self.phrase_map.len()
    }

    pub fn char_count(&self) -> usize {
        self.char_map.len()
    }
}

/// 解析一张平面映射表：每行以空白分列，第一列为源、第二列为目标。
/// 目标列若带多个繁体候选（空格分隔），只取第一个。
/// 空行和列数不足的行跳过；同键后载者覆盖前者。
fn load_table(path: &Path) -> Result<HashMap<String, String>> {
    if !path.exists() {
        return Err(FantiError::DictionaryNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    let mut map = HashMap::new();

    for line in content.lines() {
        let mut fields = line.split_whitespace();
        if let (Some(source), Some(target)) = (fields.next(), fields.next()) {
            map.insert(source.to_string(), target.to_string());
        }
    }

    Ok(map)
}
