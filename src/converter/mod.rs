//! 文本转换
//!
//! 基于映射集的贪心最长匹配替换：从当前位置起
//! 词组层按候选长度从长到短逐个尝试，未命中再落到单字层，
//! 一旦提交更长的匹配就不再回溯。

use crate::dict::Mappings;
use regex::Regex;

/// 判断文本是否含有CJK统一表意文字（U+4E00–U+9FFF）
pub fn contains_chinese(text: &str) -> bool {
    lazy_static::lazy_static! {
        static ref CJK_RE: Regex = Regex::new(r"[\x{4e00}-\x{9fff}]").unwrap();
    }
    CJK_RE.is_match(text)
}

/// 简体转繁体，纯函数。
/// 同一输入与同一映射集恒产生同一输出；
/// 未收录的字符（含全部非中文内容）原样通过。
pub fn convert(mappings: &Mappings, text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = text.chars().collect();
    let n = chars.len();
    let mut result = String::with_capacity(text.len());
    let mut i = 0;

    while i < n {
        let limit = mappings.max_phrase_len.min(n - i);
        let mut matched = false;

        // 词组层：候选从最长到两字
        for len in (2..=limit).rev() {
            let candidate: String = chars[i..i + len].iter().collect();
            if let Some(target) = mappings.phrase_map.get(&candidate) {
                result.push_str(target);
                i += len;
                matched = true;
                break;
            }
        }

        if !matched {
            // 单字层回退
            match mappings.char_map.get(&chars[i]) {
                Some(target) => result.push_str(target),
                None => result.push(chars[i]),
            }
            i += 1;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn mappings(phrases: &[(&str, &str)], chars: &[(char, &str)]) -> Mappings {
        let phrase_map: HashMap<String, String> = phrases
            .iter()
            .map(|(s, t)| (s.to_string(), t.to_string()))
            .collect();
        let max_phrase_len = phrase_map
            .keys()
            .map(|k| k.chars().count())
            .max()
            .unwrap_or(0);
        Mappings {
            phrase_map,
            char_map: chars.iter().map(|(c, t)| (*c, t.to_string())).collect(),
            max_phrase_len,
        }
    }

    #[test]
    fn test_phrase_wins_over_char_fallback() {
        // 精度反例：逐字转换会得到「後麵」
        let m = mappings(&[("后面", "後面")], &[('后', "後"), ('面', "麵")]);
        assert_eq!(convert(&m, "后面"), "後面");
    }

    #[test]
    fn test_char_fallback_without_phrase() {
        let m = mappings(&[("后面", "後面")], &[('后', "後"), ('面', "麵")]);
        assert_eq!(convert(&m, "后"), "後");
        assert_eq!(convert(&m, "面条"), "麵条");
    }

    #[test]
    fn test_longest_phrase_preferred() {
        let m = mappings(
            &[("一个", "一個"), ("一个人", "壹個人")],
            &[('个', "個")],
        );
        assert_eq!(convert(&m, "一个人"), "壹個人");
        assert_eq!(convert(&m, "一个"), "一個");
    }

    #[test]
    fn test_unmapped_cjk_passes_through() {
        let m = mappings(&[], &[]);
        assert_eq!(convert(&m, "龘"), "龘");
    }

    #[test]
    fn test_mixed_content() {
        let m = mappings(&[("电脑", "電腦")], &[]);
        assert_eq!(convert(&m, "my电脑123"), "my電腦123");
    }

    #[test]
    fn test_empty_string() {
        let m = mappings(&[("电脑", "電腦")], &[('后', "後")]);
        assert_eq!(convert(&m, ""), "");
    }

    #[test]
    fn test_non_cjk_is_fixed_point() {
        let m = mappings(&[("电脑", "電腦")], &[('后', "後")]);
        assert_eq!(convert(&m, "hello, world! 123"), "hello, world! 123");
    }

    #[test]
    fn test_idempotent_when_targets_not_keys() {
        // 目标字符都不再是键时，二次转换是恒等的
        let m = mappings(&[("电脑", "電腦")], &[('后', "後")]);
        let once = convert(&m, "后面的电脑");
        assert_eq!(once, "後面的電腦");
        assert_eq!(convert(&m, &once), once);
    }

    #[test]
    fn test_no_backtracking_after_phrase_commit() {
        // 贪心：命中「后面」后从「的」继续，不回头重试更短的切分
        let m = mappings(
            &[("后面", "後面"), ("面的", "不应命中")],
            &[],
        );
        assert_eq!(convert(&m, "后面的"), "後面的");
    }

    #[test]
    fn test_phrase_length_may_differ_from_source() {
        // 算法不假设等长映射
        let m = mappings(&[("图书馆", "Library")], &[]);
        assert_eq!(convert(&m, "去图书馆看书"), "去Library看书");
    }

    #[test]
    fn test_contains_chinese() {
        assert!(contains_chinese("后面"));
        assert!(contains_chinese("my电脑123"));
        assert!(contains_chinese("一"));
        assert!(!contains_chinese(""));
        assert!(!contains_chinese("hello 123"));
        assert!(!contains_chinese("ＡＢＣ！？"));
        // 日文假名不在U+4E00–U+9FFF内
        assert!(!contains_chinese("ひらがなカタカナ"));
    }
}
