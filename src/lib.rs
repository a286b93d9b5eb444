//! 简体中文CSV批量转繁体工具
//!
//! 基于两层字典（词组表+单字表）的贪心最长匹配替换，
//! 对目标目录直下的CSV文件逐格转换并原地覆盖。

pub mod cli;
pub mod converter;
pub mod dict;
pub mod error;
pub mod processor;
