use thiserror::Error;

#[derive(Error, Debug)]
pub enum FantiError {
    #[error("字典文件不存在: {0}")]
    DictionaryNotFound(String),

    #[error("目标目录不存在: {0}")]
    FolderNotFound(String),

    #[error("CSV解析错误: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FantiError>;
