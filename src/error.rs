use thiserror::Error;

/// リスト操作のエラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// インデックスが操作の有効範囲外
    #[error("index {index} is out of bounds for list of size {size}")]
    IndexOutOfBounds { index: usize, size: usize },

    /// 要素が順序比較をサポートしていない
    #[error("element at index {index} is not comparable")]
    Unordered { index: usize },
}

impl ListError {
    pub(crate) fn out_of_bounds(index: usize, size: usize) -> Self {
        ListError::IndexOutOfBounds { index, size }
    }
}
