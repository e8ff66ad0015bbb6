use crate::error::ListError;

/// 値の列x(0)..x(n-1)とその列に対する操作からなる
///
/// ArrayListとLinkedListはどちらもこのインタフェースを実装し、
/// 呼び出し側はどちらを使うかを選ぶだけでよい
pub trait SequenceList<T> {
    /// リストの長さnを返す
    fn size(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// xを末尾(n番目)に追加する
    fn add_item(&mut self, x: T);

    /// xをi番目として追加し、x(i)..x(n-1)を後ろにずらす
    ///
    /// iの有効範囲は0..=n (i == nは末尾への追加)
    fn add_item_at(&mut self, i: usize, x: T) -> Result<(), ListError>;

    /// x(i)を削除し、x(i+1)..x(n-1)を前にずらす
    ///
    /// iの有効範囲は0..n
    fn delete_element(&mut self, i: usize) -> Result<T, ListError>;

    /// x(i)の値を返す
    fn get_element(&self, i: usize) -> Result<&T, ListError>;

    /// 全ての要素を削除し、空になったリストを返す
    fn delete_all(&mut self) -> &mut Self;

    /// 自然順序で昇順に並べ替える
    fn sort(&mut self) -> Result<(), ListError>
    where
        T: PartialOrd;
}
