use std::{cmp, fmt, iter};

use tracing::{debug, trace};

use crate::error::ListError;
use crate::interface::sequence_list::SequenceList;

/// 配列の初期長
pub const DEFAULT_CAPACITY: usize = 10;

fn empty_slots<T>(len: usize) -> Box<[Option<T>]> {
    iter::repeat_with(|| None).take(len).collect()
}

/// 配列を使ったSequenceListの実装
///
/// get_element(i)の実行時間はO(1)
/// increase_capacity()のコストを無視すると
/// add_item_at(i, x), delete_element(i)の実行時間はO(1 + n - i)
///
/// 空のArrayListに対して任意のm個のadd_item_at(i, x)およびdelete_element(i)からなる
/// 操作の列を実行したとき、increase_capacity()にかかる時間の合計はO(m)
/// 配列は縮小しない
#[derive(Clone)]
pub struct ArrayList<T> {
    a: Box<[Option<T>]>, // a[0..n]に要素が入っていて、a[n..]は空
    n: usize,            // リストの要素数
}

impl<T> ArrayList<T> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            a: empty_slots(capacity),
            n: 0,
        }
    }

    /// 確保済みの配列の長さ
    pub fn capacity(&self) -> usize {
        self.a.len()
    }

    /// 配列の長さを2倍にする
    ///
    /// 長さ0の配列は長さ1にする
    pub fn increase_capacity(&mut self) {
        let mut b = empty_slots(cmp::max(2 * self.a.len(), 1));
        for i in 0..self.n {
            b[i] = self.a[i].take();
        }
        trace!(from = self.a.len(), to = b.len(), "growing array list");
        self.a = b;
    }

    fn live(&self) -> impl Iterator<Item = &T> {
        self.a[..self.n].iter().flatten()
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SequenceList<T> for ArrayList<T> {
    fn size(&self) -> usize {
        self.n
    }

    fn add_item(&mut self, x: T) {
        if self.n == self.a.len() {
            self.increase_capacity();
        }
        self.a[self.n] = Some(x);
        self.n += 1;
    }

    fn add_item_at(&mut self, i: usize, x: T) -> Result<(), ListError> {
        if i > self.n {
            return Err(ListError::out_of_bounds(i, self.n));
        }
        if self.n == self.a.len() {
            self.increase_capacity();
        }
        // a[i],...,a[n-1]を右に1つずらす
        for j in (i + 1..=self.n).rev() {
            self.a[j] = self.a[j - 1].take();
        }
        self.a[i] = Some(x);
        self.n += 1;
        Ok(())
    }

    fn delete_element(&mut self, i: usize) -> Result<T, ListError> {
        if i >= self.n {
            return Err(ListError::out_of_bounds(i, self.n));
        }
        let x = self.a[i]
            .take()
            .ok_or(ListError::out_of_bounds(i, self.n))?;
        // a[i+1],...,a[n-1]を左に1つずらす。末尾の空いた場所はNoneになる
        for j in i..self.n - 1 {
            self.a[j] = self.a[j + 1].take();
        }
        self.n -= 1;
        Ok(x)
    }

    fn get_element(&self, i: usize) -> Result<&T, ListError> {
        self.a[..self.n]
            .get(i)
            .and_then(Option::as_ref)
            .ok_or(ListError::out_of_bounds(i, self.n))
    }

    fn delete_all(&mut self) -> &mut Self {
        debug!(dropped = self.n, "clearing array list");
        self.a = empty_slots(DEFAULT_CAPACITY);
        self.n = 0;
        self
    }

    /// バブルソート
    ///
    /// n-1回のパスで隣り合う要素を比較して交換する。Θ(n^2)
    /// 比較できない要素(f64::NANなど)がひとつでもあれば、何も変更せずにエラーを返す
    fn sort(&mut self) -> Result<(), ListError>
    where
        T: PartialOrd,
    {
        let unordered = self.a[..self.n]
            .iter()
            .position(|x| !matches!(x, Some(v) if v.partial_cmp(v).is_some()));
        if let Some(index) = unordered {
            debug!(index, "refusing to sort array list");
            return Err(ListError::Unordered { index });
        }

        trace!(n = self.n, "bubble sort");
        for i in 0..self.n.saturating_sub(1) {
            for j in 0..self.n - i - 1 {
                if matches!((&self.a[j], &self.a[j + 1]), (Some(x), Some(y)) if x > y) {
                    self.a.swap(j, j + 1);
                }
            }
        }
        Ok(())
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for x in iter {
            list.add_item(x);
        }
        list
    }
}

impl<T: fmt::Display> fmt::Display for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (k, x) in self.live().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, "]")
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.live()).finish()
    }
}
