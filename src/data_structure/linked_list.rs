use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::{iter, mem};

use tracing::{debug, trace};

use crate::error::ListError;
use crate::interface::sequence_list::SequenceList;

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    x: T,
    next: Link<T>,
}

/// Singly-Linked List(単方向連結リスト)
///
/// 各ノードは次のノードを所有しているので、循環は作れず、
/// 一つのノードが二つのリストから辿れることもない
///
/// get_element(i), add_item_at(i, x), delete_element(i)はheadからi個のノードを辿るので
/// 実行時間はO(1 + i)
pub struct LinkedList<T> {
    head: Link<T>,
    n: usize,
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self { head: None, n: 0 }
    }

    fn get_node(&self, i: usize) -> Option<&Node<T>> {
        let mut p = self.head.as_deref();
        for _ in 0..i {
            p = p?.next.as_deref();
        }
        p
    }

    fn get_node_mut(&mut self, i: usize) -> Option<&mut Node<T>> {
        let mut p = self.head.as_deref_mut();
        for _ in 0..i {
            p = p?.next.as_deref_mut();
        }
        p
    }

    /// i番目のノードを指しているリンクを返す
    ///
    /// i == 0ならhead、それ以外はi-1番目のノードのnext
    fn link_mut(&mut self, i: usize) -> Option<&mut Link<T>> {
        if i == 0 {
            Some(&mut self.head)
        } else {
            self.get_node_mut(i - 1).map(|prev| &mut prev.next)
        }
    }

    fn values(&self) -> impl Iterator<Item = &T> {
        iter::successors(self.head.as_deref(), |node| node.next.as_deref()).map(|node| &node.x)
    }

    // 長いリストでも再帰的なdropにならないように、先頭から一つずつ切り離す
    fn unlink_all(&mut self) {
        let mut p = self.head.take();
        while let Some(mut node) = p {
            p = node.next.take();
        }
        self.n = 0;
    }

    /// i番目の値がi+1番目の値より大きければ入れ替えてtrueを返す
    ///
    /// 比較できない組は大きくないとみなす
    fn swap_if_greater(&mut self, i: usize) -> bool
    where
        T: PartialOrd,
    {
        let Some(Node { x, next }) = self.get_node_mut(i) else {
            return false;
        };
        let Some(succ) = next.as_deref_mut() else {
            return false;
        };
        match (*x).partial_cmp(&succ.x) {
            Some(Ordering::Greater) => {
                mem::swap(x, &mut succ.x);
                true
            }
            Some(_) => false,
            None => {
                trace!(index = i, "unordered pair, stop shifting");
                false
            }
        }
    }
}

impl<T: Display> LinkedList<T> {
    /// 全要素を空白区切りで標準出力に出す(デバッグ用)
    pub fn print_list(&self) {
        println!("{}", self);
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.unlink_all();
    }
}

impl<T> SequenceList<T> for LinkedList<T> {
    fn size(&self) -> usize {
        self.n
    }

    fn add_item(&mut self, x: T) {
        // i == nは常に有効
        let _ = self.add_item_at(self.n, x);
    }

    fn add_item_at(&mut self, i: usize, x: T) -> Result<(), ListError> {
        let err = ListError::out_of_bounds(i, self.n);
        if i > self.n {
            return Err(err);
        }
        let link = self.link_mut(i).ok_or(err)?;
        let next = link.take();
        *link = Some(Box::new(Node { x, next }));
        self.n += 1;
        Ok(())
    }

    fn delete_element(&mut self, i: usize) -> Result<T, ListError> {
        let err = ListError::out_of_bounds(i, self.n);
        if i >= self.n {
            return Err(err);
        }
        let link = self.link_mut(i).ok_or(err)?;
        let mut node = link.take().ok_or(err)?;
        *link = node.next.take();
        self.n -= 1;
        Ok(node.x)
    }

    fn get_element(&self, i: usize) -> Result<&T, ListError> {
        if i >= self.n {
            return Err(ListError::out_of_bounds(i, self.n));
        }
        self.get_node(i)
            .map(|node| &node.x)
            .ok_or(ListError::out_of_bounds(i, self.n))
    }

    fn delete_all(&mut self) -> &mut Self {
        debug!(dropped = self.n, "clearing linked list");
        self.unlink_all();
        self
    }

    /// 挿入ソート
    ///
    /// ノードを繋ぎ変えずに値だけを動かす。
    /// 2番目以降の各ノードについて、一つ前の値の方が大きい間は値を後ろにずらしていく。
    /// 後ろ向きのポインタがないので、一つ前のノードは毎回headから辿って探す
    ///
    /// 比較できない値に出会うとそこでずらすのをやめるだけで、エラーにはしない
    fn sort(&mut self) -> Result<(), ListError>
    where
        T: PartialOrd,
    {
        if self.n <= 1 {
            return Ok(());
        }
        trace!(n = self.n, "insertion sort");
        for j in 1..self.n {
            let mut k = j;
            while k > 0 && self.swap_if_greater(k - 1) {
                k -= 1;
            }
        }
        Ok(())
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        let mut tail = &mut list.head;
        for x in iter {
            tail = &mut tail.insert(Box::new(Node { x, next: None })).next;
            list.n += 1;
        }
        list
    }
}

impl<T: Display> Display for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, x) in self.values().enumerate() {
            if k > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", x)?;
        }
        Ok(())
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.head.is_none() {
            return write!(f, "null");
        }
        write!(f, "head")?;
        for x in self.values() {
            write!(f, " -> {:?}", x)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use pretty_assertions::assert_eq;

    fn contents<T: Clone>(list: &LinkedList<T>) -> Vec<T> {
        list.values().cloned().collect()
    }

    #[test]
    fn test_add_item_at() {
        let mut list = LinkedList::new();
        list.add_item_at(0, 'b').unwrap();
        list.add_item_at(0, 'a').unwrap();
        list.add_item_at(2, 'd').unwrap();
        list.add_item_at(2, 'c').unwrap();
        list.add_item('e');
        assert_eq!(list.size(), 5);
        assert_eq!(contents(&list), vec!['a', 'b', 'c', 'd', 'e']);

        assert_eq!(
            list.add_item_at(6, 'x'),
            Err(ListError::IndexOutOfBounds { index: 6, size: 5 })
        );
        assert_eq!(list.size(), 5);
    }

    #[test]
    fn test_delete_element() {
        let mut list: LinkedList<_> = "abcde".chars().collect();
        assert_eq!(list.delete_element(0), Ok('a'));
        assert_eq!(list.delete_element(3), Ok('e'));
        assert_eq!(list.delete_element(1), Ok('c'));
        assert_eq!(contents(&list), vec!['b', 'd']);
        assert_eq!(list.size(), 2);

        // 末尾の次(i == n)も範囲外
        assert_eq!(
            list.delete_element(2),
            Err(ListError::IndexOutOfBounds { index: 2, size: 2 })
        );
        assert_eq!(contents(&list), vec!['b', 'd']);
    }

    #[test]
    fn test_get_element() {
        let list: LinkedList<_> = (10..15).collect();
        assert_eq!(list.get_element(0), Ok(&10));
        assert_eq!(list.get_element(4), Ok(&14));
        assert_eq!(
            list.get_element(5),
            Err(ListError::IndexOutOfBounds { index: 5, size: 5 })
        );
    }

    #[test]
    fn test_delete_all() {
        let mut list: LinkedList<_> = (0..5).collect();
        assert_eq!(list.delete_all().size(), 0);
        assert!(list.head.is_none());
        assert_eq!(format!("{:?}", list), "null");

        list.add_item(1);
        assert_eq!(contents(&list), vec![1]);
    }

    #[test]
    fn test_sort() {
        let mut list: LinkedList<_> = vec![5, 3, 8, 1].into_iter().collect();
        list.sort().unwrap();
        assert_eq!(contents(&list), vec![1, 3, 5, 8]);

        let mut list: LinkedList<_> = "edcbaabcde".chars().collect();
        list.sort().unwrap();
        assert_eq!(list.to_string(), "a a b b c c d d e e");
    }

    #[test]
    fn test_sort_trivial() {
        let mut list: LinkedList<i32> = LinkedList::new();
        assert_eq!(list.sort(), Ok(()));
        assert_eq!(list.size(), 0);

        list.add_item(42);
        assert_eq!(list.sort(), Ok(()));
        assert_eq!(contents(&list), vec![42]);
    }

    #[test]
    fn test_sort_tolerates_unordered() {
        let mut list: LinkedList<_> = vec![3.0, f64::NAN, 2.0, 1.0].into_iter().collect();
        assert_eq!(list.sort(), Ok(()));
        assert_eq!(list.size(), 4);
        // NaNより前には値が移動しない
        assert_eq!(list.get_element(0), Ok(&3.0));
        assert!(list.get_element(1).unwrap().is_nan());
        assert_eq!(list.get_element(2), Ok(&1.0));
        assert_eq!(list.get_element(3), Ok(&2.0));
    }

    #[test]
    fn test_fmt() {
        let list: LinkedList<_> = "abc".chars().collect();
        assert_eq!(list.to_string(), "a b c");
        assert_eq!(format!("{:?}", list), "head -> 'a' -> 'b' -> 'c'");
        list.print_list();
    }

    #[test]
    fn test_drop_long_chain() {
        let list: LinkedList<_> = (0..200_000).collect();
        assert_eq!(list.size(), 200_000);
        drop(list);
    }
}
