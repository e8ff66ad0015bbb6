//! 配列による可変長リストと単方向連結リスト
//!
//! どちらも[`SequenceList`]インタフェースを実装しているので、
//! 呼び出し側は用途に合わせて好きな方を選べる
//!
//! ```
//! use sequence_lists::{ArrayList, LinkedList, SequenceList};
//!
//! fn fill<L: SequenceList<i32>>(list: &mut L) {
//!     for x in [5, 3, 8, 1] {
//!         list.add_item(x);
//!     }
//!     list.sort().unwrap();
//! }
//!
//! let mut array = ArrayList::new();
//! fill(&mut array);
//! assert_eq!(array.to_string(), "[1, 3, 5, 8]");
//!
//! let mut linked = LinkedList::new();
//! fill(&mut linked);
//! assert_eq!(linked.to_string(), "1 3 5 8");
//! ```

pub mod data_structure;
pub mod error;
pub mod interface;

pub use data_structure::array_list::{ArrayList, DEFAULT_CAPACITY};
pub use data_structure::linked_list::LinkedList;
pub use error::ListError;
pub use interface::sequence_list::SequenceList;
