pub mod array_list;
pub mod linked_list;
