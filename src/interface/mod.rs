pub mod sequence_list;
