pub mod edge_list;

pub use edge_list::{parse_edge_line, read_edge_list, EdgeRecord, ParseOptions};
