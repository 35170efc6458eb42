pub mod priority_queue;
pub mod union_find;

pub use priority_queue::MinQueue;
pub use union_find::DisjointSet;
