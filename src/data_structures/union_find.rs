//! Union-find (disjoint set union) over node labels, used by Kruskal's algorithm.
//!
//! Sets are merged by size and `find` compresses the path it walks, which
//! keeps the amortized cost of both operations close to constant.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot<'a> {
    /// Representative of a set holding `size` labels
    Root { size: usize },
    /// Non-representative member pointing towards its representative
    Child { parent: &'a str },
}

#[derive(Debug, Clone, Default)]
pub struct DisjointSet<'a> {
    slots: HashMap<&'a str, Slot<'a>>,
    sets: usize,
}

impl<'a> DisjointSet<'a> {
    /// Creates one singleton set per label. Repeated labels are ignored.
    pub fn new<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut set = DisjointSet::default();
        for label in labels {
            set.make_set(label);
        }
        set
    }

    /// Adds `label` as a singleton set if it is not tracked yet
    pub fn make_set(&mut self, label: &'a str) {
        if !self.slots.contains_key(label) {
            self.slots.insert(label, Slot::Root { size: 1 });
            self.sets += 1;
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.slots.contains_key(label)
    }

    /// Number of disjoint sets currently tracked
    pub fn num_sets(&self) -> usize {
        self.sets
    }

    /// Returns the representative of `label`'s set, or `None` for untracked labels
    pub fn find(&mut self, label: &str) -> Option<&'a str> {
        let (&start, _) = self.slots.get_key_value(label)?;

        let mut root = start;
        while let Some(&Slot::Child { parent }) = self.slots.get(root) {
            root = parent;
        }

        let mut node = start;
        while let Some(&Slot::Child { parent }) = self.slots.get(node) {
            self.slots.insert(node, Slot::Child { parent: root });
            node = parent;
        }

        Some(root)
    }

    /// Returns true if both labels are tracked and share a representative
    pub fn same_set(&mut self, left: &str, right: &str) -> bool {
        match (self.find(left), self.find(right)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Size of the set containing `label`
    pub fn set_size(&mut self, label: &str) -> Option<usize> {
        let root = self.find(label)?;
        match self.slots.get(root) {
            Some(Slot::Root { size }) => Some(*size),
            _ => None,
        }
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// The representative of the larger set becomes the representative of the
    /// union; on equal sizes `right`'s representative wins. Returns `false` if
    /// the labels were already in the same set or either one is untracked.
    pub fn union(&mut self, left: &str, right: &str) -> bool {
        let (Some(left_root), Some(right_root)) = (self.find(left), self.find(right)) else {
            return false;
        };
        if left_root == right_root {
            return false;
        }

        let left_size = self.root_size(left_root);
        let right_size = self.root_size(right_root);
        let (parent, child) = if left_size > right_size {
            (left_root, right_root)
        } else {
            (right_root, left_root)
        };

        self.slots.insert(child, Slot::Child { parent });
        self.slots.insert(
            parent,
            Slot::Root {
                size: left_size + right_size,
            },
        );
        self.sets -= 1;
        true
    }

    fn root_size(&self, root: &str) -> usize {
        match self.slots.get(root) {
            Some(Slot::Root { size }) => *size,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_are_disjoint() {
        let mut set = DisjointSet::new(["a", "b", "c", "a"]);
        assert_eq!(set.num_sets(), 3);
        assert!(!set.same_set("a", "b"));
        assert_eq!(set.find("a"), Some("a"));
        assert_eq!(set.set_size("c"), Some(1));
        assert_eq!(set.find("zzz"), None);
    }

    #[test]
    fn union_merges_and_counts() {
        let mut set = DisjointSet::new(["a", "b", "c", "d"]);
        assert!(set.union("a", "b"));
        assert!(set.union("c", "d"));
        assert_eq!(set.num_sets(), 2);
        assert!(!set.union("b", "a"));

        assert!(set.union("a", "d"));
        assert_eq!(set.num_sets(), 1);
        assert!(set.same_set("b", "c"));
        assert_eq!(set.set_size("a"), Some(4));
    }

    #[test]
    fn equal_sizes_favour_right_representative() {
        let mut set = DisjointSet::new(["a", "b"]);
        set.union("a", "b");
        assert_eq!(set.find("a"), Some("b"));
    }

    #[test]
    fn larger_set_keeps_its_representative() {
        let mut set = DisjointSet::new(["a", "b", "c"]);
        set.union("a", "b");
        let big_root = set.find("a").unwrap();
        set.union("a", "c");
        assert_eq!(set.find("c"), Some(big_root));

        set.make_set("d");
        set.union("d", "a");
        assert_eq!(set.find("d"), Some(big_root));
    }

    #[test]
    fn find_compresses_paths() {
        let mut set = DisjointSet::new(["a", "b", "c", "d"]);
        // a -> b -> d after the last union
        set.union("a", "b");
        set.union("c", "d");
        set.union("a", "c");
        let root = set.find("a").unwrap();
        assert_eq!(set.slots.get("a"), Some(&Slot::Child { parent: root }));
    }

    #[test]
    fn untracked_labels_never_union() {
        let mut set = DisjointSet::new(["a"]);
        assert!(!set.union("a", "ghost"));
        assert!(!set.same_set("ghost", "ghost"));
    }
}
