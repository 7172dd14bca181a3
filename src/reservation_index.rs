use chrono::NaiveDate;

use crate::RoomNumber;
use crate::record::ReservationRecord;

/// Unbalanced binary search tree over reservation keys.
///
/// Left subtrees hold strictly smaller (date, room) keys, right subtrees hold
/// the larger ones. Depth depends on insertion order.
#[derive(Debug, Default)]
pub struct ReservationIndex {
    root: Option<Box<TreeNode>>,
    len: usize,
}

#[derive(Clone, Debug)]
struct TreeNode {
    record: ReservationRecord,
    left: Option<Box<TreeNode>>,
    right: Option<Box<TreeNode>>,
}

impl TreeNode {
    fn leaf(record: ReservationRecord) -> Box<Self> {
        Box::new(Self {
            record,
            left: None,
            right: None,
        })
    }
}

impl ReservationIndex {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert a reservation. Returns `false` and leaves the tree untouched if
    /// the (date, room) pair is already booked.
    pub fn insert(&mut self, date: NaiveDate, room_number: RoomNumber) -> bool {
        let record = ReservationRecord::new(date, room_number);
        let inserted = Self::insert_recursive(&mut self.root, record);
        if inserted {
            self.len += 1;
            log::debug!("reserved room {} on {}", room_number, date);
        } else {
            log::debug!("room {} on {} already reserved", room_number, date);
        }
        inserted
    }

    fn insert_recursive(node: &mut Option<Box<TreeNode>>, record: ReservationRecord) -> bool {
        match node {
            None => {
                *node = Some(TreeNode::leaf(record));
                true
            }
            Some(n) => {
                if n.record.matches(record.date(), record.room_number()) {
                    false
                } else if record.key() < n.record.key() {
                    Self::insert_recursive(&mut n.left, record)
                } else {
                    Self::insert_recursive(&mut n.right, record)
                }
            }
        }
    }

    /// `true` when no reservation exists for (date, room).
    pub fn check_availability(&self, date: NaiveDate, room_number: RoomNumber) -> bool {
        Self::availability_recursive(&self.root, date, room_number)
    }

    fn availability_recursive(
        node: &Option<Box<TreeNode>>,
        date: NaiveDate,
        room_number: RoomNumber,
    ) -> bool {
        match node {
            None => true,
            Some(n) => {
                if n.record.matches(date, room_number) {
                    false
                } else if (date, room_number) < n.record.key() {
                    Self::availability_recursive(&n.left, date, room_number)
                } else {
                    Self::availability_recursive(&n.right, date, room_number)
                }
            }
        }
    }

    pub fn contains(&self, date: NaiveDate, room_number: RoomNumber) -> bool {
        !self.check_availability(date, room_number)
    }

    /// Remove the reservation for (date, room). Returns `false` if there was
    /// none.
    ///
    /// A node with two children is not unlinked: it takes over its in-order
    /// successor's key and the successor's node is removed from the right
    /// subtree instead.
    pub fn cancel(&mut self, date: NaiveDate, room_number: RoomNumber) -> bool {
        let (root, deleted) = Self::cancel_recursive(self.root.take(), date, room_number);
        self.root = root;
        if deleted {
            self.len -= 1;
            log::debug!("cancelled room {} on {}", room_number, date);
        } else {
            log::debug!("no reservation for room {} on {} to cancel", room_number, date);
        }
        deleted
    }

    // returns the (possibly replaced) subtree root and whether a node was removed
    fn cancel_recursive(
        node: Option<Box<TreeNode>>,
        date: NaiveDate,
        room_number: RoomNumber,
    ) -> (Option<Box<TreeNode>>, bool) {
        let Some(mut n) = node else {
            return (None, false);
        };

        if n.record.matches(date, room_number) {
            match (n.left.take(), n.right.take()) {
                (None, right) => (right, true),
                (left, None) => (left, true),
                (Some(left), Some(right)) => {
                    let successor = Self::min_record(&right);
                    n.record.overwrite_with(&successor);
                    let (right, _) = Self::cancel_recursive(
                        Some(right),
                        successor.date(),
                        successor.room_number(),
                    );
                    n.left = Some(left);
                    n.right = right;
                    (Some(n), true)
                }
            }
        } else if (date, room_number) < n.record.key() {
            let (left, deleted) = Self::cancel_recursive(n.left.take(), date, room_number);
            n.left = left;
            (Some(n), deleted)
        } else {
            let (right, deleted) = Self::cancel_recursive(n.right.take(), date, room_number);
            n.right = right;
            (Some(n), deleted)
        }
    }

    // leftmost record of a subtree: the in-order successor of its parent
    fn min_record(node: &TreeNode) -> ReservationRecord {
        let mut current = node;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        current.record
    }

    /// All reservations for `room_number`, ascending by date.
    pub fn list_by_room(&self, room_number: RoomNumber) -> Vec<ReservationRecord> {
        self.list_by_room_with(room_number, true)
    }

    /// Like [`list_by_room`](Self::list_by_room). With `resort` unset the
    /// in-order traversal order is returned as-is, which is already
    /// date-ascending because date is the primary key.
    pub fn list_by_room_with(
        &self,
        room_number: RoomNumber,
        resort: bool,
    ) -> Vec<ReservationRecord> {
        let mut reservations = Vec::new();
        Self::list_recursive(&self.root, room_number, &mut reservations);
        if resort {
            reservations.sort_by_key(|r| r.date());
        }
        reservations
    }

    fn list_recursive(
        node: &Option<Box<TreeNode>>,
        room_number: RoomNumber,
        out: &mut Vec<ReservationRecord>,
    ) {
        if let Some(n) = node {
            Self::list_recursive(&n.left, room_number, out);
            if n.record.room_number() == room_number {
                out.push(n.record);
            }
            Self::list_recursive(&n.right, room_number, out);
        }
    }

    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left(self.root.as_deref());
        iter
    }

    pub fn height(&self) -> usize {
        Self::height_recursive(&self.root)
    }

    fn height_recursive(node: &Option<Box<TreeNode>>) -> usize {
        match node {
            None => 0,
            Some(n) => 1 + Self::height_recursive(&n.left).max(Self::height_recursive(&n.right)),
        }
    }

    /// Checks that every left subtree is strictly smaller and every right
    /// subtree strictly larger than its parent's key.
    pub fn is_valid_bst(&self) -> bool {
        Self::valid_recursive(&self.root, None, None)
    }

    fn valid_recursive(
        node: &Option<Box<TreeNode>>,
        lower: Option<ReservationRecord>,
        upper: Option<ReservationRecord>,
    ) -> bool {
        match node {
            None => true,
            Some(n) => {
                if lower.is_some_and(|low| n.record <= low) {
                    return false;
                }
                if upper.is_some_and(|high| n.record >= high) {
                    return false;
                }
                Self::valid_recursive(&n.left, lower, Some(n.record))
                    && Self::valid_recursive(&n.right, Some(n.record), upper)
            }
        }
    }

    pub fn pretty_print(&self) {
        println!("\n=== Reservation Index ===");
        if self.root.is_none() {
            println!("  (no reservations)");
        } else {
            Self::print_tree(&self.root, "", true);
        }
        println!("=========================\n");
    }

    fn print_tree(node: &Option<Box<TreeNode>>, prefix: &str, is_tail: bool) {
        if let Some(n) = node {
            println!(
                "{}{} {}",
                prefix,
                if is_tail { "└──" } else { "├──" },
                n.record
            );

            let new_prefix = format!("{}{}", prefix, if is_tail { "    " } else { "│   " });

            if n.right.is_some() {
                Self::print_tree(&n.right, &new_prefix, n.left.is_none());
            }
            if n.left.is_some() {
                Self::print_tree(&n.left, &new_prefix, true);
            }
        }
    }
}

/// In-order iterator over an index, smallest key first.
pub struct Iter<'a> {
    stack: Vec<&'a TreeNode>,
}

impl<'a> Iter<'a> {
    fn push_left(&mut self, mut node: Option<&'a TreeNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a ReservationRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(&node.record)
    }
}

impl<'a> IntoIterator for &'a ReservationIndex {
    type Item = &'a ReservationRecord;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// duplicates are skipped
impl Extend<ReservationRecord> for ReservationIndex {
    fn extend<I: IntoIterator<Item = ReservationRecord>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record.date(), record.room_number());
        }
    }
}

impl FromIterator<ReservationRecord> for ReservationIndex {
    fn from_iter<I: IntoIterator<Item = ReservationRecord>>(iter: I) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}
