use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the element into the tree
    Insert(T),
    /// Remove the element from the tree
    Remove(T),
    /// Compare traversals
    Traverse,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => Op::Traverse,
            _ => unreachable!(),
        }
    }
}

/// The positional operations a linked list supports.
#[derive(Copy, Clone, Debug)]
pub(crate) enum ListOp<T> {
    Insert(T),
    InsertAt(T, usize),
    InsertLast(T),
    Get(usize),
    DeleteAt(usize),
    Delete,
    DeleteLast,
}

/// Keeps indices small so they land inside the list reasonably often.
fn small_index(g: &mut Gen) -> usize {
    usize::arbitrary(g) % 16
}

impl<T> Arbitrary for ListOp<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2, 3, 4, 5, 6]).unwrap() {
            0 => ListOp::Insert(T::arbitrary(g)),
            1 => ListOp::InsertAt(T::arbitrary(g), small_index(g)),
            2 => ListOp::InsertLast(T::arbitrary(g)),
            3 => ListOp::Get(small_index(g)),
            4 => ListOp::DeleteAt(small_index(g)),
            5 => ListOp::Delete,
            6 => ListOp::DeleteLast,
            _ => unreachable!(),
        }
    }
}
