use iterbst::{Error, LinkedList, Queue, Stack};

#[quickcheck]
fn size_is_inserts_minus_deletes(xs: Vec<u8>, indices: Vec<usize>) -> bool {
    let mut list = LinkedList::new();
    for (i, x) in xs.iter().enumerate() {
        list.insert_at(*x, i % 3);
    }

    let mut deleted = 0;
    for index in indices {
        match list.delete_at(index % (xs.len() + 1)) {
            Ok(_) => deleted += 1,
            Err(Error::IndexOutOfRange { .. }) => {}
            Err(Error::EmptyContainer) => return false,
        }
    }

    list.len() == xs.len() - deleted && list.iter().count() == list.len()
}

#[quickcheck]
fn stack_reverses(xs: Vec<i32>) -> bool {
    let mut stack = Stack::new();
    for x in &xs {
        stack.push(*x);
    }

    let mut popped = Vec::new();
    while stack.has_next() {
        popped.extend(stack.pop());
    }
    popped.reverse();

    popped == xs && stack.pop() == Err(Error::EmptyContainer)
}

#[quickcheck]
fn queue_preserves_order(xs: Vec<i32>) -> bool {
    let mut queue = Queue::new();
    for x in &xs {
        queue.enqueue(*x);
    }

    let mut dequeued = Vec::new();
    while queue.has_next() {
        dequeued.extend(queue.dequeue());
    }

    dequeued == xs && queue.dequeue() == Err(Error::EmptyContainer)
}
