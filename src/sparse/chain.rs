//! Ordered singly-linked chain of populated positions
//!
//! Invariants maintained by every operation here:
//! - positions strictly increase from head to tail
//! - each entry exclusively owns the rest of the chain

/// Owning link to the next entry (or the head of a chain)
pub(super) type Link<T> = Option<Box<Entry<T>>>;

/// One populated position
#[derive(Debug)]
pub(super) struct Entry<T> {
    pub(super) position: usize,
    pub(super) value: T,
    pub(super) next: Link<T>,
}

/// What a write did to the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Placement {
    /// New entry spliced in
    Inserted,
    /// Existing entry's value replaced in place
    Overwritten,
    /// Entry unlinked, position reverts to default
    Removed,
    /// Default written to an unpopulated position
    Unchanged,
}

/// Entry stored at exactly `position`
///
/// Stops as soon as the scan reaches or passes `position`.
pub(super) fn find<T>(head: &Link<T>, position: usize) -> Option<&Entry<T>> {
    let mut cursor = head.as_deref();
    while let Some(entry) = cursor {
        if entry.position >= position {
            return (entry.position == position).then_some(entry);
        }
        cursor = entry.next.as_deref();
    }
    None
}

/// Link slot holding `position`, or the slot where it would be spliced in
///
/// Every entry before the returned slot has a smaller position; the entry in
/// the slot (if any) has a position greater than or equal to `position`.
fn seek_mut<T>(mut link: &mut Link<T>, position: usize) -> &mut Link<T> {
    while link.as_ref().is_some_and(|entry| entry.position < position) {
        match link {
            Some(entry) => link = &mut entry.next,
            None => break,
        }
    }
    link
}

/// Write `value` at `position`, keeping defaults out of the chain
///
/// `is_default` tells whether `value` equals the list's default.
pub(super) fn place<T>(
    head: &mut Link<T>,
    position: usize,
    value: T,
    is_default: bool,
) -> Placement {
    let link = seek_mut(head, position);
    let occupied = link
        .as_ref()
        .is_some_and(|entry| entry.position == position);

    match (occupied, is_default) {
        (false, true) => Placement::Unchanged,
        (false, false) => {
            let next = link.take();
            *link = Some(Box::new(Entry {
                position,
                value,
                next,
            }));
            Placement::Inserted
        }
        (true, true) => {
            if let Some(removed) = link.take() {
                *link = removed.next;
            }
            Placement::Removed
        }
        (true, false) => {
            if let Some(entry) = link.as_mut() {
                entry.value = value;
            }
            Placement::Overwritten
        }
    }
}

/// Tear down a chain one entry at a time
///
/// Dropping a `Box` chain directly recurses once per entry.
pub(super) fn unlink_all<T>(mut link: Link<T>) {
    while let Some(mut entry) = link {
        link = entry.next.take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions<T>(head: &Link<T>) -> Vec<usize> {
        let mut out = Vec::new();
        let mut cursor = head.as_deref();
        while let Some(entry) = cursor {
            out.push(entry.position);
            cursor = entry.next.as_deref();
        }
        out
    }

    #[test]
    fn test_place_keeps_ascending_order() {
        let mut head: Link<u32> = None;
        for position in [4, 0, 2, 9, 1] {
            assert_eq!(place(&mut head, position, 1, false), Placement::Inserted);
        }
        assert_eq!(positions(&head), vec![0, 1, 2, 4, 9]);
        unlink_all(head);
    }

    #[test]
    fn test_place_policy_table() {
        let mut head: Link<u32> = None;

        assert_eq!(place(&mut head, 3, 0, true), Placement::Unchanged);
        assert!(head.is_none());

        assert_eq!(place(&mut head, 3, 5, false), Placement::Inserted);
        assert_eq!(place(&mut head, 3, 6, false), Placement::Overwritten);
        assert_eq!(find(&head, 3).map(|e| e.value), Some(6));

        assert_eq!(place(&mut head, 3, 0, true), Placement::Removed);
        assert!(head.is_none());
    }

    #[test]
    fn test_remove_interior_and_tail() {
        let mut head: Link<u32> = None;
        for position in [1, 5, 8] {
            place(&mut head, position, 7, false);
        }

        assert_eq!(place(&mut head, 5, 0, true), Placement::Removed);
        assert_eq!(positions(&head), vec![1, 8]);

        assert_eq!(place(&mut head, 8, 0, true), Placement::Removed);
        assert_eq!(positions(&head), vec![1]);

        // A gap between populated positions is not an entry
        assert_eq!(place(&mut head, 4, 0, true), Placement::Unchanged);
        assert_eq!(positions(&head), vec![1]);
    }

    #[test]
    fn test_find_stops_at_gaps() {
        let mut head: Link<char> = None;
        place(&mut head, 2, 'a', false);
        place(&mut head, 6, 'b', false);

        assert!(find(&head, 0).is_none());
        assert_eq!(find(&head, 2).map(|e| e.value), Some('a'));
        assert!(find(&head, 4).is_none());
        assert_eq!(find(&head, 6).map(|e| e.value), Some('b'));
        assert!(find(&head, 7).is_none());
    }

    #[test]
    fn test_unlink_long_chain() {
        let mut head: Link<u8> = None;
        for position in (0..200_000).rev() {
            place(&mut head, position, 1, false);
        }
        unlink_all(head);
    }
}
