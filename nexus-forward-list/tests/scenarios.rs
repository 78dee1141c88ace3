use nexus_forward_list::lifecycle::{self, Slot};
use nexus_forward_list::{ForwardList, ListError, Node, Status, create_node};
use pretty_assertions::assert_eq;

fn payloads<P: Copy>(list: &ForwardList<P>) -> Vec<P> {
    list.payloads().collect()
}

fn built(items: &[&'static str]) -> ForwardList<&'static str> {
    let mut list = ForwardList::new();
    for item in items {
        list.add_node(create_node(*item)).unwrap();
    }
    list
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn prepend_into_empty_list() {
    let mut list = ForwardList::new();
    list.add_node_beginning(create_node("A")).unwrap();

    assert_eq!(payloads(&list), vec!["A"]);
    assert_eq!(list.len(), 1);
    assert_eq!(list.recount_nodes(), 1);
}

#[test]
fn insert_at_count_appends() {
    let mut list = built(&["A", "B", "C"]);
    list.insert_node(create_node("X"), 3).unwrap();

    assert_eq!(payloads(&list), vec!["A", "B", "C", "X"]);
    assert_eq!(list.len(), 4);
}

#[test]
fn remove_middle_node() {
    let mut list = built(&["A", "B", "C"]);
    assert_eq!(list.remove_node(1), Ok("B"));

    assert_eq!(payloads(&list), vec!["A", "C"]);
    assert_eq!(list.len(), 2);
}

#[test]
fn append_then_lookup_tail() {
    let mut list = built(&["A", "B"]);
    let node = create_node("Z").unwrap();
    let addr: *const Node<&str> = &*node;
    list.add_node(node).unwrap();

    let tail = list.get_node_at(list.len() - 1).unwrap();
    assert!(std::ptr::eq(tail, addr));
}

#[test]
fn prepend_then_lookup_head() {
    let mut list = built(&["A", "B"]);
    let node = create_node("Z").unwrap();
    let addr: *const Node<&str> = &*node;
    list.add_node_beginning(node).unwrap();

    let head = list.get_node_at(0).unwrap();
    assert!(std::ptr::eq(head, addr));
}

#[test]
fn remove_beginning_on_empty_leaves_list_unchanged() {
    let mut list: ForwardList<&str> = ForwardList::new();
    assert_eq!(list.remove_node_beginning(), Err(ListError::NotEnoughNodes));
    assert!(list.is_empty());
    assert!(list.head().is_none());
}

#[test]
fn out_of_range_positions_leave_list_unchanged() {
    let mut list = built(&["A", "B", "C"]);

    assert_eq!(
        list.remove_node(4),
        Err(ListError::BadIndex { pos: 4, count: 3 })
    );
    assert_eq!(
        list.insert_node(create_node("X"), 4),
        Err(ListError::BadIndex { pos: 4, count: 3 })
    );
    assert_eq!(payloads(&list), vec!["A", "B", "C"]);
    assert_eq!(list.len(), 3);
}

#[test]
fn build_then_wipe() {
    let mut list = ForwardList::new();
    for i in 0..64u32 {
        list.add_node(create_node(i)).unwrap();
    }
    assert_eq!(list.len(), 64);

    assert_eq!(list.wipe_nodes(), Ok(64));
    assert_eq!(list.len(), 0);
    assert!(list.head().is_none());
    assert_eq!(list.wipe_nodes(), Err(ListError::NotEnoughNodes));
}

// =============================================================================
// Count consistency
// =============================================================================

#[test]
fn count_tracks_chain_through_mixed_operations() {
    let mut list: ForwardList<u32> = ForwardList::new();
    let mut model: Vec<u32> = Vec::new();

    // Deterministic pseudo-random walk over every operation.
    let mut state = 0x2545_f491_u32;
    for step in 0..2_000u32 {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;

        let len = model.len();
        let pos = ((state >> 8) as usize) % (len + 2);
        let result = match state % 5 {
            0 => list.add_node(create_node(step)).map(|()| model.push(step)),
            1 => list
                .add_node_beginning(create_node(step))
                .map(|()| model.insert(0, step)),
            2 => list
                .insert_node(create_node(step), pos)
                .map(|()| model.insert(pos, step)),
            3 => list.remove_node(pos).map(|p| {
                assert_eq!(p, model.remove(pos));
            }),
            _ => list.remove_node_beginning().map(|p| {
                assert_eq!(p, model.remove(0));
            }),
        };

        match result {
            Ok(()) => {}
            Err(ListError::BadIndex { pos: bad, count }) => {
                assert_eq!(count, len);
                assert!(bad >= len);
            }
            Err(ListError::NotEnoughNodes) => assert_eq!(len, 0),
            Err(err) => panic!("unexpected error {err}"),
        }

        assert_eq!(list.len(), model.len());
        assert_eq!(list.recount_nodes(), model.len());
    }
    assert_eq!(payloads(&list), model);
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn slot_lifecycle() {
    let mut slot: Slot<&str> = None;

    assert_eq!(
        Status::from_result(&lifecycle::init::<&str>(None)),
        Status::BadStructure
    );

    let list = lifecycle::init(Some(&mut slot)).unwrap();
    list.add_node(create_node("A")).unwrap();
    list.add_node(create_node("B")).unwrap();

    lifecycle::list_mut(Some(&mut slot))
        .and_then(|list| list.insert_node(create_node("X"), 1))
        .unwrap();
    assert_eq!(
        lifecycle::list_ref(Some(&slot)).map(payloads),
        Ok(vec!["A", "X", "B"])
    );

    lifecycle::deinit(Some(&mut slot)).unwrap();
    assert!(slot.is_none());
    assert_eq!(
        lifecycle::deinit(Some(&mut slot)),
        Err(ListError::BadStructure)
    );
}

#[test]
fn reinit_discards_chain() {
    let mut slot: Slot<u8> = None;
    lifecycle::init(Some(&mut slot)).unwrap().extend([1, 2, 3]);

    let list = lifecycle::init(Some(&mut slot)).unwrap();
    assert!(list.is_empty());
    assert_eq!(list.recount_nodes(), 0);
}

#[test]
fn payloads_outlive_wiped_list() {
    let names = vec![String::from("ask"), String::from("bid")];
    let mut slot: Slot<&String> = None;

    let list = lifecycle::init(Some(&mut slot)).unwrap();
    for name in &names {
        list.add_node(create_node(name)).unwrap();
    }
    lifecycle::deinit(Some(&mut slot)).unwrap();

    assert_eq!(names, vec!["ask".to_string(), "bid".to_string()]);
}
