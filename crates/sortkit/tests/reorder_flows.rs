//! End-to-end reorder flows against the in-memory tree: same-container
//! sorting, empty-container drops, veto outcomes, and order application.

mod common;

use common::World;
use sortkit::{GroupSpec, InputEvent, MoveVerdict, Point, SortableOptions};
use web_time::Duration;

#[test]
fn dragging_down_reorders_past_each_midpoint() {
    let mut world = World::new();
    let (_, root, items) =
        world.vertical_container(Point::new(0.0, 0.0), &["a", "b", "c"], SortableOptions::default());

    world.press(items[0], 50.0, 10.0);
    // Past b's midpoint (b spans 20..40).
    world.move_to(50.0, 35.0);
    assert_eq!(world.ids(root), ["b", "a", "c"]);
    // Past c's midpoint in the new geometry (c spans 40..60).
    world.move_to(50.0, 55.0);
    assert_eq!(world.ids(root), ["b", "c", "a"]);
    world.release(50.0, 55.0);

    assert_eq!(world.ids(root), ["b", "c", "a"]);
    let end = world.delegate.ends.last().expect("end notification");
    assert_eq!(end.old_index, 0);
    assert_eq!(end.new_index, 2);
    assert!(end.moved);
    assert!(!world.sorter.is_dragging());
}

#[test]
fn dragging_up_reorders_symmetrically() {
    let mut world = World::new();
    let (_, root, items) =
        world.vertical_container(Point::new(0.0, 0.0), &["a", "b", "c"], SortableOptions::default());

    world.press(items[2], 50.0, 50.0);
    // Above b's midpoint (b spans 20..40).
    world.move_to(50.0, 25.0);
    assert_eq!(world.ids(root), ["a", "c", "b"]);
    // Above a's midpoint (a spans 0..20).
    world.move_to(50.0, 5.0);
    assert_eq!(world.ids(root), ["c", "a", "b"]);
    world.release(50.0, 5.0);
    assert_eq!(world.ids(root), ["c", "a", "b"]);
}

#[test]
fn movement_within_own_item_changes_nothing() {
    let mut world = World::new();
    let (_, root, items) =
        world.vertical_container(Point::new(0.0, 0.0), &["a", "b", "c"], SortableOptions::default());
    let before = world.tree.mutation_count();

    world.press(items[1], 50.0, 25.0);
    world.move_to(50.0, 28.0);
    world.move_to(50.0, 23.0);
    world.release(50.0, 23.0);

    assert_eq!(world.ids(root), ["a", "b", "c"]);
    assert_eq!(world.tree.mutation_count(), before);
    let end = world.delegate.ends.last().expect("end notification");
    assert_eq!(end.old_index, end.new_index);
    assert!(world.delegate.changes.is_empty());
}

#[test]
fn drop_into_nearby_empty_container() {
    let mut world = World::new();
    let shared = || SortableOptions::default().group(GroupSpec::named("g"));
    let (_, left_root, items) =
        world.vertical_container(Point::new(0.0, 0.0), &["x", "y"], shared());
    let (_, right_root, _) = world.vertical_container(Point::new(200.0, 0.0), &[], shared());
    // An empty list still has a resting footprint in a real host.
    world
        .tree
        .set_rect(right_root, sortkit::Rect::new(200.0, 0.0, 100.0, 60.0));

    world.press(items[0], 50.0, 10.0);
    // 4px below the right container's box: inside the 5px threshold, over
    // no container's area.
    world.move_to(250.0, 64.0);
    world.release(250.0, 64.0);

    assert_eq!(world.ids(left_root), ["y"]);
    assert_eq!(world.ids(right_root), ["x"]);
    let end = world.delegate.ends.last().expect("end notification");
    assert_ne!(end.from, end.to);
}

#[test]
fn drop_directly_over_empty_container_box() {
    let mut world = World::new();
    let shared = || SortableOptions::default().group(GroupSpec::named("g"));
    let (_, left_root, items) =
        world.vertical_container(Point::new(0.0, 0.0), &["x", "y"], shared());
    let (_, right_root, _) = world.vertical_container(Point::new(200.0, 0.0), &[], shared());
    world
        .tree
        .set_rect(right_root, sortkit::Rect::new(200.0, 0.0, 100.0, 60.0));

    world.press(items[0], 50.0, 10.0);
    world.move_to(250.0, 30.0);
    world.release(250.0, 30.0);

    assert_eq!(world.ids(left_root), ["y"]);
    assert_eq!(world.ids(right_root), ["x"]);
}

#[test]
fn vetoed_moves_leave_item_at_origin() {
    let mut world = World::new();
    let (_, root, items) =
        world.vertical_container(Point::new(0.0, 0.0), &["a", "b", "c"], SortableOptions::default());
    world.delegate.verdict = MoveVerdict::Reject;
    let before = world.tree.mutation_count();

    world.press(items[0], 50.0, 10.0);
    world.move_to(50.0, 35.0);
    world.move_to(50.0, 55.0);
    assert!(world.sorter.is_dragging());
    world.release(50.0, 55.0);

    assert_eq!(world.ids(root), ["a", "b", "c"]);
    assert_eq!(world.tree.mutation_count(), before);
    assert!(!world.delegate.moves.is_empty());
    let end = world.delegate.ends.last().expect("end notification");
    assert_eq!(end.new_index, 0);
}

#[test]
fn append_when_pointer_reaches_bottom_padding() {
    let mut world = World::new();
    let (_, root, items) =
        world.vertical_container(Point::new(0.0, 0.0), &["a", "b", "c"], SortableOptions::default());
    // The container box extends past its items, as padded list boxes do.
    world
        .tree
        .set_rect(root, sortkit::Rect::new(0.0, 0.0, 100.0, 90.0));

    world.press(items[0], 50.0, 10.0);
    world.move_to(50.0, 80.0);
    world.release(50.0, 80.0);
    assert_eq!(world.ids(root), ["b", "c", "a"]);
    let end = world.delegate.ends.last().expect("end notification");
    assert_eq!(end.new_index, 2);
}

#[test]
fn forced_side_overrides_computed_direction() {
    let mut world = World::new();
    let (_, root, items) =
        world.vertical_container(Point::new(0.0, 0.0), &["a", "b", "c"], SortableOptions::default());
    world
        .tree
        .set_rect(root, sortkit::Rect::new(0.0, 0.0, 100.0, 90.0));
    world.delegate.verdict = MoveVerdict::InsertBefore;

    world.press(items[0], 50.0, 10.0);
    // Past the end: the computed placement is "append after c", but the
    // veto hook forces the near side of the related sibling.
    world.move_to(50.0, 80.0);
    assert_eq!(world.ids(root), ["b", "a", "c"]);
}

#[test]
fn abort_verdict_ends_the_session_in_place() {
    let mut world = World::new();
    let (_, root, items) =
        world.vertical_container(Point::new(0.0, 0.0), &["a", "b", "c"], SortableOptions::default());
    world.delegate.verdict = MoveVerdict::AbortSession;
    let before = world.tree.mutation_count();

    world.press(items[0], 50.0, 10.0);
    world.move_to(50.0, 35.0);

    assert!(!world.sorter.is_dragging());
    assert_eq!(world.ids(root), ["a", "b", "c"]);
    assert_eq!(world.tree.mutation_count(), before);
    assert_eq!(world.delegate.ends.len(), 1);
    assert_eq!(world.delegate.ends[0].new_index, 0);
}

#[test]
fn change_notifications_track_committed_placements() {
    let mut world = World::new();
    let (id, _, items) =
        world.vertical_container(Point::new(0.0, 0.0), &["a", "b", "c"], SortableOptions::default());

    world.press(items[0], 50.0, 10.0);
    world.move_to(50.0, 35.0);
    world.move_to(50.0, 55.0);
    world.release(50.0, 55.0);

    assert_eq!(world.delegate.changes.len(), 2);
    assert_eq!(world.delegate.captures.len(), 2);
    assert_eq!(world.delegate.captures[0], vec![id]);
    assert_eq!(world.delegate.animations, 2);
}

#[test]
fn silence_window_swallows_immediate_followup_movement() {
    let mut world = World::new();
    let (_, root, items) =
        world.vertical_container(Point::new(0.0, 0.0), &["a", "b", "c"], SortableOptions::default());

    world.press(items[0], 50.0, 10.0);
    world.move_to(50.0, 35.0);
    assert_eq!(world.ids(root), ["b", "a", "c"]);
    // A reflow-induced movement 5ms later lands inside the silence
    // window and must not trigger another placement.
    world.now += Duration::from_millis(5);
    let event = InputEvent::pointer_move(Point::new(50.0, 15.0));
    world.dispatch(&event);
    assert_eq!(world.ids(root), ["b", "a", "c"]);
    assert_eq!(world.delegate.changes.len(), 1);
}

#[test]
fn sort_disabled_container_still_allows_pull() {
    let mut world = World::new();
    let shared_sortless = SortableOptions::default()
        .group(GroupSpec::named("g"))
        .sort(false);
    let shared = SortableOptions::default().group(GroupSpec::named("g"));
    let (_, left_root, items) =
        world.vertical_container(Point::new(0.0, 0.0), &["a", "b"], shared_sortless);
    let (_, right_root, _) =
        world.vertical_container(Point::new(200.0, 0.0), &["p"], shared);

    // Reordering inside the sort(false) container does nothing.
    world.press(items[0], 50.0, 10.0);
    world.move_to(50.0, 35.0);
    assert_eq!(world.ids(left_root), ["a", "b"]);
    // Pulling it into the neighbor works: above p's midpoint lands first.
    world.move_to(250.0, 5.0);
    world.release(250.0, 5.0);
    assert_eq!(world.ids(left_root), ["b"]);
    assert_eq!(world.ids(right_root), ["a", "p"]);
}

#[test]
fn apply_identical_order_is_a_complete_noop() {
    let mut world = World::new();
    let (id, root, _) =
        world.vertical_container(Point::new(0.0, 0.0), &["p", "q", "r"], SortableOptions::default());
    let before = world.tree.mutation_count();

    let order = vec!["p".to_owned(), "q".to_owned(), "r".to_owned()];
    world
        .sorter
        .sort(id, &order, true, &mut world.tree, &mut world.delegate)
        .expect("sort");

    assert_eq!(world.ids(root), ["p", "q", "r"]);
    assert_eq!(world.tree.mutation_count(), before);
    assert!(world.delegate.captures.is_empty());
    assert_eq!(world.delegate.animations, 0);
}

#[test]
fn apply_order_reconciles_children() {
    let mut world = World::new();
    let (id, root, _) =
        world.vertical_container(Point::new(0.0, 0.0), &["p", "q", "r"], SortableOptions::default());

    let order = vec!["r".to_owned(), "q".to_owned(), "p".to_owned()];
    world
        .sorter
        .sort(id, &order, true, &mut world.tree, &mut world.delegate)
        .expect("sort");

    assert_eq!(world.ids(root), ["r", "q", "p"]);
    assert_eq!(world.delegate.captures.len(), 1);
}

#[test]
fn store_loads_at_registration_and_saves_at_drop() {
    let mut world = World::new();
    world
        .delegate
        .stored
        .insert(1, vec!["b".to_owned(), "a".to_owned()]);
    let (id, root, items) = world.vertical_container(
        Point::new(0.0, 0.0),
        &["a", "b"],
        SortableOptions::default().store(true),
    );
    // Persisted order applied during registration.
    assert_eq!(world.ids(root), ["b", "a"]);

    // items[0] is "a", now second; drag it above b's midpoint.
    world.press(items[0], 50.0, 30.0);
    world.move_to(50.0, 5.0);
    world.release(50.0, 5.0);
    assert_eq!(world.ids(root), ["a", "b"]);
    let saved = world.delegate.saved.last().expect("saved order");
    assert_eq!(saved.0, id);
    assert_eq!(saved.1, ["a", "b"]);
}

#[test]
fn serialized_order_uses_generated_ids_when_unassigned() {
    let mut world = World::new();
    let (id, root, _) =
        world.vertical_container(Point::new(0.0, 0.0), &["a"], SortableOptions::default());
    let anon = world.tree.push_item(root, "tmp");
    // Drop the host id: the engine must fall back to a generated one.
    world.tree.clear_item_id(anon);

    let order = world
        .sorter
        .to_array(id, &world.tree)
        .expect("serialize order");
    assert_eq!(order.len(), 2);
    assert_eq!(order[0], "a");
    assert!(order[1].starts_with("sk-"));
}
