//! Cross-container permission matrix driven end-to-end: pull × put
//! combinations, clone-pull retention, and item conservation.

mod common;

use common::World;
use sortkit::{GroupSpec, NodeId, Point, PullPolicy, PutPolicy, SortableOptions};

/// Build two side-by-side lists with the given group specs and drag the
/// first item of the left list over the right list's first item, then
/// release there. Returns the final id sequences of both lists.
fn run_cross_drag(left_group: GroupSpec, right_group: GroupSpec) -> (Vec<String>, Vec<String>) {
    let mut world = World::new();
    let (_, left_root, items) = world.vertical_container(
        Point::new(0.0, 0.0),
        &["x", "y"],
        SortableOptions::default().group(left_group),
    );
    let (_, right_root, _) = world.vertical_container(
        Point::new(200.0, 0.0),
        &["p", "q"],
        SortableOptions::default().group(right_group),
    );

    world.press(items[0], 50.0, 10.0);
    // Above p's midpoint: would land first in the right list.
    world.move_to(250.0, 5.0);
    world.release(250.0, 5.0);

    (world.ids(left_root), world.ids(right_root))
}

fn multiset(mut v: Vec<String>) -> Vec<String> {
    v.sort();
    v
}

#[test]
fn pull_always_put_always_moves() {
    let (left, right) = run_cross_drag(
        GroupSpec::named("g").pull(PullPolicy::Always),
        GroupSpec::named("g").put(PutPolicy::Always),
    );
    assert_eq!(left, ["y"]);
    assert_eq!(right, ["x", "p", "q"]);
}

#[test]
fn pull_never_blocks_the_move() {
    let (left, right) = run_cross_drag(
        GroupSpec::named("g").pull(PullPolicy::Never),
        GroupSpec::named("g").put(PutPolicy::Always),
    );
    assert_eq!(left, ["x", "y"]);
    assert_eq!(right, ["p", "q"]);
}

#[test]
fn put_never_blocks_and_item_returns_home() {
    let mut world = World::new();
    let (left_id, left_root, items) = world.vertical_container(
        Point::new(0.0, 0.0),
        &["x", "y"],
        SortableOptions::default().group(GroupSpec::named("g")),
    );
    let (_, right_root, _) = world.vertical_container(
        Point::new(200.0, 0.0),
        &["p", "q"],
        SortableOptions::default().group(GroupSpec::named("g").put(PutPolicy::Never)),
    );

    world.press(items[0], 50.0, 10.0);
    world.move_to(250.0, 5.0);
    world.move_to(250.0, 25.0);
    world.release(250.0, 25.0);

    assert_eq!(world.ids(left_root), ["x", "y"]);
    assert_eq!(world.ids(right_root), ["p", "q"]);
    let end = world.delegate.ends.last().expect("end notification");
    assert_eq!(end.from, left_id);
    assert_eq!(end.to, left_id);
    assert_eq!(end.new_index, end.old_index);
}

#[test]
fn name_list_put_admits_listed_groups_only() {
    let (left, right) = run_cross_drag(
        GroupSpec::named("src"),
        GroupSpec::named("dst").put(PutPolicy::Names(vec!["src".into()])),
    );
    assert_eq!(left, ["y"]);
    assert_eq!(right, ["x", "p", "q"]);

    let (left, right) = run_cross_drag(
        GroupSpec::named("other"),
        GroupSpec::named("dst").put(PutPolicy::Names(vec!["src".into()])),
    );
    assert_eq!(left, ["x", "y"]);
    assert_eq!(right, ["p", "q"]);
}

#[test]
fn name_list_pull_releases_toward_listed_groups_only() {
    let (left, right) = run_cross_drag(
        GroupSpec::named("src").pull(PullPolicy::Names(vec!["dst".into()])),
        GroupSpec::named("dst").put(PutPolicy::Always),
    );
    assert_eq!(left, ["y"]);
    assert_eq!(right, ["x", "p", "q"]);

    let (left, right) = run_cross_drag(
        GroupSpec::named("src").pull(PullPolicy::Names(vec!["elsewhere".into()])),
        GroupSpec::named("dst").put(PutPolicy::Always),
    );
    assert_eq!(left, ["x", "y"]);
    assert_eq!(right, ["p", "q"]);
}

#[test]
fn unnamed_groups_never_cross() {
    let (left, right) = run_cross_drag(GroupSpec::default(), GroupSpec::default());
    assert_eq!(left, ["x", "y"]);
    assert_eq!(right, ["p", "q"]);
}

#[test]
fn clone_pull_leaves_origin_copy_in_place() {
    let (left, right) = run_cross_drag(
        GroupSpec::named("g").pull(PullPolicy::Clone),
        GroupSpec::named("g").put(PutPolicy::Always),
    );
    // The origin keeps a copy at the item's old slot; the destination
    // gains the item: one controlled duplicate.
    assert_eq!(left, ["x", "y"]);
    assert_eq!(right, ["x", "p", "q"]);
}

#[test]
fn clone_is_retracted_when_item_returns_home() {
    let mut world = World::new();
    let (_, left_root, items) = world.vertical_container(
        Point::new(0.0, 0.0),
        &["x", "y"],
        SortableOptions::default().group(GroupSpec::named("g").pull(PullPolicy::Clone)),
    );
    let (_, right_root, _) = world.vertical_container(
        Point::new(200.0, 0.0),
        &["p"],
        SortableOptions::default().group(GroupSpec::named("g").put(PutPolicy::Always)),
    );

    world.press(items[0], 50.0, 10.0);
    world.move_to(250.0, 5.0);
    assert_eq!(world.ids(right_root), ["x", "p"]);
    // Back home, above y's midpoint in the shrunken left list.
    world.move_to(50.0, 5.0);
    world.release(50.0, 5.0);

    assert_eq!(world.ids(left_root), ["x", "y"]);
    assert_eq!(world.ids(right_root), ["p"]);
    let end = world.delegate.ends.last().expect("end notification");
    assert!(end.clone.is_none());
}

#[test]
fn clone_reported_in_end_context() {
    let mut world = World::new();
    let (_, _, items) = world.vertical_container(
        Point::new(0.0, 0.0),
        &["x", "y"],
        SortableOptions::default()
            .group(GroupSpec::named("g").pull(PullPolicy::Clone).revert_clone(true)),
    );
    let (_, _, _) = world.vertical_container(
        Point::new(200.0, 0.0),
        &["p"],
        SortableOptions::default().group(GroupSpec::named("g").put(PutPolicy::Always)),
    );

    world.press(items[0], 50.0, 10.0);
    world.move_to(250.0, 5.0);
    world.release(250.0, 5.0);

    let end = world.delegate.ends.last().expect("end notification");
    assert!(end.clone.is_some());
    assert!(end.revert_clone);
    assert_ne!(end.clone, Some(items[0]));
}

#[test]
fn items_are_conserved_across_arbitrary_cross_moves() {
    let mut world = World::new();
    let shared = || SortableOptions::default().group(GroupSpec::named("g"));
    let (_, left_root, items) =
        world.vertical_container(Point::new(0.0, 0.0), &["a", "b", "c"], shared());
    let (_, right_root, _) =
        world.vertical_container(Point::new(200.0, 0.0), &["d", "e"], shared());

    let before = multiset(
        [world.ids(left_root), world.ids(right_root)].concat(),
    );

    world.press(items[1], 50.0, 30.0);
    for (x, y) in [
        (250.0, 5.0),
        (250.0, 45.0),
        (50.0, 35.0),
        (250.0, 25.0),
        (50.0, 5.0),
    ] {
        world.move_to(x, y);
    }
    world.release(50.0, 5.0);

    let after = multiset(
        [world.ids(left_root), world.ids(right_root)].concat(),
    );
    assert_eq!(before, after);
    assert_eq!(before.len(), 5);
}

#[test]
fn runtime_group_change_takes_effect() {
    let mut world = World::new();
    let (left_id, left_root, items) = world.vertical_container(
        Point::new(0.0, 0.0),
        &["x", "y"],
        SortableOptions::default(),
    );
    let (right_id, right_root, _) = world.vertical_container(
        Point::new(200.0, 0.0),
        &["p"],
        SortableOptions::default(),
    );

    // Unnamed defaults: the drag never crosses.
    world.press(items[0], 50.0, 10.0);
    world.move_to(250.0, 5.0);
    world.release(250.0, 5.0);
    assert_eq!(world.ids(right_root), ["p"]);

    // Join both containers to one group at runtime and repeat.
    for id in [left_id, right_id] {
        world
            .sorter
            .update_options(id, |o| o.group = GroupSpec::named("late"))
            .expect("update group");
    }
    let x: NodeId = items[0];
    world.press(x, 50.0, 10.0);
    world.move_to(250.0, 5.0);
    world.release(250.0, 5.0);
    assert_eq!(world.ids(left_root), ["y"]);
    assert_eq!(world.ids(right_root), ["x", "p"]);
}
