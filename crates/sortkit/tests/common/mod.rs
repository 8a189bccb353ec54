//! Shared harness for the engine integration tests: a recording delegate
//! and a small world builder over the in-memory tree.

use std::collections::HashMap;

use sortkit::{
    Axis, ContainerId, InputEvent, MockTree, MoveContext, MoveVerdict, NodeId, Point,
    SessionContext, SortDelegate, Sorter, SortableOptions,
};
use web_time::{Duration, Instant};

/// Delegate that records every notification and answers the veto hook
/// with a configurable verdict.
#[derive(Default)]
pub struct Recording {
    pub starts: Vec<SessionContext>,
    pub changes: Vec<SessionContext>,
    pub ends: Vec<SessionContext>,
    pub moves: Vec<MoveContext>,
    pub captures: Vec<Vec<ContainerId>>,
    pub animations: usize,
    pub verdict: MoveVerdict,
    pub stored: HashMap<u64, Vec<String>>,
    pub saved: Vec<(ContainerId, Vec<String>)>,
}

impl SortDelegate for Recording {
    fn on_start(&mut self, ctx: &SessionContext) {
        self.starts.push(*ctx);
    }

    fn on_move(&mut self, ctx: &MoveContext) -> MoveVerdict {
        self.moves.push(*ctx);
        self.verdict
    }

    fn on_change(&mut self, ctx: &SessionContext) {
        self.changes.push(*ctx);
    }

    fn on_end(&mut self, ctx: &SessionContext) {
        self.ends.push(*ctx);
    }

    fn capture_state(&mut self, containers: &[ContainerId]) {
        self.captures.push(containers.to_vec());
    }

    fn animate(&mut self, _containers: &[ContainerId], _duration: Duration) {
        self.animations += 1;
    }

    fn load_order(&mut self, container: ContainerId) -> Option<Vec<String>> {
        self.stored.get(&container.0).cloned()
    }

    fn save_order(&mut self, container: ContainerId, order: &[String]) {
        self.saved.push((container, order.to_vec()));
    }
}

/// A tree, an engine, a delegate, and a monotonically advancing clock.
pub struct World {
    pub tree: MockTree,
    pub sorter: Sorter,
    pub delegate: Recording,
    pub now: Instant,
}

impl World {
    pub fn new() -> Self {
        Self {
            tree: MockTree::new(),
            sorter: Sorter::new(),
            delegate: Recording::default(),
            now: Instant::now(),
        }
    }

    /// A vertical container at `origin` with 20px-tall, 100px-wide items.
    pub fn vertical_container(
        &mut self,
        origin: Point,
        ids: &[&str],
        options: SortableOptions,
    ) -> (ContainerId, NodeId, Vec<NodeId>) {
        let root = self
            .tree
            .stacked_container(Axis::Vertical, origin, 20.0, 100.0, 0.0);
        let items: Vec<NodeId> = ids.iter().map(|id| self.tree.push_item(root, id)).collect();
        let id = self
            .sorter
            .register(root, options, &mut self.tree, &mut self.delegate)
            .expect("register container");
        (id, root, items)
    }

    /// Advance the clock far enough that the placement silence window has
    /// lapsed.
    pub fn tick(&mut self) {
        self.now += Duration::from_millis(40);
    }

    pub fn press(&mut self, target: NodeId, x: f64, y: f64) {
        let event = InputEvent::pointer_down(Point::new(x, y), target);
        self.dispatch(&event);
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.tick();
        let event = InputEvent::pointer_move(Point::new(x, y));
        self.dispatch(&event);
    }

    pub fn release(&mut self, x: f64, y: f64) {
        self.tick();
        let event = InputEvent::pointer_up(Point::new(x, y));
        self.dispatch(&event);
    }

    pub fn dispatch(&mut self, event: &InputEvent) {
        let now = self.now;
        self.sorter
            .handle_event(event, now, &mut self.tree, &mut self.delegate);
    }

    pub fn ids(&self, root: NodeId) -> Vec<String> {
        self.tree.ids_in(root)
    }
}
