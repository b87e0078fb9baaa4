//! Outline construction from body blocks.
//!
//! The walk keeps two pieces of state, threaded through the recursion as a
//! [`BuildState`] value: the depth at which the next node is created, and the
//! kind of the last block that created a node. Headers re-anchor the depth to
//! their level. Lists stay at the current depth when they follow a header, a
//! paragraph or nothing at all, and open one level deeper otherwise (which
//! is what a list nested inside a list item looks like).

use std::collections::BTreeMap;

use crate::extract::extract;
use crate::model::{Attr, Block, Inline, Outline, OutlineNode};

/// Index of a node in the builder's arena.
pub type NodeId = usize;

/// The kind of the last block that created an outline node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LastBlock {
    /// Nothing has been created yet
    #[default]
    None,
    /// A heading
    Header,
    /// A paragraph
    Para,
    /// A plain block, i.e. the text of a tight list item
    Plain,
}

/// Builder cursor threaded through the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BuildState {
    /// Depth at which the next paragraph or list item is created
    pub depth: usize,
    /// Kind of the last node-creating block
    pub last: LastBlock,
}

impl BuildState {
    /// Depth at which the items of a list starting in this state are created.
    pub fn list_depth(&self) -> usize {
        match self.last {
            LastBlock::None | LastBlock::Header | LastBlock::Para => self.depth,
            LastBlock::Plain => self.depth + 1,
        }
    }
}

#[derive(Debug)]
struct Slot {
    text: String,
    attributes: BTreeMap<String, String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Builds an [`Outline`] from a sequence of body blocks.
///
/// # Example
///
/// ```
/// use pandoc_opml::model::Block;
/// use pandoc_opml::outline::OutlineBuilder;
///
/// let outline = OutlineBuilder::new().build(&[
///     Block::header(1, "Groceries"),
///     Block::BulletList(vec![vec![Block::plain("milk")], vec![Block::plain("eggs")]]),
/// ]);
///
/// assert_eq!(outline.roots.len(), 1);
/// assert_eq!(outline.roots[0].children.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct OutlineBuilder {
    arena: Vec<Slot>,
    // Node ids created at each depth so far; the last entry of `levels[d]`
    // is the parent of the next node created at depth d + 1.
    levels: Vec<Vec<NodeId>>,
}

impl OutlineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk the blocks and return the finished outline.
    pub fn build(mut self, blocks: &[Block]) -> Outline {
        let state = self.walk(blocks, BuildState::default());
        log::debug!(
            "built {} outline nodes over {} levels (final depth {})",
            self.arena.len(),
            self.levels.len(),
            state.depth
        );
        self.finish()
    }

    fn walk(&mut self, blocks: &[Block], mut state: BuildState) -> BuildState {
        for block in blocks {
            state = self.visit(block, state);
        }
        state
    }

    fn visit(&mut self, block: &Block, state: BuildState) -> BuildState {
        match block {
            Block::Para(inlines) => self.visit_text(inlines, state, LastBlock::Para),
            Block::Plain(inlines) => self.visit_text(inlines, state, LastBlock::Plain),
            Block::Header {
                level,
                attr,
                content,
            } => {
                let mut attributes = header_attributes(attr);
                attributes.insert("level".to_string(), level.to_string());

                let (_, depth) =
                    self.insert(level.saturating_sub(1), extract(content), attributes);
                BuildState {
                    depth: depth + 1,
                    last: LastBlock::Header,
                }
            }
            Block::BulletList(items) => self.visit_list(items, state, |node, _| {
                node.insert("list".to_string(), "unordered".to_string());
            }),
            Block::OrderedList { start, items } => {
                let start = *start;
                self.visit_list(items, state, move |node, index| {
                    let ordinal = start.saturating_add(index as i64);
                    node.insert("ordinal".to_string(), ordinal.to_string());
                    node.insert("list".to_string(), "ordered".to_string());
                })
            }
            Block::Unknown(_) => {
                log::debug!("no outline node for '{}' block", block.tag());
                state
            }
        }
    }

    fn visit_text(&mut self, inlines: &[Inline], state: BuildState, kind: LastBlock) -> BuildState {
        self.insert(state.depth, extract(inlines), BTreeMap::new());
        BuildState {
            depth: state.depth,
            last: kind,
        }
    }

    /// Walk each list item at the list's depth and tag the node each item
    /// produced there. `tag` receives the item's zero-based index.
    fn visit_list<F>(&mut self, items: &[Vec<Block>], state: BuildState, mut tag: F) -> BuildState
    where
        F: FnMut(&mut BTreeMap<String, String>, usize),
    {
        let depth = state.list_depth();
        let mut inner = BuildState { depth, ..state };

        for (index, item) in items.iter().enumerate() {
            let before = self.last_at(depth);
            inner = self.walk(item, BuildState { depth, ..inner });

            match self.last_at(depth) {
                Some(id) if Some(id) != before => tag(&mut self.arena[id].attributes, index),
                _ => log::debug!("list item {} produced no node at depth {}", index, depth),
            }
        }

        BuildState {
            depth: state.depth,
            last: inner.last,
        }
    }

    fn last_at(&self, depth: usize) -> Option<NodeId> {
        self.levels.get(depth).and_then(|level| level.last()).copied()
    }

    /// Create a node at `depth` and attach it to the last node one level up.
    ///
    /// A depth with no possible parent is clamped to the deepest depth that
    /// has one. The parent is whatever node was last created one level up,
    /// even when it belongs to an earlier section: a level-3 heading after
    /// `# X` still lands under the last level-2 heading seen. Returns the new
    /// node's id and the depth it was created at.
    fn insert(
        &mut self,
        depth: usize,
        text: String,
        attributes: BTreeMap<String, String>,
    ) -> (NodeId, usize) {
        let depth = if depth > self.levels.len() {
            log::debug!(
                "depth {} has no parent level, clamping to {}",
                depth,
                self.levels.len()
            );
            self.levels.len()
        } else {
            depth
        };

        let parent = depth.checked_sub(1).and_then(|up| self.last_at(up));
        let id = self.arena.len();
        self.arena.push(Slot {
            text,
            attributes,
            parent,
            children: Vec::new(),
        });

        if let Some(parent) = parent {
            self.arena[parent].children.push(id);
        }
        if depth == self.levels.len() {
            self.levels.push(Vec::new());
        }
        self.levels[depth].push(id);

        (id, depth)
    }

    fn finish(mut self) -> Outline {
        let roots: Vec<NodeId> = self
            .arena
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.parent.is_none())
            .map(|(id, _)| id)
            .collect();

        Outline {
            roots: roots
                .into_iter()
                .map(|id| assemble(&mut self.arena, id))
                .collect(),
        }
    }
}

fn assemble(arena: &mut [Slot], id: NodeId) -> OutlineNode {
    let children = std::mem::take(&mut arena[id].children);
    let text = std::mem::take(&mut arena[id].text);
    let attributes = std::mem::take(&mut arena[id].attributes);

    OutlineNode {
        text,
        attributes,
        children: children
            .into_iter()
            .map(|child| assemble(arena, child))
            .collect(),
    }
}

/// Map heading attributes onto outline attributes: the identifier becomes
/// `name`, each class becomes `<class>="true"`, key/values are copied.
fn header_attributes(attr: &Attr) -> BTreeMap<String, String> {
    let mut attributes = BTreeMap::new();
    if !attr.identifier.is_empty() {
        attributes.insert("name".to_string(), attr.identifier.clone());
    }
    for class in &attr.classes {
        attributes.insert(class.clone(), "true".to_string());
    }
    for (key, value) in &attr.attributes {
        attributes.insert(key.clone(), value.clone());
    }
    attributes
}
