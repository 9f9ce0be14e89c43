use generational_arena::{Arena, Index};
use std::fmt;
use tracing::{debug, instrument};

use crate::config::Settings;
use crate::domain::error::{GenealogyError, GenealogyResult};

/// Handle of a vampire inside a [`Bloodline`]. Identity, not payload equality.
pub type VampireId = Index;

/// Data payload for tree nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vampire {
    /// Lookup key, not guaranteed unique
    pub name: String,
    /// Year the vampire was converted
    pub year_converted: i32,
}

impl Vampire {
    pub fn new(name: impl Into<String>, year_converted: i32) -> Self {
        Self {
            name: name.into(),
            year_converted,
        }
    }
}

impl fmt::Display for Vampire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.year_converted)
    }
}

/// Tree node in the arena-based genealogy.
///
/// Edges are only changed through [`Bloodline::attach_child`], which keeps
/// `creator` and `offspring` consistent in both directions.
#[derive(Debug)]
pub struct VampireNode {
    /// Vampire data for this node
    pub data: Vampire,
    /// Index of the creator (parent) in the arena, None for an original vampire
    creator: Option<VampireId>,
    /// Indices of offspring in creation order
    offspring: Vec<VampireId>,
}

impl VampireNode {
    pub fn creator(&self) -> Option<VampireId> {
        self.creator
    }

    pub fn offspring(&self) -> &[VampireId] {
        &self.offspring
    }

    /// True for a root, i.e. a vampire nobody created.
    pub fn is_original(&self) -> bool {
        self.creator.is_none()
    }
}

/// Arena-based forest of vampires.
///
/// Every vampire starts out as the root of its own tree; `attach_child`
/// grafts it (with its whole subtree) under another vampire.
/// Not synchronized: wrap the whole `Bloodline` in a lock if it is shared.
#[derive(Debug)]
pub struct Bloodline {
    /// Arena storage for all nodes
    arena: Arena<VampireNode>,
    settings: Settings,
}

impl Default for Bloodline {
    fn default() -> Self {
        Self::new()
    }
}

impl Bloodline {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            arena: Arena::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Creates a standalone vampire: no creator, no offspring.
    #[instrument(level = "debug", skip(self))]
    pub fn add_vampire(&mut self, data: Vampire) -> VampireId {
        let node = VampireNode {
            data,
            creator: None,
            offspring: Vec::new(),
        };
        self.arena.insert(node)
    }

    /// Attaches `child` as the newest offspring of `parent`.
    ///
    /// # Errors
    /// * [`GenealogyError::UnknownVampire`] if either id is not in this arena
    /// * [`GenealogyError::AlreadyHasCreator`] if `child` is already attached somewhere
    /// * [`GenealogyError::CycleDetected`] if `child` is `parent` or one of its ancestors
    ///
    /// Nothing is modified when an error is returned.
    #[instrument(level = "debug", skip(self))]
    pub fn attach_child(&mut self, parent: VampireId, child: VampireId) -> GenealogyResult<()> {
        let parent_name = self.node(parent)?.data.name.clone();
        let child_node = self.node(child)?;
        if let Some(creator) = child_node.creator {
            return Err(GenealogyError::AlreadyHasCreator {
                name: child_node.data.name.clone(),
                creator,
            });
        }
        if parent == child || self.ancestors(parent)?.any(|idx| idx == child) {
            return Err(GenealogyError::CycleDetected {
                parent: parent_name,
                child: child_node.data.name.clone(),
            });
        }

        if let (Some(p), Some(c)) = self.arena.get2_mut(parent, child) {
            p.offspring.push(child);
            c.creator = Some(parent);
            debug!("{} now created by {}", c.data, p.data);
        }
        Ok(())
    }

    #[instrument(level = "trace", skip(self))]
    pub fn get(&self, idx: VampireId) -> Option<&VampireNode> {
        self.arena.get(idx)
    }

    /// Mutable access to the payload only; edges stay under `attach_child`'s control.
    #[instrument(level = "trace", skip(self))]
    pub fn get_mut(&mut self, idx: VampireId) -> Option<&mut Vampire> {
        self.arena.get_mut(idx).map(|node| &mut node.data)
    }

    pub(crate) fn node(&self, idx: VampireId) -> GenealogyResult<&VampireNode> {
        self.arena
            .get(idx)
            .ok_or(GenealogyError::UnknownVampire(idx))
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// All original vampires, one per tree in the arena.
    #[instrument(level = "debug", skip(self))]
    pub fn roots(&self) -> Vec<VampireId> {
        self.arena
            .iter()
            .filter(|(_, node)| node.is_original())
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn creator(&self, idx: VampireId) -> GenealogyResult<Option<VampireId>> {
        Ok(self.node(idx)?.creator)
    }

    pub fn offspring(&self, idx: VampireId) -> GenealogyResult<&[VampireId]> {
        Ok(self.node(idx)?.offspring())
    }

    /// Walks creator links upward, nearest first; `idx` itself is not yielded.
    #[instrument(level = "trace", skip(self))]
    pub fn ancestors(&self, idx: VampireId) -> GenealogyResult<Ancestors<'_>> {
        let next = self.node(idx)?.creator;
        Ok(Ancestors {
            bloodline: self,
            next,
        })
    }

    /// The original vampire of the tree `idx` belongs to.
    #[instrument(level = "debug", skip(self))]
    pub fn root_of(&self, idx: VampireId) -> GenealogyResult<VampireId> {
        Ok(self.ancestors(idx)?.last().unwrap_or(idx))
    }

    /// Pre-order, left-to-right iteration over the subtree rooted at `idx`.
    #[instrument(level = "trace", skip(self))]
    pub fn iter_lineage(&self, idx: VampireId) -> GenealogyResult<LineageIterator<'_>> {
        self.node(idx)?;
        Ok(LineageIterator {
            bloodline: self,
            stack: vec![idx],
        })
    }
}

pub struct Ancestors<'a> {
    bloodline: &'a Bloodline,
    next: Option<VampireId>,
}

impl Iterator for Ancestors<'_> {
    type Item = VampireId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.bloodline.get(current).and_then(|node| node.creator);
        Some(current)
    }
}

pub struct LineageIterator<'a> {
    bloodline: &'a Bloodline,
    stack: Vec<VampireId>,
}

impl<'a> Iterator for LineageIterator<'a> {
    type Item = (VampireId, &'a VampireNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current_idx) = self.stack.pop() {
            if let Some(node) = self.bloodline.get(current_idx) {
                // Push offspring in reverse order for left-to-right traversal
                for &child in node.offspring.iter().rev() {
                    self.stack.push(child);
                }
                return Some((current_idx, node));
            }
        }
        None
    }
}
