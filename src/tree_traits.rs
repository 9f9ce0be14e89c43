use termtree::Tree;
use tracing::instrument;

use crate::domain::{Bloodline, GenealogyResult, VampireId, VampireNode};

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> Tree<String>;
}

/// Borrowed view of the subtree rooted at one vampire.
#[derive(Debug, Clone, Copy)]
pub struct Lineage<'a> {
    bloodline: &'a Bloodline,
    root: &'a VampireNode,
}

impl Bloodline {
    pub fn lineage(&self, root: VampireId) -> GenealogyResult<Lineage<'_>> {
        Ok(Lineage {
            bloodline: self,
            root: self.node(root)?,
        })
    }
}

impl TreeNodeConvert for Lineage<'_> {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        // offspring ids are always live, nodes are never removed
        fn build_tree(bloodline: &Bloodline, node: &VampireNode) -> Tree<String> {
            let leaves: Vec<_> = node
                .offspring()
                .iter()
                .filter_map(|&child| bloodline.get(child))
                .map(|child| build_tree(bloodline, child))
                .collect();
            Tree::new(node.data.to_string()).with_leaves(leaves)
        }

        build_tree(self.bloodline, self.root)
    }
}
