//! Genealogy queries over a [`Bloodline`].
//!
//! Every query treats the given vampire as the root of its own subtree.
//! Upward walks are iterative; `total_descendant_count` recurses and the
//! pre-order queries run on [`Bloodline::iter_lineage`]'s explicit stack.

use tracing::{debug, instrument};

use crate::domain::arena::{Bloodline, VampireId};
use crate::domain::error::{GenealogyError, GenealogyResult};

impl Bloodline {
    /// Number of vampires directly created by `idx`.
    #[instrument(level = "debug", skip(self))]
    pub fn child_count(&self, idx: VampireId) -> GenealogyResult<usize> {
        Ok(self.node(idx)?.offspring().len())
    }

    /// Number of creator hops between `idx` and its original vampire (root is 0).
    #[instrument(level = "debug", skip(self))]
    pub fn depth_from_root(&self, idx: VampireId) -> GenealogyResult<usize> {
        Ok(self.ancestors(idx)?.count())
    }

    /// True iff `a` is strictly closer to its original vampire than `b`.
    #[instrument(level = "debug", skip(self))]
    pub fn is_more_senior(&self, a: VampireId, b: VampireId) -> GenealogyResult<bool> {
        Ok(self.depth_from_root(a)? < self.depth_from_root(b)?)
    }

    /// Deepest vampire that is an ancestor of, or equal to, both `a` and `b`.
    ///
    /// If one is a direct ancestor of the other, that ancestor is returned.
    ///
    /// # Errors
    /// [`GenealogyError::DisjointLineages`] if `a` and `b` do not share an original vampire.
    #[instrument(level = "debug", skip(self))]
    pub fn closest_common_ancestor(
        &self,
        a: VampireId,
        b: VampireId,
    ) -> GenealogyResult<VampireId> {
        let depth_a = self.depth_from_root(a)?;
        let depth_b = self.depth_from_root(b)?;

        // Align both at the same level
        let mut current_a = self.climb(a, depth_a.saturating_sub(depth_b))?;
        let mut current_b = self.climb(b, depth_b.saturating_sub(depth_a))?;

        while current_a != current_b {
            match (self.node(current_a)?.creator(), self.node(current_b)?.creator()) {
                (Some(next_a), Some(next_b)) => {
                    current_a = next_a;
                    current_b = next_b;
                }
                _ => {
                    return Err(GenealogyError::DisjointLineages(
                        self.node(a)?.data.name.clone(),
                        self.node(b)?.data.name.clone(),
                    ));
                }
            }
        }
        debug!("closest common ancestor: {}", self.node(current_a)?.data);
        Ok(current_a)
    }

    #[instrument(level = "trace", skip(self))]
    fn climb(&self, mut idx: VampireId, mut steps: usize) -> GenealogyResult<VampireId> {
        while steps > 0 {
            match self.node(idx)?.creator() {
                Some(creator) => idx = creator,
                None => break,
            }
            steps -= 1;
        }
        Ok(idx)
    }

    /// First vampire named exactly `name` in pre-order, or `None`.
    ///
    /// Names are not unique; with duplicates the first pre-order match wins.
    #[instrument(level = "debug", skip(self))]
    pub fn find_by_name(&self, idx: VampireId, name: &str) -> GenealogyResult<Option<VampireId>> {
        Ok(self
            .iter_lineage(idx)?
            .find(|(_, node)| node.data.name == name)
            .map(|(found, _)| found))
    }

    /// Size of the subtree below `idx`, excluding `idx` itself.
    #[instrument(level = "trace", skip(self))]
    pub fn total_descendant_count(&self, idx: VampireId) -> GenealogyResult<usize> {
        let offspring = self.node(idx)?.offspring();
        offspring
            .iter()
            .try_fold(offspring.len(), |total, &child| -> GenealogyResult<usize> {
                Ok(total + self.total_descendant_count(child)?)
            })
    }

    /// Vampires in the subtree of `idx` (itself included) converted strictly
    /// after `threshold_year`, in pre-order.
    #[instrument(level = "debug", skip(self))]
    pub fn collect_by_year_threshold(
        &self,
        idx: VampireId,
        threshold_year: i32,
    ) -> GenealogyResult<Vec<VampireId>> {
        Ok(self
            .iter_lineage(idx)?
            .filter(|(_, node)| node.data.year_converted > threshold_year)
            .map(|(found, _)| found)
            .collect())
    }

    /// Vampires converted after the configured millennial threshold (1980 by default).
    #[instrument(level = "debug", skip(self))]
    pub fn millennial_vampires(&self, idx: VampireId) -> GenealogyResult<Vec<VampireId>> {
        self.collect_by_year_threshold(idx, self.settings().millennial_threshold)
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::arena::{Bloodline, Vampire};

    #[test]
    fn test_depth_of_standalone_vampire_is_zero() {
        let mut bloodline = Bloodline::new();
        let loner = bloodline.add_vampire(Vampire::new("Loner", 1900));
        assert_eq!(bloodline.depth_from_root(loner).unwrap(), 0);
        assert_eq!(bloodline.total_descendant_count(loner).unwrap(), 0);
    }

    #[test]
    fn test_climb_stops_at_root() {
        let mut bloodline = Bloodline::new();
        let ansel = bloodline.add_vampire(Vampire::new("Ansel", 1600));
        let sarah = bloodline.add_vampire(Vampire::new("Sarah", 1700));
        bloodline.attach_child(ansel, sarah).unwrap();

        assert_eq!(bloodline.climb(sarah, 0).unwrap(), sarah);
        assert_eq!(bloodline.climb(sarah, 1).unwrap(), ansel);
        assert_eq!(bloodline.climb(sarah, 5).unwrap(), ansel);
    }
}
