//! Category tree builder and traversal

use super::SheetLayout;
use crate::types::{normalize_id, Category, CategoryId, CategoryTree, CellGrid};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Build the category forest from the metadata rows of `grid`
///
/// Columns without a numeric id or without a name are skipped silently.
/// A later column with the same id replaces the earlier one. A parent equal
/// to the category itself, or one that names no known category, makes the
/// category a root.
pub fn build_category_tree(grid: &CellGrid, layout: &SheetLayout) -> CategoryTree {
    let mut cats: HashMap<CategoryId, Category> = HashMap::new();
    let mut order: Vec<CategoryId> = Vec::new();

    for col in layout.data_columns(grid) {
        let Some(id) = normalize_id(grid.get(layout.id_row, col)) else {
            continue;
        };
        let Some(name) = grid.get(layout.name_row, col).as_text() else {
            continue;
        };
        let description = grid
            .get(layout.description_row, col)
            .as_text()
            .unwrap_or_default();
        let parent = normalize_id(grid.get(layout.parent_row, col)).filter(|p| *p != id);

        if !cats.contains_key(&id) {
            order.push(id.clone());
        }
        cats.insert(
            id.clone(),
            Category::new(id, name, description).with_parent(parent),
        );
    }

    let mut roots = Vec::new();
    for id in &order {
        let parent = cats
            .get(id)
            .and_then(|cat| cat.parent.clone())
            .filter(|p| cats.contains_key(p));
        let parent_cat = match parent {
            Some(p) => cats.get_mut(&p),
            None => None,
        };
        match parent_cat {
            Some(parent_cat) => parent_cat.children.push(id.clone()),
            None => roots.push(id.clone()),
        }
    }

    let tree = CategoryTree { cats, roots };
    debug!(
        categories = tree.len(),
        roots = tree.roots.len(),
        "built category tree"
    );

    let unreachable = tree.unreachable();
    if !unreachable.is_empty() {
        let ids: Vec<&str> = unreachable.iter().map(|id| id.as_str()).collect();
        warn!(
            "categories {} form a parent cycle and are left out of the category table",
            ids.join(", ")
        );
    }

    tree
}

impl CategoryTree {
    /// Depth-first pre-order walk from the roots, siblings in numeric id order
    ///
    /// Each category is visited at most once.
    pub fn walk(&self) -> Vec<(usize, &Category)> {
        let mut out = Vec::with_capacity(self.cats.len());
        let mut visited: HashSet<&CategoryId> = HashSet::new();
        let mut stack: Vec<(usize, &Category)> = self
            .sorted(&self.roots)
            .into_iter()
            .rev()
            .map(|cat| (0, cat))
            .collect();

        while let Some((depth, cat)) = stack.pop() {
            if !visited.insert(&cat.id) {
                continue;
            }
            out.push((depth, cat));
            stack.extend(
                self.sorted(&cat.children)
                    .into_iter()
                    .rev()
                    .map(|child| (depth + 1, child)),
            );
        }
        out
    }

    /// Categories that no walk from a root reaches, in numeric order
    pub fn unreachable(&self) -> Vec<&CategoryId> {
        let reached: HashSet<&CategoryId> = self.walk().into_iter().map(|(_, cat)| &cat.id).collect();
        let mut ids: Vec<&CategoryId> = self.cats.keys().filter(|id| !reached.contains(id)).collect();
        ids.sort();
        ids
    }

    fn sorted(&self, ids: &[CategoryId]) -> Vec<&Category> {
        let mut level: Vec<&Category> = ids.iter().filter_map(|id| self.cats.get(id)).collect();
        level.sort_by(|a, b| a.id.cmp(&b.id));
        level
    }
}
