//! Name-to-shape resolution.
//!
//! The registry is an explicit, constructed object passed into whatever
//! resolves target-shape names. Tests build substitute registries instead of
//! mutating shared state.

use crate::data::dataset::Dataset;
use crate::foundation::error::{MorphError, MorphResult};
use crate::shapes::TargetShape;
use crate::shapes::curves::Rings;
use crate::shapes::lines::LineCollection;
use crate::shapes::points::PointCollection;

/// Builds a shape sized for a particular start dataset.
pub type ShapeBuilder = fn(&Dataset) -> Box<dyn TargetShape>;

/// An ordered name → builder catalog of target shapes.
pub struct ShapeRegistry {
    entries: Vec<(String, ShapeBuilder)>,
}

impl ShapeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The full built-in catalog, in its canonical order.
    pub fn with_builtin_shapes() -> Self {
        let mut registry = Self::new();
        registry.register("bullseye", |d| Box::new(Rings::bullseye(d)));
        registry.register("circle", |d| Box::new(Rings::circle(d)));
        registry.register("diamond", |d| Box::new(LineCollection::diamond(d)));
        registry.register("dots", |d| Box::new(PointCollection::dots(d)));
        registry.register("h_lines", |d| Box::new(LineCollection::h_lines(d)));
        registry.register("heart", |d| Box::new(PointCollection::heart(d)));
        registry.register("high_lines", |d| Box::new(LineCollection::high_lines(d)));
        registry.register("rectangle", |d| Box::new(LineCollection::rectangle(d)));
        registry.register("rings", |d| Box::new(Rings::rings(d)));
        registry.register("scatter", |d| Box::new(PointCollection::scatter(d)));
        registry.register("slant_down", |d| Box::new(LineCollection::slant_down(d)));
        registry.register("slant_up", |d| Box::new(LineCollection::slant_up(d)));
        registry.register("star", |d| Box::new(LineCollection::star(d)));
        registry.register("v_lines", |d| Box::new(LineCollection::v_lines(d)));
        registry.register("wide_lines", |d| Box::new(LineCollection::wide_lines(d)));
        registry.register("x", |d| Box::new(LineCollection::x(d)));
        registry
    }

    /// Register (or replace) a shape builder under `name`.
    pub fn register(&mut self, name: impl Into<String>, builder: ShapeBuilder) {
        let name = name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = builder;
        } else {
            self.entries.push((name, builder));
        }
    }

    /// Registered names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Look up a single builder.
    pub fn get(&self, name: &str) -> Option<ShapeBuilder> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, b)| *b)
    }

    /// Resolve a request list into shapes for `dataset`.
    ///
    /// Unrecognized names among several are skipped; when none resolve the
    /// whole resolution fails before any run starts. An empty request list
    /// means every registered shape, in registry order.
    pub fn resolve(
        &self,
        requested: &[String],
        dataset: &Dataset,
    ) -> MorphResult<Vec<Box<dyn TargetShape>>> {
        let shapes: Vec<Box<dyn TargetShape>> = if requested.is_empty() {
            self.entries.iter().map(|(_, b)| b(dataset)).collect()
        } else {
            requested
                .iter()
                .filter_map(|name| self.get(name))
                .map(|builder| builder(dataset))
                .collect()
        };

        if shapes.is_empty() {
            return Err(MorphError::NoValidShapes);
        }
        Ok(shapes)
    }
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::with_builtin_shapes()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/registry.rs"]
mod tests;
