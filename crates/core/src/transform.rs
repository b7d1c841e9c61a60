//! Tree transform hooks.

use crate::hast::Node;

/// Trait for mutating a parsed tree in place.
pub trait HastTransform: Send + Sync {
    /// Mutate the tree in place.
    fn transform(&self, tree: &mut Node);
}

impl<F> HastTransform for F
where
    F: Fn(&mut Node) + Send + Sync,
{
    fn transform(&self, tree: &mut Node) {
        (self)(tree)
    }
}

/// Ordered list of transforms applied to a tree before serialization.
#[derive(Default)]
pub struct TransformPipeline {
    transforms: Vec<Box<dyn HastTransform>>,
}

impl TransformPipeline {
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a transform; transforms run in insertion order.
    pub fn add<T: HastTransform + 'static>(&mut self, transform: T) {
        self.transforms.push(Box::new(transform));
    }

    /// Number of registered transforms.
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Returns true when no transform is registered.
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Runs every transform over `tree`.
    pub fn apply(&self, tree: &mut Node) {
        for transform in &self.transforms {
            transform.transform(tree);
        }
    }
}

impl std::fmt::Debug for TransformPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformPipeline")
            .field("transforms", &self.transforms.len())
            .finish()
    }
}
