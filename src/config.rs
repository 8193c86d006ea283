use crate::Error;

/// Number of entities a leaf holds before it is split.
pub const MAX_ENTITIES_PER_NODE: usize = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QuadtreeConfig {
    /// A leaf splits as soon as it holds more than this many entities.
    pub max_entities_per_node: usize,
    /// Optional depth limit. Leaves at this depth keep every entity they
    /// receive instead of splitting. Unset by default: splitting then stops
    /// only once a leaf's bounds can no longer be halved.
    pub max_depth: Option<u32>,
}

impl Default for QuadtreeConfig {
    fn default() -> Self {
        Self {
            max_entities_per_node: MAX_ENTITIES_PER_NODE,
            max_depth: None,
        }
    }
}

impl QuadtreeConfig {
    pub fn with_max_entities_per_node(mut self, max_entities_per_node: usize) -> Self {
        self.max_entities_per_node = max_entities_per_node;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.max_entities_per_node == 0 {
            return Err(Error::InvalidCapacity(self.max_entities_per_node));
        }
        Ok(())
    }

    pub(crate) fn below_max_depth(&self, depth: u32) -> bool {
        self.max_depth.map_or(true, |max_depth| depth < max_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_constants() {
        let config = QuadtreeConfig::default();
        assert_eq!(config.max_entities_per_node, 4);
        assert_eq!(config.max_depth, None);
        assert!(config.below_max_depth(u32::MAX - 1));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let config = QuadtreeConfig::default().with_max_entities_per_node(0);
        assert_eq!(config.validate(), Err(Error::InvalidCapacity(0)));
    }

    #[test]
    fn setters_chain() {
        let config = QuadtreeConfig::default()
            .with_max_entities_per_node(1)
            .with_max_depth(3);
        assert_eq!(config.max_entities_per_node, 1);
        assert_eq!(config.max_depth, Some(3));
        assert!(config.below_max_depth(2));
        assert!(!config.below_max_depth(3));
        assert!(config.validate().is_ok());
    }
}
