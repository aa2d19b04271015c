//! Free-form tags attached to scene entities.
//!
//! Tags come from the scene file and are shown next to hitboxes in the debug
//! overlay. Most entities carry one or two, so they live inline.

use bevy_ecs::prelude::Component;
use smallvec::SmallVec;

#[derive(Component, Clone, Debug, Default, PartialEq)]
pub struct Tags(pub SmallVec<[String; 4]>);

impl Tags {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(tags.into_iter().map(Into::into).collect())
    }

    pub fn has(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_lookup() {
        let tags = Tags::new(["player", "hero"]);
        assert!(tags.has("hero"));
        assert!(!tags.has("enemy"));
        assert_eq!(tags.iter().collect::<Vec<_>>(), vec!["player", "hero"]);
        assert!(Tags::default().is_empty());
    }
}
