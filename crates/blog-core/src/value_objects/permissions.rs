//! Permission flags granted to each role

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Capabilities a caller holds on the blog
    ///
    /// Ownership-based rights (editing your own post, deleting your own
    /// comment) are not flags; they are resolved against the resource in
    /// [`crate::policy`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Permissions: u32 {
        /// Post a comment on any published post
        const COMMENT           = 1 << 0;
        /// Toggle a reaction on a post
        const REACT             = 1 << 1;
        /// Upload images to the media library
        const UPLOAD_MEDIA      = 1 << 2;
        /// Create new posts
        const CREATE_POSTS      = 1 << 3;
        /// Attach and detach categories on posts
        const LINK_CATEGORIES   = 1 << 4;
        /// Create, rename and delete categories
        const MANAGE_CATEGORIES = 1 << 5;
        /// Edit, publish and delete posts written by anyone
        const MANAGE_ANY_POST   = 1 << 6;
        /// Delete comments written by anyone
        const MODERATE_COMMENTS = 1 << 7;
        /// Delete media uploaded by anyone
        const MANAGE_ANY_MEDIA  = 1 << 8;

        /// Baseline for every signed-in user
        const READER = Self::COMMENT.bits()
            | Self::REACT.bits()
            | Self::UPLOAD_MEDIA.bits();

        /// Readers plus authoring
        const AUTHOR = Self::READER.bits()
            | Self::CREATE_POSTS.bits()
            | Self::LINK_CATEGORIES.bits();

        /// Everything
        const ADMIN = Self::AUTHOR.bits()
            | Self::MANAGE_CATEGORIES.bits()
            | Self::MANAGE_ANY_POST.bits()
            | Self::MODERATE_COMMENTS.bits()
            | Self::MANAGE_ANY_MEDIA.bits();
    }
}

impl Permissions {
    /// Check if the set contains a required permission
    #[inline]
    pub fn has(&self, permission: Permissions) -> bool {
        self.contains(permission)
    }

    /// Names of the individual flags that are set
    pub fn list(&self) -> Vec<&'static str> {
        self.iter_names()
            .filter(|(_, flag)| flag.bits().is_power_of_two())
            .map(|(name, _)| name)
            .collect()
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.list().join(" | "))
    }
}
