/// Controls when the pre-keyboard inset snapshot is (over)written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnapshotPolicy {
    /// Save the snapshot only when transitioning from resting to adjusted.
    ///
    /// A second consecutive did-show recomputes the keyboard inset but keeps
    /// the original snapshot, so the eventual hide restores the true
    /// pre-keyboard value.
    #[default]
    FirstShowOnly,
    /// Save the snapshot on every did-show, including when the view's inset
    /// already reflects a previous adjustment. Matches legacy host-runtime
    /// helpers; a show-show sequence without an intervening hide will then
    /// restore the adjusted inset, not the original one.
    EveryShow,
}

/// Configuration for [`crate::InsetGuard`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GuardOptions {
    /// Whether scroll-into-view requests are animated.
    pub animate_reveal: bool,
    pub snapshot_policy: SnapshotPolicy,
}

impl Default for GuardOptions {
    fn default() -> Self {
        Self {
            animate_reveal: true,
            snapshot_policy: SnapshotPolicy::default(),
        }
    }
}

impl GuardOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_animate_reveal(mut self, animate_reveal: bool) -> Self {
        self.animate_reveal = animate_reveal;
        self
    }

    pub fn with_snapshot_policy(mut self, snapshot_policy: SnapshotPolicy) -> Self {
        self.snapshot_policy = snapshot_policy;
        self
    }
}
