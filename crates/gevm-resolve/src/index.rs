//! In-memory release index.

use std::collections::{BTreeMap, HashMap};

use gevm_platform::{PlatformTarget, mapping};
use gevm_version::Relver;
use tracing::warn;

use crate::Asset;

/// Which build flavors an index build keeps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlavorFilter {
    #[default]
    Native,
    Mono,
    Any,
}

impl FlavorFilter {
    pub fn of(mono: bool) -> Self { if mono { FlavorFilter::Mono } else { FlavorFilter::Native } }

    pub fn accepts(self, mono: bool) -> bool {
        match self {
            FlavorFilter::Native => !mono,
            FlavorFilter::Mono => mono,
            FlavorFilter::Any => true,
        }
    }
}

/// Non-fatal problems met while building an index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexWarning {
    /// A second asset claimed a slot and was not allowed to replace it.
    Collision {
        relver:   Relver,
        target:   PlatformTarget,
        mono:     bool,
        kept:     String,
        rejected: String,
    },
    /// A recognised engine asset whose tokens no target accepts.
    Unmapped { relver: Relver, asset: String },
}

/// The assets published for one release, per flavor and target.
#[derive(Debug, Clone)]
pub struct ReleaseEntry {
    relver: Relver,
    native: BTreeMap<PlatformTarget, Asset>,
    mono:   BTreeMap<PlatformTarget, Asset>,
}

impl ReleaseEntry {
    fn new(relver: Relver) -> Self {
        Self {
            relver,
            native: BTreeMap::new(),
            mono: BTreeMap::new(),
        }
    }

    pub fn relver(&self) -> &Relver { &self.relver }

    pub fn assets(&self, mono: bool) -> &BTreeMap<PlatformTarget, Asset> {
        if mono { &self.mono } else { &self.native }
    }

    pub fn asset(&self, target: PlatformTarget, mono: bool) -> Option<&Asset> { self.assets(mono).get(&target) }

    pub fn has_asset(&self, target: PlatformTarget, mono: bool) -> bool { self.assets(mono).contains_key(&target) }

    fn assets_mut(&mut self, mono: bool) -> &mut BTreeMap<PlatformTarget, Asset> {
        if mono { &mut self.mono } else { &mut self.native }
    }
}

/// Relver keyed view of the release feed for one command invocation.
///
/// Entries keep feed order internally; [`ReleaseIndex::sorted`] and
/// [`ReleaseIndex::relvers`] are the ordered views.
#[derive(Debug, Default)]
pub struct ReleaseIndex {
    entries:   Vec<ReleaseEntry>,
    positions: HashMap<Relver, usize>,
    warnings:  Vec<IndexWarning>,
}

impl ReleaseIndex {
    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn get(&self, relver: &Relver) -> Option<&ReleaseEntry> {
        self.positions.get(relver).map(|&i| &self.entries[i])
    }

    /// Entries in feed order.
    pub fn entries(&self) -> impl Iterator<Item = &ReleaseEntry> { self.entries.iter() }

    /// Entries in ascending release order.
    pub fn sorted(&self) -> Vec<&ReleaseEntry> {
        let mut entries = self.entries.iter().collect::<Vec<_>>();
        entries.sort_by(|a, b| a.relver.cmp(&b.relver));
        entries
    }

    pub fn relvers(&self) -> Vec<&Relver> { self.sorted().into_iter().map(ReleaseEntry::relver).collect() }

    pub fn warnings(&self) -> &[IndexWarning] { &self.warnings }

    /// Make sure `relver` has an entry, even if none of its assets survive.
    pub(crate) fn touch(&mut self, relver: &Relver) -> usize {
        if let Some(&i) = self.positions.get(relver) {
            return i;
        }
        self.entries.push(ReleaseEntry::new(relver.clone()));
        self.positions.insert(relver.clone(), self.entries.len() - 1);
        self.entries.len() - 1
    }

    /// File `asset` under `target`, applying the override policy when the
    /// slot is taken: an `arch` listed in the target's overrides replaces the
    /// holder, anything else is reported and the first claim stays.
    pub(crate) fn claim(&mut self, relver: &Relver, target: PlatformTarget, mono: bool, arch: &str, asset: Asset) {
        let i = self.touch(relver);
        let slot = self.entries[i].assets_mut(mono);

        let Some(held) = slot.get(&target) else {
            slot.insert(target, asset);
            return;
        };

        if mapping::overrides(target).iter().any(|token| *token == arch) {
            slot.insert(target, asset);
            return;
        }

        warn!(
            "{target} asset collision for {relver}: keeping {}, ignoring {}",
            held.name, asset.name
        );
        self.warnings.push(IndexWarning::Collision {
            relver: relver.clone(),
            target,
            mono,
            kept: held.name.clone(),
            rejected: asset.name,
        });
    }

    pub(crate) fn unmapped(&mut self, relver: &Relver, name: &str) {
        warn!("No mapping found for {name} in {relver}");
        self.warnings.push(IndexWarning::Unmapped {
            relver: relver.clone(),
            asset:  name.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use gevm_platform::PlatformTarget;
    use gevm_version::Relver;

    use super::{FlavorFilter, IndexWarning, ReleaseIndex};
    use crate::Asset;

    fn relver(s: &str) -> Relver { Relver::parse(s).unwrap() }

    #[test]
    fn test_flavor_filter() {
        assert!(FlavorFilter::Native.accepts(false));
        assert!(!FlavorFilter::Native.accepts(true));
        assert!(FlavorFilter::Mono.accepts(true));
        assert!(FlavorFilter::Any.accepts(true) && FlavorFilter::Any.accepts(false));
        assert_eq!(FlavorFilter::of(true), FlavorFilter::Mono);
    }

    #[test]
    fn test_first_claim_wins() {
        let r = relver("4.2-stable");
        let mut index = ReleaseIndex::default();
        index.claim(&r, PlatformTarget::LinuxAmd64, false, "64", Asset::new("a", "u1"));
        index.claim(&r, PlatformTarget::LinuxAmd64, false, "64", Asset::new("b", "u2"));

        let entry = index.get(&r).unwrap();
        assert_eq!(entry.asset(PlatformTarget::LinuxAmd64, false).unwrap().name, "a");
        assert_eq!(index.warnings().len(), 1);
        assert!(matches!(
            &index.warnings()[0],
            IndexWarning::Collision { kept, rejected, .. } if kept == "a" && rejected == "b"
        ));
    }

    #[test]
    fn test_override_replaces() {
        let r = relver("3.2.4-stable");
        let mut index = ReleaseIndex::default();
        index.claim(&r, PlatformTarget::DarwinAmd64, false, "64", Asset::new("osx.64", "u1"));
        index.claim(&r, PlatformTarget::DarwinAmd64, false, "universal", Asset::new("osx.universal", "u2"));

        let entry = index.get(&r).unwrap();
        assert_eq!(entry.asset(PlatformTarget::DarwinAmd64, false).unwrap().name, "osx.universal");
        assert!(index.warnings().is_empty());
    }

    #[test]
    fn test_flavors_are_separate_tables() {
        let r = relver("4.2-stable");
        let mut index = ReleaseIndex::default();
        index.claim(&r, PlatformTarget::LinuxAmd64, false, "64", Asset::new("native", "u1"));
        index.claim(&r, PlatformTarget::LinuxAmd64, true, "64", Asset::new("mono", "u2"));

        let entry = index.get(&r).unwrap();
        assert!(entry.has_asset(PlatformTarget::LinuxAmd64, false));
        assert!(entry.has_asset(PlatformTarget::LinuxAmd64, true));
        assert!(index.warnings().is_empty());
    }

    #[test]
    fn test_sorted_views_and_feed_order() {
        let mut index = ReleaseIndex::default();
        for tag in ["4.2-stable", "4.3-stable", "4.2-rc1", "4.2-stable"] {
            index.touch(&relver(tag));
        }

        assert_eq!(index.len(), 3);
        let feed = index.entries().map(|e| e.relver().hyphenated()).collect::<Vec<_>>();
        assert_eq!(feed, ["4.2-stable", "4.3-stable", "4.2-rc1"]);
        let sorted = index.relvers().into_iter().map(Relver::hyphenated).collect::<Vec<_>>();
        assert_eq!(sorted, ["4.2-rc1", "4.2-stable", "4.3-stable"]);
    }
}
