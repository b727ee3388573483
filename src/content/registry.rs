//! Panel registry: the fixed, ordered set of topic panels.

use super::block::{self, ContentBlock};
use super::glyph::Glyph;
use std::fmt;
use thiserror::Error;

/// Identifier of a topic panel. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PanelId {
    Overview,
    Features,
    Agriculture,
    Quantum,
}

impl PanelId {
    pub fn as_str(self) -> &'static str {
        match self {
            PanelId::Overview => "overview",
            PanelId::Features => "features",
            PanelId::Agriculture => "agriculture",
            PanelId::Quantum => "quantum",
        }
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRecord {
    pub id: PanelId,
    pub label: &'static str,
    pub glyph: Glyph,
    pub content: ContentBlock,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("panel registry must contain at least one panel")]
    Empty,
    #[error("panel `{0}` is registered more than once")]
    DuplicateId(PanelId),
}

/// Ordered, immutable list of panels. Built once at startup.
#[derive(Debug, Clone)]
pub struct PanelRegistry {
    records: Vec<PanelRecord>,
}

impl PanelRegistry {
    pub fn new(records: Vec<PanelRecord>) -> Result<Self, RegistryError> {
        if records.is_empty() {
            return Err(RegistryError::Empty);
        }
        for (i, record) in records.iter().enumerate() {
            if records[..i].iter().any(|r| r.id == record.id) {
                return Err(RegistryError::DuplicateId(record.id));
            }
        }
        Ok(Self { records })
    }

    /// The four panels of the showcase page, in tab order.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::new(vec![
            PanelRecord {
                id: PanelId::Overview,
                label: "Overview",
                glyph: Glyph::Code,
                content: block::OVERVIEW,
            },
            PanelRecord {
                id: PanelId::Features,
                label: "Features",
                glyph: Glyph::Zap,
                content: block::FEATURES,
            },
            PanelRecord {
                id: PanelId::Agriculture,
                label: "Smart Agriculture",
                glyph: Glyph::Leaf,
                content: block::AGRICULTURE,
            },
            PanelRecord {
                id: PanelId::Quantum,
                label: "Quantum AI",
                glyph: Glyph::Cpu,
                content: block::QUANTUM,
            },
        ])
    }

    pub fn records(&self) -> &[PanelRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn first(&self) -> &PanelRecord {
        // Non-empty by construction.
        &self.records[0]
    }

    pub fn get(&self, id: PanelId) -> Option<&PanelRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: PanelId) -> bool {
        self.get(id).is_some()
    }

    /// Panel at a zero-based tab position.
    pub fn at(&self, index: usize) -> Option<PanelId> {
        self.records.get(index).map(|r| r.id)
    }

    pub fn position(&self, id: PanelId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// Next panel in tab order, wrapping around.
    pub fn next_after(&self, id: PanelId) -> PanelId {
        let idx = self.position(id).map(|i| (i + 1) % self.len()).unwrap_or(0);
        self.records[idx].id
    }

    /// Previous panel in tab order, wrapping around.
    pub fn prev_before(&self, id: PanelId) -> PanelId {
        let idx = match self.position(id) {
            Some(0) | None => self.len() - 1,
            Some(i) => i - 1,
        };
        self.records[idx].id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: PanelId) -> PanelRecord {
        PanelRecord {
            id,
            label: id.as_str(),
            glyph: Glyph::Code,
            content: block::OVERVIEW,
        }
    }

    #[test]
    fn test_builtin_order_matches_enum() {
        let reg = PanelRegistry::builtin().unwrap();
        let ids: Vec<_> = reg.records().iter().map(|r| r.id).collect();
        assert_eq!(
            ids,
            vec![
                PanelId::Overview,
                PanelId::Features,
                PanelId::Agriculture,
                PanelId::Quantum,
            ]
        );
        assert_eq!(reg.get(PanelId::Agriculture).unwrap().label, "Smart Agriculture");
        assert_eq!(reg.get(PanelId::Quantum).unwrap().glyph, Glyph::Cpu);
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(PanelRegistry::new(vec![]).unwrap_err(), RegistryError::Empty);
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = PanelRegistry::new(vec![
            record(PanelId::Overview),
            record(PanelId::Quantum),
            record(PanelId::Overview),
        ])
        .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateId(PanelId::Overview));
        assert_eq!(err.to_string(), "panel `overview` is registered more than once");
    }

    #[test]
    fn test_cycling_wraps() {
        let reg = PanelRegistry::builtin().unwrap();
        assert_eq!(reg.next_after(PanelId::Quantum), PanelId::Overview);
        assert_eq!(reg.prev_before(PanelId::Overview), PanelId::Quantum);
        assert_eq!(reg.next_after(PanelId::Features), PanelId::Agriculture);
        assert_eq!(reg.prev_before(PanelId::Features), PanelId::Overview);
    }

    #[test]
    fn test_partial_registry_membership() {
        let reg =
            PanelRegistry::new(vec![record(PanelId::Features), record(PanelId::Quantum)]).unwrap();
        assert!(!reg.contains(PanelId::Overview));
        assert_eq!(reg.first().id, PanelId::Features);
        assert_eq!(reg.at(1), Some(PanelId::Quantum));
        assert_eq!(reg.at(2), None);
        assert_eq!(reg.next_after(PanelId::Quantum), PanelId::Features);
    }
}
