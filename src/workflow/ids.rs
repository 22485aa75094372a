use super::definition::ToolNode;

/// Mints node ids for the canvas. Injected wherever nodes are created so
/// that numbering is owned by the caller instead of a process-wide counter.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

pub const DEFAULT_ID_PREFIX: &str = "dndnode_";

/// Monotonic ids of the form `{prefix}{n}`.
///
/// The counter is wider than the `u64` suffixes accepted by `resume_after`, so
/// resuming after any loaded id never wraps back onto ids already in use.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u128,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_ID_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }

    /// Continues numbering after the highest id already used by `nodes`.
    /// Ids that do not carry this generator's prefix and a numeric suffix are ignored.
    pub fn resume_after(mut self, nodes: &[ToolNode]) -> Self {
        let highest = nodes
            .iter()
            .filter_map(|n| n.id.strip_prefix(self.prefix.as_str()))
            .filter_map(|suffix| suffix.parse::<u64>().ok())
            .max();
        if let Some(highest) = highest {
            self.next = self.next.max(u128::from(highest) + 1);
        }
        self
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

/// Random v4 UUID ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}
