use node_directory_sdk::NodeRecord;
use parking_lot::Mutex;
use std::collections::HashMap;

/// What an insert did to the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// A record with the same endpoint URL existed and was overwritten.
    Replaced,
}

#[derive(Default)]
struct Entries {
    records: Vec<NodeRecord>,
    /// endpoint URL -> position in `records`
    index: HashMap<String, usize>,
}

/// In-memory storage for node records, keyed by endpoint URL.
///
/// Insert and snapshot share one lock, held only for the mutation or the copy.
/// Records are listed in the order their URL was first inserted; a replacement
/// takes over the slot of the record it replaces.
pub struct NodeStorage {
    entries: Mutex<Entries>,
}

impl NodeStorage {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(Entries::default()),
        }
    }

    /// Insert a record, replacing any record with the same endpoint URL.
    pub fn insert(&self, record: NodeRecord) -> InsertOutcome {
        let mut guard = self.entries.lock();
        let Entries { records, index } = &mut *guard;

        if let Some(slot) = index.get(&record.endpoint_url).and_then(|&pos| records.get_mut(pos)) {
            *slot = record;
            return InsertOutcome::Replaced;
        }

        index.insert(record.endpoint_url.clone(), records.len());
        records.push(record);
        InsertOutcome::Inserted
    }

    /// Copy of every record at the time of the call.
    #[must_use]
    pub fn list_all(&self) -> Vec<NodeRecord> {
        self.entries.lock().records.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for NodeStorage {
    fn default() -> Self {
        Self::new()
    }
}
