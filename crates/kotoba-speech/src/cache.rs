use std::collections::HashMap;
use std::sync::Arc;

/// Synthesized audio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioClip {
    pub bytes: Vec<u8>,
    pub mime: &'static str,
}

/// Generated audio keyed by [`TtsOptions::cache_key`](crate::options::TtsOptions::cache_key).
/// Entries live until [`AudioCache::clear`]; there is no eviction.
#[derive(Debug, Default)]
pub struct AudioCache {
    clips: HashMap<String, Arc<AudioClip>>,
}

impl AudioCache {
    pub fn get(&self, key: &str) -> Option<Arc<AudioClip>> {
        self.clips.get(key).cloned()
    }

    pub fn insert(&mut self, key: String, clip: Arc<AudioClip>) {
        self.clips.insert(key, clip);
    }

    pub fn len(&self) -> usize {
        self.clips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// Drop every clip. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let n = self.clips.len();
        self.clips.clear();
        tracing::info!(removed = n, "audio cache cleared");
        n
    }
}
