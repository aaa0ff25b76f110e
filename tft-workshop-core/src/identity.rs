//! The display name a browser user has chosen: the sole unit of "who" for
//! votes and posts. Free text, overwritten on every prompt submission,
//! never deleted.

use crate::store::StoreHandle;

/// Storage key holding the identity as a JSON string.
pub const STORAGE_KEY: &str = "username";

/// Trim a submitted name; whitespace-only input is rejected.
#[must_use]
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[must_use]
pub fn load(store: &StoreHandle) -> Option<String> {
    store
        .read::<Option<String>>(STORAGE_KEY, None)
        .and_then(|name| normalize(&name))
}

pub fn save(store: &StoreHandle, name: &str) {
    store.write(STORAGE_KEY, &name);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, StoreHandle};

    #[test]
    fn normalize_trims_and_rejects_blank() {
        assert_eq!(normalize("  Alice "), Some("Alice".to_string()));
        assert_eq!(normalize(""), None);
        assert_eq!(normalize("   \t"), None);
    }

    #[test]
    fn save_then_load_round_trips() {
        let store = StoreHandle::new(MemoryStore::new());
        assert_eq!(load(&store), None);
        save(&store, "Alice");
        assert_eq!(load(&store), Some("Alice".to_string()));
    }

    #[test]
    fn corrupt_identity_is_treated_as_absent() {
        let mem = MemoryStore::new();
        mem.seed(STORAGE_KEY, "{oops");
        let store = StoreHandle::new(mem);
        assert_eq!(load(&store), None);
    }
}
