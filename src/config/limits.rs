//! Key size limits consumed by splitting and selectors

use crate::key::Key;

/// Keys starting with this byte belong to the system key space.
pub const SYSTEM_KEY_PREFIX: &[u8] = &[0xFF];

/// Size limits supplied by the configuration layer.
pub trait KeyLimits {
    /// Largest user key, in bytes.
    fn key_size_limit(&self) -> usize;

    /// Largest system key, in bytes.
    fn system_key_size_limit(&self) -> usize;

    /// How far separator search scans before giving up on shortening.
    fn split_key_size_limit(&self) -> usize;

    /// Largest key that can exist in the space `key` belongs to.
    fn max_key_size(&self, key: &Key) -> usize {
        if key.starts_with(SYSTEM_KEY_PREFIX) {
            self.system_key_size_limit()
        } else {
            self.key_size_limit()
        }
    }
}

impl<L: KeyLimits + ?Sized> KeyLimits for &L {
    fn key_size_limit(&self) -> usize {
        (**self).key_size_limit()
    }

    fn system_key_size_limit(&self) -> usize {
        (**self).system_key_size_limit()
    }

    fn split_key_size_limit(&self) -> usize {
        (**self).split_key_size_limit()
    }

    fn max_key_size(&self, key: &Key) -> usize {
        (**self).max_key_size(key)
    }
}
