//! Chunked, rendered iteration over a directory.

use crate::models::Contact;
use std::collections::btree_map;

/// Lazy iterator of rendered text blocks, `chunk_size` contacts per block.
///
/// Each contact contributes one `"<name>: <contact>\n"` line. By default a
/// trailing block with fewer than `chunk_size` contacts is dropped; call
/// [`Chunks::with_remainder`] to yield it as well. A chunk size of zero yields
/// nothing.
///
/// The iterator borrows the directory, so it is restarted simply by asking the
/// directory for a new one.
#[derive(Clone)]
pub struct Chunks<'a> {
    entries: btree_map::Iter<'a, String, Contact>,
    chunk_size: usize,
    include_remainder: bool,
}

impl<'a> Chunks<'a> {
    pub(super) fn new(entries: btree_map::Iter<'a, String, Contact>, chunk_size: usize) -> Self {
        Self {
            entries,
            chunk_size,
            include_remainder: false,
        }
    }

    /// Also yield the final block when it holds fewer than `chunk_size` contacts.
    pub fn with_remainder(mut self) -> Self {
        self.include_remainder = true;
        self
    }
}

impl Iterator for Chunks<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.chunk_size == 0 {
            return None;
        }

        let mut block = String::new();
        let mut count = 0;
        for (name, contact) in self.entries.by_ref() {
            block.push_str(&format!("{}: {}\n", name, contact));
            count += 1;
            if count == self.chunk_size {
                return Some(block);
            }
        }

        if count > 0 && self.include_remainder {
            Some(block)
        } else {
            None
        }
    }
}
