//! Word-addressed data memory.
//!
//! This module provides the `Memory` struct, an owned fixed-length array of
//! 32-bit words exposed through byte addresses. It provides:
//! 1. **Bounds Checking:** Every accessor validates alignment and the
//!    architectural bound, returning a typed exception instead of wrapping or
//!    clamping.
//! 2. **Fault Selection:** Invalid fetch addresses and invalid data addresses
//!    produce distinct halting conditions via [`AccessType`].
//! 3. **Initialization:** A bulk word loader for placing program images
//!    before simulation begins.

use super::constants::WORD_BYTES;
use super::data::AccessType;
use super::error::Exception;

/// Word-addressed memory with a fixed architectural bound.
///
/// The backing store is owned and never resized; all access goes through the
/// checked byte-address accessors, which convert byte addresses to word
/// indices.
#[derive(Clone, Debug)]
pub struct Memory {
    words: Box<[u32]>,
}

impl Memory {
    /// Creates a zero-filled memory spanning `size_bytes` bytes.
    ///
    /// # Arguments
    ///
    /// * `size_bytes` - Architectural bound in bytes; rounded down to a whole
    ///   number of words.
    pub fn new(size_bytes: u32) -> Self {
        let words = (size_bytes / WORD_BYTES) as usize;
        Self {
            words: vec![0; words].into_boxed_slice(),
        }
    }

    /// Returns the architectural bound in bytes.
    pub fn size_bytes(&self) -> u32 {
        self.words.len() as u32 * WORD_BYTES
    }

    /// Converts a byte address to a word index, validating alignment and the
    /// memory bound.
    ///
    /// # Errors
    ///
    /// [`Exception::InvalidFetchAddress`] for [`AccessType::Fetch`],
    /// [`Exception::InvalidMemoryAddress`] otherwise, when `addr` is not a
    /// multiple of the word size or is at or beyond the bound.
    fn word_index(&self, addr: u32, access: AccessType) -> Result<usize, Exception> {
        if addr % WORD_BYTES != 0 || addr >= self.size_bytes() {
            return Err(match access {
                AccessType::Fetch => Exception::InvalidFetchAddress(addr),
                AccessType::Read | AccessType::Write => Exception::InvalidMemoryAddress(addr),
            });
        }
        Ok((addr / WORD_BYTES) as usize)
    }

    /// Reads the 32-bit word at a byte address.
    ///
    /// # Arguments
    ///
    /// * `addr`   - Byte address; must be word aligned and within the bound.
    /// * `access` - Access classification selecting the fault kind.
    ///
    /// # Errors
    ///
    /// Returns the exception for `access` when the address is invalid.
    pub fn read(&self, addr: u32, access: AccessType) -> Result<u32, Exception> {
        let idx = self.word_index(addr, access)?;
        Ok(self.words[idx])
    }

    /// Writes a 32-bit word at a byte address.
    ///
    /// # Arguments
    ///
    /// * `addr` - Byte address; must be word aligned and within the bound.
    /// * `val`  - The word to store.
    ///
    /// # Errors
    ///
    /// Returns [`Exception::InvalidMemoryAddress`] when the address is
    /// invalid; memory is unchanged in that case.
    pub fn write(&mut self, addr: u32, val: u32) -> Result<(), Exception> {
        let idx = self.word_index(addr, AccessType::Write)?;
        self.words[idx] = val;
        Ok(())
    }

    /// Loads a sequence of words at consecutive word addresses starting at
    /// `base`. Used by drivers to place a program image before the first
    /// fetch.
    ///
    /// # Errors
    ///
    /// Returns [`Exception::InvalidMemoryAddress`] if any destination address
    /// is misaligned or out of bounds; words before the faulting address
    /// remain written.
    pub fn load_words(&mut self, base: u32, words: &[u32]) -> Result<(), Exception> {
        for (i, word) in words.iter().enumerate() {
            self.write(base.wrapping_add(i as u32 * WORD_BYTES), *word)?;
        }
        Ok(())
    }
}
