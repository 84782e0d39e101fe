use crate::error::ErrorDetail;

/// The memory size in bytes (address space 0x000 to 0xFFF).
pub(crate) const MEMORY_SIZE_BYTES: usize = 0x1000;

/// An abstraction of the CHIP-8 memory space.
///
/// Every access is bounds-checked against the end of memory; nothing wraps.
#[derive(Clone, Debug, PartialEq)]
pub struct Memory {
    /// A stack-allocated array of bytes representing the entire memory space
    pub bytes: [u8; MEMORY_SIZE_BYTES],
}

impl Memory {
    /// Constructor that returns a [Memory] instance initialised with all bytes 0x00.
    pub(crate) fn new() -> Self {
        Self {
            bytes: [0x0; MEMORY_SIZE_BYTES],
        }
    }

    /// Returns an array slice from memory as per the specified start address and
    /// number of bytes.  If the slice would extend beyond the end of memory, returns
    /// [ErrorDetail::MemoryAddressOutOfBounds] naming the first address that is out of range.
    /// A zero-length read returns an empty slice.
    ///
    /// # Arguments
    ///
    /// * `start_address` - the memory address at the start of the range from which to read
    /// * `num_bytes` - the number of bytes to read from memory
    pub fn read_bytes(&self, start_address: usize, num_bytes: usize) -> Result<&[u8], ErrorDetail> {
        let end_address: usize = Memory::checked_end(start_address, num_bytes)?;
        Ok(&self.bytes[start_address..end_address])
    }

    /// Returns a 16-bit unsigned integer constructed by reading two consecutive bytes from memory
    /// starting from the specified address.  The construction is big-endian.  If the second
    /// byte would fall outside memory, returns [ErrorDetail::MemoryAddressOutOfBounds].
    ///
    /// # Arguments
    ///
    /// * `start_address` - the memory address of the first (most significant) byte to read
    pub fn read_two_bytes(&self, start_address: usize) -> Result<u16, ErrorDetail> {
        let bytes: &[u8] = self.read_bytes(start_address, 2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    /// Writes the passed byte array slice to memory starting at the specified address.
    /// If the write would extend beyond the end of memory then nothing is written and
    /// [ErrorDetail::MemoryAddressOutOfBounds] is returned.
    ///
    /// # Arguments
    ///
    /// * `start_address` - the memory address at the start of the range to which to write
    /// * `bytes_to_write` - the array slice containing the bytes to write to memory
    pub fn write_bytes(
        &mut self,
        start_address: usize,
        bytes_to_write: &[u8],
    ) -> Result<(), ErrorDetail> {
        let end_address: usize = Memory::checked_end(start_address, bytes_to_write.len())?;
        self.bytes[start_address..end_address].copy_from_slice(bytes_to_write);
        Ok(())
    }

    /// Returns the size of the addressable memory space in bytes
    pub fn max_addressable_size(&self) -> usize {
        MEMORY_SIZE_BYTES
    }

    // Returns the exclusive end of the range [start, start + len), or the first out-of-range
    // address if the range runs past the end of memory
    fn checked_end(start_address: usize, num_bytes: usize) -> Result<usize, ErrorDetail> {
        let end_address: usize = start_address.saturating_add(num_bytes);
        if end_address > MEMORY_SIZE_BYTES || start_address > MEMORY_SIZE_BYTES {
            return Err(ErrorDetail::MemoryAddressOutOfBounds {
                address: start_address.max(MEMORY_SIZE_BYTES),
            });
        }
        Ok(end_address)
    }
}
