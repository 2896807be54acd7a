//! Read-only shared memory mapping of a device buffer.

use std::io;
use std::os::unix::io::RawFd;
use std::ptr::NonNull;

/// Exclusively owned `PROT_READ`/`MAP_SHARED` mapping. Unmapped on drop.
///
/// Another process may write to the mapped pages at any time; readers see
/// whatever bytes are there, torn frames included.
pub struct Mapping {
    ptr: NonNull<u8>,
    len: usize,
}

// The mapping is read-only from this process and owned by exactly one value.
unsafe impl Send for Mapping {}
unsafe impl Sync for Mapping {}

impl Mapping {
    /// Map `len` bytes of `fd` starting at offset 0.
    pub fn map_readonly(fd: RawFd, len: usize) -> io::Result<Self> {
        if len == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "device reports an empty buffer",
            ));
        }

        // SAFETY: a fresh mapping is requested (addr = NULL) and the result is
        // checked against MAP_FAILED before use.
        let raw = unsafe {
            libc::mmap(
                std::ptr::null_mut(),
                len,
                libc::PROT_READ,
                libc::MAP_SHARED,
                fd,
                0,
            )
        };
        if raw == libc::MAP_FAILED {
            return Err(io::Error::last_os_error());
        }

        let ptr = NonNull::new(raw.cast::<u8>())
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "mmap returned NULL"))?;
        Ok(Self { ptr, len })
    }

    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: ptr/len describe a live PROT_READ mapping owned by self.
        unsafe { std::slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl Drop for Mapping {
    fn drop(&mut self) {
        // SAFETY: ptr/len came from a successful mmap and are unmapped once.
        let rc = unsafe { libc::munmap(self.ptr.as_ptr().cast(), self.len) };
        if rc != 0 {
            log::warn!("munmap failed: {}", io::Error::last_os_error());
        }
    }
}

impl std::fmt::Debug for Mapping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mapping").field("len", &self.len).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::os::unix::io::AsRawFd;

    #[test]
    fn test_map_regular_file() {
        let mut file = tempfile::tempfile().unwrap();
        file.write_all(&[1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        file.flush().unwrap();

        let mapping = Mapping::map_readonly(file.as_raw_fd(), 8).unwrap();
        assert_eq!(mapping.as_bytes().len(), 8);
        assert_eq!(mapping.as_bytes(), &[1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_map_empty_len_rejected() {
        let file = tempfile::tempfile().unwrap();
        let err = Mapping::map_readonly(file.as_raw_fd(), 0).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_map_bad_descriptor_fails() {
        assert!(Mapping::map_readonly(-1, 4096).is_err());
    }
}
