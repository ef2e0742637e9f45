// Xattr syscalls that haven't made it into nix yet
use crate::errors::Result;
use crate::label::SMACK_LABEL_LEN;
use nix::errno::Errno;
use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

fn path_cstr(path: &Path) -> Result<CString> {
    Ok(CString::new(path.as_os_str().as_bytes())?)
}

/// Sets an extended attribute on the path itself, not following symbolic
/// links. The stored value is exactly `value.len()` bytes, no terminator.
pub fn lsetxattr(path: &Path, name: &str, value: &[u8]) -> Result<()> {
    let path = path_cstr(path)?;
    let name = CString::new(name)?;
    let res = unsafe {
        libc::lsetxattr(
            path.as_ptr(),
            name.as_ptr(),
            value.as_ptr() as *const libc::c_void,
            value.len(),
            0,
        )
    };
    Errno::result(res).map(drop).map_err(|e| e.into())
}

/// Reads an extended attribute from the path itself, not following
/// symbolic links. The buffer is sized for the largest possible label.
pub fn lgetxattr(path: &Path, name: &str) -> Result<Vec<u8>> {
    let path = path_cstr(path)?;
    let name = CString::new(name)?;
    let mut buf = vec![0u8; SMACK_LABEL_LEN + 1];
    let res = unsafe {
        libc::lgetxattr(
            path.as_ptr(),
            name.as_ptr(),
            buf.as_mut_ptr() as *mut libc::c_void,
            buf.len(),
        )
    };
    let len = Errno::result(res)?;
    buf.truncate(len as usize);
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_lsetxattr_missing_path_fails() {
        let path = Path::new("/nonexistent/chsmack-test-path");
        assert!(lsetxattr(path, "user.chsmack.test", b"label").is_err());
    }

    #[test]
    fn test_lgetxattr_missing_path_fails() {
        let path = Path::new("/nonexistent/chsmack-test-path");
        assert!(lgetxattr(path, "user.chsmack.test").is_err());
    }

    #[test]
    fn test_lgetxattr_absent_attribute_fails() {
        let path = std::env::temp_dir().join("chsmack-test-absent-attr");
        fs::write(&path, b"").unwrap();
        assert!(lgetxattr(&path, "user.chsmack.absent").is_err());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let path = std::env::temp_dir().join("chsmack-test-round-trip");
        fs::write(&path, b"").unwrap();
        // user.* namespace needs no privilege; skip quietly where the
        // filesystem does not support user xattrs at all.
        if lsetxattr(&path, "user.chsmack.test", b"foo").is_ok() {
            let value = lgetxattr(&path, "user.chsmack.test").unwrap();
            assert_eq!(value, b"foo");
        }
        let _ = fs::remove_file(&path);
    }
}
