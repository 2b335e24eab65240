use std::env;
use std::ffi::CStr;
use std::io;
use std::path::PathBuf;

/// Process state the prompt is built from.
///
/// Implementations must query fresh on every call: `cd` or a user switch
/// can change either value between prompts.
pub trait SessionInfo {
    fn working_dir(&self) -> io::Result<PathBuf>;
    fn username(&self) -> io::Result<String>;

    /// `<working-directory> [<username>] $ `
    fn prompt(&self) -> io::Result<String> {
        let user = self.username()?;
        let wd = self.working_dir()?;
        Ok(format!("{} [{}] $ ", wd.display(), user))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct OsSession;

impl SessionInfo for OsSession {
    fn working_dir(&self) -> io::Result<PathBuf> {
        env::current_dir()
    }

    fn username(&self) -> io::Result<String> {
        match current_username() {
            Ok(name) => Ok(name),
            // No passwd entry (common in containers): fall back to $USER.
            Err(e) => env::var("USER").ok().filter(|u| !u.is_empty()).ok_or(e),
        }
    }
}

/// Looks up the real user id in the password database.
pub fn current_username() -> io::Result<String> {
    let uid = unsafe { libc::getuid() };
    let mut buf: Vec<libc::c_char> = vec![0; 1024];
    let mut pwd: libc::passwd = unsafe { std::mem::zeroed() };
    let mut result: *mut libc::passwd = std::ptr::null_mut();

    loop {
        let rc = unsafe {
            libc::getpwuid_r(uid, &mut pwd, buf.as_mut_ptr(), buf.len(), &mut result)
        };
        if rc == libc::ERANGE && buf.len() < (1 << 20) {
            buf.resize(buf.len() * 2, 0);
            continue;
        }
        if rc != 0 {
            return Err(io::Error::from_raw_os_error(rc));
        }
        if result.is_null() || pwd.pw_name.is_null() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("user: unknown userid {}", uid),
            ));
        }
        // pw_name points into `buf`, which outlives this borrow.
        let name = unsafe { CStr::from_ptr(pwd.pw_name) };
        return Ok(name.to_string_lossy().into_owned());
    }
}
