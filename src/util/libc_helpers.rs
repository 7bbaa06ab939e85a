/*  container-startup: command dispatcher for container startup plugins
 *  Copyright (C) 2019 The container-startup developers
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 *  along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

//! Unsafe glue code for interaction with libc.

use std::ffi::CStr;
use std::ffi::CString;

const FORMAT: &[u8] = b"%s\0";

/// Whether stdin is attached to a (pseudo) terminal
pub fn is_stdin_terminal() -> bool {
    unsafe { libc::isatty(libc::STDIN_FILENO) == 1 }
}

/// Convert to a C string, dropping interior NUL bytes
pub fn to_cstring(text: &str) -> CString {
    let bytes: Vec<u8> = text.bytes().filter(|b| *b != 0).collect();
    CString::new(bytes).unwrap_or_default()
}

/// Send one message to syslog
///
/// The log is opened and closed around every message as the identity may
/// differ between callers.
pub fn syslog(ident: &CStr, facility: libc::c_int, priority: libc::c_int, message: &str) {
    let message = to_cstring(message);
    unsafe {
        libc::openlog(ident.as_ptr(), 0, facility);
        libc::syslog(
            priority,
            FORMAT.as_ptr() as *const libc::c_char,
            message.as_ptr(),
        );
        libc::closelog();
    }
}
