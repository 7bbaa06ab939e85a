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

use std::sync::{Mutex, MutexGuard};

/// Serializes all tests touching environment variables, as they are shared
/// by the whole test process.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Restores an environment variable on drop while holding [ENV_MUTEX]
pub(crate) struct EnvGuard {
    key: String,
    original: Option<String>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvGuard {
    pub fn set(key: &str, value: &str) -> Self {
        let guard = EnvGuard::lock(key);
        std::env::set_var(key, value);
        guard
    }

    pub fn unset(key: &str) -> Self {
        let guard = EnvGuard::lock(key);
        std::env::remove_var(key);
        guard
    }

    fn lock(key: &str) -> Self {
        let lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        EnvGuard {
            key: key.to_string(),
            original: std::env::var(key).ok(),
            _lock: lock,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.original {
            Some(v) => std::env::set_var(&self.key, v),
            None => std::env::remove_var(&self.key),
        }
    }
}
