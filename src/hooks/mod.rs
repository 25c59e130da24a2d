// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Git hooks management.

mod manager;
mod templates;

pub use manager::{global_hooks_dir, init, local_hooks_dir, HookManager, HOOKS_PATH_KEY};
pub use templates::HookTemplate;
