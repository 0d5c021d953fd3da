//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

use crate::task::DueTime;

/// The due time new tasks get when the user does not pick one (`09:00` unless overridden).
/// Feel free to override it when initing this library.
pub static DEFAULT_DUE_TIME: Lazy<Arc<Mutex<DueTime>>> = Lazy::new(|| Arc::new(Mutex::new(DueTime::NINE_AM)));
