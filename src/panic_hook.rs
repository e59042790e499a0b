//! Process-wide panic interception.
//!
//! The application entry point calls [`install_panic_hook`] with the `app`
//! channel after the registry is built, so uncaught panics end up in the
//! same sinks as regular error records.

use std::collections::BTreeMap;
use std::panic::{self, PanicHookInfo};
use std::sync::Arc;
use std::sync::Once;

use serde_json::json;

use crate::channel::Channel;
use crate::record::Level;

static INSTALL: Once = Once::new();

/// Install a panic hook forwarding panics to `channel` at error level.
///
/// The previously installed hook still runs afterwards, so default panic
/// output is preserved. Installation is process-global and happens at most
/// once; repeated calls are no-ops.
pub fn install_panic_hook(channel: Arc<Channel>) {
    INSTALL.call_once(move || {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info: &PanicHookInfo<'_>| {
            let mut fields = BTreeMap::new();
            if let Some(location) = info.location() {
                fields.insert("file".to_string(), json!(location.file()));
                fields.insert("line".to_string(), json!(location.line()));
            }
            channel.log_with(
                Level::Error,
                format!("panic: {}", payload_message(info)),
                fields,
            );
            previous(info);
        }));
    });
}

fn payload_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(message) = info.payload().downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = info.payload().downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
