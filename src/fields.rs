use std::collections::HashMap;

use crate::error::NotifyError;

// Field names Icinga2 fills into the notification command arguments.
pub const NOTIFICATION_TYPE: &str = "NOTIFICATIONTYPE";
pub const HOST_ALIAS: &str = "HOSTALIAS";
pub const HOST_STATE: &str = "HOSTSTATE";
pub const HOST_OUTPUT: &str = "HOSTOUTPUT";
pub const SERVICE_DESC: &str = "SERVICEDESC";
pub const SERVICE_STATE: &str = "SERVICESTATE";
pub const SERVICE_OUTPUT: &str = "SERVICEOUTPUT";

/// Notification fields keyed by name. Unknown keys are kept but never read.
#[derive(Debug, Default)]
pub struct FieldMap {
    fields: HashMap<String, String>,
}

impl FieldMap {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(|v| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn require(&self, key: &'static str) -> Result<&str, NotifyError> {
        self.get(key).ok_or(NotifyError::MissingField(key))
    }
}

/// Builds the field map from raw `KEY=VALUE` arguments.
///
/// Each entry is split on the first `=` only, so values may themselves
/// contain `=`. Duplicate keys overwrite earlier ones. Entries without any
/// `=` are skipped with a warning.
pub fn build_field_map(raw: &[String]) -> FieldMap {
    let mut fields = HashMap::new();
    for entry in raw {
        match entry.split_once('=') {
            Some((key, value)) => {
                fields.insert(key.to_string(), value.to_string());
            }
            None => {
                eprintln!("Skipping malformed field (expected KEY=VALUE): {}", entry);
            }
        }
    }
    FieldMap { fields }
}
