use crate::error::NotifyError;
use crate::fields::{
    FieldMap, HOST_ALIAS, HOST_OUTPUT, HOST_STATE, NOTIFICATION_TYPE, SERVICE_DESC, SERVICE_OUTPUT,
    SERVICE_STATE,
};

/// Composes the chat message text from the notification fields.
///
/// The message always starts with `TYPE: HOSTALIAS`. If `SERVICEDESC` is
/// present the service shape is used; otherwise, if `HOSTSTATE` is present
/// the host shape is used. A service notification wins when both are set.
/// A trailing newline is always appended.
pub fn compose_message(fields: &FieldMap) -> Result<String, NotifyError> {
    let mut message = format!(
        "{}: {}",
        fields.require(NOTIFICATION_TYPE)?,
        fields.require(HOST_ALIAS)?
    );

    if fields.contains(SERVICE_DESC) {
        message.push_str(&format!(
            " / {} is {}:\n{}",
            fields.require(SERVICE_DESC)?,
            fields.require(SERVICE_STATE)?,
            fields.require(SERVICE_OUTPUT)?
        ));
    } else if fields.contains(HOST_STATE) {
        message.push_str(&format!(
            " is {}:\n{}",
            fields.require(HOST_STATE)?,
            fields.require(HOST_OUTPUT)?
        ));
    }

    message.push('\n');
    Ok(message)
}
