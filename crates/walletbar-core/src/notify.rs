//! User-visible notifications.

/// Visual style of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// Spinner; stays until dismissed by id.
    Loading,
    Info,
    Success,
    Error,
}

/// Destination for transaction and connection notices.
///
/// Showing a notification with an id that is already on screen replaces it.
pub trait NotificationSink {
    fn show(&self, kind: NotificationKind, message: &str, id: &str);

    fn dismiss(&self, id: &str);

    /// Blocking notice the user has to acknowledge.
    fn alert(&self, message: &str);
}
