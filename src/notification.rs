//! Transient messages drawn over the UI
//!
//! Used for the outcome of a run and for config warnings.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{Notification, NotificationState, NotificationType};
