pub mod email_sender;
pub mod user_email_notifier;

pub use email_sender::{EmailSender, EmailSenderError};
pub use user_email_notifier::{UserEmailNotificationError, UserEmailNotifier};
