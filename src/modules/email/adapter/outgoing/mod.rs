#[cfg(test)]
pub mod recording_sender;
pub mod smtp_sender;

pub use smtp_sender::SmtpEmailSender;
