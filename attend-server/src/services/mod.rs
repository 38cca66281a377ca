//! Service Layer
//!
//! 业务服务：邮件投递和一次性验证码流程。

pub mod notifier;
pub mod otp;

pub use notifier::{EmailMessage, LogNotifier, Notifier, NotifyError, WebhookNotifier};
pub use otp::OtpFlow;
