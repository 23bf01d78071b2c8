//! Email templates for account lifecycle notifications.

use chrono::{Datelike, Utc};

use super::EmailMessage;

/// Welcome email sent after successful registration
pub fn welcome(name: &str, email: &str, client_url: &str) -> EmailMessage {
    let text_body = format!(
        "Hi {name},\n\n\
         Welcome! Your account has been created successfully with the email: {email}.\n\n\
         We're excited to have you join us.\n\n\
         - The Team",
    );

    let html_body = format!(
        r#"<div style="font-family:Arial,sans-serif;max-width:600px;margin:auto;padding:25px;border-radius:10px;background:#ffffff;">
  <h1 style="color:#4f46e5;text-align:center;">Welcome, {name}!</h1>
  <p>Hi <strong>{name}</strong>,</p>
  <p>Your account has been created successfully with the email:</p>
  <p style="font-size:18px;font-weight:bold;color:#4f46e5;">{email}</p>
  <div style="text-align:center;margin:30px 0;">
    <a href="{client_url}/login" style="display:inline-block;padding:12px 25px;color:#fff;background:#4f46e5;border-radius:6px;text-decoration:none;font-weight:bold;">Go to Dashboard</a>
  </div>
  <p>If you did not create this account, please ignore this email.</p>
  <p style="font-size:12px;color:#777;text-align:center;">&copy; {year} MailAuth. All rights reserved.</p>
</div>"#,
        year = Utc::now().year(),
    );

    EmailMessage {
        to: email.to_string(),
        subject: "Welcome to Our App 🎉".to_string(),
        text_body,
        html_body,
    }
}

/// Account verification OTP email
pub fn verify_otp(name: &str, email: &str, otp: &str) -> EmailMessage {
    let text_body = format!(
        "Hi {name},\n\n\
         Your OTP for account verification is: {otp}\n\
         This OTP will expire in 1 hour.\n\n\
         If you did not request this, please ignore this email.\n\n\
         - The Team",
    );

    let html_body = otp_html("Verify Your Account", name, otp, year());

    EmailMessage {
        to: email.to_string(),
        subject: "Verify Your Account - OTP".to_string(),
        text_body,
        html_body,
    }
}

/// Password reset OTP email
pub fn reset_otp(name: &str, email: &str, otp: &str) -> EmailMessage {
    let text_body = format!(
        "Hi {name},\n\n\
         You requested to reset your password. Your OTP is: {otp}\n\
         This OTP will expire in 1 hour.\n\n\
         If you did not request a password reset, please ignore this email.\n\n\
         - The Team",
    );

    let html_body = otp_html("Password Reset Request", name, otp, year());

    EmailMessage {
        to: email.to_string(),
        subject: "Password Reset - OTP".to_string(),
        text_body,
        html_body,
    }
}

fn otp_html(heading: &str, name: &str, otp: &str, year: i32) -> String {
    format!(
        r#"<div style="font-family:Arial,sans-serif;max-width:600px;margin:auto;padding:20px;background:#f9f9f9;border-radius:10px;">
  <h2 style="color:#333;">{heading}</h2>
  <p style="color:#555;">Hi <b>{name}</b>,</p>
  <p style="color:#555;">Use the OTP below. It will expire in <b>1 hour</b>:</p>
  <div style="font-size:24px;font-weight:bold;color:#2c3e50;background:#eee;padding:10px;border-radius:5px;text-align:center;letter-spacing:3px;">{otp}</div>
  <p style="color:#555;margin-top:20px;">If you did not request this, please ignore this email.</p>
  <p style="font-size:13px;color:#777;">&copy; {year} MailAuth. All rights reserved.</p>
</div>"#,
    )
}

fn year() -> i32 {
    Utc::now().year()
}
