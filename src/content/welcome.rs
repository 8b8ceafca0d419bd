use super::EmailContent;

pub const WELCOME_SUBJECT: &str = "Welcome to SmileFactory!";
pub const DEFAULT_DISPLAY_NAME: &str = "there";

pub(super) fn render(site_url: &str, recipient: &str, display_name: Option<&str>) -> EmailContent {
    let display_name = display_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_DISPLAY_NAME);

    let html = format!(
        r#"<div style="max-width: 600px; margin: 0 auto; font-family: Arial, sans-serif; line-height: 1.6; color: #333;">
  <div style="background: #0D8A3E; color: white; padding: 40px 30px; text-align: center; border-radius: 8px 8px 0 0;">
    <h1 style="margin: 0; font-size: 28px;">Welcome to SmileFactory!</h1>
    <p style="margin: 10px 0 0 0; font-size: 16px;">We're excited to have you on board</p>
  </div>
  <div style="background: #f8f9fa; padding: 40px 30px; border-radius: 0 0 8px 8px;">
    <h2 style="color: #0D8A3E; margin-top: 0;">Hello {display_name}!</h2>
    <p>Thank you for joining SmileFactory. We're thrilled to welcome you to our community of innovators and creators.</p>
    <h3 style="color: #0D8A3E;">What's next?</h3>
    <ul>
      <li>Explore our platform features</li>
      <li>Connect with other members</li>
      <li>Start your first project</li>
      <li>Join our community discussions</li>
    </ul>
    <p style="text-align: center; margin: 30px 0;">
      <a href="{site_url}" style="background-color: #0D8A3E; color: white; padding: 15px 30px; text-decoration: none; border-radius: 6px; font-weight: bold;">Get Started Now</a>
    </p>
    <p style="color: #666; font-size: 14px;">If you have any questions, feel free to reach out to our support team. We're here to help!</p>
    <p>Best regards,<br><strong>The SmileFactory Team</strong></p>
    <p style="color: #999; font-size: 12px;">This email was sent to {recipient}. <a href="{site_url}" style="color: #0D8A3E;">{site_url}</a></p>
  </div>
</div>"#,
        display_name = display_name,
        site_url = site_url,
        recipient = recipient,
    );

    EmailContent {
        subject: WELCOME_SUBJECT.to_string(),
        html,
    }
}
