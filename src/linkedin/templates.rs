//! HTML templates for the connect flow pages

use super::types::UserProfile;

/// Escape a string for interpolation into HTML
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Shared page shell
fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
  body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
         display: flex; flex-direction: column; align-items: center; justify-content: center;
         min-height: 100vh; margin: 0; background: #1a1a2e; color: #e5e7eb; }}
  a.btn {{ background: #2563eb; color: #fff; padding: 10px 24px; border-radius: 6px;
           text-decoration: none; margin-top: 16px; }}
  .error-box {{ background: #3d1919; border: 1px solid #4f2222; border-radius: 6px;
                padding: 20px; max-width: 28rem; width: 100%; box-sizing: border-box; }}
  .error-box h2 {{ color: #fca5a5; margin-top: 0; }}
  .error-text {{ color: #f87171; font-size: 20px; }}
  .debug {{ background: #16213e; border-radius: 6px; padding: 16px; margin-top: 16px;
            max-width: 32rem; overflow: auto; }}
  .debug pre {{ font-size: 12px; margin: 8px 0 0; }}
  .avatar {{ width: 96px; height: 96px; border-radius: 50%; }}
  .avatar-fallback {{ width: 96px; height: 96px; border-radius: 50%; background: #374151;
                      align-items: center; justify-content: center; display: flex;
                      font-size: 24px; color: #9ca3af; }}
  .muted {{ color: #9ca3af; }}
  .picture-url {{ font-size: 12px; max-width: 24rem; word-break: break-all; text-align: center; }}
</style>
</head>
<body>
{body}
</body>
</html>"#
    )
}

/// Titled error box shared by both screens
pub fn render_error_box(title: &str, message: &str) -> String {
    format!(
        r#"<div class="error-box">
<h2>{}</h2>
<p>{}</p>
</div>"#,
        escape_html(title),
        escape_html(message),
    )
}

/// Connect page with the authorization link
pub fn render_home_page(auth_url: &str) -> String {
    page(
        "Connect to LinkedIn",
        &format!(
            r#"<h1>Connect to LinkedIn</h1>
<a class="btn" href="{}">Connect with LinkedIn</a>"#,
            escape_html(auth_url),
        ),
    )
}

/// Configuration error page for the connect screen (no further rendering)
pub fn render_config_error_page(title: &str, message: &str) -> String {
    page(title, &render_error_box(title, message))
}

/// Configuration error page for the callback screen, with a way back
pub fn render_backend_config_error_page(message: &str) -> String {
    page(
        "Configuration Error",
        &format!(
            r#"{}
<a class="btn" href="/">Back</a>"#,
            render_error_box("Configuration Error", message),
        ),
    )
}

/// Callback error page with the debug snapshot and a retry link
pub fn render_callback_error_page(message: &str, debug_pretty: &str) -> String {
    page(
        "Error",
        &format!(
            r#"<p class="error-text">Error: {}</p>
<div class="debug">
<strong>Debug Information:</strong>
<pre>{}</pre>
</div>
<a class="btn" href="/">Try Again</a>"#,
            escape_html(message),
            escape_html(debug_pretty),
        ),
    )
}

/// Profile page rendered after a successful exchange
///
/// The picture falls back to an initial-letter avatar if the image fails
/// to load in the browser.
pub fn render_profile_page(profile: &UserProfile) -> String {
    let initial: String = profile.name.chars().take(1).collect();
    let initial = escape_html(&initial);

    let avatar = match &profile.profile_picture_url {
        Some(url) => {
            let url = escape_html(url);
            format!(
                r#"<img class="avatar" src="{url}" alt="Profile"
     onerror="this.style.display='none';this.nextElementSibling.style.display='flex';">
<div class="avatar-fallback" style="display:none"><span>{initial}</span></div>
<p class="muted picture-url">{url}</p>"#
            )
        }
        None => format!(r#"<div class="avatar-fallback"><span>{initial}</span></div>"#),
    };

    let email = profile
        .email
        .as_deref()
        .map(|email| format!("<p class=\"muted\">{}</p>\n", escape_html(email)))
        .unwrap_or_default();

    page(
        "Welcome",
        &format!(
            r#"<h1>Welcome, {}</h1>
{}{}
<a class="btn" href="/">Go Back</a>"#,
            escape_html(&profile.name),
            email,
            avatar,
        ),
    )
}
