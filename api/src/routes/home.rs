//! Landing page

use actix_web::{web, HttpResponse};
use ivr_core::domain::value_objects::twiml::escape_xml;
use ivr_core::SmsServiceTrait;

use super::AppState;

/// Handler for GET /
pub async fn home<S>(state: web::Data<AppState<S>>) -> HttpResponse
where
    S: SmsServiceTrait + 'static,
{
    let business_name = escape_xml(&state.ivr_service.config().business_name).into_owned();

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(render_home(&business_name))
}

fn render_home(business_name: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Professional Business IVR System</title></head>
<body>
<h1>Professional Business IVR System</h1>
<p>Interactive Voice Response system for customer identity verification and business communication services</p>
<h2>Service Information:</h2>
<ul>
    <li><strong>Business Name:</strong> {business_name}</li>
    <li><strong>Service Type:</strong> Identity Verification &amp; Customer Support</li>
</ul>
<h2>API Endpoints:</h2>
<ul>
    <li>POST /incoming-call - Handle incoming business verification calls</li>
    <li>POST /handle_verification_choice - Process verification choice</li>
    <li>POST /verify_code - Verify entered identity verification code</li>
    <li>POST /incoming-sms - Handle incoming SMS messages</li>
    <li>GET /health - System health check</li>
</ul>
<h2>Security Features:</h2>
<ul>
    <li>Rate limiting protection</li>
    <li>Session expiration management</li>
    <li>Attempt limit enforcement</li>
    <li>Secure code generation</li>
</ul>
</body>
</html>
"#,
        business_name = business_name
    )
}
