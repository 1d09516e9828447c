use serde::Serialize;

use crate::error::NotifyError;

#[derive(Debug, Serialize)]
pub struct Payload {
    pub text: String,
}

/// Posts the message to the Rocket.Chat incoming webhook.
///
/// Rocket.Chat answers 200 on success; anything else is reported as a
/// failure carrying the status code and response body. The payload is
/// echoed to stdout first so the Icinga2 notification log shows what was
/// sent.
pub async fn send_notification(
    client: &reqwest::Client,
    url: &str,
    message: &str,
) -> Result<(), NotifyError> {
    let payload = Payload {
        text: message.to_string(),
    };

    println!("{}", serde_json::to_string(&payload)?);

    let response = client.post(url).json(&payload).send().await?;

    let status = response.status();
    if status == reqwest::StatusCode::OK {
        Ok(())
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(NotifyError::Webhook { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_serialization() {
        let payload = Payload {
            text: "PROBLEM: web01\n".to_string(),
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"text":"PROBLEM: web01\n"}"#);
    }

    #[tokio::test]
    async fn test_send_notification_success() {
        use mockito::Server;

        let mut server = Server::new_async().await;
        let mock = server.mock("POST", "/")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_body(r#"{"success":true}"#)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let result = send_notification(&client, &server.url(), "PROBLEM: web01\n").await;

        mock.assert_async().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_send_notification_posts_text_payload() {
        use mockito::{Matcher, Server};

        let mut server = Server::new_async().await;
        let mock = server.mock("POST", "/")
            .match_body(Matcher::Json(serde_json::json!({
                "text": "RECOVERY: db01 is UP:\nPING OK\n"
            })))
            .with_status(200)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let result =
            send_notification(&client, &server.url(), "RECOVERY: db01 is UP:\nPING OK\n").await;

        mock.assert_async().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_send_notification_http_error() {
        use mockito::Server;

        let mut server = Server::new_async().await;
        let mock = server.mock("POST", "/")
            .with_status(500)
            .with_body("Internal Server Error")
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let result = send_notification(&client, &server.url(), "PROBLEM: web01\n").await;

        mock.assert_async().await;
        let err = result.unwrap_err();
        let text = err.to_string();
        assert!(text.contains("500"));
        assert!(text.contains("Internal Server Error"));
    }

    #[tokio::test]
    async fn test_send_notification_non_200_success_codes_fail() {
        use mockito::Server;

        // Only 200 counts as success, matching Rocket.Chat's webhook contract.
        let mut server = Server::new_async().await;
        let mock = server.mock("POST", "/")
            .with_status(204)
            .create_async()
            .await;

        let client = reqwest::Client::new();
        let result = send_notification(&client, &server.url(), "PROBLEM: web01\n").await;

        mock.assert_async().await;
        assert!(result.is_err());
    }
}
