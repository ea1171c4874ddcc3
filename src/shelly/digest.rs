use crate::domain::Credentials;
use crate::shelly::ShellyError;
use digest_auth::AuthContext;
use reqwest::Method;
use reqwest::header::HeaderValue;

/// Answers a `WWW-Authenticate: Digest ...` challenge for the request to `path`.
pub fn authorization(
    challenge: &HeaderValue,
    method: &Method,
    path: &str,
    body: Option<&[u8]>,
    credentials: &Credentials,
) -> Result<HeaderValue, ShellyError> {
    let mut prompt = digest_auth::parse(challenge.to_str()?)?;

    let context = if *method == Method::POST {
        AuthContext::new_post(credentials.username.as_str(), credentials.password.as_str(), path, body)
    } else {
        AuthContext::new(credentials.username.as_str(), credentials.password.as_str(), path)
    };

    let mut value = HeaderValue::from_str(&prompt.respond(&context)?.to_header_string())?;
    value.set_sensitive(true);
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials {
            username: "admin".to_string(),
            password: "secret".to_string(),
        }
    }

    #[test]
    fn answers_a_sha256_challenge() -> Result<(), ShellyError> {
        let challenge = HeaderValue::from_static(r#"Digest qop="auth", realm="shellypro4pm-f008d1d8b8b8", nonce="60dc59c6", algorithm=SHA-256"#);

        let value = authorization(&challenge, &Method::POST, "/rpc", Some(br#"{"id":1}"#), &credentials())?;
        let header = value.to_str()?;

        assert!(header.starts_with("Digest "), "unexpected header {}", header);
        assert!(header.contains(r#"username="admin""#));
        assert!(header.contains(r#"realm="shellypro4pm-f008d1d8b8b8""#));
        assert!(header.contains(r#"nonce="60dc59c6""#));
        assert!(!header.contains("secret"));
        assert!(value.is_sensitive());
        Ok(())
    }

    #[test]
    fn rejects_a_basic_challenge() {
        let challenge = HeaderValue::from_static(r#"Basic realm="shelly""#);

        let result = authorization(&challenge, &Method::POST, "/rpc", None, &credentials());

        assert!(matches!(result, Err(ShellyError::Digest(_))));
    }
}
