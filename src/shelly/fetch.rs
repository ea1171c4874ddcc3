use crate::domain::{CheckRequest, CheckType, Generation};
use crate::shelly::client::{Auth, ShellyClient};
use crate::shelly::domain::gen2::RpcRequest;
use crate::shelly::domain::{Gen1Source, Gen2Source, RawResponse};
use crate::shelly::ShellyError;
use tracing::{info, instrument};

const INFO_PATH: &str = "/shelly";
const RPC_PATH: &str = "/rpc";
const SETTINGS_PATH: &str = "/settings";
const STATUS_PATH: &str = "/status";

/// Performs the exchanges the requested check needs, strictly one after the other.
#[instrument(skip_all, fields(check = %request.check_type, generation = ?request.generation))]
pub async fn fetch(client: &ShellyClient, request: &CheckRequest) -> Result<RawResponse, ShellyError> {
    info!("Retrieving Shelly status...");

    let response = match request.generation {
        Generation::Gen1 => RawResponse::Gen1(fetch_gen1(client, request).await?),
        Generation::Gen2 => RawResponse::Gen2(fetch_gen2(client, request).await?),
    };

    info!("Retrieving Shelly status... OK");
    Ok(response)
}

async fn fetch_gen1(client: &ShellyClient, request: &CheckRequest) -> Result<Gen1Source, ShellyError> {
    let source = match request.check_type {
        CheckType::Info => Gen1Source::Info(client.get(INFO_PATH, Auth::None).await?),
        CheckType::System => Gen1Source::System {
            settings: client.get(SETTINGS_PATH, Auth::None).await?,
            status: client.get(STATUS_PATH, Auth::Basic).await?,
        },
        CheckType::Meter => Gen1Source::Meter {
            settings: client.post(SETTINGS_PATH, Auth::None).await?,
            meter: client.get(&format!("/meter/{}", request.switch), Auth::Basic).await?,
            relay: client.get(&format!("/relay/{}", request.switch), Auth::Basic).await?,
        },
    };
    Ok(source)
}

async fn fetch_gen2(client: &ShellyClient, request: &CheckRequest) -> Result<Gen2Source, ShellyError> {
    let source = match request.check_type {
        CheckType::Info => Gen2Source::Info(client.get(INFO_PATH, Auth::None).await?),
        CheckType::System => Gen2Source::System(client.post_json(RPC_PATH, &RpcRequest::sys_get_status(), Auth::Digest).await?),
        CheckType::Meter => Gen2Source::Meter(
            client
                .post_json(RPC_PATH, &RpcRequest::switch_get_status(request.switch), Auth::Digest)
                .await?,
        ),
    };
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use crate::domain::CheckRequestBuilder;
    use mockito::{Matcher, Mock, ServerGuard};
    use test_log::test;

    async fn mock_json(server: &mut ServerGuard, method: &str, path: &str, body: &str) -> Mock {
        server
            .mock(method, path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    #[test(tokio::test)]
    async fn gen2_meter_posts_switch_get_status_for_the_switch() -> Result<(), ShellyError> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/rpc")
            .match_body(Matcher::JsonString(r#"{"id":1,"method":"Switch.GetStatus","params":{"id":2}}"#.to_string()))
            .with_status(200)
            .with_body(include_str!("../../tests/resources/gen2/switch_status.json"))
            .create_async()
            .await;
        let request = CheckRequestBuilder::new(CheckType::Meter, Generation::Gen2).host(server.url()).switch(2).build();
        let client = ShellyClient::new(&request, &AppConfigBuilder::new().build())?;

        let response = fetch(&client, &request).await?;

        mock.assert_async().await;
        assert!(matches!(response, RawResponse::Gen2(Gen2Source::Meter(_))));
        Ok(())
    }

    #[test(tokio::test)]
    async fn gen2_info_reads_the_discovery_endpoint() -> Result<(), ShellyError> {
        let mut server = mockito::Server::new_async().await;
        let mock = mock_json(&mut server, "GET", "/shelly", include_str!("../../tests/resources/gen2/shelly.json")).await;
        let request = CheckRequestBuilder::new(CheckType::Info, Generation::Gen2).host(server.url()).build();
        let client = ShellyClient::new(&request, &AppConfigBuilder::new().build())?;

        let response = fetch(&client, &request).await?;

        mock.assert_async().await;
        assert!(matches!(response, RawResponse::Gen2(Gen2Source::Info(_))));
        Ok(())
    }

    #[test(tokio::test)]
    async fn gen1_system_reads_settings_and_status() -> Result<(), ShellyError> {
        let mut server = mockito::Server::new_async().await;
        let settings = server
            .mock("GET", "/settings")
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .with_body(include_str!("../../tests/resources/gen1/settings.json"))
            .create_async()
            .await;
        let status = server
            .mock("GET", "/status")
            .match_header("authorization", "Basic YWRtaW46c2VjcmV0")
            .with_status(200)
            .with_body(include_str!("../../tests/resources/gen1/status.json"))
            .create_async()
            .await;
        let request = CheckRequestBuilder::new(CheckType::System, Generation::Gen1)
            .host(server.url())
            .credentials("admin", "secret")
            .build();
        let client = ShellyClient::new(&request, &AppConfigBuilder::new().build())?;

        let response = fetch(&client, &request).await?;

        settings.assert_async().await;
        status.assert_async().await;
        assert!(matches!(response, RawResponse::Gen1(Gen1Source::System { .. })));
        Ok(())
    }

    #[test(tokio::test)]
    async fn gen1_meter_reads_settings_meter_and_relay_of_the_switch() -> Result<(), ShellyError> {
        let mut server = mockito::Server::new_async().await;
        let settings = server
            .mock("POST", "/settings")
            .match_header("authorization", Matcher::Missing)
            .with_status(200)
            .with_body(include_str!("../../tests/resources/gen1/settings.json"))
            .create_async()
            .await;
        let meter = server
            .mock("GET", "/meter/1")
            .match_header("authorization", "Basic YWRtaW46c2VjcmV0")
            .with_status(200)
            .with_body(include_str!("../../tests/resources/gen1/meter_0.json"))
            .create_async()
            .await;
        let relay = server
            .mock("GET", "/relay/1")
            .match_header("authorization", "Basic YWRtaW46c2VjcmV0")
            .with_status(200)
            .with_body(include_str!("../../tests/resources/gen1/relay_0.json"))
            .create_async()
            .await;
        let request = CheckRequestBuilder::new(CheckType::Meter, Generation::Gen1)
            .host(server.url())
            .switch(1)
            .credentials("admin", "secret")
            .build();
        let client = ShellyClient::new(&request, &AppConfigBuilder::new().build())?;

        let response = fetch(&client, &request).await?;

        settings.assert_async().await;
        meter.assert_async().await;
        relay.assert_async().await;
        assert!(matches!(response, RawResponse::Gen1(Gen1Source::Meter { .. })));
        Ok(())
    }

    #[test(tokio::test)]
    async fn gen2_meter_answers_the_digest_challenge() -> Result<(), ShellyError> {
        let mut server = mockito::Server::new_async().await;
        let challenge = server
            .mock("POST", "/rpc")
            .match_header("authorization", Matcher::Missing)
            .match_body(Matcher::JsonString(r#"{"id":1,"method":"Switch.GetStatus","params":{"id":0}}"#.to_string()))
            .with_status(401)
            .with_header("www-authenticate", r#"Digest qop="auth", realm="shellypro4pm-f008d1d8b8b8", nonce="60dc59c6", algorithm=SHA-256"#)
            .create_async()
            .await;
        let answered = server
            .mock("POST", "/rpc")
            .match_header("authorization", Matcher::Regex(r#"^Digest .*username="admin""#.to_string()))
            .match_body(Matcher::JsonString(r#"{"id":1,"method":"Switch.GetStatus","params":{"id":0}}"#.to_string()))
            .with_status(200)
            .with_body(include_str!("../../tests/resources/gen2/switch_status.json"))
            .create_async()
            .await;
        let request = CheckRequestBuilder::new(CheckType::Meter, Generation::Gen2)
            .host(server.url())
            .credentials("admin", "secret")
            .build();
        let client = ShellyClient::new(&request, &AppConfigBuilder::new().build())?;

        let response = fetch(&client, &request).await?;

        challenge.assert_async().await;
        answered.assert_async().await;
        assert!(matches!(response, RawResponse::Gen2(Gen2Source::Meter(_))));
        Ok(())
    }

    #[test(tokio::test)]
    async fn stops_at_the_first_failing_exchange() -> Result<(), ShellyError> {
        let mut server = mockito::Server::new_async().await;
        let _mock = server.mock("GET", "/settings").with_status(500).create_async().await;
        let status = server.mock("GET", "/status").with_status(200).expect(0).create_async().await;
        let request = CheckRequestBuilder::new(CheckType::System, Generation::Gen1).host(server.url()).build();
        let client = ShellyClient::new(&request, &AppConfigBuilder::new().build())?;

        let result = fetch(&client, &request).await;

        status.assert_async().await;
        assert!(matches!(result, Err(ShellyError::UnexpectedStatus { status: 500 })));
        Ok(())
    }
}
