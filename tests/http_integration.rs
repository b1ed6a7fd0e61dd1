// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the HTTP transport using wiremock.

use std::time::Duration;

use mypv_lib::entity::{Sensor, Switch};
use mypv_lib::profile::{DeviceModel, Unit};
use mypv_lib::protocol::{DeviceApi, HttpClient, HttpConfig};
use mypv_lib::snapshot::FieldValue;
use mypv_lib::{Error, PollCoordinator, ProtocolError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    HttpClient::new(server.uri().replace("http://", "")).unwrap()
}

fn coordinator_for(server: &MockServer) -> PollCoordinator<HttpClient> {
    let host = server.uri().replace("http://", "");
    PollCoordinator::new(HttpClient::new(host.clone()).unwrap(), host)
}

async fn mount_data(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/data.jsn"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_setup(server: &MockServer, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/setup.jsn"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn elwa_data() -> serde_json::Value {
    serde_json::json!({
        "device": "AC ELWA-E",
        "fwversion": "00205",
        "sn": "120100012345",
        "power": 850,
        "temp1": 48.5,
        "status": 3,
    })
}

mod http_client {
    use super::*;

    #[tokio::test]
    async fn fetch_data_returns_the_payload() {
        let server = MockServer::start().await;
        mount_data(&server, elwa_data()).await;

        let client = client_for(&server);
        let data = client.fetch_data().await.unwrap();

        assert_eq!(data["power"], 850);
        assert_eq!(data["device"], "AC ELWA-E");
    }

    #[tokio::test]
    async fn fetch_setup_returns_the_payload() {
        let server = MockServer::start().await;
        mount_setup(&server, serde_json::json!({"devmode": 1, "ww1target": 600}))
            .await;

        let client = client_for(&server);
        let setup = client.fetch_setup().await.unwrap();

        assert_eq!(setup["devmode"], 1);
        assert_eq!(setup["ww1target"], 600);
    }

    #[tokio::test]
    async fn write_setup_sends_field_as_query_parameter() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/setup.jsn"))
            .and(query_param("devmode", "1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"devmode": 1})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let confirmation = client.write_setup("devmode", 1).await.unwrap();

        assert_eq!(confirmation["devmode"], 1);
    }

    #[tokio::test]
    async fn http_error_status_is_reported() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data.jsn"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.fetch_data().await.unwrap_err();

        match err {
            Error::Protocol(ProtocolError::ConnectionFailed(msg)) => {
                assert!(msg.contains("500"), "unexpected message: {msg}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_object_body_is_a_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data.jsn"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([1, 2])))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client.fetch_data().await.unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[tokio::test]
    async fn request_timeout_surfaces_as_protocol_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data.jsn"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(elwa_data())
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let client = HttpConfig::new(server.uri().replace("http://", ""))
            .with_timeout(Duration::from_millis(100))
            .into_client()
            .unwrap();

        let err = client.fetch_data().await.unwrap_err();
        assert!(matches!(err, Error::Protocol(ProtocolError::Timeout(100))));
    }
}

mod coordinator {
    use super::*;

    #[tokio::test]
    async fn refresh_publishes_a_snapshot() {
        let server = MockServer::start().await;
        mount_data(&server, elwa_data()).await;
        mount_setup(&server, serde_json::json!({"devmode": 0, "bstmode": 0})).await;

        let coordinator = coordinator_for(&server);
        assert!(!coordinator.last_update_success());

        coordinator.refresh().await;

        assert!(coordinator.last_update_success());
        let snapshot = coordinator.snapshot().unwrap();
        assert_eq!(snapshot.get("power"), Some(&FieldValue::Int(850)));
        assert_eq!(snapshot.get("devmode"), Some(&FieldValue::Int(0)));
    }

    #[tokio::test]
    async fn failed_fetch_keeps_the_previous_snapshot() {
        let server = MockServer::start().await;
        mount_data(&server, elwa_data()).await;
        mount_setup(&server, serde_json::json!({"devmode": 0})).await;

        let coordinator = coordinator_for(&server);
        coordinator.refresh().await;
        assert!(coordinator.last_update_success());

        server.reset().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        coordinator.refresh().await;
        assert!(!coordinator.last_update_success());
        // Cached values survive the outage.
        let snapshot = coordinator.snapshot().unwrap();
        assert_eq!(snapshot.get("power"), Some(&FieldValue::Int(850)));
    }

    #[tokio::test]
    async fn listeners_fire_for_success_and_failure() {
        let server = MockServer::start().await;
        mount_data(&server, elwa_data()).await;
        mount_setup(&server, serde_json::json!({})).await;

        let coordinator = coordinator_for(&server);
        let outcomes = std::sync::Arc::new(parking_lot::Mutex::new(Vec::new()));
        let outcomes_clone = std::sync::Arc::clone(&outcomes);
        coordinator.subscribe(move |outcome| outcomes_clone.lock().push(outcome.success));

        coordinator.refresh().await;

        server.reset().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        coordinator.refresh().await;

        assert_eq!(*outcomes.lock(), vec![true, false]);
    }
}

mod entities {
    use super::*;

    #[tokio::test]
    async fn sensor_reads_value_unit_and_availability() {
        let server = MockServer::start().await;
        mount_data(&server, elwa_data()).await;
        mount_setup(&server, serde_json::json!({})).await;

        let coordinator = coordinator_for(&server);
        let power = Sensor::new(coordinator.clone(), "power", DeviceModel::AcElwaE).unwrap();
        let temp = Sensor::new(coordinator.clone(), "temp1", DeviceModel::AcElwaE).unwrap();

        assert!(!power.available());
        coordinator.refresh().await;

        assert!(power.available());
        assert_eq!(power.value(), Some(FieldValue::Int(850)));
        assert_eq!(power.unit(), Some(Unit::Watt));
        assert_eq!(temp.value(), Some(FieldValue::Float(48.5)));
        assert_eq!(temp.unit(), Some(Unit::Celsius));

        let info = power.device_info().unwrap();
        assert_eq!(info.model, "AC ELWA-E");
        assert_eq!(info.serial_number, "120100012345");
    }

    #[tokio::test]
    async fn sensor_goes_unavailable_when_the_device_goes_dark() {
        let server = MockServer::start().await;
        mount_data(&server, elwa_data()).await;
        mount_setup(&server, serde_json::json!({})).await;

        let coordinator = coordinator_for(&server);
        let power = Sensor::new(coordinator.clone(), "power", DeviceModel::AcElwaE).unwrap();

        coordinator.refresh().await;
        assert!(power.available());

        server.reset().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        coordinator.refresh().await;

        assert!(!power.available());
        // The last reading stays cached for when the device returns.
        assert_eq!(power.value(), Some(FieldValue::Int(850)));
    }

    #[tokio::test]
    async fn switch_turn_on_confirms_and_patches_the_snapshot() {
        let server = MockServer::start().await;
        mount_data(&server, elwa_data()).await;
        mount_setup(&server, serde_json::json!({"devmode": 0})).await;

        let coordinator = coordinator_for(&server);
        let devmode = Switch::new(coordinator.clone(), "devmode", DeviceModel::AcElwaE).unwrap();

        coordinator.refresh().await;
        assert_eq!(devmode.is_on(), Some(false));

        Mock::given(method("GET"))
            .and(path("/setup.jsn"))
            .and(query_param("devmode", "1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"devmode": 1})),
            )
            .with_priority(1)
            .expect(1)
            .mount(&server)
            .await;

        devmode.turn_on().await.unwrap();
        // Visible immediately, no poll in between.
        assert_eq!(devmode.is_on(), Some(true));
    }

    #[tokio::test]
    async fn boost_switch_is_only_on_at_its_on_value() {
        let server = MockServer::start().await;
        mount_data(&server, elwa_data()).await;
        // The device reports boost mode 1, but the switch writes 2 for on.
        mount_setup(&server, serde_json::json!({"bstmode": 1})).await;

        let coordinator = coordinator_for(&server);
        let boost = Switch::new(coordinator.clone(), "bstmode", DeviceModel::AcElwaE).unwrap();

        coordinator.refresh().await;
        assert_eq!(boost.is_on(), Some(false));
        assert_eq!(boost.on_value(), 2);
    }

    #[tokio::test]
    async fn failed_write_returns_an_error_and_changes_nothing() {
        let server = MockServer::start().await;
        mount_data(&server, elwa_data()).await;
        mount_setup(&server, serde_json::json!({"devmode": 0})).await;

        let coordinator = coordinator_for(&server);
        let devmode = Switch::new(coordinator.clone(), "devmode", DeviceModel::AcElwaE).unwrap();
        coordinator.refresh().await;

        Mock::given(method("GET"))
            .and(path("/setup.jsn"))
            .and(query_param("devmode", "1"))
            .respond_with(ResponseTemplate::new(500))
            .with_priority(1)
            .mount(&server)
            .await;

        assert!(devmode.turn_on().await.is_err());
        assert_eq!(devmode.is_on(), Some(false));
        assert!(coordinator.last_update_success());
    }
}

mod polling {
    use super::*;

    #[tokio::test]
    async fn start_polls_immediately_and_stop_halts_it() {
        let server = MockServer::start().await;
        mount_data(&server, elwa_data()).await;
        mount_setup(&server, serde_json::json!({})).await;

        let host = server.uri().replace("http://", "");
        let coordinator = PollCoordinator::with_interval(
            HttpClient::new(host.clone()).unwrap(),
            host,
            Duration::from_secs(60),
        );

        coordinator.start();
        assert!(coordinator.is_polling());

        // The first fetch fires on start, well before the first interval.
        tokio::time::timeout(Duration::from_secs(5), async {
            while coordinator.snapshot().is_none() {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("first poll did not complete");

        assert!(coordinator.last_update_success());

        coordinator.stop();
        assert!(!coordinator.is_polling());
    }
}
