use std::{fs, path::PathBuf, sync::Arc, time::Duration};

use summoner_lookup::{
    config::ClientConfig,
    model::{
        ids::ChampionId,
        lookup::{LookupForm, LookupOutcome},
        mastery::ChampionMasteryEntry,
        region::Region,
        summoner::LookupResult,
    },
    service::{dictionary::champion_name, gameapi::lookup_client::LookupClient},
    testing::{probe_endpoint, sample_lookup_result},
    ui::widget::{LookupWidget, MessageKind, Phase},
};
use wiremock::{
    matchers::{body_json, method},
    Mock, MockServer, ResponseTemplate,
};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

async fn lookup_server(status: u16, body: &str, delay: Duration) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_json(serde_json::json!({
            "summonerName": "Doublelift",
            "tagLine": "NA1",
            "region": "na1"
        })))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_raw(body.to_string(), "application/json")
                .set_delay(delay),
        )
        .mount(&server)
        .await;
    server
}

fn widget(server: &MockServer) -> LookupWidget {
    let client = LookupClient::new(ClientConfig::with_endpoint(&server.uri())).expect("client should build");
    LookupWidget::new(client)
}

#[tokio::test]
async fn doublelift_end_to_end() {
    let raw = read_fixture("doublelift.json");
    let server = lookup_server(200, &raw, Duration::from_millis(200)).await;
    let widget = Arc::new(widget(&server));
    let mut states = widget.subscribe();

    let mut loading = vec![states.borrow_and_update().loading];
    let task = {
        let widget = Arc::clone(&widget);
        tokio::spawn(async move {
            let mut form = LookupForm::default();
            form.set_game_name(" Doublelift ");
            widget.submit(&form).await
        })
    };
    while states.changed().await.is_ok() {
        let state = states.borrow_and_update();
        loading.push(state.loading);
        if !state.loading {
            break;
        }
    }
    let outcome = task.await.expect("task should not panic").expect("form is valid");

    assert_eq!(loading, vec![false, true, false]);

    let expected: LookupResult = serde_json::from_str(&raw).expect("fixture should parse");
    let LookupOutcome::Success {
        result,
        used_fallback,
        ..
    } = outcome
    else {
        panic!("lookup should succeed");
    };
    assert!(!used_fallback);
    assert_eq!(result, expected);
    assert_eq!(result, sample_lookup_result());
    assert_eq!(
        result.top_champion(),
        Some(&ChampionMasteryEntry {
            champion_id: ChampionId(67),
            mastery_level: 15,
            mastery_points: 181_371,
            last_played_at: 1_526_182_459_000,
            points_since_last_level: 50_771,
            points_until_next_level: -39_771,
            tokens_earned: 0,
        })
    );
    assert_eq!(champion_name(result.top_champions[0].champion_id), "Vayne");
    assert_eq!(result.top_champions[0].progress_percent(), None);

    let state = widget.state();
    assert_eq!(state.phase, Phase::Succeeded);
    assert_eq!(state.message.map(|m| m.kind), Some(MessageKind::Success));
}

#[tokio::test]
async fn unknown_summoner_is_reported() {
    let server = lookup_server(404, r#"{"error": "summoner not found"}"#, Duration::ZERO).await;

    let outcome = widget(&server)
        .submit(&LookupForm::new("Doublelift", "NA1", Region::NorthAmerica))
        .await
        .expect("form is valid");

    assert_eq!(
        outcome,
        LookupOutcome::Failure {
            message: "summoner not found".to_string(),
            used_fallback: false,
        }
    );
}

#[tokio::test]
async fn gateway_timeout_shows_placeholder_for_submitted_name() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(504).set_body_string("Endpoint request timed out"))
        .mount(&server)
        .await;
    let widget = widget(&server);

    let mut form = LookupForm::default();
    form.select_region(Region::Korea);
    form.set_riot_id("Faker#KR1");
    let outcome = widget.submit(&form).await.expect("form is valid");

    assert!(outcome.used_fallback());
    assert_eq!(outcome.result().map(|r| r.summoner.display_name.as_str()), Some("Faker"));
    assert!(!widget.is_loading());
    let state = widget.state();
    assert_eq!(state.message.map(|m| m.kind), Some(MessageKind::Warning));
    assert_eq!(state.region, Some(Region::Korea));
}

#[tokio::test]
async fn probe_reports_raw_status_and_body() {
    let server = lookup_server(200, &read_fixture("doublelift.json"), Duration::ZERO).await;

    let report = probe_endpoint(&ClientConfig::with_endpoint(&server.uri()))
        .await
        .expect("probe should reach mock");

    assert_eq!(report.status, 200);
    assert!(!report.looks_like_timeout());
    assert_eq!(report.body.as_ref().and_then(|b| b["summoner"]["name"].as_str()), Some("Doublelift"));
}

#[tokio::test]
async fn probe_flags_gateway_timeouts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let report = probe_endpoint(&ClientConfig::with_endpoint(&server.uri()))
        .await
        .expect("probe should reach mock");

    assert_eq!(report.status, 502);
    assert!(report.body.is_none());
    assert!(report.looks_like_timeout());
}
