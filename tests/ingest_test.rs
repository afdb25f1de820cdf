//! Integration tests for the ingest cycle against a mocked Sleeper API

use serde_json::{json, Value};
use sleeper_ffl::{
    commands::{
        schedule::{spawn_ingest_tasks, DailySchedule},
        update_player_data::{handle_update_player_data, IngestJob, IngestSummary},
    },
    core::LookupCache,
    sleeper::SleeperClient,
    storage::{PlayerDatabase, PlayerTable, SharedDatabase},
    PlayerId, Position, Season, SleeperError,
};
use std::sync::{Arc, Mutex};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

async fn mock_feeds(info: Value, stats: Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/players/nfl"))
        .respond_with(ResponseTemplate::new(200).set_body_json(info))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/stats/nfl/regular/2025"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats))
        .mount(&server)
        .await;
    server
}

fn new_db() -> SharedDatabase {
    Arc::new(Mutex::new(PlayerDatabase::new_in_memory().unwrap()))
}

fn job_for(server: &MockServer, db: &SharedDatabase, cache: &LookupCache) -> IngestJob {
    IngestJob::new(
        SleeperClient::new(server.uri()).unwrap(),
        Arc::clone(db),
        cache.clone(),
        Season::new(2025),
    )
}

fn league_info() -> Value {
    json!({
        "100": {"full_name": "John Doe", "depth_chart_position": "QB", "team": "KC"},
        "101": {"full_name": "Run Ner", "depth_chart_position": "RB"},
        "102": {"full_name": "Wide Out", "depth_chart_position": "WR"},
        "103": {"full_name": "Tight End", "depth_chart_position": "TE"},
        "200": {"full_name": "Kick Er", "depth_chart_position": "K"},
        "201": {"full_name": "Line Man", "depth_chart_position": "LG"},
        "202": {"full_name": "Free Agent", "depth_chart_position": null}
    })
}

fn league_stats() -> Value {
    json!({
        "100": {"pts": 12.5},
        "101": {"pts": 7.0},
        "200": {"pts": 9.0},
        "999": {"pts": 1.0}
    })
}

#[tokio::test]
async fn test_ingest_cycle_writes_eligible_players() {
    let server = mock_feeds(league_info(), league_stats()).await;
    let db = new_db();
    let job = job_for(&server, &db, &LookupCache::default());

    let summary = job.run_cycle().await.unwrap();

    assert_eq!(
        summary,
        IngestSummary {
            players_seen: 7,
            players_eligible: 4,
            info_written: 4,
            stats_written: 2,
        }
    );

    let db = db.lock().unwrap();
    assert_eq!(
        db.player_info_ids().unwrap(),
        vec![
            PlayerId::new("100"),
            PlayerId::new("101"),
            PlayerId::new("102"),
            PlayerId::new("103")
        ]
    );
    assert_eq!(
        db.player_stats_ids().unwrap(),
        vec![PlayerId::new("100"), PlayerId::new("101")]
    );
}

#[tokio::test]
async fn test_every_stats_id_has_info() {
    let server = mock_feeds(league_info(), league_stats()).await;
    let db = new_db();
    job_for(&server, &db, &LookupCache::default())
        .run_cycle()
        .await
        .unwrap();

    let db = db.lock().unwrap();
    let info_ids = db.player_info_ids().unwrap();
    for id in db.player_stats_ids().unwrap() {
        assert!(info_ids.contains(&id), "stats row {id} has no info row");
    }
}

#[tokio::test]
async fn test_every_stored_player_is_eligible() {
    let server = mock_feeds(league_info(), league_stats()).await;
    let db = new_db();
    job_for(&server, &db, &LookupCache::default())
        .run_cycle()
        .await
        .unwrap();

    let db = db.lock().unwrap();
    for record in db.records(PlayerTable::Info).unwrap() {
        let info: Value = serde_json::from_str(record.data.as_str()).unwrap();
        let position = info["depth_chart_position"].as_str().unwrap();
        assert!(
            Position::from_depth_chart(position).is_some(),
            "{} stored with position {position}",
            record.player_id
        );
    }
}

#[tokio::test]
async fn test_ingest_is_idempotent() {
    let server = mock_feeds(league_info(), league_stats()).await;
    let db = new_db();
    let job = job_for(&server, &db, &LookupCache::default());

    job.run_cycle().await.unwrap();
    let (info_once, stats_once) = {
        let db = db.lock().unwrap();
        (
            db.records(PlayerTable::Info).unwrap(),
            db.records(PlayerTable::Stats).unwrap(),
        )
    };

    job.run_cycle().await.unwrap();
    let db = db.lock().unwrap();
    assert_eq!(db.records(PlayerTable::Info).unwrap(), info_once);
    assert_eq!(db.records(PlayerTable::Stats).unwrap(), stats_once);
}

#[tokio::test]
async fn test_stale_rows_are_not_purged() {
    let db = new_db();

    let first = mock_feeds(league_info(), league_stats()).await;
    job_for(&first, &db, &LookupCache::default())
        .run_cycle()
        .await
        .unwrap();

    // John Doe moves to kicker and drops out of the eligible set
    let second = mock_feeds(
        json!({"100": {"full_name": "John Doe", "depth_chart_position": "K"}}),
        json!({}),
    )
    .await;
    let summary = job_for(&second, &db, &LookupCache::default())
        .run_cycle()
        .await
        .unwrap();

    assert_eq!(summary.info_written, 0);
    let db = db.lock().unwrap();
    let info = db.get_player_info(&PlayerId::new("100")).unwrap().unwrap();
    assert!(info.as_str().contains("\"QB\""));
}

#[tokio::test]
async fn test_ingest_clears_lookup_cache() {
    let server = mock_feeds(league_info(), league_stats()).await;
    let db = new_db();
    let cache = LookupCache::default();
    assert!(cache.insert("John Doe", PlayerId::new("stale"), cache.generation()));

    job_for(&server, &db, &cache).run_cycle().await.unwrap();

    assert_eq!(cache.get("John Doe"), None);
}

#[tokio::test]
async fn test_upstream_failure_leaves_store_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/players/nfl"))
        .respond_with(ResponseTemplate::new(200).set_body_json(league_info()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/stats/nfl/regular/2025"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let db = new_db();
    let job = job_for(&server, &db, &LookupCache::default());

    let result = job.run_cycle().await;
    assert!(matches!(result, Err(SleeperError::Http(_))));
    assert_eq!(db.lock().unwrap().info_count().unwrap(), 0);

    // The logged wrapper swallows the failure
    assert!(handle_update_player_data(&job).await.is_none());
}

#[tokio::test]
async fn test_malformed_feed_is_reported() {
    let server = mock_feeds(json!(["not", "an", "object"]), json!({})).await;
    let db = new_db();
    let job = job_for(&server, &db, &LookupCache::default());

    assert!(matches!(
        job.run_cycle().await,
        Err(SleeperError::UnexpectedFeed { .. })
    ));
    assert!(handle_update_player_data(&job).await.is_none());
}

#[tokio::test]
async fn test_logged_wrapper_returns_summary() {
    let server = mock_feeds(league_info(), json!({})).await;
    let db = new_db();
    let job = job_for(&server, &db, &LookupCache::default());

    let summary = handle_update_player_data(&job).await.unwrap();
    assert_eq!(summary.info_written, 4);
    assert_eq!(summary.stats_written, 0);
}

#[tokio::test]
async fn test_startup_task_runs_ingest_immediately() {
    let server = mock_feeds(league_info(), league_stats()).await;
    let db = new_db();
    let job = Arc::new(job_for(&server, &db, &LookupCache::default()));

    let tasks = spawn_ingest_tasks(job, DailySchedule::midnight_central().unwrap());
    let startup = tasks.startup;
    startup.await.unwrap();
    tasks.daily.abort();

    assert_eq!(db.lock().unwrap().info_count().unwrap(), 4);
}
