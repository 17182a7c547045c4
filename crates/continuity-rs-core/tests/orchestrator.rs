//! Orchestrator runs against a real file store and stub generators.

use continuity_rs_core::{Orchestrator, PromptBuilder};
use continuity_rs_llm::TextGenerator;
use continuity_rs_memory::{FileThoughtStore, ThoughtStore};
use continuity_rs_test_utils::{FailingGenerator, FixedGenerator, RecordingGenerator};
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::{TempDir, tempdir};

struct Workspace {
    _temp: TempDir,
    store: Arc<FileThoughtStore>,
    page: PathBuf,
}

fn workspace() -> Workspace {
    let temp = tempdir().expect("tempdir");
    let store = Arc::new(FileThoughtStore::new(temp.path().join("thoughts")));
    let page = temp.path().join("index.html");
    Workspace {
        _temp: temp,
        store,
        page,
    }
}

fn orchestrator(ws: &Workspace, generator: Arc<dyn TextGenerator>) -> Orchestrator {
    Orchestrator::new(ws.store.clone(), generator, &ws.page)
}

fn record_files(dir: &Path) -> usize {
    std::fs::read_dir(dir).map(|entries| entries.count()).unwrap_or(0)
}

/// First run on an empty store yields thought #1 on the page.
#[tokio::test]
async fn first_run_writes_thought_and_page() {
    let ws = workspace();
    let report = orchestrator(&ws, Arc::new(FixedGenerator::new("hello")))
        .run()
        .await
        .expect("run");

    assert_eq!(report.thought.content, "hello");
    assert_eq!(report.thought.sequence_number, 1);
    assert_eq!(report.total, 1);

    let records = ws.store.load_all().await.expect("load");
    assert_eq!(records, vec![report.thought.clone()]);

    let html = std::fs::read_to_string(&ws.page).expect("page");
    assert!(html.contains("hello"));
    assert!(html.contains("1 thoughts and counting."));
    assert!(html.contains("Thought #1<"));
}

/// Each run adds exactly one record with the next sequence number.
#[tokio::test]
async fn successive_runs_grow_the_log_by_one() {
    let ws = workspace();
    // Seed earlier thoughts at fixed instants so the runs below never share a second.
    ws.store
        .append_at("seed one", chrono_instant(0))
        .expect("seed");
    ws.store
        .append_at("seed two", chrono_instant(60))
        .expect("seed");

    let report = orchestrator(&ws, Arc::new(FixedGenerator::new("third")))
        .run()
        .await
        .expect("run");
    assert_eq!(report.thought.sequence_number, 3);
    assert_eq!(report.total, 3);
    assert_eq!(ws.store.count().expect("count"), 3);

    let html = std::fs::read_to_string(&ws.page).expect("page");
    assert!(html.contains("3 thoughts and counting."));
    let newest = html.find("third").expect("newest");
    let oldest = html.find("seed one").expect("oldest");
    assert!(newest < oldest);
}

/// The prompt sent to the provider carries earlier thoughts.
#[tokio::test]
async fn prompt_contains_recent_history() {
    let ws = workspace();
    ws.store
        .append_at("an older idea", chrono_instant(0))
        .expect("seed");
    let generator = Arc::new(RecordingGenerator::new("reply"));
    orchestrator(&ws, generator.clone())
        .with_prompt_builder(PromptBuilder::new("IDENTITY"))
        .run()
        .await
        .expect("run");

    let prompts = generator.prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].starts_with("IDENTITY\n\nYour previous thoughts:"));
    assert!(prompts[0].contains("]\nan older idea"));
}

/// A failing provider leaves records and page exactly as they were.
#[tokio::test]
async fn failed_generation_changes_nothing() {
    let ws = workspace();
    ws.store
        .append_at("existing", chrono_instant(0))
        .expect("seed");
    std::fs::write(&ws.page, "previous page").expect("page");

    for generator in [
        FailingGenerator::status(500, "boom"),
        FailingGenerator::malformed("{}"),
    ] {
        let err = orchestrator(&ws, Arc::new(generator.clone()))
            .run()
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            continuity_rs_core::ContinuityCoreError::Generation(_)
        ));
        assert_eq!(generator.calls(), 1);
    }

    assert_eq!(record_files(ws.store.root()), 1);
    assert_eq!(
        std::fs::read_to_string(&ws.page).expect("page"),
        "previous page"
    );
}

fn chrono_instant(offset_secs: i64) -> chrono::DateTime<chrono::Utc> {
    use chrono::TimeZone;
    chrono::Utc
        .with_ymd_and_hms(2026, 2, 11, 0, 0, 0)
        .unwrap()
        + chrono::Duration::seconds(offset_secs)
}
