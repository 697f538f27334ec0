use super::*;

#[tokio::test]
async fn resolve_without_id_creates_session() {
    let registry = SessionRegistry::new();
    let (id, _session, created) = registry.resolve(None).await;
    assert!(created);
    assert!(registry.get(id).await.is_some());
    assert_eq!(registry.count().await, 1);
}

#[tokio::test]
async fn resolve_known_id_reuses_session() {
    let registry = SessionRegistry::new();
    let (id, first, _) = registry.resolve(None).await;
    first.board.lock().await.set_draft("kept");

    let (same_id, second, created) = registry.resolve(Some(id)).await;
    assert!(!created);
    assert_eq!(same_id, id);
    assert_eq!(second.board.lock().await.draft(), "kept");
}

#[tokio::test]
async fn resolve_unknown_id_issues_new_one() {
    let registry = SessionRegistry::new();
    let stale = Uuid::new_v4();
    let (id, _, created) = registry.resolve(Some(stale)).await;
    assert!(created);
    assert_ne!(id, stale);
}

#[tokio::test]
async fn notice_is_taken_exactly_once() {
    let session = Session::new();
    session.push_notice(Notice::info("Advice", "one")).await;
    assert_eq!(session.take_notice().await.map(|n| n.text), Some("one".into()));
    assert!(session.take_notice().await.is_none());
}

#[tokio::test]
async fn newer_notice_replaces_unshown_one() {
    let session = Session::new();
    session.push_notice(Notice::info("Advice", "old")).await;
    session.push_notice(Notice::error("Error", "new")).await;
    assert_eq!(session.take_notice().await.map(|n| n.text), Some("new".into()));
}

#[tokio::test]
async fn locale_defaults_to_english() {
    let session = Session::new();
    assert_eq!(session.locale().await, Locale::English);
    session.set_locale(Locale::Hungarian).await;
    assert_eq!(session.locale().await, Locale::Hungarian);
}

#[tokio::test]
async fn sweep_keeps_recent_sessions() {
    let registry = SessionRegistry::new();
    registry.resolve(None).await;
    assert_eq!(registry.sweep(Duration::from_secs(60)).await, 0);
    assert_eq!(registry.count().await, 1);
}

#[tokio::test]
async fn sweep_drops_idle_sessions() {
    let registry = SessionRegistry::new();
    let (id, _, _) = registry.resolve(None).await;
    tokio::time::sleep(Duration::from_millis(20)).await;

    assert_eq!(registry.sweep(Duration::from_millis(5)).await, 1);
    assert!(registry.get(id).await.is_none());
}
