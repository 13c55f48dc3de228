use chrono::Utc;
use lifemanager_core::insights::ledger::{category_breakdown, ledger_totals};
use lifemanager_core::insights::portfolio::portfolio_summary;
use lifemanager_core::insights::tasks::sort_pending_first;
use lifemanager_core::{
    CoreConfig, InvestmentAsset, LifeManager, SessionIdentity, Task, TaskPatch, TaskStatus,
    Transaction, UserProfile, UserProfilePatch, DEV_LOGIN_EMAIL,
};

#[tokio::test]
async fn signed_out_briefing_is_empty() {
    let manager = LifeManager::in_memory().unwrap();

    assert!(!manager.session().is_signed_in());
    let briefing = manager.morning_briefing().await.unwrap();
    assert_eq!(briefing.active_tasks, 0);
    assert_eq!(briefing.spent_today, 0.0);
}

#[tokio::test]
async fn ensure_signed_in_logs_in_once_and_then_reuses_identity() {
    let manager = LifeManager::in_memory().unwrap();

    let first = manager.ensure_signed_in(DEV_LOGIN_EMAIL).await.unwrap();
    assert_eq!(first, SessionIdentity::for_email(DEV_LOGIN_EMAIL));

    let second = manager
        .ensure_signed_in("someone-else@example.com")
        .await
        .unwrap();
    assert_eq!(second, first);
}

#[tokio::test]
async fn dashboard_views_only_see_the_signed_in_owner() {
    let manager = LifeManager::in_memory().unwrap();
    let identity = manager.ensure_signed_in(DEV_LOGIN_EMAIL).await.unwrap();
    let uid = identity.uid.as_str();
    let now = Utc::now();

    let errand = manager
        .tasks()
        .create(Some(uid), Task::new("groceries"))
        .await
        .unwrap();
    manager
        .tasks()
        .create(Some(uid), Task::new("call bank"))
        .await
        .unwrap();
    manager
        .tasks()
        .create(Some("someone-else"), Task::new("not mine"))
        .await
        .unwrap();
    manager
        .tasks()
        .update(errand.id, TaskPatch::status(TaskStatus::Done))
        .await
        .unwrap();

    for tx in [
        Transaction::income(100.0, "Salary", now),
        Transaction::expense(30.0, "Food", now),
        Transaction::expense(20.0, "Transport", now),
    ] {
        manager.expenses().create(Some(uid), tx).await.unwrap();
    }
    manager
        .expenses()
        .create(Some("someone-else"), Transaction::expense(999.0, "Food", now))
        .await
        .unwrap();

    let briefing = manager.morning_briefing().await.unwrap();
    assert_eq!(briefing.active_tasks, 1);
    assert_eq!(briefing.spent_today, 50.0);

    let ledger = manager.expenses().get_all(Some(uid)).await.unwrap();
    let totals = ledger_totals(&ledger);
    assert_eq!(totals.balance, 50.0);
    assert_eq!(category_breakdown(&ledger).get("Food"), Some(30.0));

    let mut tasks = manager.tasks().get_all(Some(uid)).await.unwrap();
    sort_pending_first(&mut tasks);
    assert_eq!(tasks[0].fields.title, "call bank");
    assert_eq!(tasks[1].fields.title, "groceries");
}

#[tokio::test]
async fn reopening_from_config_restores_session_and_data() {
    let dir = tempfile::tempdir().unwrap();
    let config = CoreConfig {
        db_path: Some(dir.path().join("life.sqlite3")),
        ..CoreConfig::default()
    };

    let uid = {
        let manager = LifeManager::open(&config).unwrap();
        let identity = manager.ensure_signed_in(DEV_LOGIN_EMAIL).await.unwrap();
        manager
            .investments()
            .create(
                Some(identity.uid.as_str()),
                InvestmentAsset::new("ACME", 10.0, 5.0, 8.0),
            )
            .await
            .unwrap();
        identity.uid
    };

    let manager = LifeManager::open(&config).unwrap();
    assert_eq!(manager.session().current_uid(), Some(uid.clone()));

    let assets = manager.investments().get_all(Some(uid.as_str())).await.unwrap();
    let summary = portfolio_summary(&assets);
    assert_eq!(summary.total_value, 80.0);
    assert_eq!(summary.total_cost, 50.0);
    assert_eq!(summary.total_profit, 30.0);
    assert!((summary.profit_percent - 60.0).abs() < 1e-9);
}

#[tokio::test]
async fn sign_in_mirrors_identity_into_users_once() {
    let manager = LifeManager::in_memory().unwrap();
    let identity = manager.ensure_signed_in(DEV_LOGIN_EMAIL).await.unwrap();
    manager.ensure_signed_in(DEV_LOGIN_EMAIL).await.unwrap();
    let again = manager.register_profile(&identity).await.unwrap();

    let profiles = manager
        .users()
        .get_all(Some(identity.uid.as_str()))
        .await
        .unwrap();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].id, again.id);
    assert_eq!(profiles[0].fields, identity.profile());
}

#[tokio::test]
async fn user_profiles_support_create_get_and_update() {
    let manager = LifeManager::in_memory().unwrap();
    let created = manager
        .users()
        .create(
            Some("uid-1"),
            UserProfile {
                email: "livia@example.com".to_string(),
                display_name: "Livia".to_string(),
            },
        )
        .await
        .unwrap();

    let loaded = manager.users().get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(loaded, created);

    let patch = UserProfilePatch {
        display_name: Some("Livia D.".to_string()),
        ..UserProfilePatch::default()
    };
    manager.users().update(created.id, patch).await.unwrap();

    let updated = manager.users().get_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(updated.fields.display_name, "Livia D.");
    assert_eq!(updated.fields.email, "livia@example.com");
    assert!(updated.updated_at.is_some());
}
