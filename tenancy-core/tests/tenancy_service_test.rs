use std::sync::Arc;

use tenancy::api::{
    AddAppArgs, AppForTenantArgs, AppsForTenantArgs, TenancyApi, TenantAppsArgs, TenantArgs,
};
use tenancy::errors::TenancyError;
use tenancy::model::{App, Page};
use tenancy::{DatasetStore, TenancyService};
use tenancy_test_utils::{app_sequence, seven_app_infra, FixedClock, InfraBuilder, SteppingClock};

fn seven_app_service() -> TenancyService {
    TenancyService::new(Arc::new(DatasetStore::new(seven_app_infra())))
}

fn ids(apps: &[App]) -> Vec<&str> {
    apps.iter().map(|app| app.id.as_str()).collect()
}

#[tokio::test]
async fn worked_pagination_example() {
    let service = seven_app_service();

    let first = service
        .apps_for_tenant(AppsForTenantArgs::new("t1").count(5))
        .await
        .unwrap();
    assert_eq!(first.count, 5);
    assert_eq!(ids(&first.results), vec!["a1", "a2", "a3", "a4", "a5"]);
    assert_eq!(first.cursor, "a5");

    let second = service
        .apps_for_tenant(AppsForTenantArgs::new("t1").count(5).after("a5"))
        .await
        .unwrap();
    assert_eq!(second.count, 2);
    assert_eq!(ids(&second.results), vec!["a6", "a7"]);
    assert_eq!(second.cursor, "a7");

    let third = service
        .apps_for_tenant(AppsForTenantArgs::new("t1").count(5).after("a7"))
        .await
        .unwrap();
    assert_eq!(third, Page::empty());
}

#[tokio::test]
async fn default_page_size_is_five() {
    let service = seven_app_service();
    let page = service
        .apps_for_tenant(AppsForTenantArgs::new("t1"))
        .await
        .unwrap();
    assert_eq!(page.count, 5);
}

#[tokio::test]
async fn zero_count_yields_empty_page() {
    let service = seven_app_service();
    let page = service
        .apps_for_tenant(AppsForTenantArgs::new("t1").count(0))
        .await
        .unwrap();
    assert_eq!(page.count, 0);
    assert!(page.results.is_empty());
    assert_eq!(page.cursor, "");
}

#[tokio::test]
async fn unknown_cursor_restarts_from_beginning() {
    let service = seven_app_service();
    let page = service
        .apps_for_tenant(AppsForTenantArgs::new("t1").count(2).after("never-existed"))
        .await
        .unwrap();
    assert_eq!(ids(&page.results), vec!["a1", "a2"]);
}

#[tokio::test]
async fn walking_pages_reconstructs_sequence() {
    let infra = InfraBuilder::new()
        .tenant("t1", app_sequence("app-", 23))
        .build();
    let service = TenancyService::new(Arc::new(DatasetStore::new(infra)));

    let full = service
        .all_apps_for_tenant(TenantAppsArgs {
            tenant_id: "t1".into(),
        })
        .await
        .unwrap();

    for count in [1usize, 4, 5, 22, 23, 100] {
        let mut collected = Vec::new();
        let mut args = AppsForTenantArgs::new("t1").count(count);
        loop {
            let page = service.apps_for_tenant(args.clone()).await.unwrap();
            if page.count == 0 {
                break;
            }
            collected.extend(page.results);
            args = args.after(page.cursor);
        }
        assert_eq!(collected, full, "count {}", count);
    }
}

#[tokio::test]
async fn unknown_tenant_fails_every_scoped_operation() {
    let service = seven_app_service();
    let expected = TenancyError::TenantNotFound("t404".into());

    assert_eq!(
        service
            .apps_for_tenant(AppsForTenantArgs::new("t404"))
            .await
            .unwrap_err(),
        expected
    );
    assert_eq!(
        service
            .all_apps_for_tenant(TenantAppsArgs {
                tenant_id: "t404".into()
            })
            .await
            .unwrap_err(),
        expected
    );
    assert_eq!(
        service
            .app_for_tenant(AppForTenantArgs {
                tenant_id: "t404".into(),
                app_id: "a1".into()
            })
            .await
            .unwrap_err(),
        expected
    );
    assert_eq!(
        service
            .add_app_for_tenant(AddAppArgs {
                tenant_id: "t404".into(),
                app_id: "a1".into(),
                created_by: "alice".into()
            })
            .await
            .unwrap_err(),
        expected
    );
    assert!(service
        .tenant(TenantArgs {
            id: "t404".into()
        })
        .await
        .is_none());
}

#[tokio::test]
async fn unknown_app_fails_single_lookup() {
    let service = seven_app_service();
    let err = service
        .app_for_tenant(AppForTenantArgs {
            tenant_id: "t1".into(),
            app_id: "a99".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err, TenancyError::AppNotFound("a99".into()));

    let found = service
        .app_for_tenant(AppForTenantArgs {
            tenant_id: "t1".into(),
            app_id: "a3".into(),
        })
        .await
        .unwrap();
    assert_eq!(found, App::new("a3", "alice", 3));
}

#[tokio::test]
async fn append_is_last_and_visible_after_cursor() {
    let store = Arc::new(DatasetStore::new(seven_app_infra()));
    let service = TenancyService::with_clock(store, Arc::new(FixedClock(1_700_000_000_000)));

    let before = service
        .all_apps_for_tenant(TenantAppsArgs {
            tenant_id: "t1".into(),
        })
        .await
        .unwrap();

    let created = service
        .add_app_for_tenant(AddAppArgs {
            tenant_id: "t1".into(),
            app_id: "a8".into(),
            created_by: "alice".into(),
        })
        .await
        .unwrap();
    assert_eq!(created.id, "a8");
    assert_eq!(created.created_by, "alice");
    assert!(before.iter().all(|app| app.created_at < created.created_at));

    let after = service
        .all_apps_for_tenant(TenantAppsArgs {
            tenant_id: "t1".into(),
        })
        .await
        .unwrap();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.last(), Some(&created));

    let page = service
        .apps_for_tenant(AppsForTenantArgs::new("t1").after("a7"))
        .await
        .unwrap();
    assert_eq!(page.results, vec![created]);
    assert_eq!(page.cursor, "a8");
}

#[tokio::test]
async fn appends_keep_insertion_order() {
    let store = Arc::new(DatasetStore::new(
        InfraBuilder::new().empty_tenant("t1").build(),
    ));
    let service = TenancyService::with_clock(store, Arc::new(SteppingClock::new(10, 5)));

    for id in ["x", "y", "z"] {
        service
            .add_app_for_tenant(AddAppArgs {
                tenant_id: "t1".into(),
                app_id: id.into(),
                created_by: "bob".into(),
            })
            .await
            .unwrap();
    }

    let apps = service
        .all_apps_for_tenant(TenantAppsArgs {
            tenant_id: "t1".into(),
        })
        .await
        .unwrap();
    assert_eq!(ids(&apps), vec!["x", "y", "z"]);
    let stamps: Vec<i64> = apps.iter().map(|app| app.created_at).collect();
    assert_eq!(stamps, vec![10, 15, 20]);
}

#[tokio::test]
async fn duplicate_app_id_after_cursor_is_skipped_by_cursor_resolution() {
    let store = Arc::new(DatasetStore::new(seven_app_infra()));
    let service = TenancyService::with_clock(store, Arc::new(FixedClock(50)));

    service
        .add_app_for_tenant(AddAppArgs {
            tenant_id: "t1".into(),
            app_id: "a2".into(),
            created_by: "mallory".into(),
        })
        .await
        .unwrap();

    let found = service
        .app_for_tenant(AppForTenantArgs {
            tenant_id: "t1".into(),
            app_id: "a2".into(),
        })
        .await
        .unwrap();
    assert_eq!(found.created_by, "alice");

    let page = service
        .apps_for_tenant(AppsForTenantArgs::new("t1").count(2).after("a2"))
        .await
        .unwrap();
    assert_eq!(ids(&page.results), vec!["a3", "a4"]);
}

#[tokio::test]
async fn infra_and_tenants_reflect_appends() {
    let infra = InfraBuilder::new()
        .block_traffic(true)
        .tenant("t1", app_sequence("a", 2))
        .empty_tenant("t2")
        .build();
    let service = TenancyService::with_clock(
        Arc::new(DatasetStore::new(infra.clone())),
        Arc::new(FixedClock(7)),
    );

    assert_eq!(service.infra().await, infra);

    service
        .add_app_for_tenant(AddAppArgs {
            tenant_id: "t2".into(),
            app_id: "b1".into(),
            created_by: "carol".into(),
        })
        .await
        .unwrap();

    let tenants = service.tenants().await;
    assert_eq!(tenants.len(), 2);
    assert_eq!(tenants[1].apps, vec![App::new("b1", "carol", 7)]);
    assert!(service.infra().await.block_traffic);
}
