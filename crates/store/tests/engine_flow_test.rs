//! End-to-end tests: taxonomy load, intake, classification, statements,
//! ratios and dashboard over the in-memory store.

#![allow(clippy::unwrap_used)]

mod common;

use common::Engine;
use finstat_core::classifier::ClassificationError;
use finstat_core::mapping::{ClassificationRepository, MappingError, MappingOrigin, SourceKey};
use finstat_core::ratios::INTEREST_COVERAGE_CAP;
use finstat_core::reports::{Statement, section};
use finstat_core::taxonomy::{TaxonomyError, TaxonomyLoad, TaxonomyRepository, TaxonomySource};
use finstat_shared::types::{CanonicalAccountId, ClassificationId, CompanyId, PageRequest};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_full_flow() {
    let engine = Engine::loaded().await;
    let company_id = CompanyId::new();
    engine.upload_trading_company(company_id).await;

    let summary = engine.classifier.classify(company_id).await.unwrap();
    assert_eq!(summary.total, 14);
    assert_eq!(summary.classified_count, 13);
    assert_eq!(summary.unclassified_count, 1);
    assert_eq!(summary.skipped_manual, 0);

    let qwerty = summary
        .details
        .iter()
        .find(|d| d.source_code == "X-900")
        .unwrap();
    assert!(!qwerty.is_classified);
    assert_eq!(qwerty.matched_code, None);

    let cash = summary
        .details
        .iter()
        .find(|d| d.source_code == "A-100")
        .unwrap();
    assert_eq!(cash.matched_code.as_deref(), Some("1000"));
    assert_eq!(cash.confidence, Decimal::ONE);

    let statements = engine
        .ratios
        .statements()
        .build_statements(company_id)
        .await
        .unwrap();
    let pnl = &statements.profit_and_loss.summary;
    assert_eq!(pnl.revenue, dec!(500000));
    assert_eq!(pnl.gross_profit, dec!(300000));
    assert_eq!(pnl.operating_profit, dec!(200000));
    assert_eq!(pnl.ebitda, dec!(220000));
    assert_eq!(pnl.net_profit, dec!(166000));

    let bs = &statements.balance_sheet.summary;
    assert_eq!(bs.total_current_assets, dec!(460000));
    assert_eq!(bs.total_assets, dec!(660000));
    assert_eq!(bs.total_liabilities, dec!(250000));
    assert_eq!(bs.total_equity, dec!(410000));
    assert!(
        statements
            .balance_sheet
            .section(section::CURRENT_ASSETS)
            .unwrap()
            .items
            .iter()
            .any(|line| line.label == "Cash and Cash Equivalents" && line.amount == dec!(350000))
    );

    let cf = &statements.cash_flow.summary;
    assert_eq!(cf.cash_from_operations, dec!(186000));
    assert_eq!(cf.cash_from_investing, dec!(-20000));
    assert_eq!(cf.cash_from_financing, dec!(7500));
    assert_eq!(cf.net_change, dec!(173500));

    let ratios = engine.ratios.compute_ratios(company_id).await.unwrap();
    assert_eq!(ratios.get("Current Ratio").unwrap().value, dec!(4.6));
    assert_eq!(ratios.get("Interest Coverage").unwrap().value, dec!(14.67));

    let dashboard = engine.dashboard.summary(company_id).await.unwrap();
    assert!(dashboard.has_data);
    let kpis = dashboard.kpis.unwrap();
    assert_eq!(kpis.cash_position, dec!(350000));
    assert_eq!(kpis.net_debt, dec!(-100000));
    assert_eq!(kpis.working_capital, dec!(360000));
    assert_eq!(kpis.gross_margin, dec!(60.0));
    assert_eq!(kpis.net_margin, dec!(33.2));
}

#[tokio::test]
async fn test_rerun_is_idempotent() {
    let engine = Engine::loaded().await;
    let company_id = CompanyId::new();
    engine.upload_trading_company(company_id).await;

    let first = engine.classifier.classify(company_id).await.unwrap();
    let before = engine.store.list_for_company(company_id).await.unwrap();
    let second = engine.classifier.classify(company_id).await.unwrap();
    let after = engine.store.list_for_company(company_id).await.unwrap();

    assert_eq!(first.classified_count, second.classified_count);
    assert_eq!(first.details, second.details);
    assert_eq!(before.len(), 14);
    assert_eq!(after.len(), 14);
    for (old, new) in before.iter().zip(&after) {
        assert_eq!(old.id, new.id);
        assert_eq!(old.created_at, new.created_at);
        assert_eq!(old.target_account, new.target_account);
    }
}

#[tokio::test]
async fn test_manual_override_survives_reruns() {
    let engine = Engine::loaded().await;
    let company_id = CompanyId::new();
    engine.upload_trading_company(company_id).await;
    engine.classifier.classify(company_id).await.unwrap();

    let admin = engine
        .mapping
        .list_canonical_accounts()
        .await
        .unwrap()
        .into_iter()
        .find(|a| a.code == "8100")
        .unwrap();
    let row = engine
        .store
        .list_for_company(company_id)
        .await
        .unwrap()
        .into_iter()
        .find(|row| row.key() == SourceKey::Code("X-900".to_string()))
        .unwrap();

    let updated = engine.mapping.set_manual(row.id, admin.id).await.unwrap();
    assert_eq!(updated.origin, MappingOrigin::Manual);
    assert_eq!(updated.confidence, None);

    let summary = engine.classifier.classify(company_id).await.unwrap();
    assert_eq!(summary.skipped_manual, 1);
    assert_eq!(summary.classified_count, 14);
    assert_eq!(summary.unclassified_count, 0);
    assert!(summary.details.iter().all(|d| d.source_code != "X-900"));

    let stored = ClassificationRepository::find_by_id(engine.store.as_ref(), row.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.target_account, Some(admin.id));
    assert!(stored.is_manual());

    let statements = engine
        .ratios
        .statements()
        .build_statements(company_id)
        .await
        .unwrap();
    assert_eq!(statements.profit_and_loss.summary.operating_expenses, dec!(105000));
    assert_eq!(statements.profit_and_loss.summary.net_profit, dec!(161000));
}

#[tokio::test]
async fn test_set_manual_unknown_ids() {
    let engine = Engine::loaded().await;
    let company_id = CompanyId::new();
    engine.upload_trading_company(company_id).await;
    engine.classifier.classify(company_id).await.unwrap();

    let account = engine.store.list_all().await.unwrap().remove(0);
    let missing = ClassificationId::new();
    let err = engine.mapping.set_manual(missing, account.id).await.unwrap_err();
    assert!(matches!(err, MappingError::ClassificationNotFound(id) if id == missing));
    assert!(err.is_not_found());

    let row = engine.store.list_for_company(company_id).await.unwrap().remove(0);
    let err = engine
        .mapping
        .set_manual(row.id, CanonicalAccountId::new())
        .await
        .unwrap_err();
    assert!(matches!(err, MappingError::CanonicalAccountNotFound(_)));

    let unchanged = ClassificationRepository::find_by_id(engine.store.as_ref(), row.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged, row);
}

#[tokio::test]
async fn test_empty_ledger() {
    let engine = Engine::loaded().await;
    let company_id = CompanyId::new();

    let summary = engine.classifier.classify(company_id).await.unwrap();
    assert_eq!(summary.total, 0);
    assert!(summary.details.is_empty());

    let statements = engine
        .ratios
        .statements()
        .build_statements(company_id)
        .await
        .unwrap();
    assert_eq!(statements.profit_and_loss.summary.net_profit, Decimal::ZERO);
    assert_eq!(statements.balance_sheet.summary.total_assets, Decimal::ZERO);
    assert_eq!(statements.balance_sheet.lines().count(), 0);
    assert_eq!(statements.cash_flow.summary.net_change, Decimal::ZERO);

    let ratios = engine.ratios.compute_ratios(company_id).await.unwrap();
    assert_eq!(
        ratios.get("Interest Coverage").unwrap().value,
        INTEREST_COVERAGE_CAP
    );

    let dashboard = engine.dashboard.summary(company_id).await.unwrap();
    assert!(!dashboard.has_data);
    assert!(dashboard.kpis.is_none());
}

#[tokio::test]
async fn test_classify_requires_taxonomy() {
    let engine = Engine::bare();
    let company_id = CompanyId::new();
    engine.upload_trading_company(company_id).await;

    let err = engine.classifier.classify(company_id).await.unwrap_err();
    assert!(matches!(
        err,
        ClassificationError::Taxonomy(TaxonomyError::NotLoaded)
    ));
    assert!(engine.store.list_for_company(company_id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_taxonomy_initialize_is_idempotent() {
    let engine = Engine::bare();

    let first = engine.taxonomy.initialize(&TaxonomySource::Embedded).await.unwrap();
    let second = engine.taxonomy.initialize(&TaxonomySource::Embedded).await.unwrap();

    assert_eq!(first, TaxonomyLoad::Loaded(51));
    assert_eq!(second, TaxonomyLoad::AlreadyPresent(51));
    assert_eq!(engine.store.count().await.unwrap(), 51);

    let accounts = engine.taxonomy.list_canonical_accounts().await.unwrap();
    assert_eq!(accounts.first().unwrap().code, "1000");
    assert_eq!(accounts.last().unwrap().code, "9200");
}

#[tokio::test]
async fn test_mapping_listing_pages() {
    let engine = Engine::loaded().await;
    let company_id = CompanyId::new();
    engine.upload_trading_company(company_id).await;
    engine.classifier.classify(company_id).await.unwrap();

    let first = engine
        .mapping
        .list_mappings(company_id, PageRequest { page: 1, per_page: 5 })
        .await
        .unwrap();
    assert_eq!(first.meta.total, 14);
    assert_eq!(first.meta.total_pages, 3);
    assert_eq!(first.data.len(), 5);
    assert_eq!(first.data[0].source_code, "A-100");
    assert_eq!(first.data[0].canonical_code.as_deref(), Some("1000"));

    let last = engine
        .mapping
        .list_mappings(company_id, PageRequest { page: 3, per_page: 5 })
        .await
        .unwrap();
    assert_eq!(last.data.len(), 4);
    let unmatched = last.data.iter().find(|v| v.source_code == "X-900").unwrap();
    assert!(!unmatched.is_classified);
    assert_eq!(unmatched.canonical_code, None);
}

#[tokio::test]
async fn test_companies_are_isolated() {
    let engine = Engine::loaded().await;
    let busy = CompanyId::new();
    let idle = CompanyId::new();
    engine.upload_trading_company(busy).await;
    engine.classifier.classify(busy).await.unwrap();

    assert!(engine.store.list_for_company(idle).await.unwrap().is_empty());
    assert!(!engine.dashboard.summary(idle).await.unwrap().has_data);
}
