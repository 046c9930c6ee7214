//! Wiring shared by the store integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use finstat_core::classifier::{ClassifierService, KeywordTable};
use finstat_core::dashboard::DashboardService;
use finstat_core::ledger::{IntakeService, LedgerRecord};
use finstat_core::mapping::MappingService;
use finstat_core::ratios::RatioService;
use finstat_core::reports::StatementService;
use finstat_core::taxonomy::{TaxonomyService, TaxonomySource};
use finstat_shared::ClassifierConfig;
use finstat_shared::types::{CompanyId, UploadId};
use finstat_store::InMemoryStore;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

type Store = InMemoryStore;

/// Every service over one store.
pub struct Engine {
    pub store: Arc<Store>,
    pub taxonomy: TaxonomyService<Store>,
    pub intake: IntakeService<Store>,
    pub classifier: ClassifierService<Store, Store, Store>,
    pub mapping: MappingService<Store, Store>,
    pub ratios: Arc<RatioService<Store, Store, Store>>,
    pub dashboard: DashboardService<Store, Store, Store>,
}

impl Engine {
    /// Services without a loaded taxonomy.
    pub fn bare() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let keywords = Arc::new(KeywordTable::embedded().unwrap());
        let statements = Arc::new(StatementService::new(
            Arc::clone(&store),
            Arc::clone(&store),
            Arc::clone(&store),
        ));
        let ratios = Arc::new(RatioService::new(statements));

        Self {
            taxonomy: TaxonomyService::new(Arc::clone(&store)),
            intake: IntakeService::new(Arc::clone(&store)),
            classifier: ClassifierService::new(
                Arc::clone(&store),
                Arc::clone(&store),
                Arc::clone(&store),
                keywords,
                ClassifierConfig::default(),
            ),
            mapping: MappingService::new(Arc::clone(&store), Arc::clone(&store)),
            dashboard: DashboardService::new(Arc::clone(&ratios)),
            ratios,
            store,
        }
    }

    /// Services with the embedded chart loaded.
    pub async fn loaded() -> Self {
        let engine = Self::bare();
        engine
            .taxonomy
            .initialize(&TaxonomySource::Embedded)
            .await
            .unwrap();
        engine
    }

    /// Uploads the trading company trial balance.
    pub async fn upload_trading_company(&self, company_id: CompanyId) {
        let report = self
            .intake
            .ingest(company_id, UploadId::new(), trading_company())
            .await
            .unwrap();
        assert_eq!(report.accepted, 14);
    }
}

fn debit(code: &str, name: &str, amount: Decimal) -> LedgerRecord {
    LedgerRecord::new(code, name, amount, Decimal::ZERO)
}

fn credit(code: &str, name: &str, amount: Decimal) -> LedgerRecord {
    LedgerRecord::new(code, name, Decimal::ZERO, amount)
}

/// Trial balance of a small trading company. `X-900` matches nothing.
pub fn trading_company() -> Vec<LedgerRecord> {
    vec![
        debit("A-100", "Cash at Bank", dec!(350000)),
        debit("A-110", "Accounts Receivable", dec!(60000)),
        debit("A-120", "Inventory", dec!(50000)),
        debit("A-200", "Property, Plant and Equipment", dec!(200000)),
        credit("L-300", "Trade Payables", dec!(100000)),
        credit("L-400", "Bank Loans", dec!(150000)),
        credit("E-500", "Share Capital", dec!(410000)),
        credit("R-600", "Sales Revenue", dec!(500000)),
        debit("X-700", "Cost of Goods Sold", dec!(200000)),
        debit("X-810", "Salaries and Wages", dec!(80000)),
        debit("X-820", "Depreciation Expense", dec!(20000)),
        debit("X-901", "Interest Expense", dec!(15000)),
        debit("X-910", "Income Tax Expense", dec!(19000)),
        debit("X-900", "Qwerty", dec!(5000)),
    ]
}
