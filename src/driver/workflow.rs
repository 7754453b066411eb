//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use log::{info, warn};

use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::http::SessionClient;
use crate::adapter::repositories::hris_company_unit_repository::HrisCompanyUnitRepository;
use crate::adapter::repositories::next_auth_repository::NextAuthRepository;
use crate::application::dto::setup_plan::SetupPlan;
use crate::application::use_cases::create_items::CreateItemsUseCase;
use crate::application::use_cases::ensure_units::EnsureUnitsUseCase;
use crate::application::use_cases::login::LoginUseCase;
use crate::domain::entities::company_unit::CompanyUnit;
use crate::domain::services::unit_catalog::UnitCatalog;

use super::cli::Args;

/// Describe what a dry run would do for each planned unit
pub fn describe_plan(plan: &SetupPlan, existing: &[CompanyUnit]) -> Vec<String> {
    plan.units
        .iter()
        .map(|unit| {
            let status = match UnitCatalog::find_by_name(existing, &unit.name) {
                Some(found) => format!("exists (id={})", found.id),
                None => "would be created".to_string(),
            };
            format!(
                "{}: {} | {} items \"{} {}..{}\"",
                unit.name,
                status,
                unit.item_count,
                unit.item_prefix,
                unit.item_start,
                (unit.item_start + unit.item_count).saturating_sub(1)
            )
        })
        .collect()
}

/// Company Unit setup workflow
pub struct UnitSetupWorkflow {
    config: Config,
}

impl UnitSetupWorkflow {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Execute the setup workflow
    ///
    /// Nothing is rolled back on failure: units created before an error stay,
    /// and re-running reuses them while creating items again.
    pub async fn execute(&self, args: Args) -> Result<()> {
        info!("Starting company unit setup...");
        info!("Dry run: {}", args.dry_run);

        println!("✓ Using configuration:");
        println!("  Auth: {}", self.config.auth_base_url);
        println!("  API: {}", self.config.api_base_url);
        println!("  Account: {}", self.config.email);

        // One client for the whole run so the login cookies are reused
        let client = SessionClient::new()?;

        let auth_repo = Arc::new(NextAuthRepository::new(
            client.clone(),
            &self.config.auth_base_url,
        ));
        let login_use_case = LoginUseCase::new(auth_repo);

        let credentials = self.config.credentials();
        let authenticated = login_use_case.execute(&credentials).await?;
        println!("✓ Logged in (companyId: {})", authenticated.company_id);
        if !authenticated.session.has_token() {
            println!("⚠ No session token was issued; API calls will likely be rejected");
        }

        let unit_repo = Arc::new(HrisCompanyUnitRepository::new(
            client,
            &self.config.api_base_url,
            authenticated.session.session_token.clone(),
        ));
        let ensure_use_case = EnsureUnitsUseCase::new(unit_repo.clone());
        let create_items_use_case = CreateItemsUseCase::new(unit_repo);

        let company_id = authenticated.company_id.as_str();
        let plan = self.config.setup_plan();

        let existing = ensure_use_case.list(company_id).await?;
        println!("✓ Found {} company units", existing.len());

        if args.dry_run {
            warn!("Dry-run mode: no units or items will be created");
            println!("✓ Dry-run mode (not creating anything)");
            for line in describe_plan(&plan, &existing) {
                println!("    - {}", line);
            }
            return Ok(());
        }

        let units = ensure_use_case
            .ensure_all(company_id, &plan.unit_names(), existing)
            .await?;
        for unit in &units {
            println!("✓ Unit \"{}\" ready (id={})", unit.display_name(), unit.id);
        }

        let batch = create_items_use_case.build_batch(&plan, &units)?;
        let summary = create_items_use_case
            .execute(batch, plan.item_batch_size)
            .await?;
        println!(
            "✓ Created {} items in {} request(s)",
            summary.requested, summary.requests
        );

        println!("✓ Setup complete!");

        Ok(())
    }
}
