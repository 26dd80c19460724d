//! Upload summary across all users.

use super::Section;
use crate::api::DocVaultApi;
use crate::models::DashboardSummary;
use crate::session::Session;

pub const DASHBOARD_LOAD_FAILED: &str = "Error fetching dashboard data.";

pub async fn load_dashboard<A: DocVaultApi>(
    api: &A,
    session: Option<&Session>,
) -> Section<DashboardSummary> {
    Section::from_result(api.dashboard_summary(session).await, DASHBOARD_LOAD_FAILED)
}
