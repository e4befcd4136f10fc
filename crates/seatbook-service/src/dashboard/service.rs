//! The per-library dashboard summary.

use std::sync::Arc;

use uuid::Uuid;

use seatbook_core::error::AppError;
use seatbook_core::traits::Clock;
use seatbook_database::repositories::{
    ExpenseRepository, LibraryRepository, MembershipRepository, PaymentRepository, SeatRepository,
};

use crate::context::RequestContext;

/// Occupancy and finances for one library at a glance.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DashboardSummary {
    /// Total seats provisioned.
    pub total_seats: i64,
    /// Seats held by at least one active membership.
    pub active_memberships: i64,
    /// Lifetime revenue in whole rupees.
    pub total_revenue: i64,
    /// Lifetime expenses in whole rupees.
    pub total_expenses: i64,
    /// Revenue minus expenses.
    pub net_balance: i64,
    /// Days left on the subscription, clamped at zero.
    pub subscription_days_remaining: i64,
}

/// Builds the dashboard summary.
#[derive(Debug, Clone)]
pub struct DashboardService {
    /// Library repository.
    library_repo: Arc<LibraryRepository>,
    /// Seat repository.
    seat_repo: Arc<SeatRepository>,
    /// Membership repository.
    membership_repo: Arc<MembershipRepository>,
    /// Payment repository.
    payment_repo: Arc<PaymentRepository>,
    /// Expense repository.
    expense_repo: Arc<ExpenseRepository>,
    /// Time source.
    clock: Arc<dyn Clock>,
}

impl DashboardService {
    /// Creates a new dashboard service.
    pub fn new(
        library_repo: Arc<LibraryRepository>,
        seat_repo: Arc<SeatRepository>,
        membership_repo: Arc<MembershipRepository>,
        payment_repo: Arc<PaymentRepository>,
        expense_repo: Arc<ExpenseRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            library_repo,
            seat_repo,
            membership_repo,
            payment_repo,
            expense_repo,
            clock,
        }
    }

    /// The dashboard for one library.
    pub async fn summary(
        &self,
        ctx: &RequestContext,
        library_id: Uuid,
    ) -> Result<DashboardSummary, AppError> {
        let library = self
            .library_repo
            .find_owned(library_id, ctx.owner_id)
            .await?
            .ok_or_else(|| AppError::not_found("Library not found"))?;

        let total_seats = self.seat_repo.count_by_library(library.id).await?;
        let active_memberships = self.membership_repo.count_active(library.id).await?;
        let total_revenue = self.payment_repo.sum_by_library(library.id).await?;
        let total_expenses = self.expense_repo.sum_by_library(library.id).await?;

        Ok(DashboardSummary {
            total_seats,
            active_memberships,
            total_revenue,
            total_expenses,
            net_balance: total_revenue - total_expenses,
            subscription_days_remaining: library.subscription_days_remaining(self.clock.now()),
        })
    }
}
