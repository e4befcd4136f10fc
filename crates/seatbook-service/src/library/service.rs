//! Library provisioning, listing, and the per-library overview.

use std::sync::Arc;

use chrono::Duration;
use tracing::info;
use uuid::Uuid;

use seatbook_core::error::AppError;
use seatbook_core::traits::Clock;
use seatbook_database::repositories::library::CreateLibraryParams;
use seatbook_database::repositories::{
    LibraryRepository, MembershipRepository, PaymentRepository, SeatRepository, StudentRepository,
};
use seatbook_entity::library::{Library, LibraryStatus};

use crate::context::RequestContext;

/// Trial subscription length granted at provisioning.
const TRIAL_DAYS: i64 = 30;

/// Request to provision a new library.
#[derive(Debug, Clone)]
pub struct CreateLibraryRequest {
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// How many seats to provision.
    pub seat_count: u32,
}

/// A library with its headline aggregates.
#[derive(Debug, Clone, serde::Serialize)]
pub struct LibraryOverview {
    /// The library itself.
    pub library: Library,
    /// Total seats provisioned.
    pub total_seats: i64,
    /// Enrolled students (including withdrawn).
    pub total_students: i64,
    /// Currently active memberships.
    pub active_memberships: i64,
    /// All memberships ever created.
    pub total_memberships: i64,
    /// Lifetime revenue in whole rupees.
    pub total_revenue: i64,
    /// Days left on the subscription, clamped at zero.
    pub subscription_days_remaining: i64,
}

/// Manages libraries for the authenticated owner.
#[derive(Debug, Clone)]
pub struct LibraryService {
    /// Library repository.
    library_repo: Arc<LibraryRepository>,
    /// Seat repository.
    seat_repo: Arc<SeatRepository>,
    /// Student repository.
    student_repo: Arc<StudentRepository>,
    /// Membership repository.
    membership_repo: Arc<MembershipRepository>,
    /// Payment repository.
    payment_repo: Arc<PaymentRepository>,
    /// Time source.
    clock: Arc<dyn Clock>,
}

impl LibraryService {
    /// Creates a new library service.
    pub fn new(
        library_repo: Arc<LibraryRepository>,
        seat_repo: Arc<SeatRepository>,
        student_repo: Arc<StudentRepository>,
        membership_repo: Arc<MembershipRepository>,
        payment_repo: Arc<PaymentRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            library_repo,
            seat_repo,
            student_repo,
            membership_repo,
            payment_repo,
            clock,
        }
    }

    /// Provisions a library with its seats, starting on a trial
    /// subscription. Each owner holds at most one library.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateLibraryRequest,
    ) -> Result<Library, AppError> {
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Library name is required"));
        }
        if req.seat_count == 0 {
            return Err(AppError::validation("Seat count must be at least 1"));
        }

        if self.library_repo.count_by_owner(ctx.owner_id).await? > 0 {
            return Err(AppError::conflict("Owner already has a library"));
        }

        let now = self.clock.now();
        let library = self
            .library_repo
            .create_with_seats(&CreateLibraryParams {
                owner_id: ctx.owner_id,
                name: req.name,
                address: req.address,
                subscription_start: now,
                subscription_end: now + Duration::days(TRIAL_DAYS),
                status: LibraryStatus::Trial,
                seat_count: req.seat_count,
            })
            .await?;

        info!(library_id = %library.id, seats = req.seat_count, "library provisioned");
        Ok(library)
    }

    /// Lists the owner's libraries.
    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<Library>, AppError> {
        self.library_repo.find_by_owner(ctx.owner_id).await
    }

    /// The overview for one library: the record plus headline aggregates.
    pub async fn overview(
        &self,
        ctx: &RequestContext,
        library_id: Uuid,
    ) -> Result<LibraryOverview, AppError> {
        let library = self
            .library_repo
            .find_owned(library_id, ctx.owner_id)
            .await?
            .ok_or_else(|| AppError::not_found("Library not found"))?;

        let total_seats = self.seat_repo.count_by_library(library.id).await?;
        let total_students = self.student_repo.count_by_library(library.id).await?;
        let active_memberships = self.membership_repo.count_active(library.id).await?;
        let total_memberships = self.membership_repo.count_all(library.id).await?;
        let total_revenue = self.payment_repo.sum_by_library(library.id).await?;
        let subscription_days_remaining = library.subscription_days_remaining(self.clock.now());

        Ok(LibraryOverview {
            library,
            total_seats,
            total_students,
            active_memberships,
            total_memberships,
            total_revenue,
            subscription_days_remaining,
        })
    }
}
