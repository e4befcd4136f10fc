//! Expense recording, listing, and removal.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use seatbook_core::error::AppError;
use seatbook_core::traits::Clock;
use seatbook_database::repositories::{ExpenseRepository, LibraryRepository};
use seatbook_entity::expense::Expense;

use crate::context::RequestContext;

/// Request to record an expense.
#[derive(Debug, Clone)]
pub struct RecordExpenseRequest {
    /// The library the expense belongs to.
    pub library_id: Uuid,
    /// What was paid for.
    pub title: String,
    /// Amount in whole rupees.
    pub amount: i64,
    /// Optional category label.
    pub category: Option<String>,
    /// When the money was spent; defaults to now.
    pub spent_at: Option<DateTime<Utc>>,
}

/// Manages a library's expenses.
#[derive(Debug, Clone)]
pub struct ExpenseService {
    /// Library repository.
    library_repo: Arc<LibraryRepository>,
    /// Expense repository.
    expense_repo: Arc<ExpenseRepository>,
    /// Time source.
    clock: Arc<dyn Clock>,
}

impl ExpenseService {
    /// Creates a new expense service.
    pub fn new(
        library_repo: Arc<LibraryRepository>,
        expense_repo: Arc<ExpenseRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            library_repo,
            expense_repo,
            clock,
        }
    }

    /// Records an expense against a library.
    pub async fn record(
        &self,
        ctx: &RequestContext,
        req: RecordExpenseRequest,
    ) -> Result<Expense, AppError> {
        let library = self
            .library_repo
            .find_owned(req.library_id, ctx.owner_id)
            .await?
            .ok_or_else(|| AppError::not_found("Library not found"))?;

        if req.title.trim().is_empty() {
            return Err(AppError::validation("Expense title is required"));
        }
        if req.amount <= 0 {
            return Err(AppError::validation("Expense amount must be positive"));
        }

        let spent_at = req.spent_at.unwrap_or_else(|| self.clock.now());
        let expense = self
            .expense_repo
            .create(
                library.id,
                req.title.trim(),
                req.amount,
                req.category.as_deref(),
                spent_at,
            )
            .await?;

        info!(library_id = %library.id, expense_id = %expense.id, "expense recorded");
        Ok(expense)
    }

    /// Lists a library's expenses, newest first.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        library_id: Uuid,
    ) -> Result<Vec<Expense>, AppError> {
        let library = self
            .library_repo
            .find_owned(library_id, ctx.owner_id)
            .await?
            .ok_or_else(|| AppError::not_found("Library not found"))?;

        self.expense_repo.find_by_library(library.id).await
    }

    /// Removes an expense, resolving tenancy through its library.
    pub async fn remove(&self, ctx: &RequestContext, expense_id: Uuid) -> Result<(), AppError> {
        let expense = self
            .expense_repo
            .find_by_id(expense_id)
            .await?
            .ok_or_else(|| AppError::not_found("Expense not found"))?;

        let owned = self
            .library_repo
            .find_owned(expense.library_id, ctx.owner_id)
            .await?;
        if owned.is_none() {
            return Err(AppError::not_found("Expense not found"));
        }

        let removed = self.expense_repo.delete(expense.id, expense.library_id).await?;
        if !removed {
            return Err(AppError::not_found("Expense not found"));
        }
        Ok(())
    }
}
