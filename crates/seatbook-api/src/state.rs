//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use seatbook_auth::jwt::decoder::JwtDecoder;
use seatbook_auth::jwt::encoder::JwtEncoder;
use seatbook_core::config::AppConfig;

use seatbook_database::repositories::{
    ExpenseRepository, LibraryRepository, MembershipRepository, NotificationLogRepository,
    OwnerRepository, PaymentRepository, SeatRepository, StudentRepository,
};

use seatbook_service::auth::AuthService;
use seatbook_service::booking::BookingService;
use seatbook_service::dashboard::DashboardService;
use seatbook_service::expense::ExpenseService;
use seatbook_service::library::LibraryService;
use seatbook_service::notification::{ExpiryNotifier, NotificationService};
use seatbook_service::student::StudentService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Repositories ─────────────────────────────────────────
    /// Owner repository
    pub owner_repo: Arc<OwnerRepository>,
    /// Library repository
    pub library_repo: Arc<LibraryRepository>,
    /// Seat repository
    pub seat_repo: Arc<SeatRepository>,
    /// Student repository
    pub student_repo: Arc<StudentRepository>,
    /// Membership repository
    pub membership_repo: Arc<MembershipRepository>,
    /// Payment repository
    pub payment_repo: Arc<PaymentRepository>,
    /// Expense repository
    pub expense_repo: Arc<ExpenseRepository>,
    /// Notification log repository
    pub notification_log_repo: Arc<NotificationLogRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Auth service
    pub auth_service: Arc<AuthService>,
    /// Library service
    pub library_service: Arc<LibraryService>,
    /// Booking service
    pub booking_service: Arc<BookingService>,
    /// Student service
    pub student_service: Arc<StudentService>,
    /// Expense service
    pub expense_service: Arc<ExpenseService>,
    /// Dashboard service
    pub dashboard_service: Arc<DashboardService>,
    /// Notification preference service
    pub notification_service: Arc<NotificationService>,
    /// Expiry reminder runner
    pub expiry_notifier: Arc<ExpiryNotifier>,
}
