//! Application builder — wires repositories, services, router, and the
//! background scheduler into a running server.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use seatbook_core::config::AppConfig;
use seatbook_core::error::AppError;
use seatbook_core::traits::{Clock, PushSender, SystemClock};
use seatbook_database::repositories::{
    ExpenseRepository, LibraryRepository, MembershipRepository, NotificationLogRepository,
    OwnerRepository, PaymentRepository, SeatRepository, StudentRepository,
};
use seatbook_service::auth::AuthService;
use seatbook_service::booking::BookingService;
use seatbook_service::dashboard::DashboardService;
use seatbook_service::expense::ExpenseService;
use seatbook_service::library::LibraryService;
use seatbook_service::notification::{ExpiryNotifier, ExpoPushSender, NotificationService};
use seatbook_service::student::StudentService;
use seatbook_worker::executor::JobExecutor;
use seatbook_worker::jobs::{ExpiryReminderHandler, MembershipLapseHandler};
use seatbook_worker::scheduler::CronScheduler;

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Wires repositories and services into shared application state.
pub fn build_state(
    config: AppConfig,
    db_pool: PgPool,
    push: Arc<dyn PushSender>,
) -> Result<AppState, AppError> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    // ── Repositories ─────────────────────────────────────────
    let owner_repo = Arc::new(OwnerRepository::new(db_pool.clone()));
    let library_repo = Arc::new(LibraryRepository::new(db_pool.clone()));
    let seat_repo = Arc::new(SeatRepository::new(db_pool.clone()));
    let student_repo = Arc::new(StudentRepository::new(db_pool.clone()));
    let membership_repo = Arc::new(MembershipRepository::new(db_pool.clone()));
    let payment_repo = Arc::new(PaymentRepository::new(db_pool.clone()));
    let expense_repo = Arc::new(ExpenseRepository::new(db_pool.clone()));
    let notification_log_repo = Arc::new(NotificationLogRepository::new(db_pool.clone()));

    // ── Auth ─────────────────────────────────────────────────
    let jwt_encoder = Arc::new(seatbook_auth::jwt::encoder::JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(seatbook_auth::jwt::decoder::JwtDecoder::new(&config.auth));

    // ── Services ─────────────────────────────────────────────
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&owner_repo),
        (*jwt_encoder).clone(),
        config.auth.password_min_length,
    ));
    let library_service = Arc::new(LibraryService::new(
        Arc::clone(&library_repo),
        Arc::clone(&seat_repo),
        Arc::clone(&student_repo),
        Arc::clone(&membership_repo),
        Arc::clone(&payment_repo),
        Arc::clone(&clock),
    ));
    let booking_service = Arc::new(BookingService::new(
        Arc::clone(&library_repo),
        Arc::clone(&seat_repo),
        Arc::clone(&membership_repo),
        Arc::clone(&student_repo),
        Arc::clone(&clock),
    ));
    let student_service = Arc::new(StudentService::new(
        Arc::clone(&library_repo),
        Arc::clone(&student_repo),
        Arc::clone(&clock),
    ));
    let expense_service = Arc::new(ExpenseService::new(
        Arc::clone(&library_repo),
        Arc::clone(&expense_repo),
        Arc::clone(&clock),
    ));
    let dashboard_service = Arc::new(DashboardService::new(
        Arc::clone(&library_repo),
        Arc::clone(&seat_repo),
        Arc::clone(&membership_repo),
        Arc::clone(&payment_repo),
        Arc::clone(&expense_repo),
        Arc::clone(&clock),
    ));
    let notification_service = Arc::new(NotificationService::new(Arc::clone(&owner_repo)));
    let expiry_notifier = Arc::new(ExpiryNotifier::new(
        Arc::clone(&membership_repo),
        Arc::clone(&notification_log_repo) as Arc<dyn seatbook_service::notification::ReminderLog>,
        push,
        Arc::clone(&clock),
        config.notification.expiry_horizon_days,
    ));

    Ok(AppState {
        config: Arc::new(config),
        db_pool,
        jwt_encoder,
        jwt_decoder,
        owner_repo,
        library_repo,
        seat_repo,
        student_repo,
        membership_repo,
        payment_repo,
        expense_repo,
        notification_log_repo,
        auth_service,
        library_service,
        booking_service,
        student_service,
        expense_service,
        dashboard_service,
        notification_service,
        expiry_notifier,
    })
}

/// Runs the Seatbook server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    tracing::info!("Starting Seatbook server...");

    let push: Arc<dyn PushSender> = Arc::new(ExpoPushSender::new(&config.notification)?);
    let state = build_state(config.clone(), db_pool, push)?;

    // ── Background scheduler ─────────────────────────────────
    let mut scheduler = if config.worker.enabled {
        let mut executor = JobExecutor::new();
        executor.register(Arc::new(ExpiryReminderHandler::new(Arc::clone(
            &state.expiry_notifier,
        ))));
        executor.register(Arc::new(MembershipLapseHandler::new(
            Arc::clone(&state.membership_repo),
            Arc::new(SystemClock),
        )));

        let scheduler = CronScheduler::new(Arc::new(executor)).await?;
        scheduler.register_default_tasks(&config.worker).await?;
        scheduler.start().await?;
        Some(scheduler)
    } else {
        None
    };

    // ── HTTP server ──────────────────────────────────────────
    let app = build_app(state);
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("Seatbook server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    if let Some(scheduler) = scheduler.as_mut() {
        scheduler.shutdown().await?;
    }

    Ok(())
}

async fn shutdown_signal() {
    // Failing to install the handler leaves no way to stop cleanly.
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
    }
}
