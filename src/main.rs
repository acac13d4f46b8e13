use actix_web::{App, HttpServer, middleware::Logger, web};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clientbill::{
  adapters::http::{
    RequestIdMiddleware, configure_assignment_routes, configure_client_routes,
    configure_employee_routes, configure_invoice_routes, configure_project_routes,
    configure_time_entry_routes, handlers::health::health_handler,
  },
  application::directory::{
    CreateClientUseCase, CreateEmployeeUseCase, ListClientsUseCase, ListEmployeesUseCase,
    UpdateClientUseCase, UpdateEmployeeUseCase,
  },
  application::invoice::{
    GenerateInvoiceUseCase, GetInvoiceDetailsUseCase, ListInvoicesUseCase, PreviewBillingUseCase,
    RecordPaymentUseCase, SendInvoiceUseCase,
  },
  application::project::{
    AssignEmployeeUseCase, CompleteAssignmentUseCase, CreateProjectUseCase,
    ListAssignmentsUseCase, ListProjectsUseCase, ListTimeEntriesUseCase, RecordTimeEntryUseCase,
    SetProjectStatusUseCase,
  },
  domain::directory::DirectoryService,
  domain::invoice::InvoiceService,
  domain::project::ProjectService,
  infrastructure::{
    config::Config,
    email::ResendEmailSender,
    persistence::postgres::{
      PostgresAssignmentRepository, PostgresClientRepository, PostgresEmployeeRepository,
      PostgresInvoiceLineItemRepository, PostgresInvoiceRepository, PostgresInvoiceWriter,
      PostgresProjectRepository, PostgresTimeEntryRepository,
    },
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "clientbill=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting clientbill application");

  // Load configuration
  let config = Config::load().expect("Failed to load configuration");
  tracing::info!("Configuration loaded successfully");

  // Set up database connection pool with timeout
  tracing::info!("Connecting to database: {}", config.database.url);

  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.database.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(config.database.max_connections)
      .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
      .connect(&config.database.url),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds. Is PostgreSQL running?",
      config.database.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Database connection timed out after {} seconds",
        config.database.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    tracing::error!("Failed to connect to database: {}", e);
    match e {
      sqlx::Error::Io(_) => std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        format!(
          "Could not connect to database. Is PostgreSQL running at {}?",
          config.database.url
        ),
      ),
      _ => std::io::Error::other(format!("Database error: {}", e)),
    }
  })?;

  tracing::info!("Database connection pool created");

  // Run database migrations
  tracing::info!("Running database migrations");
  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .expect("Failed to run database migrations");
  tracing::info!("Database migrations completed");

  // Initialize repositories
  let client_repo = Arc::new(PostgresClientRepository::new(db_pool.clone()));
  let employee_repo = Arc::new(PostgresEmployeeRepository::new(db_pool.clone()));
  let project_repo = Arc::new(PostgresProjectRepository::new(db_pool.clone()));
  let assignment_repo = Arc::new(PostgresAssignmentRepository::new(db_pool.clone()));
  let time_entry_repo = Arc::new(PostgresTimeEntryRepository::new(db_pool.clone()));
  let invoice_repo = Arc::new(PostgresInvoiceRepository::new(db_pool.clone()));
  let invoice_line_item_repo = Arc::new(PostgresInvoiceLineItemRepository::new(db_pool.clone()));
  let invoice_writer = Arc::new(PostgresInvoiceWriter::new(db_pool.clone()));

  // Initialize email sender
  let email_sender = Arc::new(ResendEmailSender::new(
    config.email.api_base_url.clone(),
    config.email.api_key.clone(),
    config.email.from_address.clone(),
  ));

  // Initialize domain services
  let directory_service = Arc::new(DirectoryService::new(
    client_repo.clone(),
    employee_repo.clone(),
  ));

  let project_service = Arc::new(ProjectService::new(
    project_repo.clone(),
    assignment_repo.clone(),
    time_entry_repo.clone(),
    client_repo.clone(),
    employee_repo.clone(),
  ));

  let invoice_service = Arc::new(InvoiceService::new(
    invoice_repo.clone(),
    invoice_line_item_repo.clone(),
    invoice_writer.clone(),
    email_sender.clone(),
    client_repo.clone(),
    project_repo.clone(),
    assignment_repo.clone(),
    time_entry_repo.clone(),
  ));

  // Initialize directory use cases
  let create_client_use_case = Arc::new(CreateClientUseCase::new(directory_service.clone()));
  let list_clients_use_case = Arc::new(ListClientsUseCase::new(directory_service.clone()));
  let update_client_use_case = Arc::new(UpdateClientUseCase::new(directory_service.clone()));
  let create_employee_use_case = Arc::new(CreateEmployeeUseCase::new(directory_service.clone()));
  let list_employees_use_case = Arc::new(ListEmployeesUseCase::new(directory_service.clone()));
  let update_employee_use_case = Arc::new(UpdateEmployeeUseCase::new(directory_service.clone()));

  // Initialize project use cases
  let create_project_use_case = Arc::new(CreateProjectUseCase::new(project_service.clone()));
  let list_projects_use_case = Arc::new(ListProjectsUseCase::new(project_service.clone()));
  let set_project_status_use_case = Arc::new(SetProjectStatusUseCase::new(project_service.clone()));
  let assign_employee_use_case = Arc::new(AssignEmployeeUseCase::new(project_service.clone()));
  let list_assignments_use_case = Arc::new(ListAssignmentsUseCase::new(project_service.clone()));
  let complete_assignment_use_case =
    Arc::new(CompleteAssignmentUseCase::new(project_service.clone()));
  let record_time_entry_use_case = Arc::new(RecordTimeEntryUseCase::new(project_service.clone()));
  let list_time_entries_use_case = Arc::new(ListTimeEntriesUseCase::new(project_service.clone()));

  // Initialize invoice use cases
  let generate_invoice_use_case = Arc::new(GenerateInvoiceUseCase::new(invoice_service.clone()));
  let preview_billing_use_case = Arc::new(PreviewBillingUseCase::new(invoice_service.clone()));
  let list_invoices_use_case = Arc::new(ListInvoicesUseCase::new(invoice_service.clone()));
  let get_invoice_details_use_case =
    Arc::new(GetInvoiceDetailsUseCase::new(invoice_service.clone()));
  let send_invoice_use_case = Arc::new(SendInvoiceUseCase::new(invoice_service.clone()));
  let record_payment_use_case = Arc::new(RecordPaymentUseCase::new(invoice_service.clone()));

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  // Create and start the HTTP server
  HttpServer::new(move || {
    App::new()
      // Add request ID middleware
      .wrap(RequestIdMiddleware::new())
      // Add logging middleware
      .wrap(Logger::default())
      .service(web::scope("/api/v1/clients").configure(|cfg| {
        configure_client_routes(
          cfg,
          create_client_use_case.clone(),
          list_clients_use_case.clone(),
          update_client_use_case.clone(),
        )
      }))
      .service(web::scope("/api/v1/employees").configure(|cfg| {
        configure_employee_routes(
          cfg,
          create_employee_use_case.clone(),
          list_employees_use_case.clone(),
          update_employee_use_case.clone(),
        )
      }))
      .service(web::scope("/api/v1/projects").configure(|cfg| {
        configure_project_routes(
          cfg,
          create_project_use_case.clone(),
          list_projects_use_case.clone(),
          set_project_status_use_case.clone(),
          assign_employee_use_case.clone(),
          list_assignments_use_case.clone(),
        )
      }))
      .service(web::scope("/api/v1/assignments").configure(|cfg| {
        configure_assignment_routes(cfg, complete_assignment_use_case.clone())
      }))
      .service(web::scope("/api/v1/time-entries").configure(|cfg| {
        configure_time_entry_routes(
          cfg,
          record_time_entry_use_case.clone(),
          list_time_entries_use_case.clone(),
        )
      }))
      .service(web::scope("/api/v1/invoices").configure(|cfg| {
        configure_invoice_routes(
          cfg,
          generate_invoice_use_case.clone(),
          preview_billing_use_case.clone(),
          list_invoices_use_case.clone(),
          get_invoice_details_use_case.clone(),
          send_invoice_use_case.clone(),
          record_payment_use_case.clone(),
        )
      }))
      // Health check endpoint
      .route("/health", web::get().to(health_handler))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await
}
