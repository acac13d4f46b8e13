pub mod create_client;
pub mod create_employee;
pub mod list_clients;
pub mod list_employees;
pub mod update_client;
pub mod update_employee;

pub use create_client::{CreateClientCommand, CreateClientResponse, CreateClientUseCase};
pub use create_employee::{CreateEmployeeCommand, CreateEmployeeResponse, CreateEmployeeUseCase};
pub use list_clients::{ClientDto, ListClientsResponse, ListClientsUseCase};
pub use list_employees::{EmployeeDto, ListEmployeesResponse, ListEmployeesUseCase};
pub use update_client::{UpdateClientCommand, UpdateClientResponse, UpdateClientUseCase};
pub use update_employee::{UpdateEmployeeCommand, UpdateEmployeeResponse, UpdateEmployeeUseCase};
