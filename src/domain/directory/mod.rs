pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::{Client, Employee};
pub use errors::DirectoryError;
pub use ports::{ClientRepository, EmployeeRepository};
pub use services::{ClientData, DirectoryService, EmployeeData};
pub use value_objects::{
  ClientName, ClientStatus, Designation, EmailAddress, EmployeeStatus, PersonName,
  ValueObjectError,
};
