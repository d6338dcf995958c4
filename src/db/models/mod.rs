//! Database Models
//!
//! One file per entity, each with the stored record plus its Create/Update
//! payloads. All API-facing field names are camelCase.

pub mod serde_helpers;

pub mod audit;
pub mod driver;
pub mod employee;
pub mod inventory_item;
pub mod order;
pub mod task;
pub mod user;

// Re-exports
pub use audit::{AuditAction, AuditActorType, AuditRecord};
pub use driver::{Driver, DriverCreate, DriverUpdate};
pub use employee::{Employee, EmployeeCreate, EmployeeSignIn, EmployeeUpdate};
pub use inventory_item::{InventoryItem, InventoryItemCreate, InventoryItemUpdate};
pub use order::{CylinderSnapshot, Order, OrderCreate, OrderStatus, OrderUpdate};
pub use task::{Task, TaskCreate, TaskUpdate};
pub use user::{User, UserCreate, UserResponse, UserSummary, UserUpdate};
