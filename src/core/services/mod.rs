pub mod account_service;
pub mod summary_service;
pub mod view_service;

pub use account_service::AccountService;
pub use summary_service::{AccountSummary, SummaryService};
pub use view_service::{SortToggles, ViewMode, ViewService};

use crate::errors::LedgerError;

pub type ServiceResult<T> = Result<T, LedgerError>;
