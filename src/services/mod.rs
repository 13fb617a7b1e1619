pub mod service_accounts;

pub use service_accounts::OrganizationClient;
