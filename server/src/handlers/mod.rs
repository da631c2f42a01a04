pub mod company_handlers;
pub mod jwt;
